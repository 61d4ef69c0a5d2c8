use async_trait::async_trait;
use reqwest::Client;
use anyhow::{anyhow, bail};

use crate::{
    json::{FromJson, ToJson},
    types::{ChatCompletionObject, ChatRequest, OpenAIModelId, UserMessage},
};
use super::client::{RawCompletion, RawRequester};

pub const OPENAI_API_BASE: &str = "https://api.openai.com";

pub struct OpenAIRawRequester {
    pub openai_api_key: String,
    pub model: OpenAIModelId,
    pub base_url: String,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    client: Client,
}

impl OpenAIRawRequester {
    pub fn new(openai_api_key: &str, model: OpenAIModelId) -> OpenAIRawRequester {
        OpenAIRawRequester {
            openai_api_key: openai_api_key.to_string(),
            model,
            base_url: OPENAI_API_BASE.to_string(),
            max_tokens: None,
            temperature: None,
            client: Client::new(),
        }
    }

    pub fn with_base_url(self, base_url: &str) -> OpenAIRawRequester {
        let mut result = self;
        result.base_url = base_url.trim_end_matches('/').to_string();
        result
    }

    pub fn with_max_tokens(self, max_tokens: Option<u32>) -> OpenAIRawRequester {
        let mut result = self;
        result.max_tokens = max_tokens;
        result
    }

    pub fn with_temperature(self, temperature: Option<f32>) -> OpenAIRawRequester {
        let mut result = self;
        result.temperature = temperature;
        result
    }

    pub fn build_request(&self, prompt: &str) -> ChatRequest {
        ChatRequest::new(self.model, vec![UserMessage::new(prompt)])
            .with_max_tokens(self.max_tokens)
            .with_temperature(self.temperature)
    }
}

#[async_trait]
impl RawRequester for OpenAIRawRequester {
    async fn make_request(&mut self, prompt: &str) -> anyhow::Result<RawCompletion> {
        let request = self.build_request(prompt);

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.openai_api_key))
            .json(&request.to_json())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The body is usually {"error": {"message": ...}}, but proxies and
            // gateways can answer with anything.
            let response_text = response.text().await.unwrap_or_default();
            let error_message = serde_json::from_str::<serde_json::Value>(&response_text)
                .ok()
                .and_then(|v| v["error"]["message"].as_str().map(|s| s.to_string()))
                .unwrap_or(response_text);

            bail!(
                "({} {}) {}",
                status.as_str(),
                status.canonical_reason().unwrap_or("Unknown"),
                error_message
            );
        }

        let response_text = response.text().await?;
        let v: serde_json::Value = serde_json::from_str(&response_text)?;
        let response: ChatCompletionObject = ChatCompletionObject::from_json(&v)
            .map_err(|e| anyhow!("Error decoding openai response: {}", e))?;
        let text = response
            .completion_text()
            .map_err(|e| anyhow!("Error decoding openai response: {}", e))?;

        Ok(RawCompletion {
            text,
            model: response.model,
            usage: response.usage,
        })
    }
}
