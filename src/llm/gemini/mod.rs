use async_trait::async_trait;
use reqwest::Client;
use anyhow::{anyhow, bail};

use crate::{
    json::{FromJson, ToJson},
    types::{GeminiModelId, GenerateContentRequest, GenerateContentResponse},
};
use super::client::{RawCompletion, RawRequester};

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

pub struct GeminiRawRequester {
    pub google_api_key: String,
    pub model: GeminiModelId,
    pub base_url: String,
    pub max_output_tokens: Option<u32>,
    pub temperature: Option<f32>,
    client: Client,
}

impl GeminiRawRequester {
    pub fn new(google_api_key: &str, model: GeminiModelId) -> GeminiRawRequester {
        GeminiRawRequester {
            google_api_key: google_api_key.to_string(),
            model,
            base_url: GEMINI_API_BASE.to_string(),
            max_output_tokens: None,
            temperature: None,
            client: Client::new(),
        }
    }

    pub fn with_base_url(self, base_url: &str) -> GeminiRawRequester {
        let mut result = self;
        result.base_url = base_url.trim_end_matches('/').to_string();
        result
    }

    pub fn with_max_output_tokens(self, max_output_tokens: Option<u32>) -> GeminiRawRequester {
        let mut result = self;
        result.max_output_tokens = max_output_tokens;
        result
    }

    pub fn with_temperature(self, temperature: Option<f32>) -> GeminiRawRequester {
        let mut result = self;
        result.temperature = temperature;
        result
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url,
            self.model.name()
        )
    }
}

#[async_trait]
impl RawRequester for GeminiRawRequester {
    async fn make_request(&mut self, prompt: &str) -> anyhow::Result<RawCompletion> {
        let request = GenerateContentRequest::new(prompt)
            .with_max_output_tokens(self.max_output_tokens)
            .with_temperature(self.temperature);

        let response = self
            .client
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.google_api_key)
            .json(&request.to_json())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
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
        let response = GenerateContentResponse::from_json(&v)
            .map_err(|e| anyhow!("Error decoding gemini response: {}", e))?;

        if let Some(block_reason) = &response.block_reason {
            bail!("prompt was blocked ({})", block_reason);
        }
        let text = response
            .completion_text()
            .map_err(|e| anyhow!("Error decoding gemini response: {}", e))?;

        Ok(RawCompletion {
            text,
            model: self.model.name(),
            usage: response.usage,
        })
    }
}
