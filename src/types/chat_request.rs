use crate::json::{FromJson, ToJson};
use crate::json_ext::JsonValueExt;
use crate::types::Error;
use crate::types::{OpenAIModelId, UserMessage};
use serde_json::json;

use std::collections::BTreeMap;

/// Body of an OpenAI `chat/completions` call.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub model: OpenAIModelId,
    pub messages: Vec<UserMessage>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl ChatRequest {
    pub fn new(model: OpenAIModelId, messages: Vec<UserMessage>) -> ChatRequest {
        ChatRequest {
            model,
            messages,
            max_tokens: None,
            temperature: None,
        }
    }

    pub fn with_max_tokens(self, max_tokens: Option<u32>) -> ChatRequest {
        let mut result = self;
        result.max_tokens = max_tokens;
        result
    }

    pub fn with_temperature(self, temperature: Option<f32>) -> ChatRequest {
        let mut result = self;
        result.temperature = temperature;
        result
    }
}

impl ToJson for ChatRequest {
    fn to_json(&self) -> serde_json::Value {
        let mut v: BTreeMap<String, serde_json::Value> = BTreeMap::new();
        v.insert("model".to_string(), self.model.to_json());
        v.insert(
            "messages".to_string(),
            serde_json::Value::Array(self.messages.iter().map(|m| m.to_json()).collect()),
        );
        if let Some(max_tokens) = &self.max_tokens {
            v.insert("max_tokens".to_string(), json!(max_tokens));
        }
        if let Some(temperature) = &self.temperature {
            v.insert("temperature".to_string(), json!(temperature));
        }

        json!(v)
    }
}

impl FromJson for ChatRequest {
    fn from_json(v: &serde_json::Value) -> Result<Self, Error> {
        Ok(ChatRequest {
            model: OpenAIModelId::from_json(&v["model"])?,
            messages: v["messages"].flat_map_array(UserMessage::from_json)?,
            max_tokens: v["max_tokens"].to_opt_u32()?,
            temperature: v["temperature"].to_opt_f32()?,
        })
    }
}
