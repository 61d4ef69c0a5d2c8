use crate::json::{FromJson, ToJson};
use crate::json_ext::JsonValueExt;
use crate::types::{Error, UsageStats};

use serde_json::{json, Value};

/// Body of a Gemini `models/{model}:generateContent` call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateContentRequest {
    pub prompt: String,
    pub max_output_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl GenerateContentRequest {
    pub fn new<T: Into<String>>(prompt: T) -> GenerateContentRequest {
        GenerateContentRequest {
            prompt: prompt.into(),
            max_output_tokens: None,
            temperature: None,
        }
    }

    pub fn with_max_output_tokens(self, max_output_tokens: Option<u32>) -> Self {
        let mut result = self;
        result.max_output_tokens = max_output_tokens;
        result
    }

    pub fn with_temperature(self, temperature: Option<f32>) -> Self {
        let mut result = self;
        result.temperature = temperature;
        result
    }
}

impl ToJson for GenerateContentRequest {
    fn to_json(&self) -> Value {
        let mut v = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": self.prompt }]
            }]
        });
        let mut config = serde_json::Map::new();
        if let Some(max_output_tokens) = self.max_output_tokens {
            config.insert("maxOutputTokens".to_string(), json!(max_output_tokens));
        }
        if let Some(temperature) = self.temperature {
            config.insert("temperature".to_string(), json!(temperature));
        }
        if !config.is_empty() {
            v["generationConfig"] = Value::Object(config);
        }
        v
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub parts: Vec<String>,
    pub finish_reason: Option<String>,
}

impl FromJson for Candidate {
    fn from_json(v: &Value) -> Result<Self, Error> {
        let parts = v["content"]["parts"]
            .flat_map_opt_array(|p| p["text"].to_opt_string())?
            .unwrap_or_default();
        Ok(Candidate {
            parts: parts.into_iter().flatten().collect(),
            finish_reason: v["finishReason"].to_opt_string()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateContentResponse {
    pub candidates: Vec<Candidate>,
    pub block_reason: Option<String>,
    pub usage: Option<UsageStats>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    pub fn completion_text(&self) -> Result<String, Error> {
        match self.candidates.first() {
            Some(candidate) if !candidate.parts.is_empty() => Ok(candidate.parts.concat()),
            Some(Candidate {
                finish_reason: Some(reason),
                ..
            }) => Err(Error::CompletionStopped(reason.clone())),
            _ => Err(Error::MissingCompletion),
        }
    }
}

impl FromJson for GenerateContentResponse {
    fn from_json(v: &Value) -> Result<Self, Error> {
        Ok(GenerateContentResponse {
            candidates: v["candidates"]
                .flat_map_opt_array(Candidate::from_json)?
                .unwrap_or_default(),
            block_reason: v["promptFeedback"]["blockReason"].to_opt_string()?,
            usage: v["usageMetadata"].map_opt_obj(UsageStats::from_gemini_json)?,
        })
    }
}
