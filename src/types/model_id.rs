use crate::json::{FromJson, ToJson};
use crate::types::Error;

use serde_json::json;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum OpenAIModelId {
    // $0.5/1.5 per M in/out
    Gpt35Turbo,
    #[default]
    Gpt4,
    Gpt4Turbo,
    // $5.00/15.00 per M in/out
    Gpt4o,
    // $0.15/0.60 per M in/out
    Gpt4oMini,
    Gpt41,
}

impl OpenAIModelId {
    pub fn name(&self) -> String {
        match self {
            OpenAIModelId::Gpt35Turbo => "gpt-3.5-turbo",
            OpenAIModelId::Gpt4 => "gpt-4",
            OpenAIModelId::Gpt4Turbo => "gpt-4-turbo",
            OpenAIModelId::Gpt4o => "gpt-4o",
            OpenAIModelId::Gpt4oMini => "gpt-4o-mini",
            OpenAIModelId::Gpt41 => "gpt-4.1",
        }
        .to_string()
    }

    /// Label used for report headings, e.g. "GPT-4".
    pub fn display_name(&self) -> String {
        match self {
            OpenAIModelId::Gpt35Turbo => "GPT-3.5 Turbo",
            OpenAIModelId::Gpt4 => "GPT-4",
            OpenAIModelId::Gpt4Turbo => "GPT-4 Turbo",
            OpenAIModelId::Gpt4o => "GPT-4o",
            OpenAIModelId::Gpt4oMini => "GPT-4o mini",
            OpenAIModelId::Gpt41 => "GPT-4.1",
        }
        .to_string()
    }

    pub fn values() -> Vec<OpenAIModelId> {
        vec![
            OpenAIModelId::Gpt35Turbo,
            OpenAIModelId::Gpt4,
            OpenAIModelId::Gpt4Turbo,
            OpenAIModelId::Gpt4o,
            OpenAIModelId::Gpt4oMini,
            OpenAIModelId::Gpt41,
        ]
    }

    pub fn from_str(name: &str) -> Result<OpenAIModelId, Error> {
        Self::values()
            .into_iter()
            .find(|m| m.name() == name)
            .ok_or(Error::InvalidModelName)
    }
}

impl FromJson for OpenAIModelId {
    fn from_json(v: &serde_json::Value) -> Result<Self, Error> {
        OpenAIModelId::from_str(v.as_str().ok_or(Error::JsonExpectedString)?)
    }
}

impl ToJson for OpenAIModelId {
    fn to_json(&self) -> serde_json::Value {
        json!(self.name())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum GeminiModelId {
    #[default]
    GeminiPro,
    Gemini15Pro,
    Gemini15Flash,
}

impl GeminiModelId {
    pub fn name(&self) -> String {
        match self {
            GeminiModelId::GeminiPro => "gemini-pro",
            GeminiModelId::Gemini15Pro => "gemini-1.5-pro",
            GeminiModelId::Gemini15Flash => "gemini-1.5-flash",
        }
        .to_string()
    }

    pub fn display_name(&self) -> String {
        match self {
            GeminiModelId::GeminiPro => "Gemini Pro",
            GeminiModelId::Gemini15Pro => "Gemini 1.5 Pro",
            GeminiModelId::Gemini15Flash => "Gemini 1.5 Flash",
        }
        .to_string()
    }

    pub fn values() -> Vec<GeminiModelId> {
        vec![
            GeminiModelId::GeminiPro,
            GeminiModelId::Gemini15Pro,
            GeminiModelId::Gemini15Flash,
        ]
    }

    pub fn from_str(name: &str) -> Result<GeminiModelId, Error> {
        // The REST API reports models as "models/<name>".
        let name = name.strip_prefix("models/").unwrap_or(name);
        Self::values()
            .into_iter()
            .find(|m| m.name() == name)
            .ok_or(Error::InvalidModelName)
    }
}

impl ToJson for GeminiModelId {
    fn to_json(&self) -> serde_json::Value {
        json!(self.name())
    }
}
