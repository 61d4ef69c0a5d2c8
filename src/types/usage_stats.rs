use crate::json::FromJson;
use crate::json_ext::JsonValueExt;
use crate::types::Error;

/// Token accounting as reported by a provider. Gemini's `usageMetadata` is
/// mapped onto the same shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UsageStats {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl UsageStats {
    pub fn from_gemini_json(v: &serde_json::Value) -> Result<Self, Error> {
        let prompt_tokens = v["promptTokenCount"].to_opt_u32()?.unwrap_or(0);
        let completion_tokens = v["candidatesTokenCount"].to_opt_u32()?.unwrap_or(0);
        Ok(UsageStats {
            prompt_tokens,
            completion_tokens,
            total_tokens: v["totalTokenCount"]
                .to_opt_u32()?
                .unwrap_or_else(|| prompt_tokens.saturating_add(completion_tokens)),
        })
    }
}

impl FromJson for UsageStats {
    fn from_json(v: &serde_json::Value) -> Result<Self, Error> {
        Ok(UsageStats {
            prompt_tokens: v["prompt_tokens"].to_opt_u32()?.unwrap_or(0),
            completion_tokens: v["completion_tokens"].to_opt_u32()?.unwrap_or(0),
            total_tokens: v["total_tokens"].to_opt_u32()?.unwrap_or(0),
        })
    }
}
