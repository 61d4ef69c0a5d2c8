use crate::json::FromJson;
use crate::json_ext::JsonValueExt;
use crate::types::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompletionChoice {
    pub index: u32,
    pub content: Option<String>,
    pub finish_reason: Option<String>,
}

impl FromJson for ChatCompletionChoice {
    fn from_json(v: &serde_json::Value) -> Result<ChatCompletionChoice, Error> {
        Ok(ChatCompletionChoice {
            index: v["index"].to_opt_u32()?.unwrap_or(0),
            content: v["message"]["content"].to_opt_string()?,
            finish_reason: v["finish_reason"].to_opt_string()?,
        })
    }
}
