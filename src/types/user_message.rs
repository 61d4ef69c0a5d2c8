use crate::json::{FromJson, ToJson};
use crate::json_ext::JsonValueExt;
use crate::types::Error;
use serde_json::json;

#[derive(Debug, Clone, PartialEq)]
pub struct UserMessage {
    pub content: String,
    pub name: Option<String>,
}

impl UserMessage {
    pub fn new<T: Into<String>>(content: T) -> UserMessage {
        UserMessage {
            content: content.into(),
            name: None,
        }
    }
}

impl ToJson for UserMessage {
    fn to_json(&self) -> serde_json::Value {
        let mut v = json!({
            "role": "user",
            "content": self.content
        });
        if let Some(name) = &self.name {
            v["name"] = json!(name);
        }
        v
    }
}

impl FromJson for UserMessage {
    fn from_json(v: &serde_json::Value) -> Result<Self, Error> {
        Ok(UserMessage {
            content: v["content"].to_string_or_err()?,
            name: v["name"].to_opt_string()?,
        })
    }
}
