use crate::{
    json::FromJson,
    json_ext::JsonValueExt,
    types::{ChatCompletionChoice, Error, UsageStats},
};

use serde_json::Value;

/// Response envelope of an OpenAI `chat/completions` call.
#[derive(Debug, PartialEq, Clone)]
pub struct ChatCompletionObject {
    pub id: String,
    /// Kept as the raw string: the API echoes dated snapshots such as
    /// `gpt-4-0613` that we never request directly.
    pub model: String,
    pub choices: Vec<ChatCompletionChoice>,
    pub usage: Option<UsageStats>,
}

impl ChatCompletionObject {
    /// The text of the first choice, which is the only one we ask for.
    pub fn completion_text(&self) -> Result<String, Error> {
        self.choices
            .first()
            .and_then(|c| c.content.clone())
            .ok_or(Error::MissingCompletion)
    }
}

impl FromJson for ChatCompletionObject {
    fn from_json(value: &Value) -> Result<Self, Error> {
        Ok(Self {
            id: value["id"].to_string_or_err()?,
            model: value["model"].to_string_or_err()?,
            choices: value["choices"].flat_map_array(ChatCompletionChoice::from_json)?,
            usage: value["usage"].map_opt_obj(UsageStats::from_json)?,
        })
    }
}
