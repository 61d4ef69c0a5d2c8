pub mod chat_completion_choice;
pub mod chat_completion_object;
pub mod chat_request;
pub mod error;
pub mod generate_content;
pub mod model_id;
pub mod usage_stats;
pub mod user_message;

pub use chat_completion_choice::ChatCompletionChoice;
pub use chat_completion_object::ChatCompletionObject;
pub use chat_request::ChatRequest;
pub use error::Error;
pub use generate_content::{Candidate, GenerateContentRequest, GenerateContentResponse};
pub use model_id::{GeminiModelId, OpenAIModelId};
pub use usage_stats::UsageStats;
pub use user_message::UserMessage;
