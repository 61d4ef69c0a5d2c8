pub mod client;
pub mod gemini;
pub mod openai;
pub mod provider;
pub mod response;

pub use client::{RawCompletion, RawRequester};
pub use gemini::GeminiRawRequester;
pub use openai::OpenAIRawRequester;
pub use provider::LLMProvider;
pub use response::{Outcome, ProviderResponse};
