use std::path::PathBuf;

use clap::Parser;

use crate::llm::gemini::GEMINI_API_BASE;
use crate::llm::openai::OPENAI_API_BASE;
use crate::llm::{GeminiRawRequester, LLMProvider, OpenAIRawRequester};
use crate::types::{GeminiModelId, OpenAIModelId};

pub const DEFAULT_PROMPT: &str = "Explain quantum computing to a 10-year-old";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "llm_compare",
    about = "Ask OpenAI and Gemini the same prompt and write a Markdown comparison"
)]
pub struct Cli {
    /// Prompt sent to both providers
    #[arg(long, default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// OpenAI chat model
    #[arg(long, env = "OPENAI_MODEL", default_value = "gpt-4", value_parser = parse_openai_model)]
    pub openai_model: OpenAIModelId,

    /// Gemini model
    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-pro", value_parser = parse_gemini_model)]
    pub gemini_model: GeminiModelId,

    /// Directory the report is written to
    #[arg(long, env = "LLM_COMPARE_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Upper bound on generated tokens, sent to both providers
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Sampling temperature, sent to both providers
    #[arg(long)]
    pub temperature: Option<f32>,

    #[arg(long, env = "OPENAI_BASE_URL", default_value = OPENAI_API_BASE, hide = true)]
    pub openai_base_url: String,

    #[arg(long, env = "GEMINI_BASE_URL", default_value = GEMINI_API_BASE, hide = true)]
    pub gemini_base_url: String,
}

fn parse_openai_model(s: &str) -> Result<OpenAIModelId, String> {
    OpenAIModelId::from_str(s).map_err(|_| {
        let names: Vec<String> = OpenAIModelId::values().iter().map(|m| m.name()).collect();
        format!("unknown OpenAI model '{}', expected one of: {}", s, names.join(", "))
    })
}

fn parse_gemini_model(s: &str) -> Result<GeminiModelId, String> {
    GeminiModelId::from_str(s).map_err(|_| {
        let names: Vec<String> = GeminiModelId::values().iter().map(|m| m.name()).collect();
        format!("unknown Gemini model '{}', expected one of: {}", s, names.join(", "))
    })
}

impl Cli {
    pub fn openai_provider(&self, openai_api_key: &str) -> LLMProvider {
        let requester = OpenAIRawRequester::new(openai_api_key, self.openai_model)
            .with_base_url(&self.openai_base_url)
            .with_max_tokens(self.max_tokens)
            .with_temperature(self.temperature);
        LLMProvider::OpenAI {
            model: self.openai_model,
            requester: Box::new(requester),
        }
    }

    pub fn gemini_provider(&self, google_api_key: &str) -> LLMProvider {
        let requester = GeminiRawRequester::new(google_api_key, self.gemini_model)
            .with_base_url(&self.gemini_base_url)
            .with_max_output_tokens(self.max_tokens)
            .with_temperature(self.temperature);
        LLMProvider::Gemini {
            model: self.gemini_model,
            requester: Box::new(requester),
        }
    }
}
