use std::time::Instant;

use crate::llm::client::RawRequester;
use crate::llm::response::ProviderResponse;
use crate::types::{GeminiModelId, OpenAIModelId};

pub enum LLMProvider {
    OpenAI {
        model: OpenAIModelId,
        requester: Box<dyn RawRequester + Send>,
    },
    Gemini {
        model: GeminiModelId,
        requester: Box<dyn RawRequester + Send>,
    },
}

impl LLMProvider {
    pub fn name(&self) -> &'static str {
        match self {
            LLMProvider::OpenAI { .. } => "OpenAI",
            LLMProvider::Gemini { .. } => "Vertex AI",
        }
    }

    pub fn model_name(&self) -> String {
        match self {
            LLMProvider::OpenAI { model, .. } => model.name(),
            LLMProvider::Gemini { model, .. } => model.name(),
        }
    }

    pub fn heading(&self) -> String {
        match self {
            LLMProvider::OpenAI { model, .. } => format!("OpenAI {}", model.display_name()),
            LLMProvider::Gemini { model, .. } => format!("Vertex AI ({})", model.display_name()),
        }
    }

    fn requester(&mut self) -> &mut (dyn RawRequester + Send) {
        match self {
            LLMProvider::OpenAI { requester, .. } => requester.as_mut(),
            LLMProvider::Gemini { requester, .. } => requester.as_mut(),
        }
    }

    /// Makes exactly one remote call. Never fails: any error becomes a
    /// [`ProviderResponse`] failure carrying the error's description.
    pub async fn query(&mut self, prompt: &str) -> ProviderResponse {
        let name = self.name();
        let heading = self.heading();
        let model = self.model_name();
        let start = Instant::now();

        let result = self.requester().make_request(prompt).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(completion) => {
                let usage = completion.usage.unwrap_or_default();
                tracing::info!(
                    provider = name,
                    model = %completion.model,
                    elapsed_ms,
                    prompt_tokens = usage.prompt_tokens,
                    completion_tokens = usage.completion_tokens,
                    total_tokens = usage.total_tokens,
                    chars = completion.text.chars().count(),
                    "completion received"
                );
                ProviderResponse::completion(name, heading, completion.text)
            }
            Err(err) => {
                let reason = format!("{:#}", err);
                tracing::error!(
                    provider = name,
                    model = %model,
                    elapsed_ms,
                    error = %reason,
                    "provider call failed"
                );
                ProviderResponse::failure(name, heading, reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::client::RawCompletion;
    use crate::llm::response::Outcome;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct MockRawRequester {
        response: Result<String, String>,
        calls: Arc<AtomicUsize>,
    }

    impl MockRawRequester {
        fn new(response: Result<&str, &str>) -> MockRawRequester {
            MockRawRequester {
                response: response.map(|s| s.to_string()).map_err(|e| e.to_string()),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait::async_trait]
    impl RawRequester for MockRawRequester {
        async fn make_request(&mut self, _prompt: &str) -> anyhow::Result<RawCompletion> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.response {
                Ok(text) => Ok(RawCompletion {
                    text: text.clone(),
                    model: "mock".to_string(),
                    usage: None,
                }),
                Err(e) => Err(anyhow::anyhow!(e.clone())),
            }
        }
    }

    #[tokio::test]
    async fn query_returns_backend_text_unmodified() {
        let mut provider = LLMProvider::OpenAI {
            model: OpenAIModelId::Gpt4,
            requester: Box::new(MockRawRequester::new(Ok("It's like...\n\n* a coin"))),
        };
        let r = provider.query("Explain").await;
        assert_eq!(r.outcome, Outcome::Completion("It's like...\n\n* a coin".to_string()));
        assert_eq!(r.heading, "OpenAI GPT-4");
    }

    #[tokio::test]
    async fn query_converts_errors_to_text() {
        let mut provider = LLMProvider::Gemini {
            model: GeminiModelId::GeminiPro,
            requester: Box::new(MockRawRequester::new(Err("connection reset"))),
        };
        let r = provider.query("Explain").await;
        assert!(r.is_failure());
        assert!(r.text().starts_with("Error querying "));
        assert_eq!(r.text(), "Error querying Vertex AI: connection reset");
        assert_eq!(r.heading, "Vertex AI (Gemini Pro)");
    }

    #[tokio::test]
    async fn query_makes_a_single_attempt() {
        let requester = MockRawRequester::new(Err("503"));
        let calls = requester.calls.clone();
        let mut provider = LLMProvider::OpenAI {
            model: OpenAIModelId::Gpt4o,
            requester: Box::new(requester),
        };
        provider.query("Explain").await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
