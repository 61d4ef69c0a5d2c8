use llm_compare::llm::client::RawRequester;
use llm_compare::llm::{GeminiRawRequester, LLMProvider, OpenAIRawRequester, Outcome};
use llm_compare::types::{GeminiModelId, OpenAIModelId};
use mockito::{Matcher, Server};
use pretty_assertions::assert_eq;
use serde_json::json;

// Nothing listens on port 1, so connecting fails immediately.
const UNREACHABLE: &str = "http://127.0.0.1:1";

fn openai_body(content: &str) -> String {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1677652288,
        "model": "gpt-4-0613",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 9, "completion_tokens": 12, "total_tokens": 21 }
    })
    .to_string()
}

fn gemini_body(parts: &[&str]) -> String {
    let parts: Vec<_> = parts.iter().map(|t| json!({ "text": t })).collect();
    json!({
        "candidates": [{
            "content": { "parts": parts, "role": "model" },
            "finishReason": "STOP"
        }],
        "usageMetadata": { "promptTokenCount": 8, "candidatesTokenCount": 3, "totalTokenCount": 11 }
    })
    .to_string()
}

#[tokio::test]
async fn openai_returns_completion_text_verbatim() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .match_header("content-type", Matcher::Regex("application/json.*".to_string()))
        .match_body(Matcher::PartialJson(json!({
            "model": "gpt-4",
            "messages": [{ "role": "user", "content": "Explain quantum computing" }]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(openai_body("It's like a **magic** coin.\n\n1. Spin"))
        .create_async()
        .await;

    let mut requester =
        OpenAIRawRequester::new("sk-test", OpenAIModelId::Gpt4).with_base_url(&server.url());
    let completion = requester
        .make_request("Explain quantum computing")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(completion.text, "It's like a **magic** coin.\n\n1. Spin");
    assert_eq!(completion.model, "gpt-4-0613");
    assert_eq!(completion.usage.unwrap().total_tokens, 21);
}

#[tokio::test]
async fn openai_forwards_generation_limits() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_body(Matcher::PartialJson(json!({ "max_tokens": 1500, "temperature": 0.5 })))
        .with_status(200)
        .with_body(openai_body("ok"))
        .create_async()
        .await;

    let mut requester = OpenAIRawRequester::new("sk-test", OpenAIModelId::Gpt4o)
        .with_base_url(&server.url())
        .with_max_tokens(Some(1500))
        .with_temperature(Some(0.5));
    requester.make_request("hi").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn openai_api_error_becomes_error_text() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(
            json!({ "error": { "message": "Incorrect API key provided", "type": "invalid_request_error" } })
                .to_string(),
        )
        .create_async()
        .await;

    let mut provider = LLMProvider::OpenAI {
        model: OpenAIModelId::Gpt4,
        requester: Box::new(
            OpenAIRawRequester::new("bad", OpenAIModelId::Gpt4).with_base_url(&server.url()),
        ),
    };
    let response = provider.query("hi").await;

    assert!(response.is_failure());
    assert_eq!(
        response.text(),
        "Error querying OpenAI: (401 Unauthorized) Incorrect API key provided"
    );
}

#[tokio::test]
async fn openai_non_json_error_body_is_kept() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(502)
        .with_body("upstream went away")
        .create_async()
        .await;

    let mut requester =
        OpenAIRawRequester::new("sk", OpenAIModelId::Gpt4).with_base_url(&server.url());
    let err = requester.make_request("hi").await.unwrap_err();
    assert_eq!(err.to_string(), "(502 Bad Gateway) upstream went away");
}

#[tokio::test]
async fn openai_malformed_success_body_is_an_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body(json!({ "id": "x", "model": "gpt-4", "choices": [] }).to_string())
        .create_async()
        .await;

    let mut provider = LLMProvider::OpenAI {
        model: OpenAIModelId::Gpt4,
        requester: Box::new(
            OpenAIRawRequester::new("sk", OpenAIModelId::Gpt4).with_base_url(&server.url()),
        ),
    };
    let response = provider.query("hi").await;
    assert!(response.text().starts_with("Error querying OpenAI: "));
}

#[tokio::test]
async fn transport_failure_never_propagates() {
    let mut openai = LLMProvider::OpenAI {
        model: OpenAIModelId::Gpt4,
        requester: Box::new(
            OpenAIRawRequester::new("sk", OpenAIModelId::Gpt4).with_base_url(UNREACHABLE),
        ),
    };
    let mut gemini = LLMProvider::Gemini {
        model: GeminiModelId::GeminiPro,
        requester: Box::new(
            GeminiRawRequester::new("g", GeminiModelId::GeminiPro).with_base_url(UNREACHABLE),
        ),
    };

    let a = openai.query("hi").await;
    let b = gemini.query("hi").await;
    assert!(a.text().starts_with("Error querying OpenAI: "));
    assert!(b.text().starts_with("Error querying Vertex AI: "));
}

#[tokio::test]
async fn gemini_joins_text_parts() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-pro:generateContent")
        .match_header("x-goog-api-key", "g-test")
        .match_body(Matcher::PartialJson(json!({
            "contents": [{ "parts": [{ "text": "Explain quantum computing" }] }]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(gemini_body(&["Imagine ", "a spinning coin."]))
        .create_async()
        .await;

    let mut provider = LLMProvider::Gemini {
        model: GeminiModelId::GeminiPro,
        requester: Box::new(
            GeminiRawRequester::new("g-test", GeminiModelId::GeminiPro)
                .with_base_url(&server.url()),
        ),
    };
    let response = provider.query("Explain quantum computing").await;

    mock.assert_async().await;
    assert_eq!(
        response.outcome,
        Outcome::Completion("Imagine a spinning coin.".to_string())
    );
}

#[tokio::test]
async fn gemini_routes_by_model_and_forwards_limits() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
        .match_body(Matcher::PartialJson(json!({
            "generationConfig": { "maxOutputTokens": 64 }
        })))
        .with_status(200)
        .with_body(gemini_body(&["ok"]))
        .create_async()
        .await;

    let mut requester = GeminiRawRequester::new("g", GeminiModelId::Gemini15Flash)
        .with_base_url(&format!("{}/", server.url()))
        .with_max_output_tokens(Some(64));
    let completion = requester.make_request("hi").await.unwrap();

    mock.assert_async().await;
    assert_eq!(completion.text, "ok");
    assert_eq!(completion.model, "gemini-1.5-flash");
    assert_eq!(completion.usage.unwrap().total_tokens, 11);
}

#[tokio::test]
async fn gemini_blocked_prompt_is_an_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1beta/models/gemini-pro:generateContent")
        .with_status(200)
        .with_body(json!({ "promptFeedback": { "blockReason": "SAFETY" } }).to_string())
        .create_async()
        .await;

    let mut provider = LLMProvider::Gemini {
        model: GeminiModelId::GeminiPro,
        requester: Box::new(
            GeminiRawRequester::new("g", GeminiModelId::GeminiPro).with_base_url(&server.url()),
        ),
    };
    let response = provider.query("hi").await;
    assert_eq!(
        response.text(),
        "Error querying Vertex AI: prompt was blocked (SAFETY)"
    );
}

#[tokio::test]
async fn gemini_api_error_becomes_error_text() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1beta/models/gemini-pro:generateContent")
        .with_status(400)
        .with_body(
            json!({ "error": { "code": 400, "message": "API key not valid. Please pass a valid API key.", "status": "INVALID_ARGUMENT" } })
                .to_string(),
        )
        .create_async()
        .await;

    let mut provider = LLMProvider::Gemini {
        model: GeminiModelId::GeminiPro,
        requester: Box::new(
            GeminiRawRequester::new("", GeminiModelId::GeminiPro).with_base_url(&server.url()),
        ),
    };
    let response = provider.query("hi").await;
    assert_eq!(
        response.text(),
        "Error querying Vertex AI: (400 Bad Request) API key not valid. Please pass a valid API key."
    );
}

#[tokio::test]
async fn gemini_oversized_usage_counts_do_not_abort_the_query() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1beta/models/gemini-pro:generateContent")
        .with_status(200)
        .with_body(
            json!({
                "candidates": [{ "content": { "parts": [{ "text": "ok" }] }, "finishReason": "STOP" }],
                "usageMetadata": { "promptTokenCount": 4294967295u64, "candidatesTokenCount": 1, "totalTokenCount": 5 }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let mut provider = LLMProvider::Gemini {
        model: GeminiModelId::GeminiPro,
        requester: Box::new(
            GeminiRawRequester::new("g", GeminiModelId::GeminiPro).with_base_url(&server.url()),
        ),
    };
    let response = provider.query("hi").await;
    assert_eq!(response.outcome, Outcome::Completion("ok".to_string()));
}

#[tokio::test]
async fn gemini_stopped_candidate_reports_finish_reason() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1beta/models/gemini-pro:generateContent")
        .with_status(200)
        .with_body(
            json!({ "candidates": [{ "finishReason": "SAFETY", "index": 0 }] }).to_string(),
        )
        .create_async()
        .await;

    let mut provider = LLMProvider::Gemini {
        model: GeminiModelId::GeminiPro,
        requester: Box::new(
            GeminiRawRequester::new("g", GeminiModelId::GeminiPro).with_base_url(&server.url()),
        ),
    };
    let response = provider.query("hi").await;
    assert_eq!(
        response.text(),
        "Error querying Vertex AI: Error decoding gemini response: candidate finished with no text (SAFETY)"
    );
}
