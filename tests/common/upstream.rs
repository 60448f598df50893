//! Mocked chat-completion upstream

use super::fixtures::UPSTREAM_KEY;
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// A `wiremock` server speaking the chat-completion protocol
pub struct MockUpstream {
    pub server: MockServer,
}

impl MockUpstream {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL to configure as `api_base`
    pub fn api_base(&self) -> String {
        format!("{}/v1", self.server.uri())
    }

    /// Answer every authenticated completion call with `content` as the model's text
    pub async fn answer_with(&self, content: &str, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .and(header("authorization", format!("Bearer {}", UPSTREAM_KEY).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(content)))
            .expect(expected_calls)
            .mount(&self.server)
            .await;
    }

    /// Answer every completion call with a bare status
    pub async fn fail_with(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error": {"message": "upstream failure", "type": "server_error"}
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Bodies the upstream received, decoded as JSON
    pub async fn received_bodies(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| serde_json::from_slice(&request.body).expect("JSON request body"))
            .collect()
    }
}

/// Chat-completion envelope with one choice
pub fn envelope(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "gpt-4o-2024-08-06",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 900, "completion_tokens": 40, "total_tokens": 940}
    })
}

/// The model's JSON answer for a composed haiku
pub fn composed(haiku: &str, description: &str) -> String {
    json!({"description": description, "haiku": haiku}).to_string()
}
