//! OpenAI-compatible chat-completions gateway
//!
//! One HTTPS round trip per call: bearer-authenticated POST to
//! `{endpoint_url}/chat/completions` with a two-message exchange at a fixed
//! sampling temperature. No retries, no streaming, reqwest's default timeout.

use async_trait::async_trait;
use gavel_application::ports::llm_gateway::{GatewayError, LlmGateway};
use gavel_domain::RoleConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Sampling temperature used for every role.
const TEMPERATURE: f64 = 0.7;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Gateway over any OpenAI-compatible chat-completions endpoint.
#[derive(Debug, Clone, Default)]
pub struct OpenAiChatGateway {
    client: reqwest::Client,
}

impl OpenAiChatGateway {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    fn completions_url(endpoint_url: &str) -> String {
        format!("{}/chat/completions", endpoint_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl LlmGateway for OpenAiChatGateway {
    async fn complete(
        &self,
        config: &RoleConfig,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, GatewayError> {
        let url = Self::completions_url(&config.endpoint_url);
        debug!(model = %config.model_id, %url, "POST chat completion");

        let body = ChatRequest {
            model: &config.model_id,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_message,
                },
            ],
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(config.credential.as_deref().unwrap_or_default())
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::RequestFailed {
                status: status.as_u16(),
                body: truncate(&body, 300),
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| GatewayError::MalformedResponse("response has no choices".to_string()))
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(endpoint_url: String) -> RoleConfig {
        RoleConfig {
            label: "Stub-Model".to_string(),
            credential: Some("sk-test".to_string()),
            credential_key: "STUB_API_KEY".to_string(),
            endpoint_url,
            model_id: "stub-model".to_string(),
        }
    }

    #[test]
    fn test_completions_url_trims_trailing_slashes() {
        assert_eq!(
            OpenAiChatGateway::completions_url("https://open.bigmodel.cn/api/paas/v4/"),
            "https://open.bigmodel.cn/api/paas/v4/chat/completions"
        );
        assert_eq!(
            OpenAiChatGateway::completions_url("https://api.deepseek.com"),
            "https://api.deepseek.com/chat/completions"
        );
    }

    #[tokio::test]
    async fn test_complete_returns_first_choice_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(serde_json::json!({
                "model": "stub-model",
                "temperature": 0.7,
                "messages": [
                    {"role": "system", "content": "be brief"},
                    {"role": "user", "content": "hello"},
                ],
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": "hi there"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = OpenAiChatGateway::new();
        let text = gateway
            .complete(&config(server.uri()), "be brief", "hello")
            .await
            .unwrap();
        assert_eq!(text, "hi there");
    }

    #[tokio::test]
    async fn test_http_error_status_becomes_request_failed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let gateway = OpenAiChatGateway::new();
        let err = gateway
            .complete(&config(server.uri()), "s", "u")
            .await
            .unwrap_err();
        match err {
            GatewayError::RequestFailed { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "rate limited");
            }
            other => panic!("expected RequestFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_choices_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"choices": []})),
            )
            .mount(&server)
            .await;

        let gateway = OpenAiChatGateway::new();
        let err = gateway
            .complete(&config(server.uri()), "s", "u")
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse(_)));
    }
}
