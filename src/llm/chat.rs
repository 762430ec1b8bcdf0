//! OpenAI-style chat completions client.
//!
//! Serves every provider speaking the `/chat/completions` envelope; OpenAI
//! and OpenRouter differ only in endpoint, model, and credential.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};

use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::llm::backend::GenerationBackend;
use crate::llm::prompt::GenerationRequest;

// Sampling parameters, fixed for every request.
const TEMPERATURE: f32 = 0.2;
const TOP_P: f32 = 1.0;
const MAX_TOKENS: u32 = 400;

pub struct ChatCompletionsClient {
    http: Client,
    name: &'static str,
    base_url: String,
    model: String,
    api_key: String,
}

impl ChatCompletionsClient {
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            http: Client::new(),
            name: config.kind.as_str(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl GenerationBackend for ChatCompletionsClient {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, ProviderError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: request.instruction.clone(),
                },
                ChatMessage {
                    role: "user",
                    content: request.user_content(),
                },
            ],
            temperature: TEMPERATURE,
            top_p: TOP_P,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .http
            .post(self.endpoint())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|source| ProviderError::RequestFailed {
                provider: self.name,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(ProviderError::Api {
                provider: self.name,
                status,
                body,
            });
        }

        let payload: ChatResponse =
            response
                .json()
                .await
                .map_err(|err| ProviderError::MalformedResponse {
                    provider: self.name,
                    detail: err.to_string(),
                })?;

        payload
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(ProviderError::MalformedResponse {
                provider: self.name,
                detail: "response carried no choices".to_string(),
            })
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}
