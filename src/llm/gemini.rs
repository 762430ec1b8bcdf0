//! Google Gemini generateContent client.
//!
//! Gemini takes no role split here; the request carries one flattened prompt
//! string. The response nests text under candidates/content/parts.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::llm::backend::GenerationBackend;
use crate::llm::prompt::GenerationRequest;

pub struct GeminiClient {
    http: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// The credential travels as a query parameter, not a header.
    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}

#[async_trait]
impl GenerationBackend for GeminiClient {
    fn name(&self) -> &'static str {
        "Gemini"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, ProviderError> {
        let body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: request.flattened(),
                }],
            }],
        };

        let response = self
            .http
            .post(self.endpoint())
            .json(&body)
            .send()
            .await
            .map_err(|source| ProviderError::RequestFailed {
                provider: self.name(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(ProviderError::Api {
                provider: self.name(),
                status,
                body,
            });
        }

        let payload: GeminiResponse =
            response
                .json()
                .await
                .map_err(|err| ProviderError::MalformedResponse {
                    provider: self.name(),
                    detail: err.to_string(),
                })?;

        payload
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or(ProviderError::MalformedResponse {
                provider: self.name(),
                detail: "response carried no candidate text".to_string(),
            })
    }
}

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiCandidateContent>,
}

#[derive(Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Deserialize)]
struct GeminiResponsePart {
    text: Option<String>,
}
