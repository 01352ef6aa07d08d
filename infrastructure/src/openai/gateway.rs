//! OpenAI Chat Completions gateway implementation

use super::error::{OpenAiError, Result};
use super::types::{ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse};
use crate::config::{ApiKey, FileOpenAiConfig};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use trivia_application::ports::llm_gateway::{GatewayError, LlmGateway};
use trivia_domain::Model;
use tracing::{debug, info, warn};

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Connection settings for an OpenAI-compatible server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAiSettings {
    pub base_url: String,
    pub timeout: Duration,
}

impl OpenAiSettings {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }

    /// Endpoint URL for chat completions.
    pub fn completions_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), COMPLETIONS_PATH)
    }
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        FileOpenAiConfig::default().into()
    }
}

impl From<FileOpenAiConfig> for OpenAiSettings {
    fn from(config: FileOpenAiConfig) -> Self {
        Self::new(config.base_url, Duration::from_secs(config.timeout_secs))
    }
}

impl From<&FileOpenAiConfig> for OpenAiSettings {
    fn from(config: &FileOpenAiConfig) -> Self {
        Self::new(
            config.base_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }
}

/// LLM Gateway implementation for the OpenAI Chat Completions API
pub struct OpenAiGateway {
    client: reqwest::Client,
    settings: OpenAiSettings,
    api_key: ApiKey,
}

impl OpenAiGateway {
    /// Create a new gateway with its own HTTP client
    pub fn new(settings: OpenAiSettings, api_key: ApiKey) -> Result<Self> {
        let base = settings.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(OpenAiError::InvalidBaseUrl(settings.base_url.clone()));
        }

        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!("llm-trivia/", env!("CARGO_PKG_VERSION")))
            .build()?;

        info!(
            "OpenAiGateway initialized (base_url: {}, timeout: {:?})",
            settings.base_url, settings.timeout
        );

        Ok(Self {
            client,
            settings,
            api_key,
        })
    }

    fn map_send_error(e: reqwest::Error) -> GatewayError {
        if e.is_timeout() {
            GatewayError::Timeout
        } else if e.is_connect() {
            GatewayError::ConnectionError(e.to_string())
        } else {
            GatewayError::RequestFailed(e.to_string())
        }
    }

    fn map_status(status: StatusCode, body: &str) -> GatewayError {
        let message = serde_json::from_str::<ApiErrorResponse>(body)
            .map(|r| r.error.message)
            .unwrap_or_else(|_| {
                format!(
                    "HTTP {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                )
            });

        match status {
            StatusCode::UNAUTHORIZED => GatewayError::Unauthorized(message),
            StatusCode::NOT_FOUND => GatewayError::ModelNotAvailable(message),
            _ => GatewayError::RequestFailed(message),
        }
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    async fn complete(&self, model: &Model, prompt: &str) -> std::result::Result<String, GatewayError> {
        let url = self.settings.completions_url();
        let request = ChatCompletionRequest::user(model.as_str(), prompt);

        debug!("POST {} (model: {})", url, model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose())
            .json(&request)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let status = response.status();
        let body = response.text().await.map_err(Self::map_send_error)?;

        if !status.is_success() {
            warn!("Completion request failed with HTTP {}", status.as_u16());
            return Err(Self::map_status(status, &body));
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        if parsed.was_truncated() {
            warn!("Completion hit the token limit; the trivia JSON may be cut off");
        }

        match parsed.first_content() {
            Some(content) => {
                debug!("Received {} bytes of completion text", content.len());
                Ok(content.to_string())
            }
            None => {
                if let Some(refusal) = parsed.first_refusal() {
                    warn!("Model refused the request: {}", refusal);
                }
                Err(GatewayError::EmptyResponse)
            }
        }
    }
}
