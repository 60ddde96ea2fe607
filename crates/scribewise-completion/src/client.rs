//! HTTP transport for the chat completion endpoint.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::CompletionError;
use crate::prompt::PromptMessage;

pub const API_KEY_VAR: &str = "SCRIBEWISE_API_KEY";
pub const API_URL_VAR: &str = "SCRIBEWISE_API_URL";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Where and how to reach the completion endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
}

impl EndpointConfig {
    /// Read credentials from the process environment.
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var(API_URL_VAR).ok(),
            api_key: std::env::var(API_KEY_VAR).ok(),
        }
    }

    /// Both values present and non-blank, or a configuration error naming
    /// the first missing one.
    pub fn require(&self) -> Result<(&str, &str), CompletionError> {
        let key = self
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| CompletionError::Config(format!("{API_KEY_VAR} is not set")))?;
        let url = self
            .api_url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| CompletionError::Config(format!("{API_URL_VAR} is not set")))?;
        Ok((url, key))
    }
}

// ── Wire types ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<PromptMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub response_format: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Pull `choices[0].message.content` out of a raw response body.
pub fn completion_content(body: &str) -> Result<String, CompletionError> {
    let response: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| CompletionError::ResponseParse(format!("invalid response body: {e}")))?;
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| CompletionError::ResponseParse("no message content in response".to_string()))
}

// ── Transport ────────────────────────────────────────────────────────────────

/// Sends one completion request and returns the raw response body.
pub trait CompletionTransport {
    fn send(&self, request: &ChatCompletionRequest) -> Result<String, CompletionError>;
}

/// Blocking HTTP transport. One POST per request, no retries.
pub struct HttpTransport {
    agent: ureq::Agent,
    api_url: String,
    api_key: String,
}

impl HttpTransport {
    /// Fails with [`CompletionError::Config`] when credentials are missing,
    /// before anything touches the network.
    pub fn new(config: &EndpointConfig) -> Result<Self, CompletionError> {
        let (url, key) = config.require()?;
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(REQUEST_TIMEOUT))
            .build()
            .into();
        Ok(Self {
            agent,
            api_url: url.to_string(),
            api_key: key.to_string(),
        })
    }
}

impl CompletionTransport for HttpTransport {
    fn send(&self, request: &ChatCompletionRequest) -> Result<String, CompletionError> {
        let payload = serde_json::to_string(request)?;
        debug!(url = %self.api_url, bytes = payload.len(), "posting completion request");

        let result = self
            .agent
            .post(&self.api_url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send(payload.as_str());

        let mut response = match result {
            Ok(response) => response,
            Err(ureq::Error::StatusCode(code)) => return Err(CompletionError::Status(code)),
            Err(e) => return Err(CompletionError::Transport(e.to_string())),
        };

        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        info!(status = response.status().as_u16(), bytes = body.len(), "completion received");
        Ok(body)
    }
}
