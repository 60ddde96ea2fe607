//! The revision request: prompt, call, parse.

use scribewise_core::models::annotation::Annotation;
use scribewise_core::models::revision::{Revision, RevisionOutcome};
use scribewise_core::models::style::WritingStyle;
use tracing::{error, info};
use uuid::Uuid;

use crate::client::{
    completion_content, ChatCompletionRequest, CompletionTransport, EndpointConfig, HttpTransport,
};
use crate::error::CompletionError;
use crate::parse;
use crate::prompt;

pub const MODEL: &str = "gpt-4";
pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 1500;

/// Request-time values for one revision.
#[derive(Debug, Clone)]
pub struct RevisionRequest {
    pub document: String,
    pub selected_text: String,
    pub context: Option<String>,
    pub style: WritingStyle,
    pub annotations: Vec<Annotation>,
}

pub struct RevisionClient<T> {
    transport: T,
    model: String,
    structured_output: bool,
}

impl RevisionClient<HttpTransport> {
    /// Build an HTTP-backed client. Missing credentials are reported here.
    pub fn from_config(config: &EndpointConfig) -> Result<Self, CompletionError> {
        Ok(Self::new(HttpTransport::new(config)?))
    }
}

impl<T: CompletionTransport> RevisionClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            model: MODEL.to_string(),
            structured_output: false,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Ask the endpoint for a JSON object instead of the text template.
    /// Text completions are still accepted.
    pub fn with_structured_output(mut self, enabled: bool) -> Self {
        self.structured_output = enabled;
        self
    }

    pub fn build_request(&self, request: &RevisionRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: prompt::build_messages(
                &request.document,
                &request.selected_text,
                request.context.as_deref(),
                request.style,
                &request.annotations,
            ),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            response_format: self.structured_output.then(response_schema),
        }
    }

    pub fn request_revision(
        &self,
        request: &RevisionRequest,
    ) -> Result<RevisionOutcome, CompletionError> {
        let revision_id = Uuid::new_v4();
        info!(revision_id = %revision_id, model = %self.model, style = %request.style, "starting revision");

        let wire = self.build_request(request);
        let body = self.transport.send(&wire)?;

        let fields = completion_content(&body)
            .and_then(|content| parse::parse_completion(&content))
            .inspect_err(|e| error!(revision_id = %revision_id, error = %e, raw = %body, "failed to parse completion"))?;

        info!(revision_id = %revision_id, consider_annotations = fields.consider_annotations, "revision complete");

        Ok(RevisionOutcome {
            revision: Revision {
                id: revision_id,
                original_text: request.selected_text.clone(),
                revised_text: fields.revised_text,
                explanation: fields.explanation,
                timestamp: jiff::Timestamp::now(),
            },
            consider_annotations: fields.consider_annotations,
        })
    }
}

/// JSON schema passed as `response_format` when structured output is on.
fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "json_schema",
        "json_schema": {
            "name": "revision",
            "strict": true,
            "schema": {
                "type": "object",
                "properties": {
                    "revised_text": { "type": "string" },
                    "explanation": { "type": "string" },
                    "consider_annotations": { "type": "boolean" }
                },
                "required": ["revised_text", "explanation", "consider_annotations"],
                "additionalProperties": false
            }
        }
    })
}
