//! Turning a completion into revision fields.
//!
//! A completion is first classified: a JSON object matching
//! [`RevisionFields`] is taken as structured output; anything else falls
//! back to extracting the three labelled fields of the text template.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::CompletionError;

pub const DEFAULT_EXPLANATION: &str = "No explanation provided";

static REVISED_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"Revised Text: "(.*?)""#).unwrap());
static EXPLANATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)Explanation of changes: (.*?)(?:Consider Annotations:|$)").unwrap()
});
static CONSIDER_ANNOTATIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Consider Annotations: (true|false)").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionFields {
    pub revised_text: String,
    #[serde(default = "default_explanation")]
    pub explanation: String,
    #[serde(default)]
    pub consider_annotations: bool,
}

fn default_explanation() -> String {
    DEFAULT_EXPLANATION.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    Structured(RevisionFields),
    NeedsFallbackParse(String),
}

pub fn classify(content: &str) -> CompletionOutcome {
    let trimmed = content.trim();
    if trimmed.starts_with('{') {
        if let Ok(fields) = serde_json::from_str::<RevisionFields>(trimmed) {
            return CompletionOutcome::Structured(fields);
        }
    }
    CompletionOutcome::NeedsFallbackParse(content.to_string())
}

/// Resolve a classified completion into fields, failing if no revised text
/// can be found.
pub fn resolve(outcome: CompletionOutcome) -> Result<RevisionFields, CompletionError> {
    match outcome {
        CompletionOutcome::Structured(fields) => {
            if fields.revised_text.trim().is_empty() {
                return Err(CompletionError::SchemaViolation(
                    "structured response has empty revised_text".to_string(),
                ));
            }
            Ok(RevisionFields {
                revised_text: fields.revised_text.trim().to_string(),
                explanation: fields.explanation.trim().to_string(),
                consider_annotations: fields.consider_annotations,
            })
        }
        CompletionOutcome::NeedsFallbackParse(text) => parse_template(&text),
    }
}

/// Extract fields from the `Revised Text:` / `Explanation of changes:` /
/// `Consider Annotations:` template.
pub fn parse_template(content: &str) -> Result<RevisionFields, CompletionError> {
    let revised_text = REVISED_TEXT
        .captures(content)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|t| !t.is_empty());

    let Some(revised_text) = revised_text else {
        warn!(raw = content, "completion has no revised text");
        return Err(CompletionError::SchemaViolation(
            "could not find revised text in response".to_string(),
        ));
    };

    let explanation = EXPLANATION
        .captures(content)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(default_explanation);

    let consider_annotations = CONSIDER_ANNOTATIONS
        .captures(content)
        .and_then(|c| c.get(1))
        .is_some_and(|m| m.as_str() == "true");

    Ok(RevisionFields {
        revised_text,
        explanation,
        consider_annotations,
    })
}

/// Parse a completion with structured output taking precedence.
pub fn parse_completion(content: &str) -> Result<RevisionFields, CompletionError> {
    resolve(classify(content))
}
