//! Span lookup by literal text.
//!
//! Spans are identified by their first occurrence in the serialized
//! content. When the same text appears more than once the first match wins;
//! [`occurrences`] lets callers detect that case.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use uuid::Uuid;

static TRAILING_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\w+").unwrap());

/// A resolved span: a byte range inside a specific snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub snapshot_id: Uuid,
    pub range: Range<usize>,
}

/// The selected text extended with the word that immediately follows its
/// first occurrence (including the whitespace before that word).
///
/// Returns `selected_text` unchanged when it does not occur in `content`.
pub fn locate(selected_text: &str, content: &str) -> String {
    let Some(start) = content.find(selected_text) else {
        return selected_text.to_string();
    };
    let after = &content[start + selected_text.len()..];
    let trailing = TRAILING_WORD.find(after).map(|m| m.as_str()).unwrap_or("");
    format!("{selected_text}{trailing}")
}

pub fn find_span(selected_text: &str, content: &str, snapshot_id: Uuid) -> Option<Span> {
    if selected_text.is_empty() {
        return None;
    }
    content.find(selected_text).map(|start| Span {
        snapshot_id,
        range: start..start + selected_text.len(),
    })
}

/// Number of non-overlapping occurrences of `selected_text`.
pub fn occurrences(selected_text: &str, content: &str) -> usize {
    if selected_text.is_empty() {
        return 0;
    }
    content.matches(selected_text).count()
}
