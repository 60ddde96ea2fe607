//! Helpers for the serialized rich-text content.
//!
//! Content is an HTML fragment. Annotations and pending revisions are shown
//! with `<mark>` wrappers distinguished by their class attribute.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

pub const ANNOTATION_MARK_OPEN: &str = r#"<mark class="bg-blue-200 dark:bg-blue-800">"#;
pub const REVISION_MARK_OPEN: &str = r#"<mark class="bg-yellow-200 dark:bg-yellow-800">"#;
pub const MARK_CLOSE: &str = "</mark>";

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

pub fn annotation_marked(text: &str) -> String {
    format!("{ANNOTATION_MARK_OPEN}{text}{MARK_CLOSE}")
}

pub fn revision_marked(text: &str) -> String {
    format!("{REVISION_MARK_OPEN}{text}{MARK_CLOSE}")
}

/// Replace the first literal occurrence of `from`. Returns `None` when
/// `from` is empty or absent.
pub fn replace_first(content: &str, from: &str, to: &str) -> Option<String> {
    replace_first_span(content, from, to).map(|(out, _)| out)
}

/// Like [`replace_first`], also returning the byte range `to` occupies in
/// the result.
pub fn replace_first_span(content: &str, from: &str, to: &str) -> Option<(String, Range<usize>)> {
    if from.is_empty() {
        return None;
    }
    let start = content.find(from)?;
    let mut out = String::with_capacity(content.len() - from.len() + to.len());
    out.push_str(&content[..start]);
    out.push_str(to);
    out.push_str(&content[start + from.len()..]);
    Some((out, start..start + to.len()))
}

/// Remove the annotation wrapper around the first marked occurrence of
/// `span_text`, leaving the text itself in place.
pub fn strip_annotation(content: &str, span_text: &str) -> String {
    replace_first(content, &annotation_marked(span_text), span_text)
        .unwrap_or_else(|| content.to_string())
}

/// Plain-text rendering: every tag removed.
pub fn plain_text(content: &str) -> String {
    TAG.replace_all(content, "").into_owned()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    pub words: usize,
    pub characters: usize,
}

/// Word and character counts of the plain-text rendering.
pub fn stats(content: &str) -> DocumentStats {
    let text = plain_text(content);
    DocumentStats {
        words: text.split_whitespace().count(),
        characters: text.chars().count(),
    }
}
