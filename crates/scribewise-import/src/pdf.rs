use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::ImportError;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Extract text page by page. Whitespace is collapsed within each page and
/// pages are separated by a blank line.
pub fn extract_text(bytes: &[u8]) -> Result<String, ImportError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ImportError::Pdf(e.to_string()))?;
    debug!(pages = pages.len(), "extracted PDF pages");
    Ok(join_pages(&pages))
}

pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    pages
        .iter()
        .map(|page| WHITESPACE.replace_all(page.as_ref(), " ").trim().to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}
