//! scribewise-import
//!
//! Text extraction from uploaded documents: plain text, Markdown, PDF and
//! DOCX, with a sanitising fallback for anything else.

pub mod docx;
pub mod error;
pub mod format;
pub mod pdf;
pub mod text;

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::ImportError;
use crate::format::DocumentFormat;

/// Extracted document text, ready to become a new snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportedDocument {
    pub filename: String,
    pub format: DocumentFormat,
    pub text: String,
}

/// Extract text from in-memory file contents.
///
/// `mime` takes precedence over the filename extension when given.
pub fn import_bytes(
    bytes: &[u8],
    filename: &str,
    mime: Option<&str>,
) -> Result<ImportedDocument, ImportError> {
    let format = DocumentFormat::detect(filename, mime);

    let text = match format {
        DocumentFormat::PlainText | DocumentFormat::Markdown => text::decode(bytes),
        DocumentFormat::Pdf => pdf::extract_text(bytes)?,
        DocumentFormat::Docx => docx::extract_text(bytes)?,
        DocumentFormat::Other => text::decode_sanitized(bytes),
    };

    info!(filename, ?format, text_len = text.len(), "document imported");

    Ok(ImportedDocument {
        filename: filename.to_string(),
        format,
        text,
    })
}

/// Read a file from disk and extract its text. The format comes from the
/// extension.
pub fn import_path(path: &Path) -> Result<ImportedDocument, ImportError> {
    let bytes = std::fs::read(path).map_err(|source| ImportError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    import_bytes(&bytes, &filename, None)
}
