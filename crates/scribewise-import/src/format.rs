use serde::Serialize;

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    PlainText,
    Markdown,
    Pdf,
    Docx,
    /// Unknown type; decoded as text with non-printable characters removed.
    Other,
}

impl DocumentFormat {
    /// Pick a format from the MIME type, falling back to the extension.
    /// A `.md` name always wins, since browsers rarely report a Markdown
    /// MIME type.
    pub fn detect(filename: &str, mime: Option<&str>) -> Self {
        let ext = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        if matches!(ext.as_str(), "md" | "markdown") {
            return DocumentFormat::Markdown;
        }

        match mime.map(str::trim).filter(|m| !m.is_empty()) {
            Some("text/plain") => DocumentFormat::PlainText,
            Some("text/markdown") => DocumentFormat::Markdown,
            Some("application/pdf") => DocumentFormat::Pdf,
            Some(DOCX_MIME) => DocumentFormat::Docx,
            Some(_) => DocumentFormat::Other,
            None => Self::for_extension(&ext),
        }
    }

    pub fn for_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "txt" | "text" => DocumentFormat::PlainText,
            "md" | "markdown" => DocumentFormat::Markdown,
            "pdf" => DocumentFormat::Pdf,
            "docx" => DocumentFormat::Docx,
            _ => DocumentFormat::Other,
        }
    }
}
