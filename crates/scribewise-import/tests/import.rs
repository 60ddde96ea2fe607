use std::io::{Cursor, Write};

use docx_rs::{Docx, Paragraph, Run};
use pretty_assertions::assert_eq;
use scribewise_import::format::{DocumentFormat, DOCX_MIME};
use scribewise_import::pdf::join_pages;
use scribewise_import::text::decode_sanitized;
use scribewise_import::{import_bytes, import_path};

fn docx_bytes(paragraphs: &[&[&str]]) -> Vec<u8> {
    let mut docx = Docx::new();
    for runs in paragraphs {
        let mut paragraph = Paragraph::new();
        for text in *runs {
            paragraph = paragraph.add_run(Run::new().add_text(*text).bold());
        }
        docx = docx.add_paragraph(paragraph);
    }
    let mut buf = Cursor::new(Vec::new());
    docx.build().pack(&mut buf).unwrap();
    buf.into_inner()
}

#[test]
fn detect_prefers_mime_then_extension() {
    assert_eq!(DocumentFormat::detect("notes.txt", Some("text/plain")), DocumentFormat::PlainText);
    assert_eq!(DocumentFormat::detect("notes.md", Some("application/octet-stream")), DocumentFormat::Markdown);
    assert_eq!(DocumentFormat::detect("paper", Some("application/pdf")), DocumentFormat::Pdf);
    assert_eq!(DocumentFormat::detect("essay.bin", Some(DOCX_MIME)), DocumentFormat::Docx);
    assert_eq!(DocumentFormat::detect("essay.DOCX", None), DocumentFormat::Docx);
    assert_eq!(DocumentFormat::detect("archive.zip", None), DocumentFormat::Other);
    assert_eq!(DocumentFormat::detect("README", None), DocumentFormat::Other);
}

#[test]
fn markdown_is_kept_verbatim() {
    let doc = import_bytes(b"# Title\n\n*emphasis*", "draft.md", None).unwrap();
    assert_eq!(doc.format, DocumentFormat::Markdown);
    assert_eq!(doc.text, "# Title\n\n*emphasis*");
}

#[test]
fn docx_text_is_extracted_without_formatting() {
    let bytes = docx_bytes(&[&["Born in Glasgow", ","], &["in 1987."]]);
    let doc = import_bytes(&bytes, "bio.docx", None).unwrap();
    assert_eq!(doc.format, DocumentFormat::Docx);
    assert_eq!(doc.text, "Born in Glasgow,\nin 1987.");
}

#[test]
fn corrupt_docx_is_an_error() {
    assert!(import_bytes(b"not a zip", "bio.docx", None).is_err());
}

#[test]
fn pdf_pages_are_collapsed_and_joined() {
    let pages = vec!["First   page\ntext ".to_string(), "\tSecond\n\npage".to_string()];
    assert_eq!(join_pages(&pages), "First page text\n\nSecond page");
}

#[test]
fn unknown_types_drop_non_printable_characters() {
    assert_eq!(decode_sanitized(b"ok\x00\x07 text\r\n\xffend"), "ok text\nend");
    let doc = import_bytes("café\tbar\n".as_bytes(), "data.xyz", None).unwrap();
    assert_eq!(doc.format, DocumentFormat::Other);
    assert_eq!(doc.text, "cafbar\n");
}

#[test]
fn import_path_reads_from_disk() {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    write!(file, "Plain text on disk.").unwrap();

    let doc = import_path(file.path()).unwrap();
    assert_eq!(doc.format, DocumentFormat::PlainText);
    assert_eq!(doc.text, "Plain text on disk.");
}

#[test]
fn missing_file_reports_path() {
    let err = import_path(std::path::Path::new("/definitely/not/here.txt")).unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.txt"));
}
