use docx_rs::{DocumentChild, ParagraphChild, Run, RunChild};

use crate::error::ImportError;

/// Raw text of a DOCX document: one line per paragraph, formatting dropped.
pub fn extract_text(bytes: &[u8]) -> Result<String, ImportError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| ImportError::Docx(e.to_string()))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => {
                let mut text = String::new();
                for child in &paragraph.children {
                    push_paragraph_child(child, &mut text);
                }
                Some(text)
            }
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn push_paragraph_child(child: &ParagraphChild, out: &mut String) {
    match child {
        ParagraphChild::Run(run) => push_run(run, out),
        ParagraphChild::Hyperlink(link) => {
            for child in &link.children {
                push_paragraph_child(child, out);
            }
        }
        _ => {}
    }
}

fn push_run(run: &Run, out: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(text) => out.push_str(&text.text),
            RunChild::Tab(_) => out.push('\t'),
            RunChild::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}
