//! Seams to the host UI.

/// The visible editing surface (a contenteditable element, a terminal
/// buffer, ...).
pub trait EditorSurface {
    fn content(&self) -> &str;
    fn set_content(&mut self, content: &str);
}

/// Destination for plain-text export.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), String>;
}

/// A surface that simply holds a string. Useful for headless hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferSurface {
    pub content: String,
    pub writes: usize,
}

impl EditorSurface for BufferSurface {
    fn content(&self) -> &str {
        &self.content
    }

    fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
        self.writes += 1;
    }
}
