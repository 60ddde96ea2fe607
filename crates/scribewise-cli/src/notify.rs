//! User-facing notifications. Details go to the log; the user gets a short
//! message.

/// Shown for any failed revision, whatever the cause.
pub const REVISION_FAILED: &str = "Failed to generate revision. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

pub trait Notifier {
    fn notify(&self, level: Level, title: &str, message: &str);

    fn success(&self, title: &str, message: &str) {
        self.notify(Level::Success, title, message);
    }

    fn error(&self, title: &str, message: &str) {
        self.notify(Level::Error, title, message);
    }
}

/// Writes notifications to stderr so stdout stays clean for document output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, level: Level, title: &str, message: &str) {
        let tag = match level {
            Level::Success => "ok",
            Level::Error => "error",
        };
        eprintln!("[{tag}] {title}: {message}");
    }
}
