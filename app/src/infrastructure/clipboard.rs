use std::path::PathBuf;

use charta_core::ports::{ClipboardError, ClipboardSink};
use charta_core::services::{CopyOutcome, copy_with_fallback};

/// The desktop clipboard, opened fresh for every write.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
  fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
    clipboard.set_text(text.to_string()).map_err(|e| ClipboardError::Write(e.to_string()))
  }
}

/// Drops the text into a file the user can open when no clipboard is around
/// (headless sessions, SSH).
#[derive(Debug, Clone)]
pub struct FileClipboard {
  path: PathBuf,
}

impl FileClipboard {
  pub fn new(path: PathBuf) -> Self {
    Self { path }
  }

  pub fn path(&self) -> &PathBuf {
    &self.path
  }
}

impl ClipboardSink for FileClipboard {
  fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
    charta_fs::atomic_write_str(&self.path, text)
      .map_err(|e| ClipboardError::Write(format!("{}: {e}", self.path.display())))
  }
}

/// The system clipboard backed by a file, as used by `--copy` and the `copy` prompt command.
pub struct Clipboards {
  primary: Box<dyn ClipboardSink>,
  fallback: FileClipboard,
}

impl Clipboards {
  pub fn new(primary: Box<dyn ClipboardSink>, fallback: FileClipboard) -> Self {
    Self { primary, fallback }
  }

  pub fn system(fallback_file: PathBuf) -> Self {
    Self::new(Box::new(SystemClipboard), FileClipboard::new(fallback_file))
  }

  /// Copies `text` and returns the message to show the user.
  pub fn copy(&self, text: &str) -> String {
    match copy_with_fallback(self.primary.as_ref(), &self.fallback, text) {
      CopyOutcome::Primary => "Copied to clipboard.".to_string(),
      CopyOutcome::Fallback => format!("Clipboard unavailable, saved to {}", self.fallback.path().display()),
      CopyOutcome::Manual { text } => format!("Could not copy automatically, select the text below:\n\n{text}"),
    }
  }
}
