#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
  #[error("clipboard unavailable: {0}")]
  Unavailable(String),

  #[error("clipboard write failed: {0}")]
  Write(String),
}

/// Port for putting exported text where the user can paste it.
///
/// Writes are fire-and-forget from the core's point of view: the only thing
/// that matters is whether they succeeded.
pub trait ClipboardSink {
  fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
