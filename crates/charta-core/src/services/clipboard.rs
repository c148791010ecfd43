use tracing::warn;

use crate::ports::ClipboardSink;

/// Which path ended up holding the exported text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
  Primary,
  Fallback,
  /// Both writes failed; the caller must show `text` for manual copying.
  Manual { text: String },
}

/// Writes `text` to `primary`, then synchronously to `fallback` if that fails.
pub fn copy_with_fallback<P, F>(primary: &P, fallback: &F, text: &str) -> CopyOutcome
where
  P: ClipboardSink + ?Sized,
  F: ClipboardSink + ?Sized,
{
  match primary.write_text(text) {
    Ok(()) => CopyOutcome::Primary,
    Err(primary_err) => {
      warn!(error = %primary_err, "primary clipboard write failed, trying fallback");
      match fallback.write_text(text) {
        Ok(()) => CopyOutcome::Fallback,
        Err(fallback_err) => {
          warn!(error = %fallback_err, "fallback clipboard write failed");
          CopyOutcome::Manual { text: text.to_string() }
        }
      }
    }
  }
}
