// crates/charta-core/src/errors.rs
use thiserror::Error;

/// Errors of the session state object.
///
/// Upper layers (CLI, REPL) map it to user-facing messages or logs.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("artist not found: {0}")]
  NotFound(String),
}
