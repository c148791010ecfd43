use async_trait::async_trait;
use charta_core::ports::LoadReporter;
use tracing::{debug, info, warn};

/// `LoadReporter` that turns acquisition events into log lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

#[async_trait]
impl LoadReporter for TracingReporter {
  async fn on_attempt(&self, location: &str) {
    debug!(location, "trying catalog source");
  }

  async fn on_failure(&self, location: &str, error: &str) {
    warn!(location, error, "catalog source failed");
  }

  async fn on_loaded(&self, location: &str, count: usize) {
    info!(location, count, "catalog loaded");
  }

  async fn on_fallback(&self, count: usize) {
    warn!(count, "no catalog source usable, showing built-in sample data");
  }
}
