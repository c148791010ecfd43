use async_trait::async_trait;

/// Observer of the data acquisition chain.
///
/// The binary implements it with structured logs; a UI could show a transient
/// notice when the sample dataset kicks in.
#[async_trait]
pub trait LoadReporter: Send + Sync {
  async fn on_attempt(&self, location: &str);
  async fn on_failure(&self, location: &str, error: &str);
  async fn on_loaded(&self, location: &str, count: usize);
  async fn on_fallback(&self, count: usize);
}

/// Reporter that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

#[async_trait]
impl LoadReporter for NoopReporter {
  async fn on_attempt(&self, _location: &str) {}
  async fn on_failure(&self, _location: &str, _error: &str) {}
  async fn on_loaded(&self, _location: &str, _count: usize) {}
  async fn on_fallback(&self, _count: usize) {}
}
