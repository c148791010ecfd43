use std::time::{Duration, Instant};

/// Quiet period applied to search input unless configured otherwise.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(300);

/// Pending-input holder with a last-write-wins policy.
///
/// Callers push values as they arrive and poll with the current time; a value
/// is released once no newer value arrived for the quiet period. Time is passed
/// in explicitly so any timer primitive (or none, in tests) can drive it.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
  quiet: Duration,
  pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
  pub fn new(quiet: Duration) -> Self {
    Self { quiet, pending: None }
  }

  pub fn quiet_period(&self) -> Duration {
    self.quiet
  }

  /// Replaces any pending value and restarts the quiet period.
  pub fn push(&mut self, value: T, now: Instant) {
    self.pending = Some((value, now));
  }

  /// Releases the pending value if it has been quiet long enough.
  pub fn poll(&mut self, now: Instant) -> Option<T> {
    match &self.pending {
      Some((_, at)) if now.saturating_duration_since(*at) >= self.quiet => self.pending.take().map(|(value, _)| value),
      _ => None,
    }
  }

  /// Releases the pending value immediately.
  pub fn flush(&mut self) -> Option<T> {
    self.pending.take().map(|(value, _)| value)
  }

  pub fn cancel(&mut self) {
    self.pending = None;
  }

  pub fn is_pending(&self) -> bool {
    self.pending.is_some()
  }

  /// When the pending value becomes due.
  pub fn deadline(&self) -> Option<Instant> {
    self.pending.as_ref().map(|(_, at)| *at + self.quiet)
  }
}

impl<T> Default for Debouncer<T> {
  fn default() -> Self {
    Self::new(DEFAULT_QUIET_PERIOD)
  }
}
