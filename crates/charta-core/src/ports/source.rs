use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
  #[error("io error: {0}")]
  Io(String),

  #[error("network error: {0}")]
  Network(String),

  #[error("unexpected status {status} from {location}")]
  Status { location: String, status: u16 },

  #[error("unsupported location: {0}")]
  Unsupported(String),
}

/// Port that reads the raw body of a candidate data location.
///
/// Implementations must bypass caches (the data file is regenerated in
/// place) and report non-success responses as errors. Parsing is left to the
/// core so every adapter gets the same acceptance rules.
///
/// Possible implementations:
/// - local files
/// - HTTP(S)
/// - in-memory fakes for tests
#[async_trait]
pub trait ArtistSource: Send + Sync {
  async fn fetch(&self, location: &str) -> Result<String, SourceError>;
}
