use std::fmt;

use crate::domain::{ArtistRecord, parse_catalog, sample_artists};
use crate::ports::{ArtistSource, LoadReporter};

/// Where the session's records came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataOrigin {
  Remote { location: String },
  /// Every candidate failed; the built-in dataset is in use.
  Sample,
}

impl fmt::Display for DataOrigin {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DataOrigin::Remote { location } => write!(f, "{location}"),
      DataOrigin::Sample => write!(f, "built-in sample data"),
    }
  }
}

/// Terminal outcome of the acquisition chain. There is no error case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
  pub records: Vec<ArtistRecord>,
  pub origin: DataOrigin,
}

pub struct CatalogLoader<S, R>
where
  S: ArtistSource,
  R: LoadReporter,
{
  source: S,
  reporter: R,
}

impl<S, R> CatalogLoader<S, R>
where
  S: ArtistSource,
  R: LoadReporter,
{
  pub fn new(source: S, reporter: R) -> Self {
    Self { source, reporter }
  }

  /// Walks `candidates` in order and keeps the first usable catalog.
  ///
  /// - each candidate is only tried after the previous one failed;
  /// - fetch errors, non-success responses, blank bodies, malformed JSON and
  ///   empty arrays all count as failures and are reported, never returned;
  /// - when nothing is usable the built-in sample is loaded.
  pub async fn load(&self, candidates: &[String]) -> LoadOutcome {
    for location in candidates {
      self.reporter.on_attempt(location).await;

      let body = match self.source.fetch(location).await {
        Ok(body) => body,
        Err(e) => {
          self.reporter.on_failure(location, &e.to_string()).await;
          continue;
        }
      };

      match parse_catalog(&body) {
        Ok(records) => {
          self.reporter.on_loaded(location, records.len()).await;
          return LoadOutcome { records, origin: DataOrigin::Remote { location: location.clone() } };
        }
        Err(e) => self.reporter.on_failure(location, &e.to_string()).await,
      }
    }

    let records = sample_artists();
    self.reporter.on_fallback(records.len()).await;
    LoadOutcome { records, origin: DataOrigin::Sample }
  }
}
