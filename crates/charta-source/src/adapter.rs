use async_trait::async_trait;
use std::path::{Path, PathBuf};

use charta_core::ports::{ArtistSource, SourceError as CoreSourceError};

use crate::config::SourceConfig;
use crate::file::read_catalog_file;
use crate::http::{HttpFetcher, SourceAdapterError};

/// Where a candidate location actually points once resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
  Http(reqwest::Url),
  File(PathBuf),
}

/// `ArtistSource` over HTTP(S) and the local filesystem.
#[derive(Debug, Clone)]
pub struct ChartaSource {
  http: HttpFetcher,
  base_url: Option<reqwest::Url>,
  base_dir: Option<PathBuf>,
}

impl ChartaSource {
  pub fn new(config: &SourceConfig) -> Result<Self, SourceAdapterError> {
    let base_url = match config.base_url.as_deref() {
      Some(raw) => Some(reqwest::Url::parse(raw).map_err(|e| SourceAdapterError::InvalidUrl(format!("{raw}: {e}")))?),
      None => None,
    };

    Ok(Self { http: HttpFetcher::new(&config.user_agent)?, base_url, base_dir: config.base_dir.clone() })
  }

  pub fn resolve(&self, location: &str) -> Result<Target, SourceAdapterError> {
    let location = location.trim();

    if location.starts_with("http://") || location.starts_with("https://") {
      let url = reqwest::Url::parse(location).map_err(|e| SourceAdapterError::InvalidUrl(format!("{location}: {e}")))?;
      return Ok(Target::Http(url));
    }

    if let Some(path) = location.strip_prefix("file://") {
      return Ok(Target::File(PathBuf::from(path)));
    }

    if let Some(base) = &self.base_url {
      let url = base.join(location).map_err(|e| SourceAdapterError::InvalidUrl(format!("{location}: {e}")))?;
      return Ok(Target::Http(url));
    }

    let path = Path::new(location);
    Ok(Target::File(match &self.base_dir {
      Some(dir) if path.is_relative() => dir.join(path),
      _ => path.to_path_buf(),
    }))
  }
}

#[async_trait]
impl ArtistSource for ChartaSource {
  async fn fetch(&self, location: &str) -> Result<String, CoreSourceError> {
    match self.resolve(location).map_err(map_source_error)? {
      Target::Http(url) => self.http.get_text(&url).await.map_err(map_source_error),
      Target::File(path) => read_catalog_file(&path).await.map_err(map_source_error),
    }
  }
}

fn map_source_error(e: SourceAdapterError) -> CoreSourceError {
  match e {
    SourceAdapterError::Http(err) => CoreSourceError::Network(err.to_string()),
    SourceAdapterError::Status { url, status } => CoreSourceError::Status { location: url, status },
    SourceAdapterError::Fs(err) => CoreSourceError::Io(err.to_string()),
    SourceAdapterError::InvalidUrl(msg) => CoreSourceError::Unsupported(msg),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use charta_core::services::{CatalogLoader, DataOrigin};
  use charta_core::ports::NoopReporter;
  use tempfile::tempdir;

  fn source(base_url: Option<&str>, base_dir: Option<PathBuf>) -> ChartaSource {
    let config = SourceConfig { base_url: base_url.map(str::to_string), base_dir, ..SourceConfig::default() };
    ChartaSource::new(&config).unwrap()
  }

  #[test]
  fn relative_locations_follow_base_url_when_set() {
    let src = source(Some("https://charts.example.org/tracker/"), None);

    assert_eq!(
      src.resolve("artists.json").unwrap(),
      Target::Http(reqwest::Url::parse("https://charts.example.org/tracker/artists.json").unwrap())
    );
    assert_eq!(
      src.resolve("http://mirror.example.org/a.json").unwrap(),
      Target::Http(reqwest::Url::parse("http://mirror.example.org/a.json").unwrap())
    );
  }

  #[test]
  fn relative_paths_resolve_against_base_dir() {
    let src = source(None, Some(PathBuf::from("/srv/charta")));

    assert_eq!(src.resolve("data/artists.json").unwrap(), Target::File(PathBuf::from("/srv/charta/data/artists.json")));
    assert_eq!(src.resolve("/tmp/x.json").unwrap(), Target::File(PathBuf::from("/tmp/x.json")));
    assert_eq!(src.resolve("file:///tmp/y.json").unwrap(), Target::File(PathBuf::from("/tmp/y.json")));
  }

  #[test]
  fn invalid_base_url_is_rejected() {
    let config = SourceConfig { base_url: Some("not a url".into()), ..SourceConfig::default() };
    assert!(matches!(ChartaSource::new(&config), Err(SourceAdapterError::InvalidUrl(_))));
  }

  #[tokio::test]
  async fn missing_file_maps_to_io_error() {
    let tmp = tempdir().unwrap();
    let src = source(None, Some(tmp.path().to_path_buf()));

    let err = src.fetch("artists.json").await.unwrap_err();
    assert!(matches!(err, CoreSourceError::Io(_)));
  }

  #[tokio::test]
  async fn loader_skips_broken_candidates_and_reads_the_next() {
    let tmp = tempdir().unwrap();
    std::fs::write(tmp.path().join("broken.json"), "{ not json").unwrap();
    std::fs::write(
      tmp.path().join("artists.json"),
      r#"[{"artist":"Björk","countries_charted":["Iceland","UK"],"country_count":2}]"#,
    )
    .unwrap();

    let src = source(None, Some(tmp.path().to_path_buf()));
    let loader = CatalogLoader::new(src, NoopReporter);
    let candidates = vec!["missing.json".to_string(), "broken.json".to_string(), "artists.json".to_string()];

    let outcome = loader.load(&candidates).await;

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].name, "Björk");
    assert!(matches!(outcome.origin, DataOrigin::Remote { ref location } if location == "artists.json"));
  }

  #[tokio::test]
  async fn loader_falls_back_to_sample_when_nothing_loads() {
    let tmp = tempdir().unwrap();
    let src = source(None, Some(tmp.path().to_path_buf()));
    let loader = CatalogLoader::new(src, NoopReporter);

    let outcome = loader.load(&["artists.json".to_string()]).await;

    assert_eq!(outcome.origin, DataOrigin::Sample);
    assert_eq!(outcome.records.len(), 20);
  }
}
