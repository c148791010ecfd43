use charta_config::ConfigSection;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[source]` section: where the catalog may be found, in priority order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SourceConfig {
  /// Candidate locations, tried in order. Absolute `http(s)://` URLs, `file://`
  /// URLs or paths; relative entries resolve against `base_url` when set,
  /// otherwise against `base_dir`.
  #[serde(default = "default_candidates")]
  pub candidates: Vec<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub base_url: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub base_dir: Option<PathBuf>,

  #[serde(default = "default_user_agent")]
  pub user_agent: String,
}

fn default_candidates() -> Vec<String> {
  vec!["artists.json".into(), "./artists.json".into(), "data/artists.json".into()]
}

fn default_user_agent() -> String {
  concat!("charta/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for SourceConfig {
  fn default() -> Self {
    SourceConfig { candidates: default_candidates(), base_url: None, base_dir: None, user_agent: default_user_agent() }
  }
}

impl ConfigSection for SourceConfig {
  const SECTION: &'static str = "source";
}

#[cfg(test)]
mod tests {
  use super::*;
  use charta_config::TomlConfigBackend;
  use tempfile::tempdir;

  #[test]
  fn partial_section_fills_defaults() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("charta.toml");
    std::fs::write(&file, "[source]\nbase_url = \"https://charts.example.org/\"\n").unwrap();

    let cfg = SourceConfig::load_from(&TomlConfigBackend::new(file)).unwrap();

    assert_eq!(cfg.base_url.as_deref(), Some("https://charts.example.org/"));
    assert_eq!(cfg.candidates, default_candidates());
    assert!(cfg.user_agent.starts_with("charta/"));
  }
}
