use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable that relocates every Charta directory (portable mode).
pub const BASE_DIR_ENV: &str = "CHARTA_BASE_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

#[derive(Debug, Clone)]
pub struct ChartaPaths {
  pub base_dir: PathBuf,
  pub config_dir: PathBuf,
  pub data_dir: PathBuf,
  pub cache_dir: PathBuf,
}

impl ChartaPaths {
  /// Resolves the directories (portable override first, then the platform
  /// defaults) and makes sure they exist.
  pub fn detect() -> Result<Self, ConfigError> {
    let paths = match std::env::var(BASE_DIR_ENV) {
      Ok(base) => Self::under(PathBuf::from(base)),
      Err(_) => {
        let proj_dirs = ProjectDirs::from("org", "charta", "charta").ok_or(ConfigError::Directories)?;
        Self {
          base_dir: proj_dirs.config_dir().to_path_buf(),
          config_dir: proj_dirs.config_dir().to_path_buf(),
          data_dir: proj_dirs.data_dir().to_path_buf(),
          cache_dir: proj_dirs.cache_dir().to_path_buf(),
        }
      }
    };

    std::fs::create_dir_all(&paths.config_dir)?;
    std::fs::create_dir_all(&paths.data_dir)?;
    std::fs::create_dir_all(&paths.cache_dir)?;

    Ok(paths)
  }

  /// Layout rooted at `base` (`config/`, `data/`, `cache/`). Nothing is created.
  pub fn under(base: PathBuf) -> Self {
    Self { config_dir: base.join("config"), data_dir: base.join("data"), cache_dir: base.join("cache"), base_dir: base }
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("charta.toml")
  }

  /// Default location of a locally generated catalog.
  pub fn catalog_file(&self) -> PathBuf {
    self.data_dir.join("artists.json")
  }
}
