use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use toml_edit::{DocumentMut, Item};

use crate::paths::{ChartaPaths, ConfigError};

/// Sectioned configuration storage (`[source]`, `[view]`, ...).
pub trait ConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;

  /// Like [`ConfigBackend::load_section`], but a missing file or section yields `T::default()`.
  fn load_section_or_default<T: DeserializeOwned + Default>(&self, section: &str) -> Result<T, ConfigError>;

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

/// A typed configuration section owned by one crate.
pub trait ConfigSection: Serialize + DeserializeOwned + Default {
  const SECTION: &'static str;

  /// Loads the section (defaults when absent) and writes it back so the file
  /// always documents every available key.
  fn load_from<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    let cfg = backend.load_section_or_default::<Self>(Self::SECTION)?;
    backend.save_section(Self::SECTION, &cfg)?;
    Ok(cfg)
  }

  fn save_to<B: ConfigBackend>(&self, backend: &B) -> Result<(), ConfigError> {
    backend.save_section(Self::SECTION, self)
  }
}

/// `charta.toml` backend: reads with `toml`, writes with `toml_edit` so user
/// comments and formatting outside the rewritten section survive.
#[derive(Debug, Clone)]
pub struct TomlConfigBackend {
  file: PathBuf,
}

impl TomlConfigBackend {
  pub fn new(file: PathBuf) -> Self {
    Self { file }
  }

  pub fn from_paths(paths: &ChartaPaths) -> Self {
    Self::new(paths.config_file())
  }

  pub fn file(&self) -> &PathBuf {
    &self.file
  }

  fn read_table(&self) -> Result<Option<toml::Table>, ConfigError> {
    match charta_fs::read_optional(&self.file)? {
      Some(content) => Ok(Some(toml::from_str(&content)?)),
      None => Ok(None),
    }
  }

  fn decode<T: DeserializeOwned>(section: &str, value: toml::Value) -> Result<T, ConfigError> {
    value.try_into().map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
  }
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let mut table =
      self.read_table()?.ok_or_else(|| ConfigError::Other(format!("missing config file {:?}", self.file)))?;

    let value = table
      .remove(section)
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}] in {:?}", self.file)))?;

    Self::decode(section, value)
  }

  fn load_section_or_default<T: DeserializeOwned + Default>(&self, section: &str) -> Result<T, ConfigError> {
    match self.read_table()?.and_then(|mut table| table.remove(section)) {
      Some(value) => Self::decode(section, value),
      None => Ok(T::default()),
    }
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let mut doc = match charta_fs::read_optional(&self.file)? {
      Some(content) => {
        content.parse::<DocumentMut>().map_err(|e| ConfigError::Other(format!("parse toml_edit doc: {e}")))?
      }
      None => DocumentMut::new(),
    };

    // Serialized alone, a struct becomes a header-less document; re-parse it
    // as an item to graft it under `[section]`.
    let section_str =
      toml::to_string(value).map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;
    let section_doc = section_str
      .parse::<DocumentMut>()
      .map_err(|e| ConfigError::Other(format!("parse section as doc: {e}")))?;
    let section_item = Item::Table(section_doc.as_table().clone());

    doc[section] = section_item;

    charta_fs::atomic_write_str(&self.file, &doc.to_string())?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde::Deserialize;
  use tempfile::tempdir;

  #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
  struct Demo {
    name: String,
    #[serde(default)]
    items: Vec<String>,
  }

  impl ConfigSection for Demo {
    const SECTION: &'static str = "demo";
  }

  #[test]
  fn missing_file_yields_defaults_and_is_written_back() {
    let tmp = tempdir().unwrap();
    let backend = TomlConfigBackend::new(tmp.path().join("charta.toml"));

    let loaded = Demo::load_from(&backend).unwrap();

    assert_eq!(loaded, Demo::default());
    assert!(backend.file().exists());
    assert_eq!(backend.load_section::<Demo>("demo").unwrap(), Demo::default());
  }

  #[test]
  fn save_preserves_comments_and_other_sections() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("charta.toml");
    std::fs::write(&file, "# keep me\n[other]\nx = 1 # inline\n").unwrap();
    let backend = TomlConfigBackend::new(file.clone());

    let demo = Demo { name: "tracker".into(), items: vec!["a".into()] };
    demo.save_to(&backend).unwrap();

    let content = std::fs::read_to_string(&file).unwrap();
    assert!(content.contains("# keep me"));
    assert!(content.contains("x = 1 # inline"));
    assert_eq!(backend.load_section::<Demo>("demo").unwrap(), demo);
  }

  #[test]
  fn missing_section_is_an_error_only_for_strict_loads() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("charta.toml");
    std::fs::write(&file, "[other]\nx = 1\n").unwrap();
    let backend = TomlConfigBackend::new(file);

    assert!(matches!(backend.load_section::<Demo>("demo"), Err(ConfigError::Other(_))));
    assert_eq!(backend.load_section_or_default::<Demo>("demo").unwrap(), Demo::default());
  }

  #[test]
  fn invalid_section_reports_decode_error() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("charta.toml");
    std::fs::write(&file, "[demo]\nname = 5\n").unwrap();
    let backend = TomlConfigBackend::new(file);

    let err = backend.load_section_or_default::<Demo>("demo").unwrap_err();
    assert!(err.to_string().contains("decode section [demo]"));
  }
}
