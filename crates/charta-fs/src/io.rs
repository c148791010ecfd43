use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FsError {
  #[error("file not found: {0}")]
  NotFound(PathBuf),

  #[error("io error on {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

/// Writes `contents` next to `path` and renames it into place, so readers
/// never observe a half-written file. Missing parent directories are created.
pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    fs::create_dir_all(parent)?;
  }

  let tmp_path = path.with_extension("tmp");

  {
    let mut tmp_file = fs::File::create(&tmp_path)?;
    tmp_file.write_all(contents.as_bytes())?;
    tmp_file.sync_all()?;
  }

  if let Err(e) = fs::rename(&tmp_path, path) {
    let _ = fs::remove_file(&tmp_path);
    return Err(e);
  }
  Ok(())
}

/// Reads a file, mapping "does not exist" to `None`.
pub fn read_optional(path: &Path) -> io::Result<Option<String>> {
  match fs::read_to_string(path) {
    Ok(content) => Ok(Some(content)),
    Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
    Err(e) => Err(e),
  }
}

/// Async read of a whole text file without blocking the executor.
pub async fn read_text(path: &Path) -> Result<String, FsError> {
  tokio::fs::read_to_string(path).await.map_err(|e| match e.kind() {
    ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
    _ => FsError::Io { path: path.to_path_buf(), source: e },
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn atomic_write_creates_parents_and_replaces_content() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("nested").join("artists.json");

    atomic_write_str(&path, "[1]").unwrap();
    atomic_write_str(&path, "[2]").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "[2]");
    assert!(!path.with_extension("tmp").exists());
  }

  #[test]
  fn failed_rename_removes_temp_file() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("clipboard.txt");
    fs::create_dir_all(&path).unwrap();

    assert!(atomic_write_str(&path, "Adele").is_err());
    assert!(!path.with_extension("tmp").exists());
  }

  #[test]
  fn read_optional_maps_missing_file_to_none() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("charta.toml");

    assert_eq!(read_optional(&path).unwrap(), None);
    fs::write(&path, "x = 1").unwrap();
    assert_eq!(read_optional(&path).unwrap().as_deref(), Some("x = 1"));
  }

  #[tokio::test]
  async fn read_text_reports_missing_files() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("nope.json");

    assert!(matches!(read_text(&missing).await, Err(FsError::NotFound(p)) if p == missing));

    fs::write(tmp.path().join("a.json"), "[]").unwrap();
    assert_eq!(read_text(&tmp.path().join("a.json")).await.unwrap(), "[]");
  }
}
