use std::path::Path;

use tracing::debug;

use crate::http::SourceAdapterError;

/// Reads a local catalog file. Files are always read fresh, there is no cache.
pub async fn read_catalog_file(path: &Path) -> Result<String, SourceAdapterError> {
  debug!(path = %path.display(), "reading catalog file");
  Ok(charta_fs::read_text(path).await?)
}
