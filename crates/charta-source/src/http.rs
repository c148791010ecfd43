use reqwest::header::{ACCEPT, CACHE_CONTROL, PRAGMA};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SourceAdapterError {
  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),

  #[error("unexpected status {status} from {url}")]
  Status { url: String, status: u16 },

  #[error("fs error: {0}")]
  Fs(#[from] charta_fs::FsError),

  #[error("invalid url: {0}")]
  InvalidUrl(String),
}

/// Thin reqwest wrapper issuing cache-bypassing JSON GETs.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
  client: reqwest::Client,
}

impl HttpFetcher {
  pub fn new(user_agent: &str) -> Result<Self, SourceAdapterError> {
    let client = reqwest::Client::builder().user_agent(user_agent).build()?;
    Ok(Self { client })
  }

  pub async fn get_text(&self, url: &reqwest::Url) -> Result<String, SourceAdapterError> {
    debug!(%url, "GET");

    let response = self
      .client
      .get(url.clone())
      .header(ACCEPT, "application/json")
      .header(CACHE_CONTROL, "no-cache")
      .header(PRAGMA, "no-cache")
      .send()
      .await?;

    let status = response.status();
    if !status.is_success() {
      return Err(SourceAdapterError::Status { url: url.to_string(), status: status.as_u16() });
    }

    Ok(response.text().await?)
  }
}
