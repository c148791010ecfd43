//! Text forms of a playlist: plain names, a numbered list and a mail draft.
//!
//! Every function takes the output of [`crate::Playlist::contents`], so the
//! order is always most regions first.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ArtistRecord;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
  #[error("the playlist is empty, add some artists first")]
  EmptyPlaylist,
}

/// Wording used in exported texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportBranding {
  /// First line of the numbered list, followed by the date.
  pub title: String,
  /// Mail subject.
  pub subject: String,
  /// Signature line.
  pub app_name: String,
}

impl Default for ExportBranding {
  fn default() -> Self {
    Self {
      title: "Event Playlist".to_string(),
      subject: "Event Music Recommendations".to_string(),
      app_name: "Global Music Tracker".to_string(),
    }
  }
}

const EMAIL_CLOSING: &str = "These artists have chart success across multiple regions, \
making them perfect for events with diverse audiences.";

fn ensure_not_empty(contents: &[&ArtistRecord]) -> Result<(), ExportError> {
  if contents.is_empty() { Err(ExportError::EmptyPlaylist) } else { Ok(()) }
}

/// One name per line, ready to paste into a streaming service search box.
pub fn plain_names(contents: &[&ArtistRecord]) -> Result<String, ExportError> {
  ensure_not_empty(contents)?;
  Ok(contents.iter().map(|r| r.name.as_str()).collect::<Vec<_>>().join("\n"))
}

/// Human readable list with a title, a count and per-artist region counts.
pub fn numbered_list(
  contents: &[&ArtistRecord],
  date: NaiveDate,
  branding: &ExportBranding,
) -> Result<String, ExportError> {
  ensure_not_empty(contents)?;

  let items: Vec<String> = contents
    .iter()
    .enumerate()
    .map(|(i, r)| format!("{}. {} ({} regions)", i + 1, r.name, r.region_count))
    .collect();

  Ok(format!(
    "{} - {}\n{} Artists with Global Teen Appeal\n\n{}\n\nGenerated by {}",
    branding.title,
    date.format("%-m/%-d/%Y"),
    contents.len(),
    items.join("\n"),
    branding.app_name
  ))
}

pub fn email_body(contents: &[&ArtistRecord], branding: &ExportBranding) -> Result<String, ExportError> {
  ensure_not_empty(contents)?;

  let items: Vec<String> = contents
    .iter()
    .enumerate()
    .map(|(i, r)| format!("{}. {} - Popular in {} regions", i + 1, r.name, r.region_count))
    .collect();

  Ok(format!(
    "Hi!\n\nHere are {} artists with proven global teen appeal for our event:\n\n{}\n\n{}\n\nGenerated by {}",
    contents.len(),
    items.join("\n"),
    EMAIL_CLOSING,
    branding.app_name
  ))
}

/// `mailto:` URI with percent-encoded subject and body, no recipient.
pub fn mailto_uri(contents: &[&ArtistRecord], branding: &ExportBranding) -> Result<String, ExportError> {
  let body = email_body(contents, branding)?;
  Ok(format!("mailto:?subject={}&body={}", urlencoding::encode(&branding.subject), urlencoding::encode(&body)))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn records() -> Vec<ArtistRecord> {
    vec![ArtistRecord::new("Bad Bunny", &["Spain", "Mexico", "Chile"]), ArtistRecord::new("Adele", &["UK"])]
  }

  #[test]
  fn empty_playlist_is_rejected() {
    let branding = ExportBranding::default();

    assert_eq!(plain_names(&[]), Err(ExportError::EmptyPlaylist));
    assert_eq!(email_body(&[], &branding), Err(ExportError::EmptyPlaylist));
    assert_eq!(mailto_uri(&[], &branding), Err(ExportError::EmptyPlaylist));
  }

  #[test]
  fn plain_names_are_newline_joined() {
    let records = records();
    let contents: Vec<&ArtistRecord> = records.iter().collect();

    assert_eq!(plain_names(&contents).unwrap(), "Bad Bunny\nAdele");
  }

  #[test]
  fn numbered_list_layout() {
    let records = records();
    let contents: Vec<&ArtistRecord> = records.iter().collect();
    let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();

    let text = numbered_list(&contents, date, &ExportBranding::default()).unwrap();

    assert_eq!(
      text,
      "Event Playlist - 3/7/2024\n2 Artists with Global Teen Appeal\n\n\
1. Bad Bunny (3 regions)\n2. Adele (1 regions)\n\nGenerated by Global Music Tracker"
    );
  }

  #[test]
  fn mailto_encodes_subject_and_body() {
    let records = records();
    let contents: Vec<&ArtistRecord> = records.iter().collect();

    let uri = mailto_uri(&contents, &ExportBranding::default()).unwrap();

    assert!(uri.starts_with("mailto:?subject=Event%20Music%20Recommendations&body=Hi%21%0A%0A"));
    assert!(uri.contains("1.%20Bad%20Bunny%20-%20Popular%20in%203%20regions"));
    assert!(!uri.contains(' '));
  }
}
