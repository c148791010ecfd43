//! Shareable playlist links.
//!
//! A selection travels as `?playlist=<base64(json array of names)>`. Decoding is
//! never fatal: anything malformed is logged and treated as "no shared playlist".

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
use thiserror::Error;
use tracing::{info, warn};

use crate::playlist::Playlist;

/// Query parameter carrying an encoded playlist.
pub const SHARE_PARAM: &str = "playlist";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
  #[error("invalid percent-encoding: {0}")]
  Percent(String),

  #[error("invalid base64: {0}")]
  Base64(String),

  #[error("payload is not a json list of names: {0}")]
  Json(String),
}

/// Outcome of looking for a shared playlist in a page URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SharedImport {
  /// The URL carries no playlist parameter.
  Absent,
  /// The parameter was present but could not be decoded; nothing was imported.
  Invalid { reason: ShareError },
  /// Names were merged into the playlist; `cleaned_url` no longer carries the parameter.
  Loaded { names: usize, added: usize, cleaned_url: String },
}

fn split_url(url: &str) -> (&str, Option<&str>, Option<&str>) {
  let (rest, fragment) = match url.split_once('#') {
    Some((rest, fragment)) => (rest, Some(fragment)),
    None => (url, None),
  };
  match rest.split_once('?') {
    Some((base, query)) => (base, Some(query), fragment),
    None => (rest, None, fragment),
  }
}

/// Builds the share link for `names` on top of `page_url`.
///
/// Any query or fragment already on `page_url` is dropped, so the link is
/// always `<origin><path>?playlist=...`.
pub fn encode_share_url(page_url: &str, names: &[String]) -> String {
  let (base, _, _) = split_url(page_url);
  format!("{base}?{SHARE_PARAM}={}", urlencoding::encode(&encode_playlist_param(names)))
}

/// Base64 of the JSON array, without percent-encoding.
///
/// The payload is Latin-1 (one byte per character, as a browser's `btoa`
/// produces) whenever every character fits, so links open on the web page
/// too. Names outside Latin-1 fall back to UTF-8.
pub fn encode_playlist_param(names: &[String]) -> String {
  // Serializing a list of strings cannot fail.
  let json = serde_json::to_string(names).unwrap_or_else(|_| "[]".to_string());
  STANDARD.encode(payload_bytes(&json))
}

fn payload_bytes(json: &str) -> Vec<u8> {
  if json.chars().all(|c| u32::from(c) <= 0xFF) {
    json.chars().map(|c| u32::from(c) as u8).collect()
  } else {
    json.as_bytes().to_vec()
  }
}

/// UTF-8 when the bytes are valid UTF-8, otherwise Latin-1.
fn payload_text(bytes: Vec<u8>) -> String {
  match String::from_utf8(bytes) {
    Ok(text) => text,
    Err(e) => e.into_bytes().into_iter().map(char::from).collect(),
  }
}

/// Raw (still percent-encoded) value of the playlist parameter, if any.
pub fn extract_share_param(url: &str) -> Option<String> {
  let (_, query, _) = split_url(url);
  query?
    .split('&')
    .filter_map(|pair| pair.split_once('='))
    .find(|(key, _)| *key == SHARE_PARAM)
    .map(|(_, value)| value.to_string())
}

/// Decodes a playlist parameter value into names.
///
/// Accepts padded or unpadded base64 and undoes the `+` -> space mangling some
/// query parsers apply. Blank names are dropped.
pub fn decode_playlist_param(value: &str) -> Result<Vec<String>, ShareError> {
  let unescaped = urlencoding::decode(value).map_err(|e| ShareError::Percent(e.to_string()))?;
  let b64 = unescaped.trim().replace(' ', "+");

  let bytes = STANDARD_NO_PAD.decode(b64.trim_end_matches('=')).map_err(|e| ShareError::Base64(e.to_string()))?;
  let json = payload_text(bytes);
  let names: Vec<String> = serde_json::from_str(&json).map_err(|e| ShareError::Json(e.to_string()))?;

  Ok(names.into_iter().map(|n| n.trim().to_string()).filter(|n| !n.is_empty()).collect())
}

/// `url` without the playlist parameter; other parameters and the fragment survive.
pub fn strip_share_param(url: &str) -> String {
  let (base, query, fragment) = split_url(url);

  let kept: Vec<&str> = query
    .map(|q| q.split('&').filter(|pair| !pair.is_empty() && pair.split('=').next() != Some(SHARE_PARAM)).collect())
    .unwrap_or_default();

  let mut cleaned = base.to_string();
  if !kept.is_empty() {
    cleaned.push('?');
    cleaned.push_str(&kept.join("&"));
  }
  if let Some(fragment) = fragment {
    cleaned.push('#');
    cleaned.push_str(fragment);
  }
  cleaned
}

/// Merges the playlist carried by `url` (if any) into `playlist`.
pub fn import_shared(url: &str, playlist: &mut Playlist) -> SharedImport {
  let Some(value) = extract_share_param(url) else {
    return SharedImport::Absent;
  };

  match decode_playlist_param(&value) {
    Ok(names) => {
      let count = names.len();
      let added = playlist.extend(names);
      info!(names = count, added, "loaded shared playlist");
      SharedImport::Loaded { names: count, added, cleaned_url: strip_share_param(url) }
    }
    Err(reason) => {
      warn!(error = %reason, "failed to load shared playlist");
      SharedImport::Invalid { reason }
    }
  }
}
