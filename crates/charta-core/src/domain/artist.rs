use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Placeholder the data files use for records without a usable name.
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// An artist together with the regions whose charts it appears in.
///
/// The name is the unique key within a catalog. `region_count` travels next to
/// the list because the data files supply it on their own and it is not
/// guaranteed to match `charted_regions.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRecord {
  #[serde(rename = "artist")]
  pub name: String,

  /// Region names in source order. May include the synthetic `Global` chart.
  #[serde(rename = "countries_charted")]
  pub charted_regions: Vec<String>,

  #[serde(rename = "country_count")]
  pub region_count: u32,
}

impl ArtistRecord {
  /// Builds a record whose count matches its region list.
  pub fn new(name: impl Into<String>, regions: &[&str]) -> Self {
    let charted_regions: Vec<String> = regions.iter().map(|r| r.to_string()).collect();
    let region_count = charted_regions.len() as u32;
    Self { name: name.into(), charted_regions, region_count }
  }

  pub fn with_count(name: impl Into<String>, regions: &[&str], region_count: u32) -> Self {
    Self { region_count, ..Self::new(name, regions) }
  }
}

/// Tolerant wire shape of one element of an `artists.json` array.
///
/// Every field is optional; [`normalize`] decides what survives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawArtistRecord {
  #[serde(default)]
  pub artist: Option<String>,
  #[serde(default)]
  pub countries_charted: Option<Vec<String>>,
  /// Hand-edited files carry `12.0` or `"12"`; anything that is not a
  /// non-negative whole number counts as missing.
  #[serde(default, deserialize_with = "lenient_count")]
  pub country_count: Option<u32>,
}

fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
  let value = Option::<Value>::deserialize(deserializer)?;
  Ok(value.as_ref().and_then(count_from_value))
}

fn count_from_value(value: &Value) -> Option<u32> {
  let whole = match value {
    Value::Number(n) => n.as_u64().or_else(|| n.as_f64().filter(|f| *f >= 0.0 && f.fract() == 0.0).map(|f| f as u64)),
    Value::String(s) => s.trim().parse::<u64>().ok(),
    _ => None,
  }?;
  u32::try_from(whole).ok()
}

/// Normalizes raw records into catalog records.
///
/// - missing, blank or placeholder names are dropped;
/// - missing region lists become empty;
/// - a missing count is derived from the region list;
/// - repeated names keep their first occurrence.
pub fn normalize(raw: Vec<RawArtistRecord>) -> Vec<ArtistRecord> {
  let mut seen = HashSet::new();

  raw
    .into_iter()
    .filter_map(|item| {
      let name = item.artist?.trim().to_string();
      if name.is_empty() || name == UNKNOWN_ARTIST {
        return None;
      }

      let charted_regions = item.countries_charted.unwrap_or_default();
      let region_count = item.country_count.unwrap_or(charted_regions.len() as u32);

      Some(ArtistRecord { name, charted_regions, region_count })
    })
    .filter(|record| seen.insert(record.name.clone()))
    .collect()
}

/// Reasons a response body is not usable as a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogParseError {
  #[error("empty body")]
  EmptyBody,

  #[error("malformed json: {0}")]
  Malformed(String),

  #[error("expected a json array of artists")]
  NotAnArray,

  #[error("empty artist array")]
  EmptyArray,

  #[error("no usable artist records")]
  NoUsableRecords,
}

/// Parses the body of an `artists.json` response.
///
/// Elements that are not artist-like objects are skipped instead of failing the
/// whole body; the body is only rejected when nothing usable remains.
pub fn parse_catalog(body: &str) -> Result<Vec<ArtistRecord>, CatalogParseError> {
  if body.trim().is_empty() {
    return Err(CatalogParseError::EmptyBody);
  }

  let value: serde_json::Value =
    serde_json::from_str(body).map_err(|e| CatalogParseError::Malformed(e.to_string()))?;

  let serde_json::Value::Array(items) = value else {
    return Err(CatalogParseError::NotAnArray);
  };

  if items.is_empty() {
    return Err(CatalogParseError::EmptyArray);
  }

  let raw: Vec<RawArtistRecord> =
    items.into_iter().filter_map(|item| serde_json::from_value::<RawArtistRecord>(item).ok()).collect();

  let records = normalize(raw);
  if records.is_empty() {
    return Err(CatalogParseError::NoUsableRecords);
  }

  Ok(records)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn normalize_drops_missing_and_placeholder_names() {
    let raw = vec![
      RawArtistRecord { artist: None, ..Default::default() },
      RawArtistRecord { artist: Some("   ".into()), ..Default::default() },
      RawArtistRecord { artist: Some(UNKNOWN_ARTIST.into()), ..Default::default() },
      RawArtistRecord { artist: Some(" SZA ".into()), ..Default::default() },
    ];

    let records = normalize(raw);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "SZA");
    assert!(records[0].charted_regions.is_empty());
    assert_eq!(records[0].region_count, 0);
  }

  #[test]
  fn normalize_derives_missing_count_and_keeps_supplied_one() {
    let raw = vec![
      RawArtistRecord {
        artist: Some("Drake".into()),
        countries_charted: Some(vec!["USA".into(), "Canada".into()]),
        country_count: None,
      },
      RawArtistRecord {
        artist: Some("Adele".into()),
        countries_charted: Some(vec!["UK".into()]),
        country_count: Some(7),
      },
    ];

    let records = normalize(raw);

    assert_eq!(records[0].region_count, 2);
    assert_eq!(records[1].region_count, 7);
  }

  #[test]
  fn normalize_keeps_first_of_duplicate_names() {
    let raw = vec![
      RawArtistRecord { artist: Some("Drake".into()), country_count: Some(3), ..Default::default() },
      RawArtistRecord { artist: Some("Drake".into()), country_count: Some(9), ..Default::default() },
    ];

    let records = normalize(raw);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].region_count, 3);
  }

  #[test]
  fn parse_catalog_reads_wire_format() {
    let body = r#"[{"artist":"A","countries_charted":["USA","Global"],"country_count":2}]"#;

    let records = parse_catalog(body).unwrap();

    assert_eq!(records, vec![ArtistRecord::new("A", &["USA", "Global"])]);
  }

  #[test]
  fn parse_catalog_skips_non_object_elements() {
    let body = r#"[42, "x", {"artist":"Drake","countries_charted":["USA"]}]"#;

    let records = parse_catalog(body).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Drake");
  }

  #[test]
  fn parse_catalog_tolerates_odd_counts() {
    let body = r#"[
      {"artist":"A","countries_charted":["USA"],"country_count":12.0},
      {"artist":"B","countries_charted":["USA"],"country_count":" 12 "},
      {"artist":"C","countries_charted":["USA","UK"],"country_count":-1},
      {"artist":"D","countries_charted":["USA","UK"],"country_count":2.5},
      {"artist":"E","countries_charted":["USA"],"country_count":true},
      {"artist":"F","countries_charted":["USA"],"country_count":null}
    ]"#;

    let counts: Vec<(String, u32)> =
      parse_catalog(body).unwrap().into_iter().map(|r| (r.name, r.region_count)).collect();

    assert_eq!(
      counts,
      vec![
        ("A".to_string(), 12),
        ("B".to_string(), 12),
        ("C".to_string(), 2),
        ("D".to_string(), 2),
        ("E".to_string(), 1),
        ("F".to_string(), 1),
      ]
    );
  }

  #[test]
  fn parse_catalog_rejects_unusable_bodies() {
    assert_eq!(parse_catalog("  \n"), Err(CatalogParseError::EmptyBody));
    assert!(matches!(parse_catalog("{not json"), Err(CatalogParseError::Malformed(_))));
    assert_eq!(parse_catalog(r#"{"artist":"A"}"#), Err(CatalogParseError::NotAnArray));
    assert_eq!(parse_catalog("[]"), Err(CatalogParseError::EmptyArray));
    assert_eq!(parse_catalog(r#"[{"country_count":3}]"#), Err(CatalogParseError::NoUsableRecords));
  }
}
