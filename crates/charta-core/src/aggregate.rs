//! Builds an `artists.json` catalog out of per-region chart listings.
//!
//! Fetching the charts themselves is left to external tooling; this module
//! takes the ranked artist names of each region and works out who charts
//! where.

use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::ArtistRecord;

/// Credits split off a raw chart entry, in the order they are tried.
const CREDIT_SEPARATORS: &[&str] = &[" feat.", " ft.", " featuring", " x ", " & ", " and "];

/// Headliners a healthy dataset is expected to have near the top.
const EXPECTED_HEADLINERS: &[&str] = &["taylor swift", "the weeknd", "bad bunny", "olivia rodrigo", "dua lipa"];

/// Ranked artist names of one region's chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionChart {
  pub region: String,
  pub artists: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateOptions {
  /// Artists charting in fewer regions are left out.
  pub min_regions: usize,
  /// Entries considered per region chart.
  pub top_n: usize,
}

impl Default for AggregateOptions {
  fn default() -> Self {
    Self { min_regions: 2, top_n: 50 }
  }
}

fn whitespace() -> &'static Regex {
  static WS: OnceLock<Regex> = OnceLock::new();
  WS.get_or_init(|| Regex::new(r"\s+").expect("static regex"))
}

/// Main artist of a raw chart credit (`"Drake feat. SZA"` -> `"Drake"`).
pub fn clean_artist_name(raw: &str) -> Option<String> {
  let main = CREDIT_SEPARATORS.iter().fold(raw, |name, sep| name.split(*sep).next().unwrap_or(name));
  let cleaned = whitespace().replace_all(main.trim(), " ").into_owned();
  (!cleaned.is_empty()).then_some(cleaned)
}

/// Cleaned, de-duplicated top entries of one chart.
fn chart_artists(chart: &RegionChart, top_n: usize) -> Vec<String> {
  let mut seen = BTreeSet::new();
  chart
    .artists
    .iter()
    .filter_map(|raw| clean_artist_name(raw))
    .filter(|name| seen.insert(name.clone()))
    .take(top_n)
    .collect()
}

/// Turns region charts into catalog records.
///
/// Regions are listed alphabetically and counted, records come out most
/// regions first; ties keep the order in which artists were first seen.
pub fn aggregate_overlaps(charts: &[RegionChart], options: AggregateOptions) -> Vec<ArtistRecord> {
  let mut order: Vec<String> = Vec::new();
  let mut regions_by_artist: HashMap<String, BTreeSet<String>> = HashMap::new();

  for chart in charts {
    for artist in chart_artists(chart, options.top_n) {
      let regions = regions_by_artist.entry(artist.clone()).or_insert_with(|| {
        order.push(artist.clone());
        BTreeSet::new()
      });
      regions.insert(chart.region.clone());
    }
  }

  let mut records: Vec<ArtistRecord> = order
    .into_iter()
    .filter_map(|name| {
      let regions = regions_by_artist.remove(&name)?;
      (regions.len() >= options.min_regions).then(|| {
        let charted_regions: Vec<String> = regions.into_iter().collect();
        ArtistRecord { region_count: charted_regions.len() as u32, charted_regions, name }
      })
    })
    .collect();

  records.sort_by(|a, b| b.region_count.cmp(&a.region_count));
  records
}

/// How plausible a generated catalog looks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QualityReport {
  pub matches: usize,
  pub expected: usize,
  pub score: f32,
  pub good: bool,
}

/// Share of the expected headliners found among the ten most charted artists.
/// At least two out of five is considered good.
pub fn assess_quality(records: &[ArtistRecord]) -> QualityReport {
  let top: Vec<String> = records.iter().take(10).map(|r| r.name.to_lowercase()).collect();
  let matches =
    EXPECTED_HEADLINERS.iter().filter(|expected| top.iter().any(|name| name.contains(*expected))).count();
  let score = matches as f32 / EXPECTED_HEADLINERS.len() as f32;

  QualityReport { matches, expected: EXPECTED_HEADLINERS.len(), score, good: !records.is_empty() && score >= 0.4 }
}
