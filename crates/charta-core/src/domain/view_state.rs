use std::collections::BTreeSet;
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::artist::ArtistRecord;

/// Fixed allow-list behind the `trending` category.
pub const TRENDING_ARTISTS: &[&str] = &["Sabrina Carpenter", "Chappell Roan", "Olivia Rodrigo", "SZA", "Billie Eilish"];

/// Result ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
  /// Region count, descending.
  #[default]
  Popularity,
  /// Name, ascending.
  Alphabetical,
}

impl SortMode {
  pub fn toggle(self) -> Self {
    match self {
      SortMode::Popularity => SortMode::Alphabetical,
      SortMode::Alphabetical => SortMode::Popularity,
    }
  }

  /// Caption of the sort toggle while this mode is active.
  pub fn label(&self) -> &'static str {
    match self {
      SortMode::Popularity => "Popularity",
      SortMode::Alphabetical => "A-Z",
    }
  }
}

impl fmt::Display for SortMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SortMode::Popularity => write!(f, "popularity"),
      SortMode::Alphabetical => write!(f, "alphabetical"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid sort mode: {input}")]
pub struct SortModeParseError {
  pub input: String,
}

impl FromStr for SortMode {
  type Err = SortModeParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "popularity" | "by-popularity" | "pop" => Ok(SortMode::Popularity),
      "alphabetical" | "alpha" | "a-z" | "az" | "name" => Ok(SortMode::Alphabetical),
      _ => Err(SortModeParseError { input: s.to_string() }),
    }
  }
}

/// Category predicate applied together with the search term.
///
/// Named buckets and the numeric threshold are two spellings of the same
/// concern, so they share one type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
  #[default]
  All,
  /// At least 5 regions.
  Global,
  /// At least 15 regions.
  Mega,
  /// Name in [`TRENDING_ARTISTS`].
  Trending,
  MinRegions(u32),
}

impl CategoryFilter {
  pub fn matches(&self, record: &ArtistRecord) -> bool {
    match self {
      CategoryFilter::All => true,
      CategoryFilter::Global => record.region_count >= 5,
      CategoryFilter::Mega => record.region_count >= 15,
      CategoryFilter::Trending => TRENDING_ARTISTS.contains(&record.name.as_str()),
      CategoryFilter::MinRegions(min) => record.region_count >= *min,
    }
  }
}

impl fmt::Display for CategoryFilter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      CategoryFilter::All => write!(f, "all"),
      CategoryFilter::Global => write!(f, "global"),
      CategoryFilter::Mega => write!(f, "mega"),
      CategoryFilter::Trending => write!(f, "trending"),
      CategoryFilter::MinRegions(min) => write!(f, "{min}"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid category filter: {input}")]
pub struct CategoryParseError {
  pub input: String,
}

impl FromStr for CategoryFilter {
  type Err = CategoryParseError;

  /// Accepts `all`, `global`, `mega`, `trending` or a minimum region count.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized = s.trim().to_lowercase();

    let filter = match normalized.as_str() {
      "all" | "" => CategoryFilter::All,
      "global" => CategoryFilter::Global,
      "mega" => CategoryFilter::Mega,
      "trending" => CategoryFilter::Trending,
      other => other
        .parse::<u32>()
        .map(CategoryFilter::MinRegions)
        .map_err(|_| CategoryParseError { input: s.to_string() })?,
    };

    Ok(filter)
  }
}

impl Serialize for CategoryFilter {
  fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for CategoryFilter {
  fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
  }
}

/// Ephemeral per-session view parameters.
///
/// Every change triggers a full recomputation of the projection; nothing here
/// is cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
  /// Lowercase, trimmed. Empty means no search filter.
  pub search_term: String,
  pub category: CategoryFilter,
  pub sort: SortMode,
  /// Names whose detail panel is open.
  pub expanded: BTreeSet<String>,
}

impl ViewState {
  pub fn new(category: CategoryFilter, sort: SortMode) -> Self {
    Self { category, sort, ..Default::default() }
  }

  pub fn set_search(&mut self, raw: &str) {
    self.search_term = raw.trim().to_lowercase();
  }

  /// Opens or closes the detail panel of `name`. Returns whether it is now open.
  pub fn toggle_expanded(&mut self, name: &str) -> bool {
    if self.expanded.remove(name) {
      false
    } else {
      self.expanded.insert(name.to_string());
      true
    }
  }

  pub fn is_expanded(&self, name: &str) -> bool {
    self.expanded.contains(name)
  }

  /// Back to search-less, unfiltered, popularity order. Open panels stay open.
  pub fn reset_filters(&mut self) {
    self.search_term.clear();
    self.category = CategoryFilter::All;
    self.sort = SortMode::Popularity;
  }

  pub fn has_filters(&self) -> bool {
    !self.search_term.is_empty() || self.category != CategoryFilter::All
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_category_filters() {
    assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
    assert_eq!(" Mega ".parse::<CategoryFilter>(), Ok(CategoryFilter::Mega));
    assert_eq!("trending".parse::<CategoryFilter>(), Ok(CategoryFilter::Trending));
    assert_eq!("7".parse::<CategoryFilter>(), Ok(CategoryFilter::MinRegions(7)));
    assert!("popular".parse::<CategoryFilter>().is_err());
    assert!("-3".parse::<CategoryFilter>().is_err());
  }

  #[test]
  fn category_predicates() {
    let mega = ArtistRecord::with_count("Big", &[], 15);
    let global = ArtistRecord::with_count("Mid", &[], 5);
    let small = ArtistRecord::with_count("SZA", &[], 4);

    assert!(CategoryFilter::Mega.matches(&mega));
    assert!(!CategoryFilter::Mega.matches(&global));
    assert!(CategoryFilter::Global.matches(&global));
    assert!(!CategoryFilter::Global.matches(&small));
    assert!(CategoryFilter::Trending.matches(&small));
    assert!(!CategoryFilter::Trending.matches(&mega));
    assert!(CategoryFilter::MinRegions(4).matches(&small));
    assert!(CategoryFilter::All.matches(&small));
  }

  #[test]
  fn sort_mode_toggles_and_parses() {
    assert_eq!(SortMode::Popularity.toggle(), SortMode::Alphabetical);
    assert_eq!(SortMode::Alphabetical.toggle(), SortMode::Popularity);
    assert_eq!("a-z".parse::<SortMode>(), Ok(SortMode::Alphabetical));
    assert_eq!("by-popularity".parse::<SortMode>(), Ok(SortMode::Popularity));
    assert!("random".parse::<SortMode>().is_err());
  }

  #[test]
  fn search_term_is_trimmed_and_lowercased() {
    let mut state = ViewState::default();
    state.set_search("  Taylor SWIFT ");

    assert_eq!(state.search_term, "taylor swift");
    assert!(state.has_filters());
  }

  #[test]
  fn reset_keeps_expanded_panels() {
    let mut state = ViewState::new(CategoryFilter::Mega, SortMode::Alphabetical);
    state.set_search("x");
    assert!(state.toggle_expanded("Drake"));

    state.reset_filters();

    assert_eq!(state, ViewState { expanded: ["Drake".to_string()].into(), ..Default::default() });
    assert!(!state.toggle_expanded("Drake"));
    assert!(!state.is_expanded("Drake"));
  }
}
