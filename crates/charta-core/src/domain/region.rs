use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the synthetic worldwide chart.
pub const GLOBAL_REGION: &str = "Global";

const NORTH_AMERICA: &[&str] = &["USA", "United States", "Canada"];

const EUROPE: &[&str] = &[
  "UK",
  "United Kingdom",
  "Germany",
  "France",
  "Netherlands",
  "Spain",
  "Italy",
  "Sweden",
  "Norway",
  "Denmark",
  "Finland",
  "Poland",
  "Czech Republic",
  "Belgium",
  "Switzerland",
  "Austria",
  "Portugal",
  "Ireland",
  "Romania",
  "Bulgaria",
  "Hungary",
  "Slovakia",
  "Estonia",
  "Latvia",
  "Lithuania",
  "Croatia",
];

const LATIN_AMERICA: &[&str] =
  &["Mexico", "Brazil", "Argentina", "Chile", "Colombia", "Peru", "Uruguay", "Venezuela", "Costa Rica"];

const ASIA_PACIFIC: &[&str] = &[
  "Australia",
  "New Zealand",
  "Japan",
  "South Korea",
  "India",
  "Singapore",
  "Thailand",
  "Philippines",
  "Malaysia",
  "Indonesia",
  "Taiwan",
  "Hong Kong",
];

const AFRICA_MIDDLE_EAST: &[&str] = &["Israel", "South Africa", "Turkey"];

/// Regions highlighted in detail views.
const MAJOR_REGIONS: &[&str] = &["USA", "UK", "Canada", "Germany", "France", "Global", "Australia"];

/// Fixed, ordered set of buckets used to group an artist's regions.
///
/// The declaration order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RegionGroup {
  Global,
  NorthAmerica,
  Europe,
  LatinAmerica,
  AsiaPacific,
  AfricaMiddleEast,
  /// Catch-all for regions missing from the lookup tables.
  Other,
}

impl RegionGroup {
  pub const ALL: [RegionGroup; 7] = [
    RegionGroup::Global,
    RegionGroup::NorthAmerica,
    RegionGroup::Europe,
    RegionGroup::LatinAmerica,
    RegionGroup::AsiaPacific,
    RegionGroup::AfricaMiddleEast,
    RegionGroup::Other,
  ];

  /// Classifies a region name. Matching is exact, as the data files spell them.
  pub fn of(region: &str) -> Self {
    if region == GLOBAL_REGION {
      RegionGroup::Global
    } else if NORTH_AMERICA.contains(&region) {
      RegionGroup::NorthAmerica
    } else if EUROPE.contains(&region) {
      RegionGroup::Europe
    } else if LATIN_AMERICA.contains(&region) {
      RegionGroup::LatinAmerica
    } else if ASIA_PACIFIC.contains(&region) {
      RegionGroup::AsiaPacific
    } else if AFRICA_MIDDLE_EAST.contains(&region) {
      RegionGroup::AfricaMiddleEast
    } else {
      RegionGroup::Other
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      RegionGroup::Global => "Global",
      RegionGroup::NorthAmerica => "North America",
      RegionGroup::Europe => "Europe",
      RegionGroup::LatinAmerica => "Latin America",
      RegionGroup::AsiaPacific => "Asia Pacific",
      RegionGroup::AfricaMiddleEast => "Africa & Middle East",
      RegionGroup::Other => "Other",
    }
  }
}

impl fmt::Display for RegionGroup {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

/// Regions of one artist that fall into the same [`RegionGroup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionBucket {
  pub group: RegionGroup,
  pub regions: Vec<String>,
}

/// Partitions `regions` into the ordered buckets, omitting empty ones.
///
/// Source order is preserved inside each bucket.
pub fn group_regions(regions: &[String]) -> Vec<RegionBucket> {
  RegionGroup::ALL
    .iter()
    .filter_map(|group| {
      let members: Vec<String> = regions.iter().filter(|r| RegionGroup::of(r) == *group).cloned().collect();
      (!members.is_empty()).then(|| RegionBucket { group: *group, regions: members })
    })
    .collect()
}

pub fn is_major_region(region: &str) -> bool {
  MAJOR_REGIONS.contains(&region)
}
