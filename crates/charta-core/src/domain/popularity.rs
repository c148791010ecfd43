use serde::{Deserialize, Serialize};
use std::fmt;

/// Display label derived purely from how many regions an artist charts in.
///
/// The thresholds are the single canonical table for every view:
///
/// | regions | bucket         |
/// |---------|----------------|
/// | `>= 20` | `Mega Global`  |
/// | `>= 15` | `Super Global` |
/// | `>= 10` | `Very Global`  |
/// | `>= 5`  | `Global`       |
/// | else    | `Regional`     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PopularityBucket {
  Regional,
  Global,
  VeryGlobal,
  SuperGlobal,
  MegaGlobal,
}

impl PopularityBucket {
  const THRESHOLDS: [(u32, PopularityBucket); 4] = [
    (20, PopularityBucket::MegaGlobal),
    (15, PopularityBucket::SuperGlobal),
    (10, PopularityBucket::VeryGlobal),
    (5, PopularityBucket::Global),
  ];

  pub fn from_region_count(count: u32) -> Self {
    Self::THRESHOLDS
      .iter()
      .find(|(min, _)| count >= *min)
      .map(|(_, bucket)| *bucket)
      .unwrap_or(PopularityBucket::Regional)
  }

  pub fn label(&self) -> &'static str {
    match self {
      PopularityBucket::MegaGlobal => "Mega Global",
      PopularityBucket::SuperGlobal => "Super Global",
      PopularityBucket::VeryGlobal => "Very Global",
      PopularityBucket::Global => "Global",
      PopularityBucket::Regional => "Regional",
    }
  }

  /// Kebab-case identifier for styling hooks (`super-global`, ...).
  pub fn slug(&self) -> &'static str {
    match self {
      PopularityBucket::MegaGlobal => "mega-global",
      PopularityBucket::SuperGlobal => "super-global",
      PopularityBucket::VeryGlobal => "very-global",
      PopularityBucket::Global => "global",
      PopularityBucket::Regional => "regional",
    }
  }
}

impl fmt::Display for PopularityBucket {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}
