use std::cmp::Ordering;

use crate::domain::{ArtistRecord, SortMode};

/// Sorts in place. `sort_by` is stable, which the popularity order relies on.
pub fn sort_records(records: &mut [&ArtistRecord], mode: SortMode) {
  match mode {
    SortMode::Popularity => records.sort_by(|a, b| b.region_count.cmp(&a.region_count)),
    SortMode::Alphabetical => records.sort_by(|a, b| compare_names(&a.name, &b.name)),
  }
}

/// Locale-style name comparison: case and common Latin diacritics are folded
/// first, the raw names only break ties.
pub fn compare_names(a: &str, b: &str) -> Ordering {
  collation_key(a).cmp(&collation_key(b)).then_with(|| a.cmp(b))
}

/// Lowercased name with accents stripped (`Beyoncé` -> `beyonce`).
pub fn collation_key(name: &str) -> String {
  name.chars().flat_map(char::to_lowercase).map(fold_diacritic).collect()
}

fn fold_diacritic(c: char) -> char {
  match c {
    'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => 'a',
    'ç' | 'ć' | 'č' => 'c',
    'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ę' | 'ě' => 'e',
    'ì' | 'í' | 'î' | 'ï' | 'ī' => 'i',
    'ñ' | 'ń' | 'ň' => 'n',
    'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => 'o',
    'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' => 'u',
    'ý' | 'ÿ' => 'y',
    'š' | 'ś' => 's',
    'ž' | 'ź' | 'ż' => 'z',
    'ł' => 'l',
    'ř' => 'r',
    other => other,
  }
}
