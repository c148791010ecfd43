//! Filter/sort engine: `(records, view state) -> ordered projection`.

pub mod filter;
pub mod sort;

pub use filter::matches_search;
pub use sort::{collation_key, compare_names, sort_records};

use crate::domain::{ArtistRecord, ViewState};

/// Projects the catalog through the current view state.
///
/// A record is kept when it matches the search term AND the category. The
/// result is then sorted with a stable sort, so popularity ties keep catalog
/// order and re-sorting always lands on the same sequence.
pub fn project<'a>(records: &'a [ArtistRecord], state: &ViewState) -> Vec<&'a ArtistRecord> {
  let mut visible: Vec<&ArtistRecord> = records
    .iter()
    .filter(|record| matches_search(record, &state.search_term) && state.category.matches(record))
    .collect();

  sort_records(&mut visible, state.sort);
  visible
}
