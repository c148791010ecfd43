use crate::domain::ArtistRecord;

/// Case-insensitive substring match against the name or any charted region.
///
/// `term` is expected already lowercased (see [`crate::domain::ViewState::set_search`]);
/// an empty term matches everything.
pub fn matches_search(record: &ArtistRecord, term: &str) -> bool {
  if term.is_empty() {
    return true;
  }

  record.name.to_lowercase().contains(term)
    || record.charted_regions.iter().any(|region| region.to_lowercase().contains(term))
}
