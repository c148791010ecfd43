use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::ArtistRecord;

/// Counters the presentation layer shows next to the playlist toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlaylistStatus {
  pub count: usize,
  pub has_selection: bool,
}

/// User-curated subset of artist names meant for export.
///
/// Names are kept even when the loaded catalog does not know them (a shared
/// link may come from a different dataset); such names simply never show up
/// in [`Playlist::contents`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playlist {
  selected: BTreeSet<String>,
}

impl Playlist {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds `name` if absent, removes it otherwise. Returns whether it is now selected.
  pub fn toggle(&mut self, name: &str) -> bool {
    if self.selected.remove(name) {
      false
    } else {
      self.selected.insert(name.to_string());
      true
    }
  }

  pub fn clear(&mut self) {
    self.selected.clear();
  }

  pub fn contains(&self, name: &str) -> bool {
    self.selected.contains(name)
  }

  pub fn len(&self) -> usize {
    self.selected.len()
  }

  pub fn is_empty(&self) -> bool {
    self.selected.is_empty()
  }

  /// Union with `names`. Returns how many were new.
  pub fn extend<I, S>(&mut self, names: I) -> usize
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let before = self.selected.len();
    self.selected.extend(names.into_iter().map(Into::into));
    self.selected.len() - before
  }

  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.selected.iter().map(String::as_str)
  }

  /// Selected catalog records, most regions first.
  pub fn contents<'a>(&self, catalog: &'a [ArtistRecord]) -> Vec<&'a ArtistRecord> {
    let mut records: Vec<&ArtistRecord> = catalog.iter().filter(|r| self.selected.contains(&r.name)).collect();
    records.sort_by(|a, b| b.region_count.cmp(&a.region_count));
    records
  }

  /// Every selected name: catalog entries in [`Playlist::contents`] order, then
  /// names the catalog does not know, alphabetically.
  pub fn ordered_names(&self, catalog: &[ArtistRecord]) -> Vec<String> {
    let mut names: Vec<String> = self.contents(catalog).into_iter().map(|r| r.name.clone()).collect();
    let unknown: Vec<String> =
      self.selected.iter().filter(|name| !catalog.iter().any(|r| &r.name == *name)).cloned().collect();
    names.extend(unknown);
    names
  }

  pub fn status(&self) -> PlaylistStatus {
    PlaylistStatus { count: self.selected.len(), has_selection: !self.selected.is_empty() }
  }
}
