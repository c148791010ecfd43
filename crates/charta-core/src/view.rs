//! Render-target independent view models.
//!
//! `state -> view` is a pure projection; renderers (terminal, markup, JSON)
//! only format what is in here.

use serde::Serialize;

use crate::domain::{
  ArtistRecord, CategoryFilter, PopularityBucket, RegionGroup, SortMode, ViewState, group_regions, is_major_region,
};
use crate::engine;
use crate::playlist::{Playlist, PlaylistStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionChip {
  pub name: String,
  /// Highlighted region (USA, UK, Global...).
  pub major: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionBucketView {
  pub group: RegionGroup,
  pub label: &'static str,
  pub chips: Vec<RegionChip>,
}

/// Content of an open detail panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistDetails {
  pub buckets: Vec<RegionBucketView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistRow {
  pub name: String,
  pub region_count: u32,
  pub regions_label: String,
  pub popularity: PopularityBucket,
  pub expanded: bool,
  pub selected: bool,
  pub details: Option<ArtistDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogView {
  pub rows: Vec<ArtistRow>,
  pub showing: usize,
  pub total: usize,
  pub search_term: String,
  pub category: CategoryFilter,
  pub sort: SortMode,
  /// Nothing matched: show the "no results" affordance with its reset action.
  pub no_results: bool,
  pub playlist: PlaylistStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistRow {
  pub name: String,
  pub region_count: u32,
  pub regions_label: String,
  pub popularity: PopularityBucket,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistView {
  pub rows: Vec<PlaylistRow>,
  pub status: PlaylistStatus,
  /// Selected names the loaded catalog does not contain.
  pub unknown: Vec<String>,
}

/// `1 region`, `18 regions`.
pub fn regions_label(count: u32) -> String {
  if count == 1 { "1 region".to_string() } else { format!("{count} regions") }
}

pub fn artist_details(record: &ArtistRecord) -> ArtistDetails {
  let buckets = group_regions(&record.charted_regions)
    .into_iter()
    .map(|bucket| RegionBucketView {
      group: bucket.group,
      label: bucket.group.label(),
      chips: bucket
        .regions
        .into_iter()
        .map(|name| {
          let major = is_major_region(&name);
          RegionChip { name, major }
        })
        .collect(),
    })
    .collect();

  ArtistDetails { buckets }
}

fn artist_row(record: &ArtistRecord, state: &ViewState, playlist: &Playlist) -> ArtistRow {
  let expanded = state.is_expanded(&record.name);

  ArtistRow {
    name: record.name.clone(),
    region_count: record.region_count,
    regions_label: regions_label(record.region_count),
    popularity: PopularityBucket::from_region_count(record.region_count),
    expanded,
    selected: playlist.contains(&record.name),
    details: expanded.then(|| artist_details(record)),
  }
}

pub fn catalog_view(records: &[ArtistRecord], state: &ViewState, playlist: &Playlist) -> CatalogView {
  let rows: Vec<ArtistRow> =
    engine::project(records, state).into_iter().map(|record| artist_row(record, state, playlist)).collect();

  CatalogView {
    showing: rows.len(),
    total: records.len(),
    no_results: rows.is_empty(),
    rows,
    search_term: state.search_term.clone(),
    category: state.category,
    sort: state.sort,
    playlist: playlist.status(),
  }
}

pub fn playlist_view(records: &[ArtistRecord], playlist: &Playlist) -> PlaylistView {
  let rows = playlist
    .contents(records)
    .into_iter()
    .map(|record| PlaylistRow {
      name: record.name.clone(),
      region_count: record.region_count,
      regions_label: regions_label(record.region_count),
      popularity: PopularityBucket::from_region_count(record.region_count),
    })
    .collect();

  let unknown = playlist.names().filter(|name| !records.iter().any(|r| r.name == *name)).map(str::to_string).collect();

  PlaylistView { rows, status: playlist.status(), unknown }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::sample_artists;

  #[test]
  fn rows_reflect_expanded_and_selected_sets() {
    let records = sample_artists();
    let mut state = ViewState::default();
    state.toggle_expanded("Bad Bunny");
    let mut playlist = Playlist::new();
    playlist.toggle("Adele");

    let view = catalog_view(&records, &state, &playlist);

    assert_eq!(view.showing, 20);
    assert_eq!(view.total, 20);
    assert!(!view.no_results);
    assert_eq!(view.playlist, PlaylistStatus { count: 1, has_selection: true });

    let bunny = view.rows.iter().find(|r| r.name == "Bad Bunny").unwrap();
    assert!(bunny.expanded);
    assert_eq!(bunny.popularity, PopularityBucket::VeryGlobal);
    let details = bunny.details.as_ref().unwrap();
    let labels: Vec<&str> = details.buckets.iter().map(|b| b.label).collect();
    assert_eq!(labels, vec!["Global", "North America", "Europe", "Latin America"]);
    assert!(details.buckets[0].chips[0].major);

    let adele = view.rows.iter().find(|r| r.name == "Adele").unwrap();
    assert!(adele.selected);
    assert!(adele.details.is_none());
    assert_eq!(adele.regions_label, "3 regions");
  }

  #[test]
  fn empty_projection_sets_no_results() {
    let records = sample_artists();
    let mut state = ViewState::default();
    state.set_search("no such artist");

    let view = catalog_view(&records, &state, &Playlist::new());

    assert!(view.no_results);
    assert_eq!(view.showing, 0);
    assert_eq!(view.total, 20);
  }

  #[test]
  fn playlist_view_lists_known_and_unknown_names() {
    let records = sample_artists();
    let mut playlist = Playlist::new();
    playlist.extend(["Rihanna", "Drake", "Ghost"]);

    let view = playlist_view(&records, &playlist);

    let names: Vec<&str> = view.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Drake", "Rihanna"]);
    assert_eq!(view.rows[0].popularity.label(), "Global");
    assert_eq!(view.unknown, vec!["Ghost".to_string()]);
    assert_eq!(view.status.count, 3);
  }

  #[test]
  fn singular_region_label() {
    assert_eq!(regions_label(1), "1 region");
    assert_eq!(regions_label(0), "0 regions");
  }
}
