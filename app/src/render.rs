//! Plain-text rendering of the core view models for a terminal.

use std::fmt::Write;

use charta_core::services::DataOrigin;
use charta_core::view::{ArtistDetails, ArtistRow, CatalogView, PlaylistView};

const NAME_WIDTH: usize = 24;

fn selection_mark(selected: bool) -> &'static str {
  if selected { "[x]" } else { "[ ]" }
}

/// Notice shown when the session runs on the built-in dataset.
pub fn origin_notice(origin: &DataOrigin) -> Option<String> {
  match origin {
    DataOrigin::Sample => Some("Note: no catalog source could be loaded, showing built-in sample data.".to_string()),
    DataOrigin::Remote { .. } => None,
  }
}

/// Region chips grouped per bucket, major markets starred.
pub fn render_details(details: &ArtistDetails) -> String {
  let mut out = String::new();
  for bucket in &details.buckets {
    let chips: Vec<String> =
      bucket.chips.iter().map(|chip| if chip.major { format!("{}*", chip.name) } else { chip.name.clone() }).collect();
    let _ = writeln!(out, "      {}: {}", bucket.label, chips.join(", "));
  }
  out
}

fn render_row(out: &mut String, row: &ArtistRow) {
  let _ = writeln!(
    out,
    "  {} {:<width$} {:>11}  {}",
    selection_mark(row.selected),
    row.name,
    row.regions_label,
    row.popularity.label(),
    width = NAME_WIDTH
  );
  if let Some(details) = &row.details {
    out.push_str(&render_details(details));
  }
}

pub fn render_catalog(view: &CatalogView) -> String {
  let mut out = String::new();

  let _ = write!(
    out,
    "Showing {} of {} artists | sort: {} | filter: {}",
    view.showing,
    view.total,
    view.sort.label(),
    view.category
  );
  if !view.search_term.is_empty() {
    let _ = write!(out, " | search: \"{}\"", view.search_term);
  }
  out.push('\n');

  if view.playlist.has_selection {
    let _ = writeln!(out, "Playlist: {} selected", view.playlist.count);
  }

  if view.no_results {
    out.push_str("No artists match your filters. Type `clear` (or pass --filter all) to show all artists.\n");
    return out;
  }

  for row in &view.rows {
    render_row(&mut out, row);
  }
  out
}

pub fn render_playlist(view: &PlaylistView) -> String {
  let mut out = String::new();

  if !view.status.has_selection {
    out.push_str("Playlist is empty. Select artists with `select <name>` or --select.\n");
    return out;
  }

  let _ = writeln!(out, "Playlist ({} artists)", view.status.count);
  for (i, row) in view.rows.iter().enumerate() {
    let _ = writeln!(
      out,
      "  {:>2}. {:<width$} {:>11}  {}",
      i + 1,
      row.name,
      row.regions_label,
      row.popularity.label(),
      width = NAME_WIDTH
    );
  }
  if !view.unknown.is_empty() {
    let _ = writeln!(out, "  not in this catalog: {}", view.unknown.join(", "));
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use charta_core::domain::sample_artists;
  use charta_core::{CatalogApp, CategoryFilter};

  #[test]
  fn catalog_lists_rows_with_selection_and_details() {
    let mut app = CatalogApp::new(sample_artists());
    app.set_category(CategoryFilter::Global);
    app.toggle_selected("Taylor Swift").unwrap();
    app.toggle_expanded("Taylor Swift").unwrap();

    let text = render_catalog(&app.view());

    assert!(text.starts_with("Showing 14 of 20 artists | sort: Popularity | filter: global"));
    assert!(text.contains("Playlist: 1 selected"));
    assert!(text.contains("[x] Taylor Swift"));
    assert!(text.contains("18 regions  Super Global"));
    assert!(text.contains("North America: USA*, Canada*"));
    assert!(text.contains("[ ] The Weeknd"));
  }

  #[test]
  fn empty_projection_offers_a_reset() {
    let mut app = CatalogApp::new(sample_artists());
    app.set_search("zzzz");

    let text = render_catalog(&app.view());

    assert!(text.contains("search: \"zzzz\""));
    assert!(text.contains("No artists match your filters."));
  }

  #[test]
  fn playlist_panel_lists_most_global_first() {
    let mut app = CatalogApp::new(sample_artists());
    app.toggle_selected("Adele").unwrap();
    app.toggle_selected("Taylor Swift").unwrap();

    let text = render_playlist(&app.playlist_view());
    let taylor = text.find("Taylor Swift").unwrap();
    let adele = text.find("Adele").unwrap();

    assert!(text.starts_with("Playlist (2 artists)"));
    assert!(taylor < adele);
  }

  #[test]
  fn only_sample_data_gets_a_notice() {
    assert!(origin_notice(&DataOrigin::Sample).is_some());
    assert_eq!(origin_notice(&DataOrigin::Remote { location: "artists.json".into() }), None);
  }

  #[test]
  fn empty_playlist_explains_how_to_select() {
    let app = CatalogApp::new(sample_artists());
    assert!(render_playlist(&app.playlist_view()).starts_with("Playlist is empty."));
  }
}
