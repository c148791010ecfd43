use std::time::{Duration, Instant};

use crate::debounce::Debouncer;
use crate::domain::{ArtistRecord, CategoryFilter, SortMode, ViewState};
use crate::errors::CoreError;
use crate::export::ExportError;
use crate::playlist::Playlist;
use crate::share::{self, SharedImport};
use crate::view::{self, CatalogView, PlaylistView};

/// Keyboard input the app reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
  /// A character, with `modifier` set when Ctrl or Cmd is held.
  Char { ch: char, modifier: bool },
  Escape,
}

/// What a key press did, for the render target to mirror (focus, panels).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
  FocusSearch,
  ClosePanels,
  OpenPlaylist,
  Ignored,
}

/// Presentation flags that are not part of the projection itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiFlags {
  pub search_focused: bool,
  pub playlist_open: bool,
}

/// Application state for one session.
///
/// Built once at startup from the loaded records and handed to whatever
/// drives the UI. Records are immutable for the session; every event mutates
/// the view state or the playlist and the next [`CatalogApp::view`] recomputes
/// the projection from scratch.
#[derive(Debug, Clone)]
pub struct CatalogApp {
  records: Vec<ArtistRecord>,
  state: ViewState,
  playlist: Playlist,
  search_input: Debouncer<String>,
  flags: UiFlags,
}

impl CatalogApp {
  pub fn new(records: Vec<ArtistRecord>) -> Self {
    Self::with_settings(records, ViewState::default(), crate::debounce::DEFAULT_QUIET_PERIOD)
  }

  pub fn with_settings(records: Vec<ArtistRecord>, state: ViewState, quiet: Duration) -> Self {
    Self { records, state, playlist: Playlist::new(), search_input: Debouncer::new(quiet), flags: UiFlags::default() }
  }

  pub fn records(&self) -> &[ArtistRecord] {
    &self.records
  }

  pub fn state(&self) -> &ViewState {
    &self.state
  }

  pub fn playlist(&self) -> &Playlist {
    &self.playlist
  }

  pub fn flags(&self) -> UiFlags {
    self.flags
  }

  pub fn find(&self, name: &str) -> Option<&ArtistRecord> {
    self.records.iter().find(|r| r.name == name)
  }

  // -------- INPUT EVENTS --------

  /// Queues a raw search box value; it is applied by [`CatalogApp::tick`].
  pub fn on_search_input(&mut self, text: &str, now: Instant) {
    self.search_input.push(text.to_string(), now);
  }

  /// Applies the pending search input once it has been quiet long enough.
  /// Returns `true` when the view changed.
  pub fn tick(&mut self, now: Instant) -> bool {
    match self.search_input.poll(now) {
      Some(text) => {
        self.state.set_search(&text);
        true
      }
      None => false,
    }
  }

  /// Applies any pending search input right away.
  pub fn flush_search(&mut self) -> bool {
    match self.search_input.flush() {
      Some(text) => {
        self.state.set_search(&text);
        true
      }
      None => false,
    }
  }

  pub fn search_deadline(&self) -> Option<Instant> {
    self.search_input.deadline()
  }

  pub fn set_search(&mut self, text: &str) {
    self.search_input.cancel();
    self.state.set_search(text);
  }

  pub fn set_category(&mut self, category: CategoryFilter) {
    self.state.category = category;
  }

  pub fn set_sort(&mut self, sort: SortMode) {
    self.state.sort = sort;
  }

  pub fn toggle_sort(&mut self) -> SortMode {
    self.state.sort = self.state.sort.toggle();
    self.state.sort
  }

  /// Also the reset action of the "no results" affordance.
  pub fn clear_filters(&mut self) {
    self.search_input.cancel();
    self.state.reset_filters();
  }

  pub fn toggle_expanded(&mut self, name: &str) -> Result<bool, CoreError> {
    if self.find(name).is_none() {
      return Err(CoreError::NotFound(name.to_string()));
    }
    Ok(self.state.toggle_expanded(name))
  }

  /// Selected names unknown to the catalog (from a shared link) can still be removed.
  pub fn toggle_selected(&mut self, name: &str) -> Result<bool, CoreError> {
    if self.find(name).is_none() && !self.playlist.contains(name) {
      return Err(CoreError::NotFound(name.to_string()));
    }
    Ok(self.playlist.toggle(name))
  }

  pub fn clear_playlist(&mut self) {
    self.playlist.clear();
  }

  /// Hydrates the playlist from a page URL carrying a shared selection.
  pub fn apply_shared(&mut self, url: &str) -> SharedImport {
    share::import_shared(url, &mut self.playlist)
  }

  pub fn open_playlist(&mut self) {
    self.flags.playlist_open = true;
  }

  pub fn close_playlist(&mut self) {
    self.flags.playlist_open = false;
  }

  pub fn on_key(&mut self, key: KeyPress) -> KeyAction {
    match key {
      KeyPress::Char { ch: '/', modifier: false } if !self.flags.search_focused => {
        self.flags.search_focused = true;
        KeyAction::FocusSearch
      }
      KeyPress::Char { ch: 'p' | 'P', modifier: true } => {
        self.flags.playlist_open = true;
        KeyAction::OpenPlaylist
      }
      KeyPress::Escape => {
        self.flags.playlist_open = false;
        self.flags.search_focused = false;
        KeyAction::ClosePanels
      }
      _ => KeyAction::Ignored,
    }
  }

  // -------- QUERY (read) --------

  pub fn view(&self) -> CatalogView {
    view::catalog_view(&self.records, &self.state, &self.playlist)
  }

  pub fn playlist_view(&self) -> PlaylistView {
    view::playlist_view(&self.records, &self.playlist)
  }

  pub fn contents(&self) -> Vec<&ArtistRecord> {
    self.playlist.contents(&self.records)
  }

  pub fn share_url(&self, page_url: &str) -> Result<String, ExportError> {
    if self.playlist.is_empty() {
      return Err(ExportError::EmptyPlaylist);
    }
    Ok(share::encode_share_url(page_url, &self.playlist.ordered_names(&self.records)))
  }
}
