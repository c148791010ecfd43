use std::time::Duration;

use charta_config::ConfigSection;
use charta_core::export::ExportBranding;
use charta_core::{CategoryFilter, SortMode, ViewState};
use serde::{Deserialize, Serialize};

/// `[view]` section: how a session starts out.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ViewConfig {
  #[serde(default)]
  pub sort: SortMode,

  #[serde(default)]
  pub filter: CategoryFilter,

  /// Quiet period of the search box, in milliseconds.
  #[serde(default = "default_debounce_ms")]
  pub debounce_ms: u64,
}

fn default_debounce_ms() -> u64 {
  300
}

impl Default for ViewConfig {
  fn default() -> Self {
    ViewConfig { sort: SortMode::default(), filter: CategoryFilter::default(), debounce_ms: default_debounce_ms() }
  }
}

impl ViewConfig {
  pub fn initial_state(&self) -> ViewState {
    ViewState::new(self.filter, self.sort)
  }

  pub fn quiet_period(&self) -> Duration {
    Duration::from_millis(self.debounce_ms)
  }
}

impl ConfigSection for ViewConfig {
  const SECTION: &'static str = "view";
}

/// `[export]` section: wording of exported texts and the page share links point at.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ExportConfig {
  #[serde(default = "default_title")]
  pub title: String,

  #[serde(default = "default_subject")]
  pub subject: String,

  #[serde(default = "default_app_name")]
  pub app_name: String,

  #[serde(default = "default_page_url")]
  pub page_url: String,
}

fn default_title() -> String {
  ExportBranding::default().title
}

fn default_subject() -> String {
  ExportBranding::default().subject
}

fn default_app_name() -> String {
  ExportBranding::default().app_name
}

fn default_page_url() -> String {
  "http://localhost:8000/".to_string()
}

impl Default for ExportConfig {
  fn default() -> Self {
    ExportConfig {
      title: default_title(),
      subject: default_subject(),
      app_name: default_app_name(),
      page_url: default_page_url(),
    }
  }
}

impl ExportConfig {
  pub fn branding(&self) -> ExportBranding {
    ExportBranding { title: self.title.clone(), subject: self.subject.clone(), app_name: self.app_name.clone() }
  }
}

impl ConfigSection for ExportConfig {
  const SECTION: &'static str = "export";
}
