pub mod aggregate;
pub mod app;
pub mod debounce;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod export;
pub mod playlist;
pub mod ports;
pub mod services;
pub mod share;
pub mod view;

pub use app::CatalogApp;
pub use domain::{ArtistRecord, CategoryFilter, SortMode, ViewState};
pub use errors::CoreError;
pub use playlist::Playlist;
