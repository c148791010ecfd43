pub mod catalog_loader;
pub mod clipboard;

pub use catalog_loader::{CatalogLoader, DataOrigin, LoadOutcome};
pub use clipboard::{CopyOutcome, copy_with_fallback};
