pub mod clipboard;
pub mod reporter;
pub mod source;

pub use clipboard::{ClipboardError, ClipboardSink};
pub use reporter::{LoadReporter, NoopReporter};
pub use source::{ArtistSource, SourceError};
