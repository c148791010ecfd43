pub mod io;

pub use io::{FsError, atomic_write_str, read_optional, read_text};
