pub mod clipboard;
pub mod reporter;
