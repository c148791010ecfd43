pub mod adapter;
pub mod config;
pub mod file;
pub mod http;

pub use adapter::{ChartaSource, Target};
pub use config::SourceConfig;
pub use http::{HttpFetcher, SourceAdapterError};
