mod backend;
mod paths;

pub use backend::{ConfigBackend, ConfigSection, TomlConfigBackend};
pub use paths::{BASE_DIR_ENV, ChartaPaths, ConfigError};
