pub mod error;
pub mod page_config;

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;

pub use error::ConfigError;
pub use page_config::{FASKIS_TITLE, LONDON_TITLE, PageConfig, TITLE_ENV_VAR};
