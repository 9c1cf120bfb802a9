//! Configuration file loading.
//!
//! The file is optional: every section falls back to its defaults when absent.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, GithubConfig, GreetingConfig, LoggingConfig, UiConfig};
