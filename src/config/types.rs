use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub greeting: GreetingConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the users endpoint queried by the fetch demo.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GithubConfig {
    /// Full URL of the users listing (default: "https://api.github.com/users").
    #[serde(default = "default_users_url")]
    pub users_url: String,
    /// Value of the User-Agent header. GitHub rejects requests without one.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GreetingConfig {
    /// Role shown by the greeting demo: "ADMIN", "USER", anything else is a guest.
    #[serde(default = "default_role")]
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Demo shown at startup (default: "people").
    #[serde(default = "default_initial_demo")]
    pub initial_demo: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for the interactive UI. Defaults to the user cache directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            users_url: default_users_url(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            role: default_role(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            initial_demo: default_initial_demo(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_users_url() -> String {
    "https://api.github.com/users".to_string()
}

fn default_user_agent() -> String {
    format!("hooklab/{}", env!("CARGO_PKG_VERSION"))
}

fn default_role() -> String {
    "USER".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_initial_demo() -> String {
    "people".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
