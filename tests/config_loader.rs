mod common;

use common::temp_config;
use hooklab::config::{Config, ConfigError};
use std::path::PathBuf;

#[test]
fn missing_file_yields_defaults() {
    let path = PathBuf::from("/nonexistent/hooklab/config.toml");
    let config = Config::load_from(&path).expect("defaults");
    assert_eq!(config, Config::default());
    assert_eq!(config.github.users_url, "https://api.github.com/users");
    assert_eq!(config.greeting.role, "USER");
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.initial_demo, "people");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn partial_file_fills_missing_sections() {
    let (_dir, path) = temp_config(
        r#"
[github]
users_url = "http://127.0.0.1:9999/users"

[greeting]
role = "ADMIN"
"#,
    );
    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.github.users_url, "http://127.0.0.1:9999/users");
    assert!(config.github.user_agent.starts_with("hooklab/"));
    assert_eq!(config.greeting.role, "ADMIN");
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn full_file_round_trips_every_field() {
    let (_dir, path) = temp_config(
        r#"
[github]
users_url = "https://example.com/users"
user_agent = "custom-agent"

[greeting]
role = "GUEST"

[ui]
tick_rate_ms = 100
initial_demo = "counter"

[logging]
level = "debug"
file = "/tmp/hooklab.log"
"#,
    );
    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.github.user_agent, "custom-agent");
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.ui.initial_demo, "counter");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/hooklab.log")));
}

#[test]
fn invalid_toml_is_parse_error() {
    let (_dir, path) = temp_config("[github\nusers_url = ");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn unknown_initial_demo_is_validation_error() {
    let (_dir, path) = temp_config("[ui]\ninitial_demo = \"calendar\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn malformed_users_url_is_validation_error() {
    let (_dir, path) = temp_config("[github]\nusers_url = \"not a url\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("users_url"));
}
