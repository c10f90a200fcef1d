//! Integration tests for configuration loading and validation
//!
//! Tests that touch `QUEUE_NOTIFIER_*` variables hold `ENV_MUTEX`.

use queue_notifier::config::{load_config, load_config_or_default, ServerConfig};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn cleanup_env_vars() {
    for var in [
        "QUEUE_NOTIFIER_HOST",
        "QUEUE_NOTIFIER_PORT",
        "QUEUE_NOTIFIER_OFFICE_ID",
        "QUEUE_NOTIFIER_WATCH_DIR",
        "QUEUE_NOTIFIER_LOG_LEVEL",
        "QUEUE_NOTIFIER_FORWARDING_DRY_RUN",
        "QUEUE_NOTIFIER_FORWARDING_TIMEOUT_SECONDS",
        "TEST_QN_OFFICE",
    ] {
        std::env::remove_var(var);
    }
}

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_minimal_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"{"host": "https://central.example.com", "port": ":1919", "officeID": "office-1"}"#,
    );

    let config = load_config(file.path()).unwrap();

    assert_eq!(config.host, "https://central.example.com");
    assert_eq!(config.port, ":1919");
    assert_eq!(config.office_id, "office-1");
    assert_eq!(config.log_level, "info");
    assert_eq!(config.forwarding.timeout_seconds, 30);
    assert!(!config.forwarding.dry_run);
    assert!(!config.logging.local_enabled);
    assert_eq!(config.listen_address().unwrap(), "0.0.0.0:1919");
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"{
            "host": "http://central.local:8080",
            "port": "127.0.0.1:2020",
            "officeID": "office-9",
            "logLevel": "debug",
            "watchDir": "/srv/queue/incoming",
            "forwarding": {"timeoutSeconds": 5, "dryRun": true},
            "logging": {"localEnabled": true, "localPath": "/var/log/qn", "localRotation": "hourly"}
        }"#,
    );

    let config = load_config(file.path()).unwrap();

    assert_eq!(config.log_level, "debug");
    assert_eq!(config.listen_address().unwrap(), "127.0.0.1:2020");
    assert_eq!(
        config.resolve_watch_dir(Path::new("/opt/qn")),
        Path::new("/srv/queue/incoming")
    );
    assert_eq!(config.forwarding.timeout_seconds, 5);
    assert!(config.forwarding.dry_run);
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_env_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_QN_OFFICE", "office-from-env");

    let file = write_config(r#"{"host": "http://central", "officeID": "${TEST_QN_OFFICE}"}"#);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.office_id, "office-from-env");
    cleanup_env_vars();
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("QUEUE_NOTIFIER_HOST", "https://override.example.com");
    std::env::set_var("QUEUE_NOTIFIER_PORT", "8080");
    std::env::set_var("QUEUE_NOTIFIER_OFFICE_ID", "office-override");
    std::env::set_var("QUEUE_NOTIFIER_FORWARDING_DRY_RUN", "true");
    std::env::set_var("QUEUE_NOTIFIER_FORWARDING_TIMEOUT_SECONDS", "12");

    let file = write_config(r#"{"host": "http://central", "port": ":1919", "officeID": "o1"}"#);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.host, "https://override.example.com");
    assert_eq!(config.listen_address().unwrap(), "0.0.0.0:8080");
    assert_eq!(config.office_id, "office-override");
    assert!(config.forwarding.dry_run);
    assert_eq!(config.forwarding.timeout_seconds, 12);

    cleanup_env_vars();
}

#[test]
fn test_invalid_values_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    for content in [
        r#"{"logLevel": "verbose"}"#,
        r#"{"host": "ftp://central"}"#,
        r#"{"host": "not a url"}"#,
        r#"{"port": ":http"}"#,
        r#"{"forwarding": {"timeoutSeconds": 0}}"#,
        r#"{"logging": {"localRotation": "weekly"}}"#,
    ] {
        let file = write_config(content);
        assert!(load_config(file.path()).is_err(), "accepted {content}");
    }
}

#[test]
fn test_missing_file_falls_back_to_empty_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let (config, error) = load_config_or_default("/no/such/dir/config.json");

    assert!(error.is_some());
    assert_eq!(config, ServerConfig::default());
    assert!(config.host.is_empty());
    // An empty port cannot be bound
    assert!(config.listen_address().is_err());
}
