//! Tests for CLI argument parsing and config layering.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use get_favicon::config::Opt;
use get_favicon::{ConfigOverrides, LogFormat, LogLevel, ResolverConfig};

#[test]
fn test_url_is_required() {
    assert!(Opt::try_parse_from(["get-favicon"]).is_err());
}

#[test]
fn test_defaults_produce_default_config() {
    let opt = Opt::parse_from(["get-favicon", "example.com"]);
    assert_eq!(opt.url, "example.com");
    assert!(opt.output.is_none());
    assert!(matches!(opt.log_level, LogLevel::Info));
    assert!(matches!(opt.log_format, LogFormat::Plain));
    assert_eq!(
        ResolverConfig::merged(opt.overrides()),
        ResolverConfig::default()
    );
}

#[test]
fn test_invalid_log_format_rejected() {
    let result = Opt::try_parse_from(["get-favicon", "example.com", "--log-format", "xml"]);
    assert!(result.is_err());
}

#[test]
fn test_keep_flags_invert_ignore_defaults() {
    let opt = Opt::parse_from(["get-favicon", "example.com", "--keep-query", "--keep-auth"]);
    let config = ResolverConfig::merged(opt.overrides());
    assert!(!config.ignore_query);
    assert!(!config.ignore_auth);
    assert!(!config.ignore_port);
}

#[test]
fn test_cli_flags_win_over_config_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("favicon.json");
    std::fs::write(
        &config_path,
        r#"{"timeoutSeconds": 30, "ignoreQuery": false, "userAgent": "file-agent"}"#,
    )
    .expect("write config");

    let opt = Opt::parse_from([
        "get-favicon",
        "example.com",
        "--config",
        config_path.to_str().expect("utf-8 path"),
        "--timeout-seconds",
        "2",
    ]);
    assert_eq!(opt.config, Some(config_path.clone()));

    let file = ConfigOverrides::from_json_file(&config_path).expect("load config");
    let config = ResolverConfig::merged(file.merge(opt.overrides()));
    assert_eq!(config.timeout, Duration::from_secs(2));
    // file values survive where no flag was given
    assert!(!config.ignore_query);
    assert_eq!(config.user_agent, "file-agent");
}

#[test]
fn test_default_icon_flag_loads_bytes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let icon_path = dir.path().join("fallback.ico");
    std::fs::write(&icon_path, b"\x00\x00\x01\x00").expect("write icon");

    let opt = Opt::parse_from([
        "get-favicon",
        "example.com",
        "--default-icon",
        icon_path.to_str().expect("utf-8 path"),
    ]);
    assert_eq!(opt.default_icon, Some(PathBuf::from(&icon_path)));

    let overrides = opt.overrides().load_default_icon().expect("icon readable");
    let config = ResolverConfig::merged(overrides);
    assert_eq!(config.default_icon, b"\x00\x00\x01\x00".to_vec());
}
