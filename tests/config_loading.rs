//! Configuration layering tests: defaults, config file, env overrides.
//!
//! These mutate process environment variables, so they are serialized.

#![cfg(feature = "server")]

use serial_test::serial;
use starlit_portfolio::config::{get_config_dir, load_config};

const ENV_VARS: &[&str] = &[
    "PORTFOLIO_CONFIG_DIR",
    "PORTFOLIO_PORT",
    "PORT",
    "PORTFOLIO_CONTACT__SERVICE_ID",
    "PORTFOLIO_CONTACT__TEMPLATE_ID",
    "PORTFOLIO_CONTACT__PUBLIC_KEY",
];

fn clear_env() {
    for var in ENV_VARS {
        std::env::remove_var(var);
    }
}

/// Point the loader at an empty directory so developer machines' real config
/// files cannot leak into assertions.
fn isolate() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    std::env::set_var("PORTFOLIO_CONFIG_DIR", dir.path());
    dir
}

#[test]
#[serial]
fn defaults_apply_without_file_or_env() {
    clear_env();
    let _dir = isolate();

    let config = load_config().expect("load default config");
    assert_eq!(config.port, 8080);
    assert!(config.contact.is_none());
}

#[test]
#[serial]
fn config_file_supplies_port_and_contact_relay() {
    clear_env();
    let dir = isolate();
    std::fs::write(
        dir.path().join("config.toml"),
        r#"
port = 9001

[contact]
service_id = "svc_123"
template_id = "tmpl_456"
public_key = "pk_789"
"#,
    )
    .expect("write config file");

    let config = load_config().expect("load file config");
    assert_eq!(config.port, 9001);
    let contact = config.contact.expect("contact section");
    assert_eq!(contact.service_id, "svc_123");
    assert_eq!(contact.template_id, "tmpl_456");
    assert_eq!(contact.public_key, "pk_789");
}

#[test]
#[serial]
fn portfolio_port_env_beats_file_and_legacy_port() {
    clear_env();
    let dir = isolate();
    std::fs::write(dir.path().join("config.toml"), "port = 9001\n").expect("write config file");

    std::env::set_var("PORT", "9002");
    std::env::set_var("PORTFOLIO_PORT", "9003");

    let config = load_config().expect("load config");
    assert_eq!(config.port, 9003);

    clear_env();
}

#[test]
#[serial]
fn legacy_port_env_beats_file() {
    clear_env();
    let dir = isolate();
    std::fs::write(dir.path().join("config.toml"), "port = 9001\n").expect("write config file");

    std::env::set_var("PORT", "9002");

    let config = load_config().expect("load config");
    assert_eq!(config.port, 9002);

    clear_env();
}

#[test]
#[serial]
fn config_dir_env_takes_priority() {
    clear_env();
    let dir = isolate();
    assert_eq!(get_config_dir(), dir.path());

    clear_env();
}
