use ghub_kernel::config::{ConfigError, ghub_environment, load_config, load_config_with};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct TestConfig {
    server: ServerSection,
}

#[derive(Debug, Deserialize)]
struct ServerSection {
    address: String,
    port: u16,
}

fn write_server_toml(dir: &Path) -> PathBuf {
    let file = dir.join("server.toml");
    fs::write(&file, "[server]\naddress = \"127.0.0.1\"\nport = 4680\n").expect("write config");
    file
}

#[test]
fn file_layer_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = write_server_toml(dir.path());

    let cfg: TestConfig = load_config(Some(&file)).expect("load");
    assert_eq!(cfg.server.address, "127.0.0.1");
    assert_eq!(cfg.server.port, 4680);
}

#[test]
fn environment_overrides_beat_the_file_layer() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = write_server_toml(dir.path());

    // Injected vars stand in for the process environment, keeping the test
    // hermetic while exercising the same prefix/separator chain.
    let vars: HashMap<String, String> =
        [("GHUB__SERVER__PORT".to_owned(), "9999".to_owned())].into_iter().collect();
    let overrides = ghub_environment().source(Some(vars));

    let cfg: TestConfig = load_config_with(Some(&file), overrides).expect("load");
    assert_eq!(cfg.server.port, 9999, "env override wins over the file value");
    assert_eq!(cfg.server.address, "127.0.0.1", "untouched keys come from the file");
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");

    let result = load_config::<TestConfig>(Some(dir.path().join("absent")));
    assert!(matches!(result, Err(ConfigError::Config { .. })));
}
