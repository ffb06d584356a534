// SPDX-License-Identifier: MPL-2.0
use cinestream::config::{self, Config, CONFIG_DIR_ENV, DEFAULT_TAP_TIMEOUT_MS};
use std::fs;
use tempfile::tempdir;

#[test]
fn settings_file_tunes_the_session() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let path = temp_dir.path().join("custom.toml");
    fs::write(
        &path,
        r#"
[gesture]
tap_timeout_ms = 180

[overlay]
control_bar_hide_ms = 5000

[diagnostics]
buffer_capacity = 32
"#,
    )
    .expect("failed to write config");

    let (config, warning) = config::load_from_path(&path).expect("config should load");
    assert!(warning.is_none());

    let settings = config.session_settings();
    assert_eq!(settings.tap_timeout.millis(), 180);
    assert_eq!(settings.control_bar_hide.millis(), 5000);
    assert_eq!(settings.diagnostics_capacity.value(), 32);
}

#[test]
fn unknown_sections_are_ignored() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let path = temp_dir.path().join("settings.toml");
    fs::write(&path, "[window]\nwidth = 800\n").expect("failed to write config");

    let (config, warning) = config::load_from_path(&path).expect("config should load");
    assert!(warning.is_none());
    assert_eq!(config, Config::default());
}

#[test]
fn wrong_value_type_falls_back_to_defaults_with_warning() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let path = temp_dir.path().join("settings.toml");
    fs::write(&path, "[gesture]\ntap_timeout_ms = \"fast\"\n").expect("failed to write config");

    let (config, warning) = config::load_from_path(&path).expect("config should load");
    assert_eq!(config.session_settings().tap_timeout.millis(), DEFAULT_TAP_TIMEOUT_MS);
    assert!(warning.is_some_and(|message| message.contains("settings.toml")));
}

// The only test in this binary touching the environment.
#[test]
fn config_dir_env_overrides_default_location() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    fs::write(
        temp_dir.path().join("settings.toml"),
        "[adjustment]\nvolume_gain = 0.05\n",
    )
    .expect("failed to write config");

    std::env::set_var(CONFIG_DIR_ENV, temp_dir.path());
    let resolved = config::default_config_path();
    let (config, warning) = config::load();
    std::env::remove_var(CONFIG_DIR_ENV);

    assert_eq!(resolved, Some(temp_dir.path().join("settings.toml")));
    assert!(warning.is_none());
    assert_eq!(config.adjustment.volume_gain, Some(0.05));
}
