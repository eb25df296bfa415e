use super::*;

use std::collections::HashMap;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| vars.get(name).cloned()
}

#[test]
fn defaults_match_two_second_refresh_and_static_items() {
    let settings = Settings::default();
    assert_eq!(settings.refresh_duration(), Duration::from_secs(2));
    assert_eq!(settings.items, vec!["first", "second", "third"]);
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn file_values_override_defaults_and_keep_missing_keys() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "refresh_ms = 500\nitems = [\"alpha\", \"beta\"]\n").expect("write config");

    let settings = read_settings_file(&path).expect("read settings");

    assert_eq!(settings.refresh_ms, 500);
    assert_eq!(settings.items, vec!["alpha", "beta"]);
    assert_eq!(settings.pull_threshold_px, 64.0);
}

#[test]
fn malformed_file_reports_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "refresh_ms = \"soon\"").expect("write config");

    let err = read_settings_file(&path).expect_err("should reject string refresh_ms");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("absent.toml");
    let err = load_settings(Some(missing.as_path())).expect_err("missing file");
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn env_overrides_take_precedence() {
    let mut settings = Settings::default();
    apply_env_overrides(
        &mut settings,
        env(&[
            ("REFRESHABLE_REFRESH_MS", " 250 "),
            ("REFRESHABLE_PULL_THRESHOLD_PX", "80"),
            ("REFRESHABLE_ITEMS", "one, two,,three"),
            ("RUST_LOG", "refresh_core=debug"),
        ]),
    )
    .expect("overrides");

    assert_eq!(settings.refresh_ms, 250);
    assert_eq!(settings.pull_threshold_px, 80.0);
    assert_eq!(settings.items, vec!["one", "two", "three"]);
    assert_eq!(settings.log_filter, "refresh_core=debug");
}

#[test]
fn blank_rust_log_keeps_configured_filter() {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings, env(&[("RUST_LOG", "  ")])).expect("overrides");
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn non_numeric_refresh_ms_is_rejected() {
    let mut settings = Settings::default();
    let err = apply_env_overrides(&mut settings, env(&[("REFRESHABLE_REFRESH_MS", "2s")]))
        .expect_err("invalid duration");
    assert!(matches!(
        err,
        ConfigError::InvalidValue {
            name: "REFRESHABLE_REFRESH_MS",
            ..
        }
    ));
}

#[test]
fn non_positive_pull_threshold_fails_validation() {
    let settings = Settings {
        pull_threshold_px: 0.0,
        ..Settings::default()
    };
    assert!(validate(&settings).is_err());
    assert!(validate(&Settings::default()).is_ok());
}
