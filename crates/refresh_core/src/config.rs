use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use serde::Deserialize;

use crate::{error::ConfigError, feature::DEFAULT_ITEMS};

pub const CONFIG_FILE_NAME: &str = "refreshable.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub refresh_ms: u64,
    pub items: Vec<String>,
    pub pull_threshold_px: f32,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            refresh_ms: 2000,
            items: DEFAULT_ITEMS.iter().map(|item| item.to_string()).collect(),
            pull_threshold_px: 64.0,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    pub fn refresh_duration(&self) -> Duration {
        Duration::from_millis(self.refresh_ms)
    }
}

/// Defaults, then `refreshable.toml` (or `explicit_path`), then environment overrides.
///
/// A missing default file is fine; a missing explicit file is an error.
pub fn load_settings(explicit_path: Option<&Path>) -> Result<Settings, ConfigError> {
    let mut settings = match explicit_path {
        Some(path) => read_settings_file(path)?,
        None => {
            let path = Path::new(CONFIG_FILE_NAME);
            if path.exists() {
                read_settings_file(path)?
            } else {
                Settings::default()
            }
        }
    };

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok())?;
    validate(&settings)?;
    Ok(settings)
}

pub fn read_settings_file(path: &Path) -> Result<Settings, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: PathBuf::from(path),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: PathBuf::from(path),
        source,
    })
}

pub fn apply_env_overrides(
    settings: &mut Settings,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(), ConfigError> {
    if let Some(v) = lookup("REFRESHABLE_REFRESH_MS") {
        settings.refresh_ms = parse_env("REFRESHABLE_REFRESH_MS", &v)?;
    }
    if let Some(v) = lookup("REFRESHABLE_PULL_THRESHOLD_PX") {
        settings.pull_threshold_px = parse_env("REFRESHABLE_PULL_THRESHOLD_PX", &v)?;
    }
    if let Some(v) = lookup("REFRESHABLE_ITEMS") {
        settings.items = v
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect();
    }

    if let Some(v) = lookup("RUST_LOG") {
        if !v.trim().is_empty() {
            settings.log_filter = v;
        }
    }

    Ok(())
}

fn parse_env<T: FromStr>(name: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: raw.to_string(),
    })
}

fn validate(settings: &Settings) -> Result<(), ConfigError> {
    if !settings.pull_threshold_px.is_finite() || settings.pull_threshold_px <= 0.0 {
        return Err(ConfigError::InvalidValue {
            name: "pull_threshold_px",
            value: settings.pull_threshold_px.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
