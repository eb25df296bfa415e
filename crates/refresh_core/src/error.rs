use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store inbox is full")]
    InboxFull,
    #[error("store inbox disconnected (store was dropped)")]
    InboxDisconnected,
    #[error("failed to build effect runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },
}
