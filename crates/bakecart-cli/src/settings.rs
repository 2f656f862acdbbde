//! Resolve [`CartConfig`] from an optional TOML file and CLI flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use bakecart_cart::CartConfig;

/// Directory used when neither the config file nor the flags name one.
pub const DEFAULT_DATA_DIR: &str = ".bakecart";

pub fn load_config(path: Option<&Path>, data_dir: Option<PathBuf>) -> anyhow::Result<CartConfig> {
    let mut config = match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            parse_config(&raw).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => CartConfig::default(),
    };
    if data_dir.is_some() {
        config.data_dir = data_dir;
    }
    Ok(config)
}

pub fn parse_config(raw: &str) -> anyhow::Result<CartConfig> {
    Ok(toml::from_str(raw)?)
}

pub fn data_dir(config: &CartConfig) -> PathBuf {
    config
        .data_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}
