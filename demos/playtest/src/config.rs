//! TOML loading for [`GameConfig`].

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use sn_core::GameConfig;

/// Read and validate a game configuration file.  Missing keys keep their
/// defaults.
pub fn load(path: &Path) -> Result<GameConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    parse(&text).with_context(|| format!("in config {}", path.display()))
}

pub fn parse(text: &str) -> Result<GameConfig> {
    let config: GameConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}
