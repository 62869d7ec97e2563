//! CLI command implementations

pub mod export;
pub mod upscale;

use anyhow::{Context, Result};
use pixport_core::PixportConfig;
use std::path::{Path, PathBuf};

/// Load the layered config, or only `path` when given
pub fn load_config(path: Option<&str>) -> Result<PixportConfig> {
    match path {
        Some(p) => PixportConfig::load_from_file(Path::new(p))
            .with_context(|| format!("Failed to load config '{}'", p)),
        None => PixportConfig::load().context("Failed to load config"),
    }
}

/// A CLI flag wins over the configured setting
pub fn path_or_config(
    flag: Option<&str>,
    configured: impl FnOnce() -> pixport_core::Result<PathBuf>,
) -> Result<PathBuf> {
    match flag {
        Some(p) => Ok(PathBuf::from(p)),
        None => Ok(configured()?),
    }
}
