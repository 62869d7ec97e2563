//! pixport Core - Shared foundations for the pixport tools
//!
//! This crate provides the pieces both tools depend on:
//! - `PixportError` and the `Result` alias
//! - `PixportConfig` - layered TOML configuration with env overrides
//! - `paths` - where mod and vanilla assets live on disk

pub mod config;
mod error;
pub mod paths;

pub use config::{FolderNaming, PixportConfig, PixportConfigFile, DEFAULT_SCALE};
pub use error::{PixportError, Result};
