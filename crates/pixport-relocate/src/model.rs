//! Block model documents

use pixport_core::{PixportError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A block model JSON document
///
/// Only `parent` and `textures` are interpreted; everything else
/// (`elements`, `display`, ...) is carried through as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub textures: BTreeMap<String, String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ModelDocument {
    /// Read and parse a model file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(PixportError::MissingFile(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| PixportError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Write the document, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Overwrite or insert every slot of `overrides`
    pub fn merge_textures(&mut self, overrides: &BTreeMap<String, String>) {
        for (slot, location) in overrides {
            self.textures.insert(slot.clone(), location.clone());
        }
    }

    /// Slots bound to actual texture files
    ///
    /// Values starting with `#` point at another slot and are left out.
    pub fn texture_files(&self) -> impl Iterator<Item = (&str, &str)> {
        self.textures
            .iter()
            .filter(|(_, location)| !location.starts_with('#'))
            .map(|(slot, location)| (slot.as_str(), location.as_str()))
    }
}
