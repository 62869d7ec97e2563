//! Layered configuration system
//!
//! Config is loaded with three layers of precedence (highest wins):
//! 1. Environment variables: `PIXPORT_{SETTING}` (e.g. `PIXPORT_MODS_ROOT`)
//! 2. Project-local: `.pixport/config.toml`
//! 3. Global: `~/.pixport/config.toml`
//!
//! Relative paths are joined onto `paths.base_dir`, which defaults to the
//! user's home directory. No path setting has a built-in default.

use crate::error::{PixportError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default nearest-neighbor scale factor
pub const DEFAULT_SCALE: u32 = 10;

/// Directory roots used by the upscaler and the relocator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Base for every relative path below
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
    /// Folder holding one source checkout per mod
    #[serde(default)]
    pub mods_root: Option<PathBuf>,
    /// Extracted vanilla assets (contains `assets/minecraft/...`)
    #[serde(default)]
    pub vanilla_root: Option<PathBuf>,
    /// Flat folder Blockbench imports from
    #[serde(default)]
    pub blockbench_root: Option<PathBuf>,
    /// Where `{mod_id}_img/{size}x` render folders are created
    #[serde(default)]
    pub render_root: Option<PathBuf>,
    /// Resource pack used for in-game texture previews
    #[serde(default)]
    pub resource_pack: Option<PathBuf>,
}

/// How a mod id maps to its checkout folder name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderNaming {
    /// `caverns_and_chasms` -> `caverns-and-chasms` (what IDEs do when cloning)
    #[default]
    Hyphenate,
    /// Folder name equals the mod id
    Identity,
}

impl FolderNaming {
    /// Folder name for a mod id
    pub fn folder_name(&self, mod_id: &str) -> String {
        match self {
            FolderNaming::Hyphenate => mod_id.replace('_', "-"),
            FolderNaming::Identity => mod_id.to_string(),
        }
    }
}

impl std::str::FromStr for FolderNaming {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "hyphenate" => Ok(FolderNaming::Hyphenate),
            "identity" => Ok(FolderNaming::Identity),
            _ => Err(format!(
                "unknown folder naming '{}'; valid values: hyphenate, identity",
                s
            )),
        }
    }
}

/// Model export settings as written in one config file.
///
/// Every field is optional so a later layer can set any value, including
/// the built-in default, over an earlier one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportSettings {
    #[serde(default)]
    pub folder_naming: Option<FolderNaming>,
    /// Extra sub-folder applied to vanilla texture lookups only
    #[serde(default)]
    pub vanilla_texture_subdir: Option<String>,
}

/// Upscaler settings as written in one config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpscaleSettings {
    #[serde(default)]
    pub scale: Option<u32>,
}

/// One config file, or several merged ones before defaults are applied
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PixportConfigFile {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub export: ExportSettings,
    #[serde(default)]
    pub upscale: UpscaleSettings,
}

impl PixportConfigFile {
    /// Lay `other` over `self`: every value `other` sets replaces ours.
    pub fn overlay(&mut self, other: PixportConfigFile) {
        let PixportConfigFile {
            paths,
            export,
            upscale,
        } = other;

        overlay_option(&mut self.paths.base_dir, paths.base_dir);
        overlay_option(&mut self.paths.mods_root, paths.mods_root);
        overlay_option(&mut self.paths.vanilla_root, paths.vanilla_root);
        overlay_option(&mut self.paths.blockbench_root, paths.blockbench_root);
        overlay_option(&mut self.paths.render_root, paths.render_root);
        overlay_option(&mut self.paths.resource_pack, paths.resource_pack);
        overlay_option(&mut self.export.folder_naming, export.folder_naming);
        overlay_option(
            &mut self.export.vanilla_texture_subdir,
            export.vanilla_texture_subdir,
        );
        overlay_option(&mut self.upscale.scale, upscale.scale);
    }

    /// `PIXPORT_{SETTING}` variables override the path settings.
    fn apply_env(&mut self) {
        let paths = &mut self.paths;
        let vars = [
            ("PIXPORT_BASE_DIR", &mut paths.base_dir),
            ("PIXPORT_MODS_ROOT", &mut paths.mods_root),
            ("PIXPORT_VANILLA_ROOT", &mut paths.vanilla_root),
            ("PIXPORT_BLOCKBENCH_ROOT", &mut paths.blockbench_root),
            ("PIXPORT_RENDER_ROOT", &mut paths.render_root),
            ("PIXPORT_RESOURCE_PACK", &mut paths.resource_pack),
        ];
        for (var, slot) in vars {
            if let Some(value) = std::env::var_os(var) {
                *slot = Some(PathBuf::from(value));
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            PixportError::ConfigError(format!("Failed to parse config {}: {}", path.display(), e))
        })
    }
}

fn overlay_option<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

/// Resolved model export settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub folder_naming: FolderNaming,
    pub vanilla_texture_subdir: String,
}

/// Resolved upscaler settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpscaleConfig {
    pub scale: u32,
}

const PROJECT_CONFIG: &str = ".pixport/config.toml";
const DEFAULT_VANILLA_TEXTURE_SUBDIR: &str = "block";

/// Resolved configuration: all layers merged and defaults filled in
#[derive(Debug, Clone)]
pub struct PixportConfig {
    pub base_dir: PathBuf,
    pub paths: PathsConfig,
    pub export: ExportConfig,
    pub upscale: UpscaleConfig,
}

impl PixportConfig {
    /// Merge the global and project files, then the environment.
    pub fn load() -> Result<Self> {
        let layers = [global_config_path(), Some(PathBuf::from(PROJECT_CONFIG))];

        let mut merged = PixportConfigFile::default();
        for path in layers.into_iter().flatten().filter(|p| p.is_file()) {
            log::debug!("Reading config layer {}", path.display());
            merged.overlay(PixportConfigFile::read(&path)?);
        }
        merged.apply_env();

        Ok(Self::resolve(merged))
    }

    /// Use `path` as the only file layer; the environment still applies.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let mut file = PixportConfigFile::read(path)?;
        file.apply_env();
        Ok(Self::resolve(file))
    }

    pub fn mods_root(&self) -> Result<PathBuf> {
        self.require("paths.mods_root", &self.paths.mods_root)
    }

    pub fn vanilla_root(&self) -> Result<PathBuf> {
        self.require("paths.vanilla_root", &self.paths.vanilla_root)
    }

    pub fn blockbench_root(&self) -> Result<PathBuf> {
        self.require("paths.blockbench_root", &self.paths.blockbench_root)
    }

    pub fn render_root(&self) -> Result<PathBuf> {
        self.require("paths.render_root", &self.paths.render_root)
    }

    pub fn resource_pack(&self) -> Result<PathBuf> {
        self.require("paths.resource_pack", &self.paths.resource_pack)
    }

    /// Join a possibly relative path onto the base directory
    pub fn absolutize(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    fn require(&self, name: &str, value: &Option<PathBuf>) -> Result<PathBuf> {
        value
            .as_deref()
            .map(|p| self.absolutize(p))
            .ok_or_else(|| {
                PixportError::ConfigError(format!(
                    "{} is not set (config file or PIXPORT_{} env var)",
                    name,
                    name.trim_start_matches("paths.").to_uppercase()
                ))
            })
    }

    fn resolve(file: PixportConfigFile) -> Self {
        let base_dir = file
            .paths
            .base_dir
            .clone()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        PixportConfig {
            base_dir,
            paths: file.paths,
            export: ExportConfig {
                folder_naming: file.export.folder_naming.unwrap_or_default(),
                vanilla_texture_subdir: file
                    .export
                    .vanilla_texture_subdir
                    .unwrap_or_else(|| DEFAULT_VANILLA_TEXTURE_SUBDIR.to_string()),
            },
            upscale: UpscaleConfig {
                scale: file.upscale.scale.unwrap_or(DEFAULT_SCALE),
            },
        }
    }
}

fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(PROJECT_CONFIG))
}
