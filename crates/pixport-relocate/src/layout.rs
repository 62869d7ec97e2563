//! Where models and textures are read from and written to
//!
//! Sources:
//! - mod namespaces: `{mods_root}/{folder(ns)}/src/main/resources/assets/{ns}/...`
//! - vanilla: `{vanilla_root}/assets/minecraft/...`
//!
//! Destinations (flat, one folder per namespace):
//! - `{blockbench_root}/{mod_id}/models/block/{file}.json`
//! - `{blockbench_root}/{ns}/textures/{stem}.png`
//!
//! Vanilla texture lookups go through an extra sub-folder (`block` unless
//! configured otherwise) that mod texture lookups do not.

use crate::resource::ResourceLocation;
use pixport_core::paths::{mod_assets_dir, vanilla_assets_dir};
use pixport_core::FolderNaming;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Maps a mod id to the name of its checkout folder
pub type NamingConvention = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// The three directory roots of an export
#[derive(Debug, Clone)]
pub struct ExportRoots {
    pub mods_root: PathBuf,
    pub vanilla_root: PathBuf,
    pub blockbench_root: PathBuf,
}

/// Path resolution for models and textures
#[derive(Clone)]
pub struct AssetLayout {
    roots: ExportRoots,
    naming: NamingConvention,
    vanilla_texture_subdir: String,
}

impl AssetLayout {
    /// Layout with hyphenated checkout folders and the `block` vanilla texture sub-folder
    pub fn new(roots: ExportRoots) -> Self {
        Self {
            roots,
            naming: Arc::new(|mod_id: &str| FolderNaming::Hyphenate.folder_name(mod_id)),
            vanilla_texture_subdir: "block".to_string(),
        }
    }

    pub fn with_naming_convention<F>(mut self, naming: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.naming = Arc::new(naming);
        self
    }

    pub fn with_folder_naming(self, naming: FolderNaming) -> Self {
        self.with_naming_convention(move |mod_id: &str| naming.folder_name(mod_id))
    }

    /// Sub-folder for vanilla texture lookups; empty disables it
    pub fn with_vanilla_texture_subdir(mut self, subdir: impl Into<String>) -> Self {
        self.vanilla_texture_subdir = subdir.into();
        self
    }

    pub fn roots(&self) -> &ExportRoots {
        &self.roots
    }

    pub fn folder_name(&self, mod_id: &str) -> String {
        (self.naming)(mod_id)
    }

    /// Assets folder of a namespace inside its own checkout
    pub fn mod_assets_dir(&self, namespace: &str) -> PathBuf {
        mod_assets_dir(&self.roots.mods_root, &self.folder_name(namespace), namespace)
    }

    /// A block model of the job's own mod: `{assets}/models/block/{file}.json`
    pub fn source_model_path(&self, mod_id: &str, file: &str) -> PathBuf {
        self.mod_assets_dir(mod_id)
            .join("models/block")
            .join(json_file_name(file))
    }

    /// Model file a resource location points to
    pub fn model_path(&self, rl: &ResourceLocation) -> PathBuf {
        self.assets_dir(rl)
            .join("models")
            .join(format!("{}.json", rl.path()))
    }

    /// Texture file a resource location points to
    pub fn texture_path(&self, rl: &ResourceLocation) -> PathBuf {
        let mut dir = self.assets_dir(rl).join("textures");
        if rl.is_vanilla() && !self.vanilla_texture_subdir.is_empty() {
            dir.push(&self.vanilla_texture_subdir);
        }
        dir.join(format!("{}.png", rl.path()))
    }

    pub fn dest_model_path(&self, mod_id: &str, file: &str) -> PathBuf {
        self.roots
            .blockbench_root
            .join(mod_id)
            .join("models/block")
            .join(json_file_name(file))
    }

    pub fn dest_texture_path(&self, rl: &ResourceLocation) -> PathBuf {
        self.roots
            .blockbench_root
            .join(rl.namespace())
            .join("textures")
            .join(format!("{}.png", rl.file_stem()))
    }

    fn assets_dir(&self, rl: &ResourceLocation) -> PathBuf {
        if rl.is_vanilla() {
            vanilla_assets_dir(&self.roots.vanilla_root)
        } else {
            self.mod_assets_dir(rl.namespace())
        }
    }
}

impl fmt::Debug for AssetLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetLayout")
            .field("roots", &self.roots)
            .field("vanilla_texture_subdir", &self.vanilla_texture_subdir)
            .finish_non_exhaustive()
    }
}

fn json_file_name(file: &str) -> String {
    format!("{}.json", file.strip_suffix(".json").unwrap_or(file))
}
