//! Block model export for Blockbench
//!
//! A [`RenderableBlock`] copies one or more block models of a mod, plus every
//! texture they bind, into a flat folder Blockbench can open directly.
//!
//! A model with a `parent` is exported as that parent with the child's
//! texture slots merged in, so the exported file renders without further
//! parent lookups. Each model is exported independently; a failure is
//! reported for that model only and files already copied for it stay in
//! place.

use crate::layout::AssetLayout;
use crate::model::ModelDocument;
use crate::resource::ResourceLocation;
use pixport_core::{PixportError, Result};
use std::fs;
use std::path::PathBuf;

/// One export job: a block of a mod and the model files that make it up
#[derive(Debug, Clone)]
pub struct RenderableBlock {
    mod_id: String,
    name: String,
    model_names: Vec<String>,
    layout: AssetLayout,
}

/// A texture file copied for a slot
#[derive(Debug, Clone)]
pub struct CopiedTexture {
    pub slot: String,
    pub location: ResourceLocation,
    pub source: PathBuf,
    pub dest: PathBuf,
}

/// A successfully exported model
#[derive(Debug, Clone)]
pub struct ExportedModel {
    /// Where the merged model was written
    pub dest: PathBuf,
    /// Parent model the export was built from, if any
    pub parent: Option<PathBuf>,
    pub textures: Vec<CopiedTexture>,
}

/// Outcome of exporting one model file
#[derive(Debug)]
pub struct ModelExport {
    pub model: String,
    pub result: Result<ExportedModel>,
}

/// Per-model results of [`RenderableBlock::write_files`], in model-list order
#[derive(Debug, Default)]
pub struct ExportReport {
    pub exports: Vec<ModelExport>,
}

impl ExportReport {
    pub fn succeeded(&self) -> usize {
        self.exports.iter().filter(|e| e.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.exports.len() - self.succeeded()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &PixportError)> {
        self.exports
            .iter()
            .filter_map(|e| e.result.as_ref().err().map(|err| (e.model.as_str(), err)))
    }
}

impl RenderableBlock {
    /// Export job for `mod_id:name`, with a single model named after the block
    pub fn new(mod_id: impl Into<String>, name: impl Into<String>, layout: AssetLayout) -> Self {
        let name = name.into();
        Self {
            mod_id: mod_id.into(),
            model_names: vec![name.clone()],
            name,
            layout,
        }
    }

    /// Export these model files instead of the one named after the block.
    ///
    /// An empty list keeps the default.
    pub fn with_model_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if !names.is_empty() {
            self.model_names = names;
        }
        self
    }

    pub fn mod_id(&self) -> &str {
        &self.mod_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model_names(&self) -> &[String] {
        &self.model_names
    }

    pub fn layout(&self) -> &AssetLayout {
        &self.layout
    }

    /// Export every model of the job, one result per model
    pub fn write_files(&self) -> ExportReport {
        let mut report = ExportReport::default();

        for model in &self.model_names {
            let result = self.export_model(model);
            match &result {
                Ok(exported) => log::debug!(
                    "Exported {}:{} -> {} ({} textures)",
                    self.mod_id,
                    model,
                    exported.dest.display(),
                    exported.textures.len()
                ),
                Err(e) => log::warn!("Failed to export {}:{}: {}", self.mod_id, model, e),
            }
            report.exports.push(ModelExport {
                model: model.clone(),
                result,
            });
        }

        log::info!(
            "Exported {}/{} models of {}:{}",
            report.succeeded(),
            report.exports.len(),
            self.mod_id,
            self.name
        );
        report
    }

    /// Export a single model file of this block's mod
    pub fn export_model(&self, model: &str) -> Result<ExportedModel> {
        check_model_name(model)?;
        let source = self.layout.source_model_path(&self.mod_id, model);
        let child = ModelDocument::load(&source)?;

        let (document, parent) = match child.parent.clone() {
            Some(parent) => {
                let location = ResourceLocation::parse(&parent)?;
                let parent_path = self.layout.model_path(&location);
                let mut document = ModelDocument::load(&parent_path)?;
                document.merge_textures(&child.textures);
                (document, Some(parent_path))
            }
            None => (child, None),
        };

        let mut textures = Vec::new();
        for (slot, value) in document.texture_files() {
            textures.push(self.copy_texture(slot, value)?);
        }

        let dest = self.layout.dest_model_path(&self.mod_id, model);
        document.save(&dest)?;

        Ok(ExportedModel {
            dest,
            parent,
            textures,
        })
    }

    fn copy_texture(&self, slot: &str, value: &str) -> Result<CopiedTexture> {
        let location = ResourceLocation::parse(value)?;
        let source = self.layout.texture_path(&location);
        if !source.is_file() {
            return Err(PixportError::MissingTexture {
                slot: slot.to_string(),
                location: value.to_string(),
                path: source,
            });
        }

        let dest = self.layout.dest_texture_path(&location);
        if let Some(dir) = dest.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::copy(&source, &dest)?;
        log::debug!("Copied texture {} ({}) -> {}", slot, value, dest.display());

        Ok(CopiedTexture {
            slot: slot.to_string(),
            location,
            source,
            dest,
        })
    }
}

/// Model names are plain file names inside `models/block`.
fn check_model_name(model: &str) -> Result<()> {
    let stem = model.strip_suffix(".json").unwrap_or(model);
    if stem.is_empty() || stem == "." || stem == ".." || model.contains(['/', '\\']) {
        return Err(PixportError::InvalidArgument(format!(
            "model name '{}' must be a file name without folders",
            model
        )));
    }
    Ok(())
}
