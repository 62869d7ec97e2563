//! Blockbench export command

use super::path_or_config;
use anyhow::Result;
use pixport_core::{FolderNaming, PixportConfig};
use pixport_relocate::{AssetLayout, ExportRoots, RenderableBlock};

pub struct ExportArgs {
    pub mod_id: String,
    pub block: String,
    pub models: Vec<String>,
    pub naming: Option<FolderNaming>,
    pub mods_root: Option<String>,
    pub vanilla_root: Option<String>,
    pub blockbench_root: Option<String>,
}

pub fn run(config: &PixportConfig, args: ExportArgs) -> Result<()> {
    let roots = ExportRoots {
        mods_root: path_or_config(args.mods_root.as_deref(), || config.mods_root())?,
        vanilla_root: path_or_config(args.vanilla_root.as_deref(), || config.vanilla_root())?,
        blockbench_root: path_or_config(args.blockbench_root.as_deref(), || {
            config.blockbench_root()
        })?,
    };
    let layout = AssetLayout::new(roots)
        .with_folder_naming(args.naming.unwrap_or(config.export.folder_naming))
        .with_vanilla_texture_subdir(config.export.vanilla_texture_subdir.clone());

    let block = RenderableBlock::new(&args.mod_id, &args.block, layout).with_model_names(args.models);

    println!(
        "Exporting {}:{} ({} model{})",
        block.mod_id(),
        block.name(),
        block.model_names().len(),
        if block.model_names().len() == 1 { "" } else { "s" }
    );

    let report = block.write_files();
    for export in &report.exports {
        match &export.result {
            Ok(model) => {
                println!("  {} -> {}", export.model, model.dest.display());
                if let Some(parent) = &model.parent {
                    println!("    parent: {}", parent.display());
                }
                for texture in &model.textures {
                    println!(
                        "    {} = {} -> {}",
                        texture.slot,
                        texture.location,
                        texture.dest.display()
                    );
                }
            }
            Err(e) => println!("  {} FAILED: {}", export.model, e),
        }
    }

    if !report.is_success() {
        anyhow::bail!(
            "{} of {} models failed to export",
            report.failed(),
            report.exports.len()
        );
    }

    println!("Exported {} models", report.succeeded());
    Ok(())
}
