//! Upscaling commands

use super::path_or_config;
use anyhow::Result;
use pixport_core::{FolderNaming, PixportConfig};
use pixport_upscale::{
    render_mod_textures, stage_preview, upscale_file, upscale_folder, BatchReport, ModTextures,
    TextureKind,
};
use std::path::Path;

pub struct RenderArgs {
    pub mod_id: String,
    pub block: bool,
    pub scale: Option<u32>,
    pub output: Option<String>,
    pub mods_root: Option<String>,
    pub naming: Option<FolderNaming>,
}

pub struct PreviewArgs {
    pub mod_id: String,
    pub block: String,
    pub target: String,
    pub pack: Option<String>,
    pub mods_root: Option<String>,
    pub naming: Option<FolderNaming>,
}

pub fn run_file(config: &PixportConfig, source: &str, dest: &str, scale: Option<u32>) -> Result<()> {
    let scale = scale.unwrap_or(config.upscale.scale);
    upscale_file(Path::new(source), Path::new(dest), scale)?;
    println!("Upscaled {} -> {} (x{})", source, dest, scale);
    Ok(())
}

pub fn run_dir(config: &PixportConfig, source: &str, dest: &str, scale: Option<u32>) -> Result<()> {
    let scale = scale.unwrap_or(config.upscale.scale);
    let report = upscale_folder(Path::new(source), Path::new(dest), scale)?;
    print_report(&report, dest);
    Ok(())
}

pub fn run_render(config: &PixportConfig, args: RenderArgs) -> Result<()> {
    let scale = args.scale.unwrap_or(config.upscale.scale);
    let render_root = path_or_config(args.output.as_deref(), || config.render_root())?;
    let textures = mod_textures(config, args.mods_root.as_deref(), args.naming)?;
    let kind = if args.block {
        TextureKind::Block
    } else {
        TextureKind::Item
    };

    println!(
        "Rendering {} {} textures from {}",
        args.mod_id,
        kind.folder(),
        textures.texture_dir(&args.mod_id, kind).display()
    );
    let dest = pixport_upscale::render_dir(&render_root, &args.mod_id, scale)?;
    let report = render_mod_textures(&textures, &args.mod_id, kind, &render_root, scale)?;
    print_report(&report, &dest.display().to_string());
    Ok(())
}

pub fn run_preview(config: &PixportConfig, args: PreviewArgs) -> Result<()> {
    let pack = path_or_config(args.pack.as_deref(), || config.resource_pack())?;
    let textures = mod_textures(config, args.mods_root.as_deref(), args.naming)?;

    let written = stage_preview(&textures, &args.mod_id, &args.block, &pack, &args.target)?;
    println!(
        "Staged {}:{} as {} -> {}",
        args.mod_id,
        args.block,
        args.target,
        written.display()
    );
    Ok(())
}

fn mod_textures(
    config: &PixportConfig,
    mods_root: Option<&str>,
    naming: Option<FolderNaming>,
) -> Result<ModTextures> {
    let mods_root = path_or_config(mods_root, || config.mods_root())?;
    let naming = naming.unwrap_or(config.export.folder_naming);
    Ok(ModTextures::new(mods_root, naming))
}

fn print_report(report: &BatchReport, dest: &str) {
    for (path, reason) in report.skipped_entries() {
        println!("  skipped {}: {}", path.display(), reason);
    }
    println!(
        "Upscaled {} images into {} ({} skipped)",
        report.written(),
        dest,
        report.skipped()
    );
}
