//! pixport CLI - Texture upscaling and Blockbench export for mod development

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{export, upscale};
use pixport_core::FolderNaming;
use pixport_upscale::MAX_SCALE;

#[derive(Parser)]
#[command(name = "pixport")]
#[command(about = "Texture upscaling and Blockbench model export for Minecraft mods", long_about = None)]
#[command(version)]
struct Cli {
    /// Load settings from this file only (plus PIXPORT_* env vars)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upscale a single image with nearest-neighbor replication
    Upscale {
        /// Source image
        source: String,

        /// Output image (format from extension)
        dest: String,

        /// Integer scale factor, 1 to 4096 (defaults to upscale.scale, 10)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_SCALE as i64))]
        scale: Option<u32>,
    },

    /// Upscale every image in a folder, skipping non-images and subfolders
    UpscaleDir {
        /// Source folder
        source: String,

        /// Output folder (created if missing)
        dest: String,

        /// Integer scale factor, 1 to 4096 (defaults to upscale.scale, 10)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_SCALE as i64))]
        scale: Option<u32>,
    },

    /// Upscale a mod's item (or block) textures into {render_root}/{mod_id}_img/{size}x
    Render {
        /// Mod id (e.g., berry_good)
        mod_id: String,

        /// Use the block texture folder instead of the item one
        #[arg(long)]
        block: bool,

        /// Integer scale factor, 1 to 4096 (defaults to upscale.scale, 10)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_SCALE as i64))]
        scale: Option<u32>,

        /// Override paths.render_root
        #[arg(long)]
        output: Option<String>,

        /// Override paths.mods_root
        #[arg(long)]
        mods_root: Option<String>,

        /// Checkout folder naming (hyphenate or identity)
        #[arg(long)]
        naming: Option<FolderNaming>,
    },

    /// Copy a mod block texture over a vanilla block texture in a resource pack
    Preview {
        /// Mod id
        mod_id: String,

        /// Block texture name inside the mod
        block: String,

        /// Vanilla block texture to replace (e.g., acacia_planks)
        #[arg(long)]
        target: String,

        /// Override paths.resource_pack
        #[arg(long)]
        pack: Option<String>,

        /// Override paths.mods_root
        #[arg(long)]
        mods_root: Option<String>,

        /// Checkout folder naming (hyphenate or identity)
        #[arg(long)]
        naming: Option<FolderNaming>,
    },

    /// Export a block's models and textures into the Blockbench folder
    Export {
        /// Mod id (e.g., neapolitan)
        mod_id: String,

        /// Block name (e.g., adzuki_cake)
        block: String,

        /// Model file to export instead of <block>.json (repeatable)
        #[arg(long = "model")]
        models: Vec<String>,

        /// Checkout folder naming (hyphenate or identity)
        #[arg(long)]
        naming: Option<FolderNaming>,

        /// Override paths.mods_root
        #[arg(long)]
        mods_root: Option<String>,

        /// Override paths.vanilla_root
        #[arg(long)]
        vanilla_root: Option<String>,

        /// Override paths.blockbench_root
        #[arg(long)]
        blockbench_root: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Upscale { source, dest, scale } => {
            upscale::run_file(&config, &source, &dest, scale)
        }
        Commands::UpscaleDir { source, dest, scale } => {
            upscale::run_dir(&config, &source, &dest, scale)
        }
        Commands::Render {
            mod_id,
            block,
            scale,
            output,
            mods_root,
            naming,
        } => upscale::run_render(
            &config,
            upscale::RenderArgs {
                mod_id,
                block,
                scale,
                output,
                mods_root,
                naming,
            },
        ),
        Commands::Preview {
            mod_id,
            block,
            target,
            pack,
            mods_root,
            naming,
        } => upscale::run_preview(
            &config,
            upscale::PreviewArgs {
                mod_id,
                block,
                target,
                pack,
                mods_root,
                naming,
            },
        ),
        Commands::Export {
            mod_id,
            block,
            models,
            naming,
            mods_root,
            vanilla_root,
            blockbench_root,
        } => export::run(
            &config,
            export::ExportArgs {
                mod_id,
                block,
                models,
                naming,
                mods_root,
                vanilla_root,
                blockbench_root,
            },
        ),
    }
}
