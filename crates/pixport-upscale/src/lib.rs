//! pixport Upscale - Nearest-neighbor texture upscaling
//!
//! Single images, whole folders, and per-mod render folders are scaled up by
//! an integer factor, each source pixel becoming a `scale x scale` block.

mod batch;
mod render;
mod upscale;

pub use batch::{upscale_folder, BatchReport, SkipReason, UpscaleOutcome};
pub use render::{render_dir, render_mod_textures, stage_preview, ModTextures, TextureKind, TEXTURE_SIZE};
pub use upscale::{
    open_image, save_image, upscale, upscale_buffer, upscale_file, MAX_OUTPUT_PIXELS, MAX_SCALE,
};
