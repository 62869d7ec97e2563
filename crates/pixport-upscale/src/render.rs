//! Mod texture renders and in-game previews

use crate::batch::{upscale_folder, BatchReport};
use crate::upscale::{open_image, save_image, validate_scale};
use pixport_core::paths::mod_assets_dir;
use pixport_core::{FolderNaming, Result};
use std::path::{Path, PathBuf};

/// Edge length of a vanilla texture in pixels
pub const TEXTURE_SIZE: u32 = 16;

/// Texture folder inside a mod's assets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureKind {
    Item,
    Block,
}

impl TextureKind {
    pub fn folder(&self) -> &'static str {
        match self {
            TextureKind::Item => "item",
            TextureKind::Block => "block",
        }
    }
}

/// Locates textures inside per-mod source checkouts
#[derive(Debug, Clone)]
pub struct ModTextures {
    mods_root: PathBuf,
    naming: FolderNaming,
}

impl ModTextures {
    pub fn new<P: AsRef<Path>>(mods_root: P, naming: FolderNaming) -> Self {
        Self {
            mods_root: mods_root.as_ref().to_path_buf(),
            naming,
        }
    }

    /// `{assets}/textures/{item|block}`
    pub fn texture_dir(&self, mod_id: &str, kind: TextureKind) -> PathBuf {
        mod_assets_dir(&self.mods_root, &self.naming.folder_name(mod_id), mod_id)
            .join("textures")
            .join(kind.folder())
    }

    pub fn texture_path(&self, mod_id: &str, kind: TextureKind, name: &str) -> PathBuf {
        self.texture_dir(mod_id, kind).join(format!("{}.png", name))
    }
}

/// Render folder for a mod at a scale: `{render_root}/{mod_id}_img/{16*scale}x`
pub fn render_dir(render_root: &Path, mod_id: &str, scale: u32) -> Result<PathBuf> {
    validate_scale(scale)?;
    let size = u64::from(TEXTURE_SIZE) * u64::from(scale);
    Ok(render_root
        .join(format!("{}_img", mod_id))
        .join(format!("{}x", size)))
}

/// Upscale a whole item or block texture folder of a mod into its render folder.
pub fn render_mod_textures(
    textures: &ModTextures,
    mod_id: &str,
    kind: TextureKind,
    render_root: &Path,
    scale: u32,
) -> Result<BatchReport> {
    let dest = render_dir(render_root, mod_id, scale)?;
    let source = textures.texture_dir(mod_id, kind);
    log::info!(
        "Rendering {} {} textures into {}",
        mod_id,
        kind.folder(),
        dest.display()
    );
    upscale_folder(&source, &dest, scale)
}

/// Copy a mod block texture over a vanilla block texture of a resource pack.
///
/// Returns the path that was written.
pub fn stage_preview(
    textures: &ModTextures,
    mod_id: &str,
    block: &str,
    resource_pack: &Path,
    target: &str,
) -> Result<PathBuf> {
    let source = textures.texture_path(mod_id, TextureKind::Block, block);
    let dest = resource_pack
        .join("assets/minecraft/textures/block")
        .join(format!("{}.png", target));

    let (image, format) = open_image(&source)?;
    save_image(&image, &dest, format)?;

    log::debug!("Staged {} over {}", source.display(), dest.display());
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use pixport_core::PixportError;
    use std::fs;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pixport_render_test_{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_render_dir_names_output_size() {
        let root = Path::new("/wiki");
        assert_eq!(
            render_dir(root, "berry_good", 2).unwrap(),
            PathBuf::from("/wiki/berry_good_img/32x")
        );
        assert_eq!(
            render_dir(root, "berry_good", 10).unwrap(),
            PathBuf::from("/wiki/berry_good_img/160x")
        );
        assert!(render_dir(root, "berry_good", 0).is_err());
    }

    #[test]
    fn test_texture_dir_uses_folder_naming() {
        let textures = ModTextures::new("/code", FolderNaming::Hyphenate);
        assert_eq!(
            textures.texture_dir("caverns_and_chasms", TextureKind::Item),
            PathBuf::from(
                "/code/caverns-and-chasms/src/main/resources/assets/caverns_and_chasms/textures/item"
            )
        );
    }

    #[test]
    fn test_render_mod_textures() {
        let root = temp_dir();
        let textures = ModTextures::new(root.join("code"), FolderNaming::Hyphenate);
        let item_dir = textures.texture_dir("berry_good", TextureKind::Item);
        fs::create_dir_all(&item_dir).unwrap();
        RgbaImage::from_pixel(16, 16, Rgba([10, 200, 30, 255]))
            .save(item_dir.join("sweet_berry_pips.png"))
            .unwrap();

        let render_root = root.join("wiki");
        let report =
            render_mod_textures(&textures, "berry_good", TextureKind::Item, &render_root, 2)
                .unwrap();
        assert_eq!(report.written(), 1);

        let out = image::open(render_root.join("berry_good_img/32x/sweet_berry_pips.png")).unwrap();
        assert_eq!((out.width(), out.height()), (32, 32));

        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_stage_preview() {
        let root = temp_dir();
        let textures = ModTextures::new(root.join("code"), FolderNaming::Identity);
        let source = textures.texture_path("neapolitan", TextureKind::Block, "adzuki_crate");
        fs::create_dir_all(source.parent().unwrap()).unwrap();
        let src = RgbaImage::from_pixel(16, 16, Rgba([120, 40, 40, 255]));
        src.save(&source).unwrap();

        let pack = root.join("pack");
        let dest = stage_preview(&textures, "neapolitan", "adzuki_crate", &pack, "acacia_planks")
            .unwrap();

        assert_eq!(dest, pack.join("assets/minecraft/textures/block/acacia_planks.png"));
        assert_eq!(image::open(&dest).unwrap().to_rgba8(), src);

        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_stage_preview_missing_texture() {
        let root = temp_dir();
        let textures = ModTextures::new(root.join("code"), FolderNaming::Identity);
        let err = stage_preview(&textures, "neapolitan", "nope", &root, "stone").unwrap_err();
        assert!(matches!(err, PixportError::IoError(_)));
        fs::remove_dir_all(&root).ok();
    }
}
