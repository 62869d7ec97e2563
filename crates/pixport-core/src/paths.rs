//! Source tree layout shared by both tools

use std::path::{Path, PathBuf};

/// Assets folder inside a mod checkout:
/// `{mods_root}/{folder}/src/main/resources/assets/{mod_id}`
pub fn mod_assets_dir(mods_root: &Path, folder: &str, mod_id: &str) -> PathBuf {
    mods_root
        .join(folder)
        .join("src/main/resources/assets")
        .join(mod_id)
}

/// Assets folder of the vanilla namespace: `{vanilla_root}/assets/minecraft`
pub fn vanilla_assets_dir(vanilla_root: &Path) -> PathBuf {
    vanilla_root.join("assets").join("minecraft")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mod_assets_dir() {
        let dir = mod_assets_dir(Path::new("/code"), "berry-good", "berry_good");
        assert_eq!(
            dir,
            PathBuf::from("/code/berry-good/src/main/resources/assets/berry_good")
        );
    }

    #[test]
    fn test_vanilla_assets_dir() {
        assert_eq!(
            vanilla_assets_dir(Path::new("/vanilla")),
            PathBuf::from("/vanilla/assets/minecraft")
        );
    }
}
