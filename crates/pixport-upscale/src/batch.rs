//! Folder-level upscaling
//!
//! Every entry of a source folder is upscaled into the destination folder
//! under the same file name. Subdirectories and files that do not decode as
//! images are skipped and reported; any other failure aborts the batch.

use crate::upscale::{upscale_file, validate_scale};
use pixport_core::{PixportError, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Why an entry was left out of a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The entry is a directory
    NotAFile,
    /// The entry could not be decoded as an image
    Decode(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotAFile => write!(f, "not a file"),
            SkipReason::Decode(msg) => write!(f, "not an image ({})", msg),
        }
    }
}

/// What happened to a single folder entry
#[derive(Debug, Clone)]
pub enum UpscaleOutcome {
    Written { source: PathBuf, dest: PathBuf },
    Skipped { source: PathBuf, reason: SkipReason },
}

impl UpscaleOutcome {
    pub fn source(&self) -> &Path {
        match self {
            UpscaleOutcome::Written { source, .. } | UpscaleOutcome::Skipped { source, .. } => {
                source
            }
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, UpscaleOutcome::Written { .. })
    }
}

/// Result of a folder upscale, one outcome per entry in file-name order
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<UpscaleOutcome>,
}

impl BatchReport {
    pub fn written(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_written()).count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.written()
    }

    pub fn skipped_entries(&self) -> impl Iterator<Item = (&Path, &SkipReason)> {
        self.outcomes.iter().filter_map(|o| match o {
            UpscaleOutcome::Skipped { source, reason } => Some((source.as_path(), reason)),
            UpscaleOutcome::Written { .. } => None,
        })
    }
}

/// Upscale every entry of `source_dir` into `dest_dir`.
pub fn upscale_folder(source_dir: &Path, dest_dir: &Path, scale: u32) -> Result<BatchReport> {
    validate_scale(scale)?;

    let mut entries = fs::read_dir(source_dir)?.collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.file_name());

    fs::create_dir_all(dest_dir)?;

    let mut report = BatchReport::default();
    for entry in entries {
        let source = entry.path();
        let dest = dest_dir.join(entry.file_name());

        match upscale_file(&source, &dest, scale) {
            Ok(()) => report.outcomes.push(UpscaleOutcome::Written { source, dest }),
            Err(e) if e.is_skippable() => {
                let reason = match e {
                    PixportError::DecodeError { message, .. } => SkipReason::Decode(message),
                    _ => SkipReason::NotAFile,
                };
                log::warn!("Skipping {}: {}", source.display(), reason);
                report.outcomes.push(UpscaleOutcome::Skipped { source, reason });
            }
            Err(e) => return Err(e),
        }
    }

    log::info!(
        "Upscaled {} of {} entries from {} into {} (x{})",
        report.written(),
        report.outcomes.len(),
        source_dir.display(),
        dest_dir.display(),
        scale
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pixport_batch_test_{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_png(path: &Path, color: [u8; 4]) {
        RgbaImage::from_pixel(2, 2, Rgba(color)).save(path).unwrap();
    }

    #[test]
    fn test_folder_skips_non_images_and_directories() {
        let root = temp_dir();
        let src = root.join("textures");
        let out = root.join("out");
        fs::create_dir_all(src.join("block")).unwrap();

        write_png(&src.join("apple.png"), [255, 0, 0, 255]);
        write_png(&src.join("berry.png"), [0, 0, 255, 255]);
        fs::write(src.join("berry.png.mcmeta"), b"{\"animation\":{}}").unwrap();
        fs::write(src.join("readme.txt"), b"hello").unwrap();

        let report = upscale_folder(&src, &out, 3).unwrap();

        assert_eq!(report.outcomes.len(), 5);
        assert_eq!(report.written(), 2);
        assert_eq!(report.skipped(), 3);

        let written: Vec<_> = fs::read_dir(&out)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(written.len(), 2);

        let apple = image::open(out.join("apple.png")).unwrap();
        assert_eq!((apple.width(), apple.height()), (6, 6));

        let dir_skip = report
            .skipped_entries()
            .find(|(path, _)| path.ends_with("block"))
            .map(|(_, reason)| reason.clone());
        assert_eq!(dir_skip, Some(SkipReason::NotAFile));

        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_outcomes_in_name_order() {
        let root = temp_dir();
        let src = root.join("item");
        fs::create_dir_all(&src).unwrap();
        write_png(&src.join("c.png"), [1, 2, 3, 255]);
        write_png(&src.join("a.png"), [1, 2, 3, 255]);
        write_png(&src.join("b.png"), [1, 2, 3, 255]);

        let report = upscale_folder(&src, &root.join("out"), 2).unwrap();
        let names: Vec<_> = report
            .outcomes
            .iter()
            .map(|o| o.source().file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.png", "b.png", "c.png"]);

        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_missing_source_folder_is_fatal() {
        let root = temp_dir();
        let err = upscale_folder(&root.join("nope"), &root.join("out"), 2).unwrap_err();
        assert!(matches!(err, PixportError::IoError(_)));
        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_zero_scale_rejected_before_reading() {
        let root = temp_dir();
        let err = upscale_folder(&root, &root.join("out"), 0).unwrap_err();
        assert!(matches!(err, PixportError::InvalidArgument(_)));
        assert!(!root.join("out").exists());
        fs::remove_dir_all(&root).ok();
    }
}
