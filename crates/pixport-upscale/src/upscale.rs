//! Nearest-neighbor upscaling of a single image

use image::{DynamicImage, ImageBuffer, ImageError, ImageFormat, ImageReader, Pixel};
use pixport_core::{PixportError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Largest accepted scale factor
pub const MAX_SCALE: u32 = 4096;

/// Largest accepted output image, in pixels (16384 x 16384)
pub const MAX_OUTPUT_PIXELS: u64 = 1 << 28;

/// Output dimensions for `scale`, rejecting outputs that cannot be allocated.
///
/// Fails when either side overflows `u32`, the pixel count exceeds
/// [`MAX_OUTPUT_PIXELS`], or the sample buffer length overflows `usize`.
pub(crate) fn scaled_dimensions(
    width: u32,
    height: u32,
    scale: u32,
    channels: u8,
) -> Result<(u32, u32)> {
    validate_scale(scale)?;

    let too_large = || {
        PixportError::InvalidArgument(format!(
            "scale {} is too large for a {}x{} image",
            scale, width, height
        ))
    };
    let out_width = width.checked_mul(scale).ok_or_else(too_large)?;
    let out_height = height.checked_mul(scale).ok_or_else(too_large)?;

    let pixels = u64::from(out_width) * u64::from(out_height);
    if pixels > MAX_OUTPUT_PIXELS {
        return Err(too_large());
    }
    usize::try_from(pixels)
        .ok()
        .and_then(|p| p.checked_mul(usize::from(channels)))
        .ok_or_else(too_large)?;

    Ok((out_width, out_height))
}

pub(crate) fn validate_scale(scale: u32) -> Result<()> {
    if scale == 0 {
        return Err(PixportError::InvalidArgument(
            "scale must be a positive integer, got 0".to_string(),
        ));
    }
    if scale > MAX_SCALE {
        return Err(PixportError::InvalidArgument(format!(
            "scale {} exceeds the maximum of {}",
            scale, MAX_SCALE
        )));
    }
    Ok(())
}

/// Replicate every source pixel into a `scale x scale` block.
///
/// Output pixel `(x, y)` equals source pixel `(x / scale, y / scale)`.
pub fn upscale_buffer<P>(
    src: &ImageBuffer<P, Vec<P::Subpixel>>,
    scale: u32,
) -> Result<ImageBuffer<P, Vec<P::Subpixel>>>
where
    P: Pixel,
{
    let (width, height) =
        scaled_dimensions(src.width(), src.height(), scale, P::CHANNEL_COUNT)?;
    let mut out = ImageBuffer::new(width, height);

    for (x, y, pixel) in src.enumerate_pixels() {
        let (x0, y0) = (x * scale, y * scale);
        for dy in 0..scale {
            for dx in 0..scale {
                out.put_pixel(x0 + dx, y0 + dy, *pixel);
            }
        }
    }

    Ok(out)
}

/// Upscale a decoded image, keeping its pixel type (and so its channel count).
pub fn upscale(image: &DynamicImage, scale: u32) -> Result<DynamicImage> {
    let scaled = match image {
        DynamicImage::ImageLuma8(buf) => DynamicImage::ImageLuma8(upscale_buffer(buf, scale)?),
        DynamicImage::ImageLumaA8(buf) => DynamicImage::ImageLumaA8(upscale_buffer(buf, scale)?),
        DynamicImage::ImageRgb8(buf) => DynamicImage::ImageRgb8(upscale_buffer(buf, scale)?),
        DynamicImage::ImageRgba8(buf) => DynamicImage::ImageRgba8(upscale_buffer(buf, scale)?),
        DynamicImage::ImageLuma16(buf) => DynamicImage::ImageLuma16(upscale_buffer(buf, scale)?),
        DynamicImage::ImageLumaA16(buf) => {
            DynamicImage::ImageLumaA16(upscale_buffer(buf, scale)?)
        }
        DynamicImage::ImageRgb16(buf) => DynamicImage::ImageRgb16(upscale_buffer(buf, scale)?),
        DynamicImage::ImageRgba16(buf) => DynamicImage::ImageRgba16(upscale_buffer(buf, scale)?),
        DynamicImage::ImageRgb32F(buf) => DynamicImage::ImageRgb32F(upscale_buffer(buf, scale)?),
        DynamicImage::ImageRgba32F(buf) => {
            DynamicImage::ImageRgba32F(upscale_buffer(buf, scale)?)
        }
        other => DynamicImage::ImageRgba8(upscale_buffer(&other.to_rgba8(), scale)?),
    };
    Ok(scaled)
}

/// Decode an image, guessing the format from its contents.
///
/// Returns the detected format alongside the image so callers can re-encode
/// to destinations without a recognizable extension.
pub fn open_image(path: &Path) -> Result<(DynamicImage, Option<ImageFormat>)> {
    if path.is_dir() {
        return Err(PixportError::NotAFile(path.to_path_buf()));
    }

    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = reader.format();
    let image = reader.decode().map_err(|e| decode_error(path, e))?;
    Ok((image, format))
}

/// Encode an image, creating the destination directory chain first.
///
/// The format comes from the destination extension, falling back to `fallback`.
pub fn save_image(image: &DynamicImage, path: &Path, fallback: Option<ImageFormat>) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let format = ImageFormat::from_path(path)
        .ok()
        .or(fallback)
        .ok_or_else(|| PixportError::EncodeError {
            path: path.to_path_buf(),
            message: "cannot determine output format".to_string(),
        })?;

    image.save_with_format(path, format).map_err(|e| match e {
        ImageError::IoError(io) => PixportError::IoError(io),
        other => PixportError::EncodeError {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    })
}

/// Read `source`, upscale it by `scale`, and write the result to `dest`.
pub fn upscale_file(source: &Path, dest: &Path, scale: u32) -> Result<()> {
    validate_scale(scale)?;

    let (image, format) = open_image(source)?;
    let scaled = upscale(&image, scale)?;
    save_image(&scaled, dest, format)?;

    log::debug!(
        "Upscaled {} ({}x{}) -> {} ({}x{})",
        source.display(),
        image.width(),
        image.height(),
        dest.display(),
        scaled.width(),
        scaled.height()
    );
    Ok(())
}

/// Undecodable content is a decode failure; other I/O problems stay I/O errors.
fn decode_error(path: &Path, err: ImageError) -> PixportError {
    match err {
        ImageError::IoError(io)
            if !matches!(io.kind(), ErrorKind::InvalidData | ErrorKind::UnexpectedEof) =>
        {
            PixportError::IoError(io)
        }
        other => PixportError::DecodeError {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgba, RgbaImage};
    use std::path::PathBuf;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pixport_upscale_test_{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn checkerboard(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x * 40) as u8, (y * 40) as u8, ((x + y) % 2 * 255) as u8, 200])
        })
    }

    #[test]
    fn test_upscale_dimensions_and_blocks() {
        let src = checkerboard(3, 2);
        let scale = 4;
        let out = upscale_buffer(&src, scale).unwrap();

        assert_eq!(out.dimensions(), (12, 8));
        for (x, y, pixel) in out.enumerate_pixels() {
            assert_eq!(pixel, src.get_pixel(x / scale, y / scale));
        }
    }

    #[test]
    fn test_scale_one_is_identity() {
        let src = checkerboard(5, 4);
        let out = upscale_buffer(&src, 1).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn test_zero_scale_rejected() {
        let src = checkerboard(2, 2);
        let err = upscale_buffer(&src, 0).unwrap_err();
        assert!(matches!(err, PixportError::InvalidArgument(_)));
    }

    #[test]
    fn test_overflowing_scale_rejected() {
        let src = GrayImage::new(2, 2);
        let err = upscale_buffer(&src, u32::MAX).unwrap_err();
        assert!(matches!(err, PixportError::InvalidArgument(_)));
    }

    #[test]
    fn test_huge_scale_on_single_pixel_rejected() {
        let src = RgbaImage::new(1, 1);
        let err = upscale_buffer(&src, 1 << 31).unwrap_err();
        assert!(matches!(err, PixportError::InvalidArgument(_)));
    }

    #[test]
    fn test_output_pixel_budget() {
        let src = RgbaImage::new(16, 16);
        let err = upscale_buffer(&src, MAX_SCALE).unwrap_err();
        assert!(matches!(err, PixportError::InvalidArgument(ref msg) if msg.contains("16x16")));

        // 16 * 1024 = 16384 per side is exactly the budget
        assert_eq!(scaled_dimensions(16, 16, 1024, 4).unwrap(), (16384, 16384));
        assert!(scaled_dimensions(16, 16, 1025, 4).is_err());
    }

    #[test]
    fn test_scale_limit() {
        assert!(validate_scale(MAX_SCALE).is_ok());
        let err = validate_scale(MAX_SCALE + 1).unwrap_err();
        assert!(matches!(err, PixportError::InvalidArgument(_)));
    }

    #[test]
    fn test_upscale_file_checks_scale_before_reading() {
        let dir = temp_dir();
        let err = upscale_file(&dir.join("missing.png"), &dir.join("out.png"), 1 << 31).unwrap_err();
        assert!(matches!(err, PixportError::InvalidArgument(_)));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_channel_count_preserved() {
        let gray = DynamicImage::ImageLuma8(GrayImage::from_pixel(2, 2, Luma([77])));
        let out = upscale(&gray, 3).unwrap();
        assert_eq!(out.color(), image::ColorType::L8);
        assert_eq!((out.width(), out.height()), (6, 6));

        let rgba = DynamicImage::ImageRgba8(checkerboard(2, 2));
        let out = upscale(&rgba, 3).unwrap();
        assert_eq!(out.color(), image::ColorType::Rgba8);
    }

    #[test]
    fn test_upscale_file_roundtrip() {
        let dir = temp_dir();
        let source = dir.join("stone.png");
        let dest = dir.join("out/nested/stone.png");
        let src = checkerboard(4, 4);
        src.save(&source).unwrap();

        upscale_file(&source, &dest, 10).unwrap();

        let written = image::open(&dest).unwrap().to_rgba8();
        assert_eq!(written.dimensions(), (40, 40));
        assert_eq!(written.get_pixel(39, 0), src.get_pixel(3, 0));
        assert_eq!(written.get_pixel(15, 25), src.get_pixel(1, 2));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_undecodable_file_is_decode_error() {
        let dir = temp_dir();
        let source = dir.join("notes.txt");
        fs::write(&source, b"not an image").unwrap();

        let err = upscale_file(&source, &dir.join("notes_out.txt"), 2).unwrap_err();
        assert!(matches!(err, PixportError::DecodeError { .. }));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = temp_dir();
        let sub = dir.join("block");
        fs::create_dir_all(&sub).unwrap();

        let err = upscale_file(&sub, &dir.join("out"), 2).unwrap_err();
        assert!(matches!(err, PixportError::NotAFile(_)));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_extensionless_destination_uses_source_format() {
        let dir = temp_dir();
        let source = dir.join("leaf.png");
        checkerboard(2, 2).save(&source).unwrap();

        let dest = dir.join("leaf_big");
        upscale_file(&source, &dest, 2).unwrap();
        let (image, format) = open_image(&dest).unwrap();
        assert_eq!(format, Some(ImageFormat::Png));
        assert_eq!((image.width(), image.height()), (4, 4));

        fs::remove_dir_all(&dir).ok();
    }
}
