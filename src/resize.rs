use crate::bitmap::{Bitmap, PixelFormat};
use crate::error::{ConvertError, Result};
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageReader, Rgba32FImage};
use std::io::{Error, ErrorKind};
use std::path::Path;

/// Decodes the raster image at `path` into a bitmap in its native pixel
/// format (8 bits per channel).  The container format is guessed from the
/// file's content, so the extension does not matter.
pub fn decode(path: &Path) -> Result<Bitmap> {
    let decode_error = |source| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    };
    let decoded = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(decode_error)?;
    let (width, height) = (decoded.width(), decoded.height());
    let bitmap = match decoded {
        DynamicImage::ImageRgba8(buffer) => {
            Bitmap::from_raw(PixelFormat::RGBA, width, height, buffer.into_raw())
        }
        DynamicImage::ImageRgb8(buffer) => {
            Bitmap::from_raw(PixelFormat::RGB, width, height, buffer.into_raw())
        }
        DynamicImage::ImageLumaA8(buffer) => {
            Bitmap::from_raw(PixelFormat::GrayAlpha,
                             width,
                             height,
                             buffer.into_raw())
        }
        DynamicImage::ImageLuma8(buffer) => {
            Bitmap::from_raw(PixelFormat::Gray, width, height, buffer.into_raw())
        }
        // Wider sample types are narrowed to 8 bits, keeping any alpha.
        other if other.color().has_alpha() => {
            Bitmap::from_raw(PixelFormat::RGBA,
                             width,
                             height,
                             other.to_rgba8().into_raw())
        }
        other => {
            Bitmap::from_raw(PixelFormat::RGB,
                             width,
                             height,
                             other.to_rgb8().into_raw())
        }
    };
    Ok(bitmap?)
}

/// Resamples a bitmap to exactly `width`x`height` pixels with a Lanczos
/// filter.  Bitmaps without an alpha channel are converted to RGBA first, so
/// the result is always RGBA.  Aspect ratio is not preserved.
///
/// Filtering happens on premultiplied colour, so fully transparent pixels
/// contribute nothing to the colour of their neighbours.
pub fn resample(bitmap: &Bitmap, width: u32, height: u32) -> Result<Bitmap> {
    let rgba = if bitmap.pixel_format() == PixelFormat::RGBA {
        bitmap.clone()
    } else {
        bitmap.to_rgba()
    };
    let (source_width, source_height) = (rgba.width(), rgba.height());
    let buffer = Rgba32FImage::from_raw(source_width,
                                        source_height,
                                        premultiply(rgba.data()))
        .ok_or_else(|| {
            Error::new(ErrorKind::InvalidData, "pixel buffer too small")
        })?;
    let resized = imageops::resize(&buffer, width, height, FilterType::Lanczos3);
    Ok(Bitmap::from_raw(PixelFormat::RGBA,
                        width,
                        height,
                        demultiply(resized.as_raw()))?)
}

/// Converts straight 8-bit RGBA into premultiplied floats in `0.0..=1.0`.
fn premultiply(rgba: &[u8]) -> Vec<f32> {
    let mut out = Vec::with_capacity(rgba.len());
    for pixel in rgba.chunks_exact(4) {
        let alpha = pixel[3] as f32 / 255.0;
        for &channel in &pixel[..3] {
            out.push(channel as f32 / 255.0 * alpha);
        }
        out.push(alpha);
    }
    out
}

/// Converts premultiplied floats back into straight 8-bit RGBA.  Lanczos can
/// overshoot, so every channel is clamped.
fn demultiply(premultiplied: &[f32]) -> Vec<u8> {
    let to_u8 = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
    let mut out = Vec::with_capacity(premultiplied.len());
    for pixel in premultiplied.chunks_exact(4) {
        let alpha = pixel[3].clamp(0.0, 1.0);
        let alpha_byte = to_u8(alpha);
        if alpha_byte == 0 {
            out.extend_from_slice(&[0, 0, 0, 0]);
            continue;
        }
        for &channel in &pixel[..3] {
            out.push(to_u8(channel / alpha));
        }
        out.push(alpha_byte);
    }
    out
}

/// Decodes the raster image at `path` and resamples it to `width`x`height`.
pub fn resize(path: &Path, width: u32, height: u32) -> Result<Bitmap> {
    resample(&decode(path)?, width, height)
}

/// Resizes the raster image at `path` and writes the result to `output` as
/// PNG.
pub fn resize_to_png(path: &Path,
                     width: u32,
                     height: u32,
                     output: &Path)
                     -> Result<()> {
    resize(path, width, height)?.save_png(output)?;
    Ok(())
}
