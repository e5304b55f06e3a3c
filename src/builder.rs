use crate::appimage::AppImage;
use crate::density::Density;
use crate::detect::SourceFormat;
use crate::error::{ConvertError, Result};
use crate::bitmap::Bitmap;
use crate::resize;
use crate::svg::{SvgDocument, SvgRenderer};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// One entry of a fixed output table: a file to generate and its size.
pub trait Target: Copy + Ord + fmt::Display {
    /// Name of the generated file within the output directory.
    fn file_name(&self) -> String;

    /// Pixel dimensions of the generated file, as `(width, height)`.
    fn dimensions(&self) -> (u32, u32);
}

impl Target for Density {
    fn file_name(&self) -> String {
        format!("ic_launcher_{}.png", self)
    }

    fn dimensions(&self) -> (u32, u32) {
        (self.icon_size(), self.icon_size())
    }
}

impl Target for AppImage {
    fn file_name(&self) -> String {
        AppImage::file_name(*self).to_string()
    }

    fn dimensions(&self) -> (u32, u32) {
        AppImage::dimensions(*self)
    }
}

/// A source image loaded once and rendered at every target size.
enum Loaded {
    Svg(SvgDocument),
    Raster(Bitmap),
}

impl Loaded {
    fn open(source: &Path,
            format: SourceFormat,
            renderer: Option<SvgRenderer>)
            -> Result<Loaded> {
        match format {
            SourceFormat::Svg => {
                Ok(Loaded::Svg(SvgDocument::load(source, renderer)?))
            }
            SourceFormat::Raster => Ok(Loaded::Raster(resize::decode(source)?)),
            SourceFormat::Unknown => {
                Err(ConvertError::UnsupportedFormat(source.to_path_buf()))
            }
        }
    }

    fn render_to_png(&self, width: u32, height: u32, output: &Path) -> Result<()> {
        match *self {
            Loaded::Svg(ref document) => {
                document.render_to_png(width, height, output)
            }
            Loaded::Raster(ref bitmap) => {
                resize::resample(bitmap, width, height)?.save_png(output)?;
                Ok(())
            }
        }
    }
}

/// Renders `source` once per target into `out_dir`, returning the path of
/// each generated PNG keyed by its target.  The source is parsed or decoded
/// once.  Fails before writing anything if `format` is not convertible or
/// the source cannot be loaded, and stops at the first failed target.
pub fn build_set<T: Target>(targets: &[T],
                            source: &Path,
                            format: SourceFormat,
                            out_dir: &Path,
                            renderer: Option<SvgRenderer>)
                            -> Result<BTreeMap<T, PathBuf>> {
    let loaded = Loaded::open(source, format, renderer)?;
    fs::create_dir_all(out_dir)?;
    let mut outputs = BTreeMap::new();
    for &target in targets {
        let output = out_dir.join(target.file_name());
        let (width, height) = target.dimensions();
        loaded.render_to_png(width, height, &output)?;
        info!("✓ Created {} ({}x{}): {}",
              target,
              width,
              height,
              output.display());
        outputs.insert(target, output);
    }
    Ok(outputs)
}

/// Generates the launcher icon for every density bucket into `out_dir`.
pub fn build_icon_set(source: &Path,
                      format: SourceFormat,
                      out_dir: &Path,
                      renderer: Option<SvgRenderer>)
                      -> Result<BTreeMap<Density, PathBuf>> {
    info!("Converting {} to PNG files...", source.display());
    build_set(&Density::ALL, source, format, out_dir, renderer)
}

/// Generates every app image into `assets_dir`.
pub fn build_app_images(source: &Path,
                        format: SourceFormat,
                        assets_dir: &Path,
                        renderer: Option<SvgRenderer>)
                        -> Result<BTreeMap<AppImage, PathBuf>> {
    info!("Creating Flutter app images...");
    build_set(&AppImage::ALL, source, format, assets_dir, renderer)
}
