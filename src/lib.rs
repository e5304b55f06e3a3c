//! Turns a single source image (SVG, PNG, JPEG, BMP, TIFF or WebP) into the
//! launcher icons of an Android app and the logo images of its Flutter UI.
//!
//! A run detects the source format, renders one PNG per density bucket into
//! a scratch directory, renders the app images into `assets/images`, copies
//! the launcher icons into the `mipmap-*` resource folders and finally
//! removes the scratch directory, whether or not the earlier steps worked.

#![warn(missing_docs)]

mod appimage;
mod bitmap;
mod builder;
mod cleanup;
mod config;
mod density;
mod detect;
mod error;
mod install;
mod pngio;
mod resize;
mod svg;

pub use appimage::AppImage;
pub use bitmap::{Bitmap, PixelFormat};
pub use builder::{build_app_images, build_icon_set, build_set, Target};
pub use cleanup::TempDirGuard;
pub use config::{Config, Layout};
pub use density::Density;
pub use detect::SourceFormat;
pub use error::{ConvertError, Result};
pub use install::{install_icons, launcher_icon_path, LAUNCHER_ICON_NAME};
pub use resize::{resize, resize_to_png};
pub use svg::{rasterize_to_png, SvgDocument, SvgRenderer};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// What a completed run produced.
#[derive(Debug)]
pub struct Report {
    /// How the source image was classified.
    pub format: SourceFormat,
    /// Generated launcher icons, keyed by density.  These lived in the
    /// scratch directory, which is gone once `run` returns.
    pub icons: BTreeMap<Density, PathBuf>,
    /// Generated app images.
    pub app_images: BTreeMap<AppImage, PathBuf>,
    /// Whether every launcher icon was copied into its mipmap folder.
    pub icons_installed: bool,
}

impl Report {
    /// Returns true if every step of the run succeeded.
    pub fn is_success(&self) -> bool {
        self.icons_installed
    }

    /// Logs the summary of created files and what to do next.
    pub fn log(&self) {
        if self.icons_installed {
            info!("✅ Successfully updated all Android mipmap icons!");
        } else {
            error!("❌ Failed to replace some Android icons");
        }
        info!("✅ Successfully created all Flutter app images!");
        info!("Files created:");
        info!("📱 Android Icons:");
        for density in self.icons.keys() {
            let size = density.icon_size();
            info!("   - {}/{} ({}x{})",
                  density.mipmap_dir(),
                  LAUNCHER_ICON_NAME,
                  size,
                  size);
        }
        info!("🖼️  Flutter App Images:");
        for (image, path) in &self.app_images {
            let (width, height) = image.dimensions();
            match image.usage() {
                Some(usage) => {
                    info!("   - {} ({}x{}) - {}",
                          path.display(),
                          width,
                          height,
                          usage)
                }
                None => info!("   - {} ({}x{})", path.display(), width, height),
            }
        }
        info!("🚀 Next steps:");
        info!("1. Run: flutter clean");
        info!("2. Run: flutter build apk");
        info!("3. Install the APK to see your new icon");
        info!("4. Run: flutter run to see the updated app images");
    }
}

/// Runs the whole conversion for `source`.
///
/// Returns an error if the source cannot be converted or an output cannot
/// be written.  Failing to install the launcher icons is not an error here;
/// it is logged and reflected in [`Report::icons_installed`].  The scratch
/// directory is removed before this returns in every case.
pub fn run(source: &Path, config: &Config) -> Result<Report> {
    let layout = &config.layout;
    let _cleanup = TempDirGuard::new(&layout.temp_dir);

    if !source.exists() {
        return Err(ConvertError::NotFound(source.to_path_buf()));
    }
    let format = SourceFormat::detect(source);
    if format == SourceFormat::Unknown {
        return Err(ConvertError::UnsupportedFormat(source.to_path_buf()));
    }
    info!("Detected format: {}", format);
    if format == SourceFormat::Svg {
        if let Some(renderer) = config.svg_renderer {
            info!("Rendering SVG with {}", renderer);
        }
    }

    let icons = build_icon_set(source,
                               format,
                               &layout.temp_dir,
                               config.svg_renderer)?;
    let app_images = build_app_images(source,
                                      format,
                                      &layout.assets_dir,
                                      config.svg_renderer)?;
    let icons_installed = match install_icons(&layout.android_res_dir, &icons) {
        Ok(()) => true,
        Err(err) => {
            error!("❌ {}", err);
            false
        }
    };

    let report = Report {
        format,
        icons,
        app_images,
        icons_installed,
    };
    report.log();
    Ok(report)
}
