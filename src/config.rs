use crate::svg::SvgRenderer;
use std::path::{Path, PathBuf};

/// Scratch directory for the generated launcher icons.
pub const TEMP_DIR: &str = "temp_icons";

/// Where the Flutter app loads its images from.
pub const ASSETS_DIR: &str = "assets/images";

/// Root of the Android app's resources.
pub const ANDROID_RES_DIR: &str = "android/app/src/main/res";

/// Directory layout of the Flutter project being updated.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Layout {
    /// Scratch directory, removed at the end of every run.
    pub temp_dir: PathBuf,
    /// Directory receiving the app images.
    pub assets_dir: PathBuf,
    /// Android resource root holding the `mipmap-*` folders.
    pub android_res_dir: PathBuf,
}

impl Layout {
    /// Resolves the standard layout against a project root.
    pub fn new(project_root: &Path) -> Layout {
        Layout {
            temp_dir: project_root.join(TEMP_DIR),
            assets_dir: project_root.join(ASSETS_DIR),
            android_res_dir: project_root.join(ANDROID_RES_DIR),
        }
    }
}

impl Default for Layout {
    fn default() -> Layout {
        Layout::new(Path::new("."))
    }
}

/// Everything a conversion run needs besides the source image.
#[derive(Clone, Debug)]
pub struct Config {
    /// Where outputs go.
    pub layout: Layout,
    /// The SVG renderer to use, or `None` if this build has none.
    pub svg_renderer: Option<SvgRenderer>,
}

impl Config {
    /// Configuration for the project at `project_root`, using the best SVG
    /// renderer compiled into this build.
    pub fn new(project_root: &Path) -> Config {
        Config {
            layout: Layout::new(project_root),
            svg_renderer: SvgRenderer::detect(),
        }
    }
}
