use std::io;
use std::path::PathBuf;

/// Everything that can stop a conversion run.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The source image does not exist.
    #[error("Image file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The source is neither SVG nor a supported raster format.
    #[error("Unsupported file format for: {}\n\
             Supported formats: SVG, PNG, JPG, JPEG, BMP, TIFF, WEBP",
            .0.display())]
    UnsupportedFormat(PathBuf),

    /// The input is an SVG but no SVG renderer was compiled in.
    #[error("SVG conversion requires an SVG renderer, but none is available.\n\
             Options:\n\
             1. Rebuild with the primary renderer: cargo install --features resvg\n\
             2. Or rebuild with the fallback renderer: cargo install --features svgpaths\n\
             3. Or convert your SVG to PNG manually and use the PNG version instead")]
    MissingRenderer,

    /// The SVG renderer could not parse or draw the input.
    #[error("SVG renderer error: {message}\n\n\
             Check that the file is a well-formed SVG document.\n\
             Alternative: convert your SVG to PNG manually and use the PNG version instead.")]
    Render {
        /// What the renderer reported.
        message: String,
    },

    /// A raster source could not be decoded.
    #[error("could not decode {}: {source}", path.display())]
    Decode {
        /// The raster source.
        path: PathBuf,
        /// The decoder's error.
        source: image::ImageError,
    },

    /// The Android resource root is missing, so no icons were installed.
    #[error("Android resources directory not found: {}\n\
             Make sure you're running this from the Flutter project root.",
            .0.display())]
    MissingResourceRoot(PathBuf),

    /// Copying a generated icon into its mipmap folder failed.
    #[error("Error replacing {}: {source}", target.display())]
    Install {
        /// The launcher icon that could not be written.
        target: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// Any other filesystem or encoding failure.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, ConvertError>;
