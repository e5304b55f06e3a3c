use byteorder::{BigEndian, ByteOrder};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// First four bytes of every PNG file.
const PNG_MAGIC: u32 = 0x8950_4E47;

/// JPEG start-of-image marker followed by the first segment marker byte.
const JPEG_MAGIC: u32 = 0x00FF_D8FF;

/// How many leading bytes are searched for an `<svg` tag.
const SNIFF_LENGTH: u64 = 256;

const SVG_MARKER: &[u8] = b"<svg";

const RASTER_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "bmp", "tiff",
                                      "webp"];

/// Broad classification of a source image.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SourceFormat {
    /// Vector input, rendered with the SVG rasterizer.
    Svg,
    /// Bitmap input, decoded and resampled.
    Raster,
    /// Nothing we know how to convert.
    Unknown,
}

impl SourceFormat {
    /// Classifies the file at `path`, first by extension and then, if the
    /// extension is not recognized, by its leading bytes.  Never fails; a
    /// file that cannot be read is `Unknown`.
    pub fn detect(path: &Path) -> SourceFormat {
        let extension = path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("svg") => SourceFormat::Svg,
            Some(ext) if RASTER_EXTENSIONS.contains(&ext) => {
                SourceFormat::Raster
            }
            _ => SourceFormat::sniff(path),
        }
    }

    /// Classifies a file purely by its content.
    pub fn sniff(path: &Path) -> SourceFormat {
        let mut header = Vec::new();
        let read = File::open(path)
            .and_then(|file| file.take(SNIFF_LENGTH).read_to_end(&mut header));
        match read {
            Ok(_) => SourceFormat::from_header(&header),
            Err(_) => SourceFormat::Unknown,
        }
    }

    /// Classifies the leading bytes of a file.  Binary signatures take
    /// precedence over an `<svg` marker, which may appear in PNG text chunks.
    pub fn from_header(header: &[u8]) -> SourceFormat {
        if header.len() >= 4 && BigEndian::read_u32(header) == PNG_MAGIC {
            SourceFormat::Raster
        } else if header.len() >= 3 &&
                  BigEndian::read_u24(header) == JPEG_MAGIC {
            SourceFormat::Raster
        } else if header.windows(SVG_MARKER.len()).any(|w| w == SVG_MARKER) {
            SourceFormat::Svg
        } else {
            SourceFormat::Unknown
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        out.write_str(match *self {
            SourceFormat::Svg => "SVG",
            SourceFormat::Raster => "RASTER",
            SourceFormat::Unknown => "UNKNOWN",
        })
    }
}
