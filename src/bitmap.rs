use std::io::{self, Error, ErrorKind};

/// A decoded image held in memory, ready to be resampled or encoded.
#[derive(Clone)]
pub struct Bitmap {
    pub(crate) format: PixelFormat,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) data: Box<[u8]>,
}

impl Bitmap {
    /// Creates a new bitmap with all pixel data set to zero.
    pub fn new(format: PixelFormat, width: u32, height: u32) -> Bitmap {
        let data_bytes = format.bytes_per_pixel() * width * height;
        Bitmap {
            format,
            width,
            height,
            data: vec![0u8; data_bytes as usize].into_boxed_slice(),
        }
    }

    /// Wraps existing pixel data.  Returns an error if the length of `data`
    /// does not match the given format and dimensions.
    pub fn from_raw(format: PixelFormat,
                    width: u32,
                    height: u32,
                    data: Vec<u8>)
                    -> io::Result<Bitmap> {
        let expected = format.bytes_per_pixel() as usize * width as usize *
                       height as usize;
        if data.len() != expected {
            let msg = format!("wrong pixel data length for {}x{} {:?} \
                               ({} instead of {})",
                              width,
                              height,
                              format,
                              data.len(),
                              expected);
            return Err(Error::new(ErrorKind::InvalidInput, msg));
        }
        Ok(Bitmap {
            format,
            width,
            height,
            data: data.into_boxed_slice(),
        })
    }

    /// Creates a copy of this bitmap using the RGBA pixel format (that is,
    /// `foo.to_rgba().pixel_format()` will always return `PixelFormat::RGBA`).
    /// If the source bitmap is already in RGBA format, this is equivalant to
    /// simply calling `clone()`.
    pub fn to_rgba(&self) -> Bitmap {
        let rgba_data = match self.format {
            PixelFormat::RGBA => self.data.clone(),
            PixelFormat::RGB => rgb_to_rgba(&self.data),
            PixelFormat::GrayAlpha => gray_alpha_to_rgba(&self.data),
            PixelFormat::Gray => gray_to_rgba(&self.data),
        };
        Bitmap {
            format: PixelFormat::RGBA,
            width: self.width,
            height: self.height,
            data: rgba_data,
        }
    }

    /// Returns the format in which this bitmap's pixel data is stored.
    pub fn pixel_format(&self) -> PixelFormat {
        self.format
    }

    /// Returns the width of the bitmap, in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the bitmap, in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns a reference to the bitmap's pixel data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns a mutable reference to the bitmap's pixel data.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the bitmap, returning its pixel data.
    pub fn into_data(self) -> Vec<u8> {
        self.data.into_vec()
    }
}

/// A format for storing 8-bit-per-channel pixel data in a bitmap.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PixelFormat {
    /// 32-bit color with alpha channel.
    RGBA,
    /// 24-bit color with no alpha.
    RGB,
    /// 16-bit grayscale with alpha channel.
    GrayAlpha,
    /// 8-bit grayscale with no alpha.
    Gray,
}

impl PixelFormat {
    /// Returns the number of bytes needed to store a single pixel in this
    /// format.
    pub fn bytes_per_pixel(self) -> u32 {
        match self {
            PixelFormat::RGBA => 4,
            PixelFormat::RGB => 3,
            PixelFormat::GrayAlpha => 2,
            PixelFormat::Gray => 1,
        }
    }
}

/// Converts RGB pixel data into RGBA.
fn rgb_to_rgba(rgb: &[u8]) -> Box<[u8]> {
    assert_eq!(rgb.len() % 3, 0);
    let mut rgba = Vec::with_capacity(rgb.len() / 3 * 4);
    for pixel in rgb.chunks_exact(3) {
        rgba.extend_from_slice(pixel);
        rgba.push(u8::MAX);
    }
    rgba.into_boxed_slice()
}

/// Converts grayscale-with-alpha pixel data into RGBA.
fn gray_alpha_to_rgba(gray_alpha: &[u8]) -> Box<[u8]> {
    assert_eq!(gray_alpha.len() % 2, 0);
    let mut rgba = Vec::with_capacity(gray_alpha.len() * 2);
    for pixel in gray_alpha.chunks_exact(2) {
        rgba.extend_from_slice(&[pixel[0], pixel[0], pixel[0], pixel[1]]);
    }
    rgba.into_boxed_slice()
}

/// Converts grayscale pixel data into RGBA.
fn gray_to_rgba(gray: &[u8]) -> Box<[u8]> {
    let mut rgba = Vec::with_capacity(gray.len() * 4);
    for &value in gray {
        rgba.extend_from_slice(&[value, value, value, u8::MAX]);
    }
    rgba.into_boxed_slice()
}
