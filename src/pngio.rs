use crate::bitmap::{Bitmap, PixelFormat};
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Error, ErrorKind, Seek, Write};
use std::path::Path;

impl Bitmap {
    /// Reads a bitmap from a PNG file.  Paletted and 16-bit images are
    /// expanded to 8 bits per channel.
    pub fn read_png<R: BufRead + Seek>(input: R) -> io::Result<Bitmap> {
        let mut decoder = png::Decoder::new(input);
        decoder.set_transformations(
            png::Transformations::STRIP_16 | png::Transformations::EXPAND,
        );
        let mut reader = decoder.read_info()?;

        let (color_type, bit_depth) = reader.output_color_type();
        if bit_depth != png::BitDepth::Eight {
            let msg = format!("unexpected PNG output bit depth {:?}",
                              bit_depth);
            return Err(Error::new(ErrorKind::InvalidData, msg));
        }
        let pixel_format = match color_type {
            png::ColorType::Rgba => PixelFormat::RGBA,
            png::ColorType::Rgb => PixelFormat::RGB,
            png::ColorType::GrayscaleAlpha => PixelFormat::GrayAlpha,
            png::ColorType::Grayscale => PixelFormat::Gray,
            png::ColorType::Indexed => {
                let msg = "paletted PNG was not expanded";
                return Err(Error::new(ErrorKind::InvalidData, msg));
            }
        };

        let (width, height) = {
            let info = reader.info();
            (info.width, info.height)
        };
        let mut bitmap = Bitmap::new(pixel_format, width, height);
        reader.next_frame(bitmap.data_mut())?;
        reader.finish()?;
        Ok(bitmap)
    }

    /// Writes the bitmap to a PNG file (or other writer).
    pub fn write_png<W: Write>(&self, output: W) -> io::Result<()> {
        let color_type = match self.format {
            PixelFormat::RGBA => png::ColorType::Rgba,
            PixelFormat::RGB => png::ColorType::Rgb,
            PixelFormat::GrayAlpha => png::ColorType::GrayscaleAlpha,
            PixelFormat::Gray => png::ColorType::Grayscale,
        };
        let mut encoder = png::Encoder::new(output, self.width, self.height);
        encoder.set_color(color_type);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.data)?;
        writer.finish()?;
        Ok(())
    }

    /// Writes the bitmap to a PNG file at `path`, replacing any existing
    /// file.
    pub fn save_png(&self, path: &Path) -> io::Result<()> {
        let mut file = BufWriter::new(File::create(path)?);
        self.write_png(&mut file)?;
        file.flush()
    }
}
