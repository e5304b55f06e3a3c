//! SVG rasterization.
//!
//! Two renderers may be compiled in.  `resvg` (feature `resvg`) is the
//! primary one and draws everything usvg understands.  The `svgpaths`
//! renderer walks the parsed usvg tree itself and fills/strokes the
//! solid-colour paths with tiny-skia; gradients, patterns, filters, masks and
//! embedded bitmaps are skipped.  Which one is used is decided once, by
//! [`SvgRenderer::detect`], and handed down explicitly.

use crate::bitmap::Bitmap;
use crate::error::{ConvertError, Result};
use std::fmt;
use std::path::Path;

/// An SVG renderer available in this build.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SvgRenderer {
    /// Full renderer backed by `resvg`.
    #[cfg(feature = "resvg")]
    Resvg,
    /// Minimal renderer drawing solid-colour paths with `tiny-skia`.
    #[cfg(any(feature = "resvg", feature = "svgpaths"))]
    Paths,
}

impl SvgRenderer {
    /// Returns the preferred renderer compiled into this build, if any.  The
    /// path renderer is only chosen when `resvg` is not available.
    pub fn detect() -> Option<SvgRenderer> {
        #[cfg(feature = "resvg")]
        return Some(SvgRenderer::Resvg);
        #[cfg(all(feature = "svgpaths", not(feature = "resvg")))]
        return Some(SvgRenderer::Paths);
        #[cfg(not(any(feature = "resvg", feature = "svgpaths")))]
        return None;
    }
}

impl fmt::Display for SvgRenderer {
    #[allow(unused_variables)]
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            #[cfg(feature = "resvg")]
            SvgRenderer::Resvg => out.write_str("resvg"),
            #[cfg(any(feature = "resvg", feature = "svgpaths"))]
            SvgRenderer::Paths => out.write_str("svgpaths"),
        }
    }
}

/// A parsed SVG drawing, ready to be rendered at any number of sizes.
pub struct SvgDocument {
    #[cfg(any(feature = "resvg", feature = "svgpaths"))]
    tree: usvg::Tree,
    renderer: SvgRenderer,
}

impl SvgDocument {
    /// Parses the SVG file at `path` for rendering with `renderer`.  Fails
    /// with `MissingRenderer` if `renderer` is `None`.
    #[allow(unused_variables)]
    pub fn load(path: &Path,
                renderer: Option<SvgRenderer>)
                -> Result<SvgDocument> {
        match renderer {
            None => Err(ConvertError::MissingRenderer),
            #[cfg(any(feature = "resvg", feature = "svgpaths"))]
            Some(renderer) => {
                Ok(SvgDocument {
                    tree: render::load_tree(path)?,
                    renderer,
                })
            }
            #[cfg(not(any(feature = "resvg", feature = "svgpaths")))]
            Some(renderer) => match renderer {},
        }
    }

    /// Renders the drawing into an RGBA bitmap of exactly `width`x`height`
    /// pixels.  Each axis is scaled independently, so pass equal values to
    /// get a square icon from a square drawing.
    #[allow(unused_variables)]
    pub fn render(&self, width: u32, height: u32) -> Result<Bitmap> {
        #[cfg(any(feature = "resvg", feature = "svgpaths"))]
        return render::rasterize(&self.tree, width, height, self.renderer);
        #[cfg(not(any(feature = "resvg", feature = "svgpaths")))]
        match self.renderer {}
    }

    /// Renders the drawing and writes the result to `output` as PNG.
    pub fn render_to_png(&self,
                         width: u32,
                         height: u32,
                         output: &Path)
                         -> Result<()> {
        self.render(width, height)?.save_png(output)?;
        Ok(())
    }
}

/// Renders the SVG file at `path` once, at `width`x`height`, and writes the
/// result to `output` as PNG.  Use [`SvgDocument`] to render several sizes
/// from a single parse.
pub fn rasterize_to_png(path: &Path,
                        width: u32,
                        height: u32,
                        renderer: Option<SvgRenderer>,
                        output: &Path)
                        -> Result<()> {
    SvgDocument::load(path, renderer)?.render_to_png(width, height, output)
}

#[cfg(any(feature = "resvg", feature = "svgpaths"))]
mod render {
    use super::SvgRenderer;
    use crate::bitmap::{Bitmap, PixelFormat};
    use crate::error::{ConvertError, Result};
    use std::fs;
    use std::path::Path;
    use std::sync::Arc;
    use tiny_skia::{Pixmap, Transform};

    pub fn rasterize(tree: &usvg::Tree,
                     width: u32,
                     height: u32,
                     renderer: SvgRenderer)
                     -> Result<Bitmap> {
        let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
            render_error(format!("cannot allocate a {}x{} canvas",
                                 width,
                                 height))
        })?;
        let size = tree.size();
        let transform = Transform::from_scale(width as f32 / size.width(),
                                              height as f32 / size.height());
        match renderer {
            #[cfg(feature = "resvg")]
            SvgRenderer::Resvg => {
                resvg::render(tree, transform, &mut pixmap.as_mut())
            }
            SvgRenderer::Paths => {
                paths::draw_group(tree.root(), transform, &mut pixmap)
            }
        }
        to_bitmap(&pixmap)
    }

    pub fn load_tree(path: &Path) -> Result<usvg::Tree> {
        let data = fs::read(path)?;
        let mut options = usvg::Options::default();
        options.resources_dir = fs::canonicalize(path)
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()));
        Arc::make_mut(&mut options.fontdb).load_system_fonts();
        usvg::Tree::from_data(&data, &options)
            .map_err(|err| render_error(err.to_string()))
    }

    /// Converts tiny-skia's premultiplied pixels to straight RGBA.
    fn to_bitmap(pixmap: &Pixmap) -> Result<Bitmap> {
        let mut rgba = Vec::with_capacity(pixmap.data().len());
        for pixel in pixmap.pixels() {
            let color = pixel.demultiply();
            rgba.extend_from_slice(&[color.red(),
                                     color.green(),
                                     color.blue(),
                                     color.alpha()]);
        }
        Ok(Bitmap::from_raw(PixelFormat::RGBA,
                            pixmap.width(),
                            pixmap.height(),
                            rgba)?)
    }

    fn render_error(message: String) -> ConvertError {
        ConvertError::Render { message }
    }

    mod paths {
        use tiny_skia::{FillRule, Paint, Pixmap, Transform};

        pub fn draw_group(group: &usvg::Group,
                          transform: Transform,
                          pixmap: &mut Pixmap) {
            for node in group.children() {
                match node {
                    usvg::Node::Group(group) => {
                        draw_group(group, transform, pixmap)
                    }
                    usvg::Node::Path(path) => draw_path(path, transform, pixmap),
                    usvg::Node::Text(text) => {
                        draw_group(text.flattened(), transform, pixmap)
                    }
                    // Embedded bitmaps are not drawn.
                    _ => {}
                }
            }
        }

        fn draw_path(path: &usvg::Path,
                     transform: Transform,
                     pixmap: &mut Pixmap) {
            if !path.is_visible() {
                return;
            }
            let transform = transform.pre_concat(path.abs_transform());
            if let Some(fill) = path.fill() {
                if let Some(paint) = solid_paint(fill.paint(), fill.opacity()) {
                    let rule = match fill.rule() {
                        usvg::FillRule::NonZero => FillRule::Winding,
                        usvg::FillRule::EvenOdd => FillRule::EvenOdd,
                    };
                    pixmap.fill_path(path.data(), &paint, rule, transform, None);
                }
            }
            if let Some(stroke) = path.stroke() {
                if let Some(paint) = solid_paint(stroke.paint(),
                                                 stroke.opacity()) {
                    pixmap.stroke_path(path.data(),
                                       &paint,
                                       &stroke.to_tiny_skia(),
                                       transform,
                                       None);
                }
            }
        }

        fn solid_paint(paint: &usvg::Paint,
                       opacity: usvg::Opacity)
                       -> Option<Paint<'static>> {
            match paint {
                usvg::Paint::Color(color) => {
                    let alpha = (opacity.get() * 255.0).round() as u8;
                    let mut paint = Paint::default();
                    paint.set_color_rgba8(color.red,
                                          color.green,
                                          color.blue,
                                          alpha);
                    paint.anti_alias = true;
                    Some(paint)
                }
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const RED_SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10" viewBox="0 0 10 10">
  <rect x="0" y="0" width="10" height="5" fill="#ff0000"/>
</svg>"##;

    fn write_svg(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("icon.svg");
        fs::write(&path, contents).expect("write failed");
        path
    }

    #[test]
    fn missing_renderer_is_a_configuration_error() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_svg(&dir, RED_SQUARE);
        match SvgDocument::load(&path, None) {
            Err(ConvertError::MissingRenderer) => {}
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[cfg(any(feature = "resvg", feature = "svgpaths"))]
    fn renderers() -> Vec<SvgRenderer> {
        let mut renderers = vec![SvgRenderer::Paths];
        #[cfg(feature = "resvg")]
        renderers.push(SvgRenderer::Resvg);
        renderers
    }

    #[cfg(any(feature = "resvg", feature = "svgpaths"))]
    fn render_file(path: &std::path::Path,
                   width: u32,
                   height: u32,
                   renderer: SvgRenderer)
                   -> Bitmap {
        SvgDocument::load(path, Some(renderer))
            .and_then(|document| document.render(width, height))
            .expect("render failed")
    }

    #[cfg(any(feature = "resvg", feature = "svgpaths"))]
    #[test]
    fn one_parse_serves_every_size() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_svg(&dir, RED_SQUARE);
        for renderer in renderers() {
            let document = SvgDocument::load(&path, Some(renderer))
                .expect("load failed");
            fs::remove_file(&path).expect("remove failed");
            for &size in &[48, 72, 96, 144, 192] {
                let bitmap = document.render(size, size).expect("render failed");
                assert_eq!((bitmap.width(), bitmap.height()), (size, size));
            }
            fs::write(&path, RED_SQUARE).expect("write failed");
        }
    }

    #[cfg(any(feature = "resvg", feature = "svgpaths"))]
    #[test]
    fn renders_at_requested_size() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_svg(&dir, RED_SQUARE);
        for renderer in renderers() {
            let bitmap = render_file(&path, 48, 48, renderer);
            assert_eq!((bitmap.width(), bitmap.height()), (48, 48));
            assert_eq!(bitmap.pixel_format(), crate::PixelFormat::RGBA);
            // Top half is opaque red, bottom half transparent.
            assert_eq!(&bitmap.data()[..4], &[255, 0, 0, 255], "{}", renderer);
            let last = bitmap.data().len() - 4;
            assert_eq!(bitmap.data()[last + 3], 0, "{}", renderer);
        }
    }

    #[cfg(any(feature = "resvg", feature = "svgpaths"))]
    #[test]
    fn stretches_to_non_square_box() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_svg(&dir, RED_SQUARE);
        for renderer in renderers() {
            let bitmap = render_file(&path, 30, 12, renderer);
            assert_eq!((bitmap.width(), bitmap.height()), (30, 12));
            let row = 30 * 4;
            // Row 2 lies in the red half, row 9 below it.
            assert_eq!(bitmap.data()[2 * row + 3], 255, "{}", renderer);
            assert_eq!(bitmap.data()[9 * row + 3], 0, "{}", renderer);
        }
    }

    #[cfg(any(feature = "resvg", feature = "svgpaths"))]
    #[test]
    fn malformed_svg_reports_render_error() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_svg(&dir, "<svg xmlns=\"http://www.w3.org/2000/svg\"");
        for renderer in renderers() {
            match SvgDocument::load(&path, Some(renderer)) {
                Err(ConvertError::Render { .. }) => {}
                other => panic!("unexpected result: {:?}", other.map(|_| ())),
            }
        }
    }

    #[cfg(any(feature = "resvg", feature = "svgpaths"))]
    #[test]
    fn writes_png_output() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_svg(&dir, RED_SQUARE);
        let output = dir.path().join("out.png");
        rasterize_to_png(&path, 24, 24, SvgRenderer::detect(), &output)
            .expect("rasterize failed");
        let file = std::io::BufReader::new(fs::File::open(&output)
            .expect("open failed"));
        let bitmap = Bitmap::read_png(file).expect("read failed");
        assert_eq!((bitmap.width(), bitmap.height()), (24, 24));
        assert_eq!(bitmap.pixel_format(), crate::PixelFormat::RGBA);
    }
}
