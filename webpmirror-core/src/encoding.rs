//! Image codec boundary: decode a source file and encode it as WebP.
//!
//! Raster sources (JPEG, PNG) are decoded with the image crate; SVG sources
//! are rasterized at their intrinsic size with resvg. Encoding delegates to
//! the webp crate with the run's quality value passed through unchanged.
//! The codecs are treated as black boxes; this module only adapts between
//! them and the pipeline's error types.

use std::path::Path;

use image::{DynamicImage, RgbaImage};
use resvg::{tiny_skia, usvg};

use crate::error::{CoreError, CoreResult};

/// Decodes `source` and encodes it as lossy WebP at `quality` (0-100).
///
/// Returns the encoded bytes; writing them is the caller's concern. Any
/// decode, rasterization, or encode failure maps to a per-file error
/// carrying the offending path.
pub fn encode_webp(source: &Path, quality: u8) -> CoreResult<Vec<u8>> {
    let decoded = decode_source(source)?;

    // The webp encoder accepts RGB8/RGBA8 buffers only.
    let decoded = match decoded {
        img @ (DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_)) => img,
        other => DynamicImage::ImageRgba8(other.to_rgba8()),
    };

    let encoder = webp::Encoder::from_image(&decoded).map_err(|message| {
        CoreError::WebpEncode {
            path: source.to_path_buf(),
            message: message.to_string(),
        }
    })?;

    Ok(encoder.encode(f32::from(quality)).to_vec())
}

/// Loads a source file into pixels, dispatching on its extension: SVG is
/// rasterized, everything else goes through the raster decoders.
fn decode_source(source: &Path) -> CoreResult<DynamicImage> {
    let is_svg = source
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    if is_svg {
        rasterize_svg(source)
    } else {
        image::open(source).map_err(|source_err| CoreError::Decode {
            path: source.to_path_buf(),
            source: source_err,
        })
    }
}

/// Rasterizes an SVG document at its intrinsic pixel size.
fn rasterize_svg(source: &Path) -> CoreResult<DynamicImage> {
    let svg_error = |message: String| CoreError::SvgRender {
        path: source.to_path_buf(),
        message,
    };

    let data = std::fs::read(source)?;
    let tree = usvg::Tree::from_data(&data, &usvg::Options::default())
        .map_err(|e| svg_error(e.to_string()))?;

    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| svg_error(format!("document has zero pixel area ({size:?})")))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    // The pixmap stores premultiplied alpha; the encoder expects straight RGBA.
    let mut rgba = Vec::with_capacity(pixmap.pixels().len() * 4);
    for pixel in pixmap.pixels() {
        let demultiplied = pixel.demultiply();
        rgba.extend_from_slice(&[
            demultiplied.red(),
            demultiplied.green(),
            demultiplied.blue(),
            demultiplied.alpha(),
        ]);
    }

    let buffer = RgbaImage::from_raw(size.width(), size.height(), rgba)
        .ok_or_else(|| svg_error("rasterized buffer has unexpected length".to_string()))?;

    Ok(DynamicImage::ImageRgba8(buffer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn write_test_png(path: &Path, width: u32, height: u32) {
        let img = RgbaImage::from_pixel(width, height, Rgba([200u8, 60, 20, 255]));
        img.save(path).unwrap();
    }

    fn assert_is_webp(bytes: &[u8]) {
        assert!(bytes.len() > 12);
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WEBP");
    }

    #[test]
    fn test_encode_png_source() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("pixel.png");
        write_test_png(&source, 8, 8);

        let bytes = encode_webp(&source, 80).unwrap();
        assert_is_webp(&bytes);
    }

    #[test]
    fn test_encode_svg_source() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("box.svg");
        std::fs::write(
            &source,
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16"><rect width="16" height="16" fill="#336699"/></svg>"##,
        )
        .unwrap();

        let bytes = encode_webp(&source, 100).unwrap();
        assert_is_webp(&bytes);
    }

    #[test]
    fn test_corrupt_raster_is_a_decode_error() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("broken.png");
        std::fs::write(&source, b"this is not a png").unwrap();

        let result = encode_webp(&source, 100);
        assert!(matches!(result, Err(CoreError::Decode { .. })));
    }

    #[test]
    fn test_invalid_svg_is_a_render_error() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("broken.svg");
        std::fs::write(&source, b"<svg").unwrap();

        let result = encode_webp(&source, 100);
        assert!(matches!(result, Err(CoreError::SvgRender { .. })));
    }

    #[test]
    fn test_lower_quality_is_not_larger() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("gradient.png");
        let img = RgbaImage::from_fn(64, 64, |x, y| {
            Rgba([(x * 4) as u8, (y * 4) as u8, ((x + y) * 2) as u8, 255])
        });
        img.save(&source).unwrap();

        let high = encode_webp(&source, 100).unwrap();
        let low = encode_webp(&source, 50).unwrap();
        assert!(low.len() <= high.len());
    }
}
