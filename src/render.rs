use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::error::BuildError;
use crate::specs::{ICO_BASE_BOUND, ICO_NAME, ICO_SIZES, ICON_SPECS};

/// Load the source image and convert it to RGBA.
pub fn load_source(path: &Path) -> Result<RgbaImage, BuildError> {
    let img = image::open(path).map_err(|e| BuildError::SourceLoadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(img.to_rgba8())
}

/// Compute dimensions that fit within `bound × bound`, preserving aspect
/// ratio. Never upscales: dimensions already within the bound are returned
/// unchanged.
fn fit_within(width: u32, height: u32, bound: u32) -> (u32, u32) {
    if width <= bound && height <= bound {
        return (width, height);
    }
    let scale = f64::from(bound) / f64::from(width.max(height));
    let w = ((f64::from(width) * scale).round() as u32).max(1);
    let h = ((f64::from(height) * scale).round() as u32).max(1);
    (w, h)
}

/// Downscale the source to fit within `bound × bound` (shrink-only, Lanczos).
fn shrink_to_fit(source: &RgbaImage, bound: u32) -> RgbaImage {
    let (w, h) = source.dimensions();
    let (tw, th) = fit_within(w, h, bound);
    if (tw, th) == (w, h) {
        source.clone()
    } else {
        imageops::resize(source, tw, th, FilterType::Lanczos3)
    }
}

/// Render one square icon: the source shrunk to fit the padded inner box,
/// centered on a transparent `size × size` canvas.
///
/// `pad_ratio` must be in `[0, 0.5)`; the inner box is floored at 1 pixel so
/// extreme ratios on tiny sizes never produce a zero-size resize.
pub fn render_square_icon(source: &RgbaImage, size: u32, pad_ratio: f64) -> RgbaImage {
    let inner = ((f64::from(size) * (1.0 - 2.0 * pad_ratio)).round() as u32).max(1);
    let scaled = shrink_to_fit(source, inner);
    let (sw, sh) = scaled.dimensions();

    let mut canvas = RgbaImage::new(size, size);
    let x = i64::from((size - sw) / 2);
    let y = i64::from((size - sh) / 2);
    imageops::overlay(&mut canvas, &scaled, x, y);
    canvas
}

/// Encode an RGBA image as a PNG with best lossless compression.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<(), BuildError> {
    let err = |e: String| BuildError::RenderFailed {
        file: path.display().to_string(),
        reason: e,
    };
    let file = File::create(path).map_err(|e| err(e.to_string()))?;
    let encoder =
        PngEncoder::new_with_quality(BufWriter::new(file), CompressionType::Best, PngFilter::Adaptive);
    encoder
        .write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgba8)
        .map_err(|e| err(e.to_string()))?;
    Ok(())
}

/// Write the multi-resolution `favicon.ico`.
///
/// The source is first shrunk to fit 256×256, then each embedded bitmap is
/// rendered from that base at the fixed ICO sizes.
pub fn render_ico(source: &RgbaImage, path: &Path) -> Result<(), BuildError> {
    let err = |e: String| BuildError::IcoFailed {
        path: path.display().to_string(),
        reason: e,
    };
    let base = shrink_to_fit(source, ICO_BASE_BOUND);

    let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);
    for size in ICO_SIZES {
        let frame = render_square_icon(&base, size, 0.0);
        let icon_image = ico::IconImage::from_rgba_data(size, size, frame.into_raw());
        icon_dir.add_entry(ico::IconDirEntry::encode(&icon_image).map_err(|e| err(e.to_string()))?);
    }

    let file = File::create(path).map_err(|e| err(e.to_string()))?;
    icon_dir
        .write(BufWriter::new(file))
        .map_err(|e| err(e.to_string()))?;
    Ok(())
}

/// Render the full fixed icon set (eight PNGs plus the ICO) into `out_dir`.
/// The directory is created if absent; pre-existing files are left in place.
pub fn render_icon_set(source: &RgbaImage, out_dir: &Path) -> Result<(), BuildError> {
    fs::create_dir_all(out_dir).map_err(|e| BuildError::RenderFailed {
        file: out_dir.display().to_string(),
        reason: e.to_string(),
    })?;

    for spec in &ICON_SPECS {
        let icon = render_square_icon(source, spec.size, spec.pad_ratio);
        save_png(&icon, &out_dir.join(spec.name))?;
    }

    render_ico(source, &out_dir.join(ICO_NAME))
}
