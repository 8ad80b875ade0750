use std::io::Cursor;

use anyhow::Context;
use image::imageops::FilterType;
use image::RgbaImage;

use crate::design::context::DesignContext;
use crate::foundation::core::Canvas;
use crate::foundation::error::{CaravelError, CaravelResult};

/// Composite one slide: background (or solid fill) plus the text layer.
///
/// The background, when present, is cover-fit to the canvas; without one the
/// canvas is flood-filled with `design.background_color` so every pixel of
/// the base equals that color exactly. The text layer is alpha-composited at
/// the origin.
pub fn composite_slide(
    background: Option<&[u8]>,
    text_layer: &RgbaImage,
    design: &DesignContext,
    canvas: Canvas,
) -> CaravelResult<RgbaImage> {
    if text_layer.dimensions() != (canvas.width, canvas.height) {
        return Err(CaravelError::render(format!(
            "text layer is {}x{}, canvas is {}x{}",
            text_layer.width(),
            text_layer.height(),
            canvas.width,
            canvas.height
        )));
    }

    let mut base = match background {
        Some(bytes) => cover_fit(bytes, canvas)?,
        None => solid_fill(design, canvas),
    };

    image::imageops::overlay(&mut base, text_layer, 0, 0);
    Ok(base)
}

/// Decode background bytes and cover-fit them to the canvas: scale so both
/// dimensions are covered, then center-crop the overflow.
pub fn cover_fit(bytes: &[u8], canvas: Canvas) -> CaravelResult<RgbaImage> {
    let decoded = image::load_from_memory(bytes)
        .context("decode background image")
        .map_err(CaravelError::from)?;
    let rgba = decoded.to_rgba8();
    let (bw, bh) = rgba.dimensions();
    if bw == 0 || bh == 0 {
        return Err(CaravelError::render("background image has zero dimension"));
    }

    let scale = f64::max(
        f64::from(canvas.width) / f64::from(bw),
        f64::from(canvas.height) / f64::from(bh),
    );
    let sw = ((f64::from(bw) * scale).round() as u32).max(canvas.width);
    let sh = ((f64::from(bh) * scale).round() as u32).max(canvas.height);

    let resized = image::imageops::resize(&rgba, sw, sh, FilterType::CatmullRom);
    let x = (sw - canvas.width) / 2;
    let y = (sh - canvas.height) / 2;
    let cropped =
        image::imageops::crop_imm(&resized, x, y, canvas.width, canvas.height).to_image();
    Ok(cropped)
}

/// Solid canvas filled with the design's background color.
pub fn solid_fill(design: &DesignContext, canvas: Canvas) -> RgbaImage {
    let px = image::Rgba(design.background_color.to_rgba8());
    RgbaImage::from_pixel(canvas.width, canvas.height, px)
}

/// Encode a final slide raster as PNG.
pub fn encode_png(img: &RgbaImage) -> CaravelResult<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .context("encode slide png")
        .map_err(CaravelError::from)?;
    Ok(out.into_inner())
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
