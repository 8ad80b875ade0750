use std::fmt::Write as _;
use std::sync::Arc;

use anyhow::Context;

use crate::design::context::DesignContext;
use crate::foundation::error::{CaravelError, CaravelResult};
use crate::layout::solver::{SolvedLayer, SolvedLayout};
use crate::layout::tree::{Layer, LayerAlign};

/// Render a solved slide layout to a transparent-background RGBA8 text layer
/// sized exactly to the canvas.
///
/// The layout tree is serialized to SVG markup, parsed with the shared font
/// database, and rasterized. Output bytes are straight-alpha RGBA8.
pub fn rasterize_text_layer(
    layout: &SolvedLayout,
    design: &DesignContext,
    fontdb: Arc<usvg::fontdb::Database>,
) -> CaravelResult<image::RgbaImage> {
    let markup = emit_svg(layout, design);

    let opts = usvg::Options {
        fontdb,
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(&markup, &opts)
        .context("parse slide svg tree")
        .map_err(CaravelError::from)?;

    let (w, h) = (layout.canvas.width, layout.canvas.height);
    let mut pixmap = resvg::tiny_skia::Pixmap::new(w, h)
        .ok_or_else(|| CaravelError::render("failed to allocate text-layer pixmap"))?;

    let sx = (w as f32) / tree.size().width();
    let sy = (h as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    let mut data = pixmap.data().to_vec();
    demultiply_rgba8_in_place(&mut data);

    image::RgbaImage::from_raw(w, h, data)
        .ok_or_else(|| CaravelError::render("text-layer buffer size mismatch"))
}

/// Serialize a solved layout to SVG markup.
///
/// Text positions come straight from the solver rects; line wrapping was
/// already decided there, so the emitter never re-measures.
pub fn emit_svg(layout: &SolvedLayout, design: &DesignContext) -> String {
    let (w, h) = (layout.canvas.width, layout.canvas.height);
    let mut svg = String::with_capacity(2048);
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );

    for solved in &layout.layers {
        emit_layer(&mut svg, solved, design);
    }

    svg.push_str("</svg>");
    svg
}

fn emit_layer(svg: &mut String, solved: &SolvedLayer, design: &DesignContext) {
    let rect = solved.rect;
    match &solved.layer {
        Layer::Text { role, align, .. } => {
            let size = role.font_size(design);
            let line_height = size * role.line_height();
            let color = role.color(design);
            let weight = role.font_weight(design);
            let (x, anchor) = match align {
                LayerAlign::Start => (rect.x, "start"),
                LayerAlign::Center => (rect.x + rect.w / 2.0, "middle"),
            };
            for (i, line) in solved.lines.iter().enumerate() {
                if line.is_empty() {
                    continue;
                }
                // Baseline sits ~0.8em below the line-box top.
                let y = rect.y + (i as f32) * line_height + 0.8 * size;
                let _ = write!(
                    svg,
                    r#"<text x="{x:.1}" y="{y:.1}" font-family="{family}" font-size="{size:.1}" font-weight="{weight}" fill="{fill}" fill-opacity="{opacity:.3}" text-anchor="{anchor}">{text}</text>"#,
                    family = xml_escape(&design.font_family),
                    fill = color.to_svg_hex(),
                    opacity = color.opacity(),
                    text = xml_escape(line),
                );
            }
        }
        Layer::Rule { .. } => {
            let accent = design.accent_color;
            let _ = write!(
                svg,
                r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" rx="{rx:.1}" fill="{fill}" fill-opacity="{opacity:.3}"/>"#,
                x = rect.x,
                y = rect.y,
                w = rect.w,
                h = rect.h,
                rx = rect.h / 2.0,
                fill = accent.to_svg_hex(),
                opacity = accent.opacity(),
            );
        }
        Layer::Pill { text } => {
            let accent = design.accent_color;
            // Pill label contrasts against the accent fill.
            let label = design.background_color;
            let size = design.body_font_size;
            let _ = write!(
                svg,
                r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" rx="{rx:.1}" fill="{fill}" fill-opacity="{opacity:.3}"/>"#,
                x = rect.x,
                y = rect.y,
                w = rect.w,
                h = rect.h,
                rx = rect.h / 2.0,
                fill = accent.to_svg_hex(),
                opacity = accent.opacity(),
            );
            let _ = write!(
                svg,
                r#"<text x="{x:.1}" y="{y:.1}" font-family="{family}" font-size="{size:.1}" font-weight="{weight}" fill="{fill}" text-anchor="middle">{text}</text>"#,
                x = rect.x + rect.w / 2.0,
                y = rect.y + rect.h / 2.0 + 0.35 * size,
                family = xml_escape(&design.font_family),
                weight = design.headline_font_weight,
                fill = label.to_svg_hex(),
                text = xml_escape(text),
            );
        }
    }
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
