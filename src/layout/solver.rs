use taffy::prelude::{AvailableSpace, Size};
use taffy::style::{
    AlignItems, Dimension, Display, FlexDirection, JustifyContent, LengthPercentage, Style,
};

use crate::design::context::DesignContext;
use crate::foundation::core::Canvas;
use crate::foundation::error::{CaravelError, CaravelResult};

use super::tree::{Layer, LayerAlign, LayerTree, VerticalJustify};

/// Pixel rectangle produced by the layout solve, canvas-absolute.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectPx {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

/// One solved layer: the source layer, its rect, and (for text) the wrapped
/// lines the intrinsic size was computed from.
#[derive(Clone, Debug)]
pub struct SolvedLayer {
    /// The layer as declared by the template.
    pub layer: Layer,
    /// Canvas-absolute rect.
    pub rect: RectPx,
    /// Wrapped lines for text layers; empty otherwise.
    pub lines: Vec<String>,
}

/// Fully solved slide layout.
#[derive(Clone, Debug)]
pub struct SolvedLayout {
    /// Target canvas.
    pub canvas: Canvas,
    /// Solved layers in declaration order.
    pub layers: Vec<SolvedLayer>,
}

/// Deterministic average-advance estimate for one line of text.
///
/// SVG text is ultimately shaped by the rasterizer; the solver only needs a
/// stable width estimate for wrapping, so a flat per-character advance is
/// used rather than real glyph metrics.
pub(crate) fn estimate_line_width(text: &str, font_size: f32) -> f32 {
    const AVG_ADVANCE: f32 = 0.55;
    (text.chars().count() as f32) * font_size * AVG_ADVANCE
}

/// Greedy word wrap against `max_width`. Words longer than the limit occupy
/// a line of their own rather than being split.
pub(crate) fn wrap_text(text: &str, font_size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_owned()
            } else {
                format!("{current} {word}")
            };
            if !current.is_empty() && estimate_line_width(&candidate, font_size) > max_width {
                lines.push(std::mem::take(&mut current));
                current = word.to_owned();
            } else {
                current = candidate;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn pill_intrinsic(text: &str, design: &DesignContext) -> (f32, f32) {
    const PILL_PAD_X: f32 = 48.0;
    const PILL_PAD_Y: f32 = 22.0;
    let w = estimate_line_width(text, design.body_font_size) + 2.0 * PILL_PAD_X;
    let h = design.body_font_size + 2.0 * PILL_PAD_Y;
    (w, h)
}

/// Solve a [`LayerTree`] into canvas-absolute pixel rects via a taffy flex
/// column. Pure and deterministic for a given tree/design/canvas triple.
pub fn solve(tree: &LayerTree, design: &DesignContext, canvas: Canvas) -> CaravelResult<SolvedLayout> {
    let content_width = (canvas.width as f32) - 2.0 * design.padding_x;
    if content_width <= 0.0 {
        return Err(CaravelError::render("canvas narrower than horizontal padding"));
    }

    let mut taffy: taffy::TaffyTree<()> = taffy::TaffyTree::new();

    // Wrap text up front; the wrapped lines both size the leaf nodes and are
    // reused verbatim by the SVG emitter so the two never disagree.
    let mut wrapped: Vec<Vec<String>> = Vec::with_capacity(tree.layers.len());
    let mut children = Vec::with_capacity(tree.layers.len());
    for layer in &tree.layers {
        let (w, h, lines) = match layer {
            Layer::Text { text, role, .. } => {
                let size = role.font_size(design);
                let lines = wrap_text(text, size, content_width);
                let height = (lines.len() as f32) * size * role.line_height();
                (content_width, height, lines)
            }
            Layer::Rule { width, thickness } => (*width, *thickness, Vec::new()),
            Layer::Pill { text } => {
                let (w, h) = pill_intrinsic(text, design);
                (w.min(content_width), h, Vec::new())
            }
        };
        wrapped.push(lines);

        let style = Style {
            size: Size {
                width: Dimension::length(w),
                height: Dimension::length(h),
            },
            flex_shrink: 0.0,
            ..Style::default()
        };
        children.push(
            taffy
                .new_leaf(style)
                .map_err(|e| CaravelError::render(format!("layout leaf: {e}")))?,
        );
    }

    let justify = match tree.justify {
        VerticalJustify::Top => JustifyContent::Start,
        VerticalJustify::Center => JustifyContent::Center,
    };
    let align = match tree.align {
        LayerAlign::Start => AlignItems::Start,
        LayerAlign::Center => AlignItems::Center,
    };
    let root_style = Style {
        display: Display::Flex,
        flex_direction: FlexDirection::Column,
        justify_content: Some(justify),
        align_items: Some(align),
        gap: Size {
            width: LengthPercentage::length(0.0),
            height: LengthPercentage::length(tree.gap.max(0.0)),
        },
        padding: taffy::geometry::Rect {
            left: LengthPercentage::length(design.padding_x),
            right: LengthPercentage::length(design.padding_x),
            top: LengthPercentage::length(design.padding_y),
            bottom: LengthPercentage::length(design.padding_y),
        },
        size: Size {
            width: Dimension::length(canvas.width as f32),
            height: Dimension::length(canvas.height as f32),
        },
        ..Style::default()
    };
    let root = taffy
        .new_with_children(root_style, &children)
        .map_err(|e| CaravelError::render(format!("layout root: {e}")))?;

    let available = Size {
        width: AvailableSpace::Definite(canvas.width as f32),
        height: AvailableSpace::Definite(canvas.height as f32),
    };
    taffy
        .compute_layout(root, available)
        .map_err(|e| CaravelError::render(format!("layout solve: {e}")))?;

    let mut layers = Vec::with_capacity(tree.layers.len());
    for ((layer, node), lines) in tree.layers.iter().zip(&children).zip(wrapped) {
        let l = taffy
            .layout(*node)
            .map_err(|e| CaravelError::render(format!("layout read: {e}")))?;
        layers.push(SolvedLayer {
            layer: layer.clone(),
            rect: RectPx {
                x: l.location.x,
                y: l.location.y,
                w: l.size.width,
                h: l.size.height,
            },
            lines,
        });
    }

    Ok(SolvedLayout { canvas, layers })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
