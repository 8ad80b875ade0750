use crate::design::context::{DesignContext, VisualStyle};

fn style_template(style: VisualStyle) -> &'static str {
    match style {
        VisualStyle::Typography => {
            "A minimal abstract background for a typographic social media slide"
        }
        VisualStyle::Photorealistic => {
            "An atmospheric photographic background for a social media slide"
        }
        VisualStyle::Illustration => {
            "A flat illustrated background scene for a social media slide"
        }
        VisualStyle::Render3d => "A soft 3D rendered background scene for a social media slide",
        VisualStyle::AbstractArt => {
            "An abstract art background of shapes and gradients for a social media slide"
        }
        VisualStyle::Collage => "A cut-paper collage background for a social media slide",
    }
}

/// Build the natural-language background prompt for one job.
///
/// A master brand prompt supersedes the generic style template entirely; a
/// brand-specific description and a generic preset description would
/// otherwise contradict each other. Color directives augment either base.
/// Text is always excluded: the compositor owns every glyph on the slide.
pub fn build_background_prompt(design: &DesignContext, style_key: &str) -> String {
    let mut prompt = match &design.master_brand_prompt {
        Some(master) => master.clone(),
        None => {
            let style = VisualStyle::parse_lenient(Some(style_key));
            format!("{}. Style: {}", style_template(style), design.aesthetic)
        }
    };

    prompt.push_str(&format!(
        ". Dominant background color {}, accents of {}",
        design.background_color.to_svg_hex(),
        design.accent_color.to_svg_hex(),
    ));
    prompt.push_str(". No text, no lettering, no watermarks.");
    prompt
}

#[cfg(test)]
#[path = "../../tests/unit/background/prompt.rs"]
mod tests;
