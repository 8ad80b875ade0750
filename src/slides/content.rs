use serde::{Deserialize, Serialize};

/// Structured content for one slide, derived from raw generated text.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SlideContent {
    /// 1-based position within the carousel, unique per job.
    pub slide_number: u32,
    /// Headline line.
    #[serde(default)]
    pub headline: Option<String>,
    /// Body copy.
    #[serde(default)]
    pub body: Option<String>,
    /// Short accent line.
    #[serde(default)]
    pub accent_text: Option<String>,
    /// Call-to-action label (CTA template).
    #[serde(default)]
    pub cta_text: Option<String>,
}

impl SlideContent {
    /// Derive slide content from raw text via the headline/body split.
    ///
    /// The first line wins when a newline appears before the first sentence
    /// end; otherwise the first sentence (terminated by `. `, `! `, or `? `)
    /// becomes the headline and the remainder the body. Text without either
    /// boundary is all headline.
    pub fn from_raw_text(slide_number: u32, text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Self {
                slide_number,
                ..Self::default()
            };
        }

        let line_end = text.find('\n');
        let sentence_end = [". ", "! ", "? "]
            .iter()
            .filter_map(|sep| text.find(sep).map(|i| i + 1))
            .min();

        let split = match (line_end, sentence_end) {
            (Some(l), Some(s)) if l < s => Some(l),
            (Some(l), None) => Some(l),
            (_, Some(s)) => Some(s),
            (None, None) => None,
        };

        let (headline, body) = match split {
            Some(i) => {
                let (head, rest) = text.split_at(i);
                (head.trim(), rest.trim())
            }
            None => (text, ""),
        };

        Self {
            slide_number,
            headline: Some(headline.to_owned()).filter(|s| !s.is_empty()),
            body: Some(body.to_owned()).filter(|s| !s.is_empty()),
            accent_text: None,
            cta_text: None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/slides/content.rs"]
mod tests;
