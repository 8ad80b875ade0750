use crate::foundation::error::{CaravelError, CaravelResult};

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas with non-zero dimensions.
    pub fn new(width: u32, height: u32) -> CaravelResult<Self> {
        if width == 0 || height == 0 {
            return Err(CaravelError::validation("canvas dimensions must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// The fixed carousel canvas: 1080x1350, portrait 4:5.
    pub fn carousel() -> Self {
        Self {
            width: 1080,
            height: 1350,
        }
    }

    /// Aspect ratio as `width / height`.
    pub fn aspect(self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Aspect ratio hint in `"W:H"` form, reduced (e.g. `"4:5"`).
    pub fn aspect_hint(self) -> String {
        fn gcd(a: u32, b: u32) -> u32 {
            if b == 0 { a } else { gcd(b, a % b) }
        }
        let g = gcd(self.width, self.height).max(1);
        format!("{}:{}", self.width / g, self.height / g)
    }

    /// Total pixel count.
    pub fn pixels(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
