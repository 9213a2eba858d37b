//! RGBA color types and the color-string formatting helper.

use std::fmt;

/// Represents an RGBA color with floating-point components, as handed to the
/// rendering backend.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use screen_api::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let semi_transparent_blue = Color { r: 0.0, g: 0.0, b: 1.0, a: 0.5 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

/// An 8-bit-per-channel color as accepted by every public entry point.
///
/// Alpha uses the same 0-255 scale as the color channels; 255 is fully opaque.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Builds a color from three channels and an optional alpha, defaulting
    /// to fully opaque.
    pub const fn from_channels(r: u8, g: u8, b: u8, a: Option<u8>) -> Self {
        let a = match a {
            Some(a) => a,
            None => u8::MAX,
        };
        Self { r, g, b, a }
    }

    /// Alpha normalized into 0.0-1.0.
    pub fn alpha_unit(&self) -> f64 {
        self.a as f64 / 255.0
    }

    /// Converts to the normalized floating-point form used by the backend.
    pub fn to_color(&self) -> Color {
        Color {
            r: self.r as f64 / 255.0,
            g: self.g as f64 / 255.0,
            b: self.b as f64 / 255.0,
            a: self.alpha_unit(),
        }
    }

    /// Renders the color as an `rgba(r, g, b, a)` string with alpha in 0-1.
    pub fn to_rgba_string(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            self.alpha_unit()
        )
    }
}

impl From<[u8; 3]> for Rgba {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::from_channels(r, g, b, None)
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rgba_string())
    }
}

// ============================================================================
// Predefined colors
// ============================================================================

pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
pub const RED: Rgba = Rgba::new(255, 0, 0, 255);
pub const GREEN: Rgba = Rgba::new(0, 255, 0, 255);
pub const BLUE: Rgba = Rgba::new(0, 0, 255, 255);
pub const YELLOW: Rgba = Rgba::new(255, 255, 0, 255);
pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

/// Maps color name strings to colors.
///
/// Used by the configuration system to parse color names from the config file.
/// Matching is case-insensitive.
pub fn name_to_color(name: &str) -> Option<Rgba> {
    match name.to_lowercase().as_str() {
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "transparent" => Some(TRANSPARENT),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_alpha_formats_as_one() {
        let color = Rgba::from_channels(100, 100, 200, Some(255));
        assert_eq!(color.to_rgba_string(), "rgba(100, 100, 200, 1)");
    }

    #[test]
    fn missing_alpha_defaults_to_opaque() {
        let color = Rgba::from_channels(1, 2, 3, None);
        assert_eq!(color.a, 255);
        assert_eq!(Rgba::from([1, 2, 3]), color);
        assert_eq!(color.to_color().a, 1.0);
    }

    #[test]
    fn zero_alpha_is_transparent() {
        assert_eq!(TRANSPARENT.to_rgba_string(), "rgba(0, 0, 0, 0)");
        assert_eq!(TRANSPARENT.to_color().a, 0.0);
    }

    #[test]
    fn normalizes_channels_for_backend() {
        let color = Rgba::new(255, 0, 51, 255).to_color();
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert!((color.b - 0.2).abs() < 1e-9);
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(name_to_color("White"), Some(WHITE));
        assert_eq!(name_to_color("BLUE"), Some(BLUE));
        assert_eq!(name_to_color("mauve"), None);
    }
}
