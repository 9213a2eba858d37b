//! Configuration enum types.

use crate::draw::{Rgba, color::name_to_color};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a named color, RGB values or RGBA values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "white"
///
/// # Custom RGB color (0-255 per component, fully opaque)
/// default_color = [255, 128, 0]
///
/// # Custom RGBA color (alpha also 0-255)
/// default_color = [255, 128, 0, 128]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: white, black, red, green, blue, yellow, transparent
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
    /// RGBA color as [red, green, blue, alpha] where each component is 0-255
    Rgba([u8; 4]),
}

impl ColorSpec {
    /// Converts the color specification to an [`Rgba`] value.
    ///
    /// Unknown color names resolve to `fallback` with a warning. RGB arrays
    /// are fully opaque.
    pub fn to_rgba_or(&self, fallback: Rgba) -> Rgba {
        match self {
            ColorSpec::Name(name) => name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using {}", name, fallback);
                fallback
            }),
            ColorSpec::Rgb(channels) => Rgba::from(*channels),
            ColorSpec::Rgba(channels) => Rgba::from(*channels),
        }
    }
}

impl From<Rgba> for ColorSpec {
    fn from(color: Rgba) -> Self {
        ColorSpec::Rgba([color.r, color.g, color.b, color.a])
    }
}
