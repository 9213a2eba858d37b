//! Configuration type definitions.
//!
//! Every drawing setting is optional here; absent values fall back to the
//! built-in defaults when merged into [`DrawSettings`](crate::draw::DrawSettings).

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Width and height in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Dimensions {
    pub width: i32,
    pub height: i32,
}

impl Dimensions {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 380,
            height: 240,
        }
    }
}

/// Partial overrides for the drawing settings.
///
/// Nested groups merge field by field, so overriding only
/// `circle.segment_counts` keeps the default radius thresholds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DrawSettingsOverride {
    /// Stroke width in pixels (must be >= 0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f64>,

    /// Font size in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,

    /// Font family fallback list, CSS style (e.g. "'Screen Mono', monospace")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    /// Fixed-pitch glyph cell used for text layout
    #[serde(default)]
    pub font_char_dimensions: GlyphCellOverride,

    /// Color active right after construction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_color: Option<ColorSpec>,

    /// Circle tessellation table
    #[serde(default)]
    pub circle: CircleOverride,

    /// Map terrain palette
    #[serde(default)]
    pub map_colors: MapColorsConfig,
}

/// Glyph cell size overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GlyphCellOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// Circle tessellation overrides.
///
/// `radius_thresholds` must be strictly ascending and as long as
/// `segment_counts`; an invalid combination is replaced by the default table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CircleOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_thresholds: Option<Vec<f64>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment_counts: Option<Vec<u32>>,
}

/// Initial map palette entries, one optional color per terrain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MapColorsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grass: Option<ColorSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub land: Option<ColorSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ocean: Option<ColorSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sand: Option<ColorSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shallows: Option<ColorSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snow: Option<ColorSpec>,
}
