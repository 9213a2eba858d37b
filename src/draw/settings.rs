//! Resolved drawing settings and the override merge.

use super::color::{Rgba, WHITE};
use super::font::FontDescriptor;
use super::geometry::Tessellation;
use super::palette::{MapPalette, MapTerrain};
use super::text::GlyphCell;
use crate::config::{ColorSpec, DrawSettingsOverride};
use log::warn;

pub const DEFAULT_LINE_WIDTH: f64 = 1.4;
pub const DEFAULT_FONT_SIZE: f64 = 5.0;
pub const DEFAULT_FONT_FAMILY: &str = "'Screen Mono', 'Lucida Console', Monaco, monospace";

/// Drawing settings fixed at construction time.
///
/// Only `map_colors` changes afterwards, through the palette setters on
/// [`Screen`](crate::Screen).
#[derive(Debug, Clone, PartialEq)]
pub struct DrawSettings {
    pub line_width: f64,
    pub font_size: f64,
    pub font_family: String,
    pub font_char_dimensions: GlyphCell,
    pub default_color: Rgba,
    pub circle: Tessellation,
    pub map_colors: MapPalette,
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            font_size: DEFAULT_FONT_SIZE,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_char_dimensions: GlyphCell::default(),
            default_color: WHITE,
            circle: Tessellation::default(),
            map_colors: MapPalette::default(),
        }
    }
}

impl DrawSettings {
    /// Defaults with `overrides` applied on top.
    pub fn merged(overrides: &DrawSettingsOverride) -> Self {
        Self::default().merge(overrides)
    }

    /// Applies `overrides` field by field, then validates the result.
    ///
    /// Values that would break drawing are replaced by defaults (or clamped)
    /// and a warning is logged.
    pub fn merge(mut self, overrides: &DrawSettingsOverride) -> Self {
        if let Some(line_width) = overrides.line_width {
            self.line_width = line_width;
        }
        if let Some(font_size) = overrides.font_size {
            self.font_size = font_size;
        }
        if let Some(family) = &overrides.font_family {
            self.font_family = family.clone();
        }
        if let Some(width) = overrides.font_char_dimensions.width {
            self.font_char_dimensions.width = width;
        }
        if let Some(height) = overrides.font_char_dimensions.height {
            self.font_char_dimensions.height = height;
        }
        if let Some(color) = &overrides.default_color {
            self.default_color = color.to_rgba_or(WHITE);
        }
        if let Some(thresholds) = &overrides.circle.radius_thresholds {
            self.circle.radius_thresholds = thresholds.clone();
        }
        if let Some(counts) = &overrides.circle.segment_counts {
            self.circle.segment_counts = counts.clone();
        }

        let palette = &overrides.map_colors;
        let entries: [(MapTerrain, &Option<ColorSpec>); 6] = [
            (MapTerrain::Grass, &palette.grass),
            (MapTerrain::Land, &palette.land),
            (MapTerrain::Ocean, &palette.ocean),
            (MapTerrain::Sand, &palette.sand),
            (MapTerrain::Shallows, &palette.shallows),
            (MapTerrain::Snow, &palette.snow),
        ];
        for (terrain, spec) in entries {
            if let Some(spec) = spec {
                self.map_colors.set(terrain, spec.to_rgba_or(WHITE));
            }
        }

        self.validate_and_clamp();
        self
    }

    fn validate_and_clamp(&mut self) {
        if !self.line_width.is_finite() || self.line_width < 0.0 {
            warn!(
                "Invalid line_width {}, using {}",
                self.line_width, DEFAULT_LINE_WIDTH
            );
            self.line_width = DEFAULT_LINE_WIDTH;
        }

        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            warn!(
                "Invalid font_size {}, using {}",
                self.font_size, DEFAULT_FONT_SIZE
            );
            self.font_size = DEFAULT_FONT_SIZE;
        }

        if self.font_family.trim().is_empty() {
            warn!("Empty font_family, using default families");
            self.font_family = DEFAULT_FONT_FAMILY.to_string();
        }

        let defaults = GlyphCell::default();
        let cell = &mut self.font_char_dimensions;
        if !cell.width.is_finite() || cell.width <= 0.0 {
            warn!("Invalid glyph cell width {}, using {}", cell.width, defaults.width);
            cell.width = defaults.width;
        }
        if !cell.height.is_finite() || cell.height <= 0.0 {
            warn!("Invalid glyph cell height {}, using {}", cell.height, defaults.height);
            cell.height = defaults.height;
        }

        if let Err(reason) = self.circle.validate() {
            warn!("Invalid circle tessellation table ({}), using defaults", reason);
            self.circle = Tessellation::default();
        }
    }

    /// Font used for all text drawing.
    pub fn font(&self) -> FontDescriptor {
        FontDescriptor::new(self.font_family.clone(), self.font_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CircleOverride, GlyphCellOverride, MapColorsConfig};

    #[test]
    fn empty_override_yields_defaults() {
        assert_eq!(
            DrawSettings::merged(&DrawSettingsOverride::default()),
            DrawSettings::default()
        );
    }

    #[test]
    fn nested_groups_merge_per_field() {
        let overrides = DrawSettingsOverride {
            font_char_dimensions: GlyphCellOverride {
                width: Some(6.0),
                height: None,
            },
            circle: CircleOverride {
                radius_thresholds: None,
                segment_counts: Some(vec![6, 10, 24]),
            },
            ..Default::default()
        };
        let settings = DrawSettings::merged(&overrides);

        assert_eq!(settings.font_char_dimensions.width, 6.0);
        assert_eq!(settings.font_char_dimensions.height, 5.0);
        assert_eq!(settings.circle.radius_thresholds, vec![0.0, 20.0, 28.0]);
        assert_eq!(settings.circle.segment_counts, vec![6, 10, 24]);
        assert_eq!(settings.line_width, DEFAULT_LINE_WIDTH);
    }

    #[test]
    fn invalid_tessellation_falls_back_to_default() {
        let overrides = DrawSettingsOverride {
            circle: CircleOverride {
                radius_thresholds: Some(vec![0.0, 50.0, 10.0]),
                segment_counts: None,
            },
            ..Default::default()
        };
        assert_eq!(DrawSettings::merged(&overrides).circle, Tessellation::default());
    }

    #[test]
    fn invalid_scalars_are_replaced() {
        let overrides = DrawSettingsOverride {
            line_width: Some(-2.0),
            font_size: Some(0.0),
            font_family: Some("   ".into()),
            font_char_dimensions: GlyphCellOverride {
                width: Some(f64::NAN),
                height: Some(-1.0),
            },
            ..Default::default()
        };
        assert_eq!(DrawSettings::merged(&overrides), DrawSettings::default());
    }

    #[test]
    fn zero_line_width_is_allowed() {
        let overrides = DrawSettingsOverride {
            line_width: Some(0.0),
            ..Default::default()
        };
        assert_eq!(DrawSettings::merged(&overrides).line_width, 0.0);
    }

    #[test]
    fn palette_and_default_color_come_from_specs() {
        let overrides = DrawSettingsOverride {
            default_color: Some(ColorSpec::Rgb([10, 20, 30])),
            map_colors: MapColorsConfig {
                ocean: Some(ColorSpec::Rgba([0, 0, 200, 128])),
                ..Default::default()
            },
            ..Default::default()
        };
        let settings = DrawSettings::merged(&overrides);

        assert_eq!(settings.default_color, Rgba::new(10, 20, 30, 255));
        assert_eq!(
            settings.map_colors.get(MapTerrain::Ocean),
            Some(Rgba::new(0, 0, 200, 128))
        );
        assert_eq!(settings.map_colors.get(MapTerrain::Land), None);
    }

    #[test]
    fn font_uses_family_and_size() {
        let font = DrawSettings::default().font();
        assert_eq!(font.size, 5.0);
        assert_eq!(font.family, DEFAULT_FONT_FAMILY);
    }
}
