//! Configuration file support.
//!
//! This module handles loading and validating settings from the configuration
//! file located at `~/.config/screen-api/config.toml`. Settings cover the
//! size of a newly created surface, optional reported dimensions, and drawing
//! defaults (line width, font, tessellation table, map palette).
//!
//! If no config file exists, defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{
    CircleOverride, Dimensions, DrawSettingsOverride, GlyphCellOverride, MapColorsConfig,
};

use crate::screen::ScreenOptions;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have defaults and will use those if not specified.
///
/// # Example TOML
/// ```toml
/// [surface]
/// width = 380
/// height = 240
///
/// [report]
/// width = 190
/// height = 120
///
/// [draw]
/// line_width = 2.0
/// default_color = "white"
///
/// [draw.circle]
/// radius_thresholds = [0.0, 20.0, 28.0]
/// segment_counts = [8, 12, 16]
///
/// [draw.map_colors]
/// ocean = [0, 0, 255]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    /// Size of the surface created when no existing target is supplied
    #[serde(default)]
    pub surface: Dimensions,

    /// Logical dimensions reported instead of the physical surface size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<Dimensions>,

    /// Drawing setting overrides
    #[serde(default)]
    pub draw: DrawSettingsOverride,
}

impl Config {
    /// Clamps surface dimensions to at least one pixel and drops a reported
    /// size that has a non-positive side.
    fn validate_and_clamp(&mut self) {
        if self.surface.width < 1 || self.surface.height < 1 {
            warn!(
                "Invalid surface size {}x{}, clamping to at least 1x1",
                self.surface.width, self.surface.height
            );
            self.surface.width = self.surface.width.max(1);
            self.surface.height = self.surface.height.max(1);
        }

        if let Some(report) = self.report {
            if report.width < 1 || report.height < 1 {
                warn!(
                    "Invalid reported size {}x{}, ignoring",
                    report.width, report.height
                );
                self.report = None;
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("screen-api");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Loads configuration from `path`, or returns defaults if the file is absent.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or contains
    /// invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Serializes the config to TOML and writes it to `path`, creating the
    /// parent directory if needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, config_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Saves the config to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Construction options for a new surface described by this config.
    pub fn to_options(&self) -> ScreenOptions {
        let mut options = ScreenOptions::new()
            .dimensions(self.surface)
            .draw_settings(self.draw.clone());
        if let Some(report) = self.report {
            options = options.report_dimensions(report);
        }
        options
    }
}
