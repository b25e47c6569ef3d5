//! UI configuration loaded from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SandcraftError};

/// Window geometry and nine-slice defaults for the widget layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Window width in render-space units.
    pub window_width: u32,
    /// Window height in render-space units. Used to flip top-left window
    /// coordinates into the bottom-left render space.
    pub window_height: u32,
    /// Default slice border in source pixels.
    pub border: u32,
    /// Default rendered border thickness.
    pub border_width: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: 854,
            window_height: 480,
            border: 1,
            border_width: 1.0,
        }
    }
}

impl UiConfig {
    /// Parse and validate a config from TOML text. Missing keys keep their
    /// defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: UiConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded UI config from {}", path.as_ref().display());
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(SandcraftError::Config(format!(
                "window size {}x{} must be non-zero",
                self.window_width, self.window_height
            )));
        }
        if self.border == 0 {
            return Err(SandcraftError::Config("border must be at least 1".into()));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(SandcraftError::Config(format!(
                "border_width {} must be a non-negative number",
                self.border_width
            )));
        }
        Ok(())
    }

    /// Convert a y coordinate measured from the top of the window into
    /// render space.
    pub fn to_render_y(&self, top_y: f32) -> f32 {
        self.window_height as f32 - top_y
    }
}
