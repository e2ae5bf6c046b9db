//! Construction-time configuration of a styled button.

use glow_style::StylePresets;

use crate::effects::{GlowConfig, ShadowConfig};
use crate::font::FontConfig;

/// The font resource a button loads unless configured otherwise.
pub const DEFAULT_FONT_PATH: &str = ":/fonts/Calistoga-Regular.ttf";

/// Everything a [`ButtonWidget`](super::ButtonWidget) is built from besides
/// its label and size.
///
/// # Example
///
/// ```
/// use glow_button::{ButtonConfig, FontConfig, GlowConfig, ShadowConfig};
///
/// let config = ButtonConfig::new()
///     .font_path("theme:/fonts/Brand.ttf")
///     .font_config(FontConfig::new().load_system_fonts(false))
///     .shadow(ShadowConfig::new(8.0, 16.0, 0.2, 0.6, [0, 0, 0]))
///     .glow(GlowConfig::new(0.0, 0.3));
///
/// assert_eq!(config.glow.level_high, 0.3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonConfig {
    /// Resource path of the label font.
    pub font_path: String,
    /// How to pick a fallback font when the resource cannot be used.
    pub font: FontConfig,
    /// Initial drop shadow parameters.
    pub shadow: ShadowConfig,
    /// Initial glow parameters.
    pub glow: GlowConfig,
    /// Initial default/hovered/pressed styles.
    pub presets: StylePresets,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            font_path: DEFAULT_FONT_PATH.to_string(),
            font: FontConfig::default(),
            shadow: ShadowConfig::default(),
            glow: GlowConfig::default(),
            presets: StylePresets::default(),
        }
    }
}

impl ButtonConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font resource path.
    pub fn font_path(mut self, path: impl Into<String>) -> Self {
        self.font_path = path.into();
        self
    }

    /// Set the fallback font configuration.
    pub fn font_config(mut self, font: FontConfig) -> Self {
        self.font = font;
        self
    }

    /// Set the initial shadow parameters.
    pub fn shadow(mut self, shadow: ShadowConfig) -> Self {
        self.shadow = shadow;
        self
    }

    /// Set the initial glow parameters.
    pub fn glow(mut self, glow: GlowConfig) -> Self {
        self.glow = glow;
        self
    }

    /// Set the initial styles.
    pub fn presets(mut self, presets: StylePresets) -> Self {
        self.presets = presets;
        self
    }
}
