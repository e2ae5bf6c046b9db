//! Visual effects applied to a button: a drop shadow fed by a glow.
//!
//! The effects are plain values. A [`ButtonWidget`](crate::ButtonWidget)
//! mutates them on interaction and hands the result to its control, which
//! decides how to paint them.

use glow_style::Color;

use crate::widget::Rect;

/// Which parameter set of an effect is in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EffectLevel {
    /// Resting look, used while idle.
    #[default]
    Default,
    /// Emphasized look, used while hovered or pressed.
    High,
}

/// Drop shadow parameters for both effect levels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowConfig {
    /// Blur radius while idle, in pixels.
    pub radius_default: f32,
    /// Blur radius while hovered or pressed, in pixels.
    pub radius_high: f32,
    /// Spread (0.0-1.0) while idle.
    pub spread_default: f32,
    /// Spread (0.0-1.0) while hovered or pressed.
    pub spread_high: f32,
    /// Shadow color; the alpha depends on the level.
    pub color: [u8; 3],
}

impl ShadowConfig {
    /// Shadow opacity at [`EffectLevel::Default`].
    pub const ALPHA_DEFAULT: f32 = 0.4;
    /// Shadow opacity at [`EffectLevel::High`].
    pub const ALPHA_HIGH: f32 = 0.5;

    /// Create a shadow configuration.
    pub const fn new(
        radius_default: f32,
        radius_high: f32,
        spread_default: f32,
        spread_high: f32,
        color: [u8; 3],
    ) -> Self {
        Self {
            radius_default,
            radius_high,
            spread_default,
            spread_high,
            color,
        }
    }

    /// The blur radius at `level`.
    pub fn radius(&self, level: EffectLevel) -> f32 {
        match level {
            EffectLevel::Default => self.radius_default,
            EffectLevel::High => self.radius_high,
        }
    }

    /// The spread at `level`.
    pub fn spread(&self, level: EffectLevel) -> f32 {
        match level {
            EffectLevel::Default => self.spread_default,
            EffectLevel::High => self.spread_high,
        }
    }

    /// The shadow opacity at `level`.
    pub fn alpha(level: EffectLevel) -> f32 {
        match level {
            EffectLevel::Default => Self::ALPHA_DEFAULT,
            EffectLevel::High => Self::ALPHA_HIGH,
        }
    }

    /// The shadow color at `level`.
    pub fn color(&self, level: EffectLevel) -> Color {
        Color::from_rgb8_alpha(self.color, Self::alpha(level))
    }
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self::new(12.0, 12.0, 0.4, 0.7, [109, 110, 193])
    }
}

/// Glow intensity for both effect levels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowConfig {
    /// Glow level (0.0-1.0) while idle.
    pub level_default: f32,
    /// Glow level (0.0-1.0) while hovered.
    pub level_high: f32,
}

impl GlowConfig {
    /// Create a glow configuration.
    pub const fn new(level_default: f32, level_high: f32) -> Self {
        Self {
            level_default,
            level_high,
        }
    }

    /// The glow level at `level`.
    pub fn level(&self, level: EffectLevel) -> f32 {
        match level {
            EffectLevel::Default => self.level_default,
            EffectLevel::High => self.level_high,
        }
    }
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self::new(0.1, 0.2)
    }
}

/// A glow (bloom) effect.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Glow {
    /// Intensity, 0.0 (none) to 1.0 (full).
    pub level: f32,
}

impl Glow {
    /// Create a glow with the given intensity.
    pub const fn new(level: f32) -> Self {
        Self { level }
    }
}

/// A drop shadow drawn behind the control.
///
/// The shadow takes the [`Glow`] as its input: a renderer applies the glow
/// to the control first and casts the shadow from the result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropShadow {
    /// Blur radius in pixels.
    pub radius: f32,
    /// Portion of the radius (0.0-1.0) drawn at full opacity.
    pub spread: f32,
    /// Shadow color with straight alpha.
    pub color: Color,
    /// Horizontal offset in pixels.
    pub offset_x: f32,
    /// Vertical offset in pixels.
    pub offset_y: f32,
    /// The effect feeding this shadow.
    pub input: Glow,
}

impl DropShadow {
    /// Build the shadow for `level`, centered under the control.
    pub fn from_config(config: &ShadowConfig, level: EffectLevel, input: Glow) -> Self {
        Self {
            radius: config.radius(level),
            spread: config.spread(level),
            color: config.color(level),
            offset_x: 0.0,
            offset_y: 0.0,
            input,
        }
    }

    /// Switch radius, spread and color to `level`. Offsets and input are kept.
    pub fn set_level(&mut self, config: &ShadowConfig, level: EffectLevel) {
        self.radius = config.radius(level);
        self.spread = config.spread(level);
        self.color = config.color(level);
    }

    /// The area the shadow paints for a control occupying `bounds`.
    pub fn effect_bounds(&self, bounds: Rect) -> Rect {
        bounds
            .offset(self.offset_x, self.offset_y)
            .inflate(self.radius)
    }
}

impl Default for DropShadow {
    fn default() -> Self {
        Self::from_config(
            &ShadowConfig::default(),
            EffectLevel::Default,
            Glow::new(GlowConfig::default().level_default),
        )
    }
}

static_assertions::assert_impl_all!(DropShadow: Send, Sync, Copy);
