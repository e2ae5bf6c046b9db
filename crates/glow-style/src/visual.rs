//! Visual styles and the preset triple used by pressable widgets.

use std::convert::Infallible;
use std::str::FromStr;

use crate::parser::{Declaration, parse_declarations};
use crate::types::{Color, CornerRadii};

/// The presentation of a widget in one interaction state.
///
/// # Example
///
/// ```
/// use glow_style::{Color, VisualStyle};
///
/// let style = VisualStyle::new(Color::BLACK, Color::WHITE, 4.0);
/// let hovered = style.with_background(Color::GRAY);
///
/// assert_eq!(hovered.text_color, Color::WHITE);
/// assert_eq!(hovered.corner_radius, 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualStyle {
    /// Fill color of the widget body.
    pub background: Color,
    /// Color of the label text.
    pub text_color: Color,
    /// Radius applied to all four corners, in pixels.
    pub corner_radius: f32,
}

impl Default for VisualStyle {
    fn default() -> Self {
        Self {
            background: Color::TRANSPARENT,
            text_color: Color::BLACK,
            corner_radius: 0.0,
        }
    }
}

impl VisualStyle {
    /// Create a visual style.
    pub const fn new(background: Color, text_color: Color, corner_radius: f32) -> Self {
        Self {
            background,
            text_color,
            corner_radius,
        }
    }

    /// Return a copy with a different background.
    pub fn with_background(self, background: Color) -> Self {
        Self { background, ..self }
    }

    /// Return a copy with a different text color.
    pub fn with_text_color(self, text_color: Color) -> Self {
        Self { text_color, ..self }
    }

    /// Return a copy with a different corner radius.
    pub fn with_corner_radius(self, corner_radius: f32) -> Self {
        Self {
            corner_radius,
            ..self
        }
    }

    /// The corner radius expanded to per-corner radii.
    pub fn corner_radii(&self) -> CornerRadii {
        CornerRadii::uniform(self.corner_radius)
    }

    /// Parse a declaration list, starting from [`VisualStyle::default`].
    ///
    /// Never fails; see [`parse_declarations`] for what is accepted.
    pub fn parse(css: &str) -> Self {
        Self::parse_with_fallback(css, &Self::default())
    }

    /// Parse a declaration list. Properties the string does not set keep
    /// the values of `fallback`.
    pub fn parse_with_fallback(css: &str, fallback: &VisualStyle) -> Self {
        let mut style = *fallback;
        for declaration in parse_declarations(css) {
            style.apply(declaration);
        }
        style
    }

    /// Apply a single parsed declaration.
    pub fn apply(&mut self, declaration: Declaration) {
        match declaration {
            Declaration::Background(color) => self.background = color,
            Declaration::TextColor(color) => self.text_color = color,
            Declaration::CornerRadius(radius) => self.corner_radius = radius,
        }
    }
}

impl FromStr for VisualStyle {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Formats as a declaration list that [`VisualStyle::parse`] reads back.
impl std::fmt::Display for VisualStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "background-color: {}; color: {}; border-radius: {}px;",
            self.background, self.text_color, self.corner_radius
        )
    }
}

/// The three looks of a pressable widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StylePresets {
    /// Shown while idle, and right after the presets are replaced.
    pub default: VisualStyle,
    /// Shown while the pointer is over the widget.
    pub hovered: VisualStyle,
    /// Shown while the widget is pressed.
    pub pressed: VisualStyle,
}

impl StylePresets {
    /// Background opacity factor of the derived hovered style.
    pub const HOVERED_ALPHA: f32 = 0.9;
    /// Background opacity factor of the derived pressed style.
    pub const PRESSED_ALPHA: f32 = 0.6;

    /// Create presets from three explicit styles.
    pub const fn new(default: VisualStyle, hovered: VisualStyle, pressed: VisualStyle) -> Self {
        Self {
            default,
            hovered,
            pressed,
        }
    }

    /// Derive all three presets from one base color scheme.
    ///
    /// The hovered and pressed styles only fade the background, by
    /// [`HOVERED_ALPHA`](Self::HOVERED_ALPHA) and
    /// [`PRESSED_ALPHA`](Self::PRESSED_ALPHA).
    pub fn from_base(background: Color, text_color: Color, corner_radius: f32) -> Self {
        let default = VisualStyle::new(background, text_color, corner_radius);
        Self {
            default,
            hovered: default.with_background(background.scale_alpha(Self::HOVERED_ALPHA)),
            pressed: default.with_background(background.scale_alpha(Self::PRESSED_ALPHA)),
        }
    }

    /// Build presets from three style strings.
    ///
    /// `default` is parsed on top of [`VisualStyle::default`]; `hovered` and
    /// `pressed` are parsed on top of the resulting default style, so they
    /// only need to name what differs.
    pub fn parse(default: &str, hovered: &str, pressed: &str) -> Self {
        let default = VisualStyle::parse(default);
        Self {
            default,
            hovered: VisualStyle::parse_with_fallback(hovered, &default),
            pressed: VisualStyle::parse_with_fallback(pressed, &default),
        }
    }
}

impl Default for StylePresets {
    /// Lavender body, pale lavender text, 12px corners.
    fn default() -> Self {
        Self::from_base(
            Color::from_rgb8(109, 110, 193),
            Color::from_rgb8(153, 155, 212),
            12.0,
        )
    }
}

static_assertions::assert_impl_all!(VisualStyle: Send, Sync, Copy);
static_assertions::assert_impl_all!(StylePresets: Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;

    fn lavender() -> Color {
        Color::from_rgb8(109, 110, 193)
    }

    #[test]
    fn test_default_presets() {
        let presets = StylePresets::default();

        assert_eq!(presets.default.background, lavender());
        assert_eq!(presets.hovered.background, lavender().with_alpha(0.9));
        assert_eq!(presets.pressed.background, lavender().with_alpha(0.6));

        for style in [presets.default, presets.hovered, presets.pressed] {
            assert_eq!(style.text_color, Color::from_rgb8(153, 155, 212));
            assert_eq!(style.corner_radius, 12.0);
        }
    }

    #[test]
    fn test_default_presets_match_style_strings() {
        let parsed = StylePresets::parse(
            "-fx-background-color: rgba(109, 110, 193); -fx-text-fill: rgba(153, 155, 212); \
             -fx-border-radius: 12;-fx-background-radius: 12;",
            "-fx-background-color: rgba(109, 110, 193, 0.9);",
            "-fx-background-color: rgba(109, 110, 193, 0.6);",
        );

        assert_eq!(parsed, StylePresets::default());
    }

    #[test]
    fn test_parse_keeps_fallback_values() {
        let fallback = VisualStyle::new(Color::BLACK, Color::WHITE, 3.0);
        let style = VisualStyle::parse_with_fallback("color: red; bogus: 1", &fallback);

        assert_eq!(style.background, Color::BLACK);
        assert_eq!(style.text_color, Color::RED);
        assert_eq!(style.corner_radius, 3.0);
    }

    #[test]
    fn test_later_declarations_win() {
        let style = VisualStyle::parse("border-radius: 2; -fx-background-radius: 9");
        assert_eq!(style.corner_radius, 9.0);
        assert_eq!(style.corner_radii(), CornerRadii::uniform(9.0));
    }

    #[test]
    fn test_display_round_trip() {
        let style = StylePresets::default().hovered;
        let reparsed: VisualStyle = style.to_string().parse().unwrap();
        assert_eq!(reparsed, style);
    }

    #[test]
    fn test_from_base_fades_translucent_background() {
        let presets = StylePresets::from_base(Color::WHITE.with_alpha(0.5), Color::BLACK, 0.0);
        assert_eq!(presets.hovered.background.a, 0.45);
        assert_eq!(presets.pressed.background.a, 0.3);
    }
}
