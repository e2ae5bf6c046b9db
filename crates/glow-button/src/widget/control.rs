//! The seam between a styled widget and the host toolkit's native control.

use glow_style::{CursorShape, VisualStyle};

use super::geometry::{Rect, Size};
use crate::effects::DropShadow;
use crate::font::LoadedFont;

/// A native pressable control that a [`ButtonWidget`](crate::ButtonWidget)
/// drives.
///
/// Implement this for the host toolkit's button type. The widget owns the
/// control and forwards every visual change to it; the control never calls
/// back into the widget.
pub trait PressableControl {
    /// Set the label text.
    fn set_label(&mut self, text: &str);

    /// The current label text.
    fn label(&self) -> &str;

    /// Set the size the control asks its layout for.
    fn set_preferred_size(&mut self, size: Size);

    /// The size the control asks its layout for.
    fn preferred_size(&self) -> Size;

    /// Use `font` for the label.
    fn set_font(&mut self, font: &LoadedFont);

    /// Show `cursor` while the pointer is over the control.
    fn set_cursor(&mut self, cursor: CursorShape);

    /// Repaint the control body and label with `style`.
    fn apply_style(&mut self, style: &VisualStyle);

    /// Attach `shadow` (and the glow it takes as input) to the control.
    fn apply_effect(&mut self, shadow: &DropShadow);

    /// The control's own area in local coordinates, excluding effects.
    fn bounds(&self) -> Rect {
        Rect::from_size(self.preferred_size())
    }
}

/// A control without a toolkit behind it.
///
/// It records what the widget applied, which makes it suitable for tests and
/// for hosts that paint from [`ButtonWidget::visuals`](crate::ButtonWidget::visuals)
/// instead of pushing changes into a native control.
#[derive(Debug, Clone, Default)]
pub struct HeadlessControl {
    label: String,
    preferred_size: Size,
    size: Option<Size>,
    font: Option<LoadedFont>,
    cursor: CursorShape,
    style: Option<VisualStyle>,
    effect: Option<DropShadow>,
    style_applications: usize,
    effect_applications: usize,
}

impl HeadlessControl {
    /// Create an empty headless control.
    pub fn new() -> Self {
        Self::default()
    }

    /// Give the control an actual size different from its preferred size,
    /// as a layout would.
    pub fn resize(&mut self, size: Size) {
        self.size = Some(size);
    }

    /// The font applied last.
    pub fn font(&self) -> Option<&LoadedFont> {
        self.font.as_ref()
    }

    /// The cursor applied last.
    pub fn cursor(&self) -> CursorShape {
        self.cursor
    }

    /// The style applied last.
    pub fn applied_style(&self) -> Option<&VisualStyle> {
        self.style.as_ref()
    }

    /// The effect applied last.
    pub fn applied_effect(&self) -> Option<&DropShadow> {
        self.effect.as_ref()
    }

    /// How many times a style was applied.
    pub fn style_applications(&self) -> usize {
        self.style_applications
    }

    /// How many times an effect was applied.
    pub fn effect_applications(&self) -> usize {
        self.effect_applications
    }
}

impl PressableControl for HeadlessControl {
    fn set_label(&mut self, text: &str) {
        self.label = text.to_string();
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn set_preferred_size(&mut self, size: Size) {
        self.preferred_size = size;
    }

    fn preferred_size(&self) -> Size {
        self.preferred_size
    }

    fn set_font(&mut self, font: &LoadedFont) {
        self.font = Some(font.clone());
    }

    fn set_cursor(&mut self, cursor: CursorShape) {
        self.cursor = cursor;
    }

    fn apply_style(&mut self, style: &VisualStyle) {
        self.style = Some(*style);
        self.style_applications += 1;
    }

    fn apply_effect(&mut self, shadow: &DropShadow) {
        self.effect = Some(*shadow);
        self.effect_applications += 1;
    }

    fn bounds(&self) -> Rect {
        Rect::from_size(self.size.unwrap_or(self.preferred_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_follow_size() {
        let mut control = HeadlessControl::new();
        control.set_preferred_size(Size::new(200.0, 60.0));
        assert_eq!(control.bounds(), Rect::new(0.0, 0.0, 200.0, 60.0));

        control.resize(Size::new(120.0, 40.0));
        assert_eq!(control.bounds(), Rect::new(0.0, 0.0, 120.0, 40.0));
        assert_eq!(control.preferred_size(), Size::new(200.0, 60.0));
    }

    #[test]
    fn test_records_applications() {
        let mut control = HeadlessControl::new();
        let style = VisualStyle::default();

        control.apply_style(&style);
        control.apply_style(&style);
        control.apply_effect(&DropShadow::default());

        assert_eq!(control.applied_style(), Some(&style));
        assert_eq!(control.style_applications(), 2);
        assert_eq!(control.effect_applications(), 1);
    }
}
