use cursor_icon::CursorIcon;

/// The shape (icon) of the mouse cursor over a widget.
///
/// Only the two shapes a pressable control switches between are listed.
/// Windowing backends translate them through [`CursorShape::to_cursor_icon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum CursorShape {
    /// The default arrow cursor (platform-specific).
    #[default]
    Arrow,

    /// A pointing hand cursor, typically used for clickable elements.
    Hand,
}

impl CursorShape {
    /// Convert to the cross-platform cursor icon name.
    pub fn to_cursor_icon(self) -> CursorIcon {
        match self {
            CursorShape::Arrow => CursorIcon::Default,
            CursorShape::Hand => CursorIcon::Pointer,
        }
    }

    /// The CSS `cursor` keyword for this shape.
    pub fn css_name(self) -> &'static str {
        self.to_cursor_icon().name()
    }
}

impl std::fmt::Display for CursorShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.css_name())
    }
}
