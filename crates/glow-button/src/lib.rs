//! A styled push-button for Glow Lattice.
//!
//! [`ButtonWidget`] wraps any [`PressableControl`] and gives it a glowing
//! look: the background swaps between three [`VisualStyle`]s, a
//! [`DropShadow`] widens and brightens while the pointer is over the button,
//! and a [`Glow`] effect feeds the shadow. The label uses an embedded font
//! resource, with a fallback to the system sans-serif font.
//!
//! # Interaction
//!
//! | Trigger | New state | Style | Shadow | Glow | Cursor |
//! |---------|-----------|-------|--------|------|--------|
//! | pointer enter | Hovered | hovered | high | high | hand |
//! | pointer exit | Idle | default | default | default | arrow |
//! | pointer down | Pressed | pressed | high | unchanged | unchanged |
//! | pointer up | Hovered | hovered | high | unchanged | unchanged |
//!
//! The new state depends on the trigger alone, see [`Interaction::transition`].
//!
//! # Example
//!
//! ```
//! use glow_button::prelude::*;
//!
//! let mut button = ButtonWidget::new("Go", 14, 200, 60);
//! assert_eq!(button.state(), Interaction::Idle);
//!
//! button.handle_event(&mut PointerEvent::enter(Point::new(10.0, 10.0)));
//! assert_eq!(button.state(), Interaction::Hovered);
//! assert_eq!(button.glow().level, 0.2);
//! ```

pub mod effects;
pub mod file;
pub mod font;
pub mod styled_button;
pub mod widget;

mod error;

pub use effects::{DropShadow, EffectLevel, Glow, GlowConfig, ShadowConfig};
pub use error::ResourceLoadError;
pub use file::{EmbeddedDir, ResourceManager, ResourcePath};
pub use font::{FontConfig, FontRegistry, FontSource, LoadedFont};
pub use styled_button::{
    ButtonConfig, ButtonVisuals, ButtonWidget, DEFAULT_FONT_PATH, Interaction, PointerTrigger,
    StyleSlot, TransitionEffects,
};
pub use widget::{
    DispatchResult, EnterEvent, EventBase, HeadlessControl, LeaveEvent, MouseButton,
    MouseMoveEvent, MousePressEvent, MouseReleaseEvent, Point, PointerDispatcher, PointerEvent,
    PointerHandlers, PressableControl, Rect, Size,
};

pub use glow_core;
pub use glow_style;
pub use glow_style::{Color, CursorShape, StylePresets, VisualStyle};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::effects::{DropShadow, Glow, GlowConfig, ShadowConfig};
    pub use crate::styled_button::{ButtonConfig, ButtonWidget, Interaction, PointerTrigger};
    pub use crate::widget::{
        HeadlessControl, MouseButton, Point, PointerEvent, PointerHandlers, PressableControl,
        Rect, Size,
    };
    pub use glow_core::Signal;
    pub use glow_style::{Color, CursorShape, StylePresets, VisualStyle};
}
