//! Interaction states and the transition table of a styled button.
//!
//! Everything here is pure: given a trigger, [`Interaction::transition`]
//! names the next state and [`PointerTrigger::effects`] names what changes
//! visually. [`ButtonWidget`](super::ButtonWidget) only applies the result.

use glow_style::{CursorShape, StylePresets, VisualStyle};

use crate::effects::EffectLevel;

/// The interaction state of a button. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Interaction {
    /// The pointer is elsewhere.
    #[default]
    Idle,
    /// The pointer is over the button.
    Hovered,
    /// A button is held down on the button.
    Pressed,
}

impl Interaction {
    /// The state after `trigger`.
    ///
    /// The result depends on the trigger alone. In particular
    /// [`PointerTrigger::Up`] always lands in [`Interaction::Hovered`], even
    /// when the pointer was released outside the button; the next exit or
    /// enter corrects the state.
    ///
    /// ```
    /// use glow_button::{Interaction, PointerTrigger};
    ///
    /// let state = Interaction::Idle
    ///     .transition(PointerTrigger::Enter)
    ///     .transition(PointerTrigger::Down)
    ///     .transition(PointerTrigger::Up);
    /// assert_eq!(state, Interaction::Hovered);
    /// ```
    pub fn transition(self, trigger: PointerTrigger) -> Interaction {
        match trigger {
            PointerTrigger::Enter => Interaction::Hovered,
            PointerTrigger::Exit => Interaction::Idle,
            PointerTrigger::Down => Interaction::Pressed,
            PointerTrigger::Up => Interaction::Hovered,
        }
    }

    /// Whether the button is drawn with the high effect level.
    pub fn is_highlighted(self) -> bool {
        !matches!(self, Interaction::Idle)
    }
}

impl std::fmt::Display for Interaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Interaction::Idle => "idle",
            Interaction::Hovered => "hovered",
            Interaction::Pressed => "pressed",
        })
    }
}

/// The four pointer callbacks that drive a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerTrigger {
    /// The pointer moved onto the button.
    Enter,
    /// The pointer moved off the button.
    Exit,
    /// A mouse button went down on the button.
    Down,
    /// A mouse button that went down on the button was released.
    Up,
}

impl PointerTrigger {
    /// All triggers, in declaration order.
    pub const ALL: [PointerTrigger; 4] = [
        PointerTrigger::Enter,
        PointerTrigger::Exit,
        PointerTrigger::Down,
        PointerTrigger::Up,
    ];

    /// The visual changes this trigger causes.
    pub fn effects(self) -> TransitionEffects {
        match self {
            PointerTrigger::Enter => TransitionEffects {
                style: StyleSlot::Hovered,
                cursor: Some(CursorShape::Hand),
                shadow: EffectLevel::High,
                glow: Some(EffectLevel::High),
            },
            PointerTrigger::Exit => TransitionEffects {
                style: StyleSlot::Default,
                cursor: Some(CursorShape::Arrow),
                shadow: EffectLevel::Default,
                glow: Some(EffectLevel::Default),
            },
            PointerTrigger::Down => TransitionEffects {
                style: StyleSlot::Pressed,
                cursor: None,
                shadow: EffectLevel::High,
                glow: None,
            },
            PointerTrigger::Up => TransitionEffects {
                style: StyleSlot::Hovered,
                cursor: None,
                shadow: EffectLevel::High,
                glow: None,
            },
        }
    }
}

impl std::fmt::Display for PointerTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            PointerTrigger::Enter => "pointer_enter",
            PointerTrigger::Exit => "pointer_exit",
            PointerTrigger::Down => "pointer_down",
            PointerTrigger::Up => "pointer_up",
        })
    }
}

/// One of the three styles in a [`StylePresets`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleSlot {
    /// The idle style, also shown right after the presets change.
    Default,
    /// The style shown while the pointer is over the button.
    Hovered,
    /// The style shown while the button is held down.
    Pressed,
}

impl StyleSlot {
    /// Pick this slot's style out of `presets`.
    pub fn select(self, presets: &StylePresets) -> VisualStyle {
        match self {
            StyleSlot::Default => presets.default,
            StyleSlot::Hovered => presets.hovered,
            StyleSlot::Pressed => presets.pressed,
        }
    }
}

/// What a single trigger changes. `None` leaves the current value alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionEffects {
    /// The style to show.
    pub style: StyleSlot,
    /// The cursor to show.
    pub cursor: Option<CursorShape>,
    /// The shadow parameter set.
    pub shadow: EffectLevel,
    /// The glow parameter set.
    pub glow: Option<EffectLevel>,
}
