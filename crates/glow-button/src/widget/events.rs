//! Pointer events delivered to widgets.
//!
//! Positions are in widget-local coordinates. Hosts translate window
//! coordinates before building events.

use super::geometry::Point;
use crate::styled_button::PointerTrigger;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left,
    /// Secondary button (usually right).
    Right,
    /// Middle button (scroll wheel click).
    Middle,
}

/// Common data for all pointer events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Enter event, sent when the pointer enters the widget area.
#[derive(Debug, Clone, Copy)]
pub struct EnterEvent {
    /// Base event data.
    pub base: EventBase,
    /// The position where the pointer entered.
    pub local_pos: Point,
}

impl EnterEvent {
    /// Create a new enter event.
    pub fn new(local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            local_pos,
        }
    }
}

/// Leave event, sent when the pointer leaves the widget area.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeaveEvent {
    /// Base event data.
    pub base: EventBase,
}

impl LeaveEvent {
    /// Create a new leave event.
    pub fn new() -> Self {
        Self {
            base: EventBase::new(),
        }
    }
}

/// Mouse move event.
#[derive(Debug, Clone, Copy)]
pub struct MouseMoveEvent {
    /// Base event data.
    pub base: EventBase,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
}

impl MouseMoveEvent {
    /// Create a new mouse move event.
    pub fn new(local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            local_pos,
        }
    }
}

/// Mouse press event.
#[derive(Debug, Clone, Copy)]
pub struct MousePressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was pressed.
    pub button: MouseButton,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
}

impl MousePressEvent {
    /// Create a new mouse press event.
    pub fn new(button: MouseButton, local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
        }
    }
}

/// Mouse release event.
#[derive(Debug, Clone, Copy)]
pub struct MouseReleaseEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was released.
    pub button: MouseButton,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
}

impl MouseReleaseEvent {
    /// Create a new mouse release event.
    pub fn new(button: MouseButton, local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
        }
    }
}

/// Any pointer event a pressable widget reacts to.
#[derive(Debug, Clone, Copy)]
pub enum PointerEvent {
    Enter(EnterEvent),
    Leave(LeaveEvent),
    Move(MouseMoveEvent),
    Press(MousePressEvent),
    Release(MouseReleaseEvent),
}

impl PointerEvent {
    /// Shorthand for an enter event.
    pub fn enter(local_pos: Point) -> Self {
        Self::Enter(EnterEvent::new(local_pos))
    }

    /// Shorthand for a leave event.
    pub fn leave() -> Self {
        Self::Leave(LeaveEvent::new())
    }

    /// Shorthand for a move event.
    pub fn moved(local_pos: Point) -> Self {
        Self::Move(MouseMoveEvent::new(local_pos))
    }

    /// Shorthand for a left-button press.
    pub fn press(local_pos: Point) -> Self {
        Self::Press(MousePressEvent::new(MouseButton::Left, local_pos))
    }

    /// Shorthand for a left-button release.
    pub fn release(local_pos: Point) -> Self {
        Self::Release(MouseReleaseEvent::new(MouseButton::Left, local_pos))
    }

    /// The interaction trigger this event maps to, if any.
    ///
    /// Move events have none; the dispatcher turns them into enter/exit.
    pub fn trigger(&self) -> Option<PointerTrigger> {
        match self {
            Self::Enter(_) => Some(PointerTrigger::Enter),
            Self::Leave(_) => Some(PointerTrigger::Exit),
            Self::Move(_) => None,
            Self::Press(_) => Some(PointerTrigger::Down),
            Self::Release(_) => Some(PointerTrigger::Up),
        }
    }

    /// The pointer position, for events that carry one.
    pub fn local_pos(&self) -> Option<Point> {
        match self {
            Self::Enter(e) => Some(e.local_pos),
            Self::Leave(_) => None,
            Self::Move(e) => Some(e.local_pos),
            Self::Press(e) => Some(e.local_pos),
            Self::Release(e) => Some(e.local_pos),
        }
    }

    /// Get the base event data.
    pub fn base(&self) -> &EventBase {
        match self {
            Self::Enter(e) => &e.base,
            Self::Leave(e) => &e.base,
            Self::Move(e) => &e.base,
            Self::Press(e) => &e.base,
            Self::Release(e) => &e.base,
        }
    }

    /// Get the mutable base event data.
    pub fn base_mut(&mut self) -> &mut EventBase {
        match self {
            Self::Enter(e) => &mut e.base,
            Self::Leave(e) => &mut e.base,
            Self::Move(e) => &mut e.base,
            Self::Press(e) => &mut e.base,
            Self::Release(e) => &mut e.base,
        }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.base().is_accepted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_triggers() {
        let pos = Point::new(4.0, 4.0);
        assert_eq!(PointerEvent::enter(pos).trigger(), Some(PointerTrigger::Enter));
        assert_eq!(PointerEvent::leave().trigger(), Some(PointerTrigger::Exit));
        assert_eq!(PointerEvent::moved(pos).trigger(), None);
        assert_eq!(PointerEvent::press(pos).trigger(), Some(PointerTrigger::Down));
        assert_eq!(PointerEvent::release(pos).trigger(), Some(PointerTrigger::Up));
    }

    #[test]
    fn test_accept() {
        let mut event = PointerEvent::leave();
        assert!(!event.is_accepted());
        assert_eq!(event.local_pos(), None);

        event.base_mut().accept();
        assert!(event.is_accepted());

        event.base_mut().ignore();
        assert!(!event.is_accepted());
    }
}
