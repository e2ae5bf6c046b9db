//! Pointer event routing for pressable widgets.
//!
//! A [`PointerDispatcher`] sits between the host's raw pointer stream and a
//! widget's four [`PointerHandlers`]:
//!
//! 1. **Enter/Leave** from the host are forwarded as-is.
//! 2. **Move** events are hit-tested and turned into enter/exit when the
//!    pointer crosses the widget's hit area. Hosts that already deliver
//!    enter/leave can skip moves entirely.
//! 3. **Press** is forwarded only inside the hit area and grabs the pointer
//!    for that mouse button.
//! 4. **Release** of a grabbed button goes to the widget, wherever the
//!    pointer is at that point. Each button holds its own grab, so releasing
//!    one does not drop another that is still held.

use glow_core::logging::targets;

use super::events::{
    EnterEvent, LeaveEvent, MouseButton, MousePressEvent, MouseReleaseEvent, PointerEvent,
};
use super::geometry::Point;

/// Result of dispatching an event to a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    /// The event was accepted/handled.
    Accepted,
    /// The event was not handled.
    Ignored,
}

impl DispatchResult {
    /// Check if the event was handled.
    pub fn was_handled(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// The four pointer callbacks of a pressable widget.
pub trait PointerHandlers {
    /// The pointer moved onto the widget.
    fn on_pointer_enter(&mut self, event: &mut EnterEvent);

    /// The pointer moved off the widget.
    fn on_pointer_exit(&mut self, event: &mut LeaveEvent);

    /// A button was pressed over the widget.
    fn on_pointer_down(&mut self, event: &mut MousePressEvent);

    /// A button pressed over the widget was released.
    fn on_pointer_up(&mut self, event: &mut MouseReleaseEvent);

    /// Whether `pos` is inside the widget's hit area.
    fn hit_test(&self, pos: Point) -> bool;
}

/// Routes pointer events to [`PointerHandlers`], tracking hover and grab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerDispatcher {
    hovered: bool,
    /// One bit per mouse button pressed on the widget and not yet released.
    grabbed: u8,
}

impl PointerDispatcher {
    /// Create a dispatcher with the pointer outside and no grab.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the pointer is currently considered inside the widget.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether any press on the widget has not been released yet.
    pub fn is_grabbed(&self) -> bool {
        self.grabbed != 0
    }

    /// Whether `button` was pressed on the widget and not released yet.
    pub fn is_button_grabbed(&self, button: MouseButton) -> bool {
        self.grabbed & grab_bit(button) != 0
    }

    /// Deliver `event` to `handlers`.
    #[tracing::instrument(skip_all, target = "glow_button::dispatch", level = "trace")]
    pub fn dispatch<H: PointerHandlers + ?Sized>(
        &mut self,
        handlers: &mut H,
        event: &mut PointerEvent,
    ) -> DispatchResult {
        let result = match event {
            PointerEvent::Enter(enter) => {
                self.hovered = true;
                handlers.on_pointer_enter(enter);
                Self::result_of(enter.base.is_accepted())
            }
            PointerEvent::Leave(leave) => {
                self.hovered = false;
                handlers.on_pointer_exit(leave);
                Self::result_of(leave.base.is_accepted())
            }
            PointerEvent::Move(moved) => {
                let inside = handlers.hit_test(moved.local_pos);
                if inside && !self.hovered {
                    self.hovered = true;
                    let mut enter = EnterEvent::new(moved.local_pos);
                    handlers.on_pointer_enter(&mut enter);
                    moved.base.accept();
                    DispatchResult::Accepted
                } else if !inside && self.hovered {
                    self.hovered = false;
                    let mut leave = LeaveEvent::new();
                    handlers.on_pointer_exit(&mut leave);
                    moved.base.accept();
                    DispatchResult::Accepted
                } else {
                    DispatchResult::Ignored
                }
            }
            PointerEvent::Press(press) => {
                if !handlers.hit_test(press.local_pos) {
                    tracing::trace!(
                        target: targets::DISPATCH,
                        x = press.local_pos.x,
                        y = press.local_pos.y,
                        "press outside hit area"
                    );
                    return DispatchResult::Ignored;
                }
                self.grabbed |= grab_bit(press.button);
                handlers.on_pointer_down(press);
                Self::result_of(press.base.is_accepted())
            }
            PointerEvent::Release(release) => {
                let bit = grab_bit(release.button);
                if self.grabbed & bit == 0 {
                    return DispatchResult::Ignored;
                }
                self.grabbed &= !bit;
                handlers.on_pointer_up(release);
                Self::result_of(release.base.is_accepted())
            }
        };

        tracing::trace!(target: targets::DISPATCH, ?result, "pointer event dispatched");
        result
    }

    fn result_of(accepted: bool) -> DispatchResult {
        if accepted {
            DispatchResult::Accepted
        } else {
            DispatchResult::Ignored
        }
    }
}

fn grab_bit(button: MouseButton) -> u8 {
    match button {
        MouseButton::Left => 1 << 0,
        MouseButton::Right => 1 << 1,
        MouseButton::Middle => 1 << 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::geometry::{Rect, Size};

    #[derive(Default)]
    struct Recorder {
        calls: Vec<&'static str>,
    }

    impl PointerHandlers for Recorder {
        fn on_pointer_enter(&mut self, event: &mut EnterEvent) {
            self.calls.push("enter");
            event.base.accept();
        }

        fn on_pointer_exit(&mut self, event: &mut LeaveEvent) {
            self.calls.push("exit");
            event.base.accept();
        }

        fn on_pointer_down(&mut self, event: &mut MousePressEvent) {
            self.calls.push("down");
            event.base.accept();
        }

        fn on_pointer_up(&mut self, event: &mut MouseReleaseEvent) {
            self.calls.push("up");
            event.base.accept();
        }

        fn hit_test(&self, pos: Point) -> bool {
            Rect::from_size(Size::new(100.0, 40.0)).contains(pos)
        }
    }

    #[test]
    fn test_moves_synthesize_enter_and_exit() {
        let mut dispatcher = PointerDispatcher::new();
        let mut recorder = Recorder::default();

        let inside = Point::new(10.0, 10.0);
        let outside = Point::new(150.0, 10.0);

        assert_eq!(
            dispatcher.dispatch(&mut recorder, &mut PointerEvent::moved(outside)),
            DispatchResult::Ignored
        );
        assert!(dispatcher.dispatch(&mut recorder, &mut PointerEvent::moved(inside)).was_handled());
        assert!(!dispatcher.dispatch(&mut recorder, &mut PointerEvent::moved(inside)).was_handled());
        assert!(dispatcher.dispatch(&mut recorder, &mut PointerEvent::moved(outside)).was_handled());

        assert_eq!(recorder.calls, vec!["enter", "exit"]);
        assert!(!dispatcher.is_hovered());
    }

    #[test]
    fn test_press_outside_is_ignored() {
        let mut dispatcher = PointerDispatcher::new();
        let mut recorder = Recorder::default();

        let result = dispatcher.dispatch(&mut recorder, &mut PointerEvent::press(Point::new(-1.0, 5.0)));

        assert_eq!(result, DispatchResult::Ignored);
        assert!(recorder.calls.is_empty());
        assert!(!dispatcher.is_grabbed());
    }

    #[test]
    fn test_release_follows_grab() {
        let mut dispatcher = PointerDispatcher::new();
        let mut recorder = Recorder::default();

        // No grab yet: release is not ours.
        dispatcher.dispatch(&mut recorder, &mut PointerEvent::release(Point::new(5.0, 5.0)));
        assert!(recorder.calls.is_empty());

        dispatcher.dispatch(&mut recorder, &mut PointerEvent::press(Point::new(5.0, 5.0)));
        assert!(dispatcher.is_grabbed());

        // Released far away, still delivered.
        let result =
            dispatcher.dispatch(&mut recorder, &mut PointerEvent::release(Point::new(500.0, 500.0)));

        assert_eq!(result, DispatchResult::Accepted);
        assert_eq!(recorder.calls, vec!["down", "up"]);
        assert!(!dispatcher.is_grabbed());
    }

    #[test]
    fn test_grab_is_held_per_button() {
        let mut dispatcher = PointerDispatcher::new();
        let mut recorder = Recorder::default();
        let pos = Point::new(5.0, 5.0);

        dispatcher.dispatch(&mut recorder, &mut PointerEvent::press(pos));
        dispatcher.dispatch(
            &mut recorder,
            &mut PointerEvent::Press(MousePressEvent::new(MouseButton::Right, pos)),
        );
        dispatcher.dispatch(
            &mut recorder,
            &mut PointerEvent::Release(MouseReleaseEvent::new(MouseButton::Right, pos)),
        );
        assert!(dispatcher.is_button_grabbed(MouseButton::Left));
        assert!(!dispatcher.is_button_grabbed(MouseButton::Right));

        let result = dispatcher.dispatch(&mut recorder, &mut PointerEvent::release(pos));
        assert_eq!(result, DispatchResult::Accepted);
        assert_eq!(recorder.calls, vec!["down", "down", "up", "up"]);
        assert!(!dispatcher.is_grabbed());

        // A second release of the same button has nothing to follow.
        let result = dispatcher.dispatch(&mut recorder, &mut PointerEvent::release(pos));
        assert_eq!(result, DispatchResult::Ignored);
    }

    #[test]
    fn test_leave_always_forwarded() {
        let mut dispatcher = PointerDispatcher::new();
        let mut recorder = Recorder::default();

        let mut event = PointerEvent::leave();
        dispatcher.dispatch(&mut recorder, &mut event);

        assert_eq!(recorder.calls, vec!["exit"]);
        assert!(event.is_accepted());
    }
}
