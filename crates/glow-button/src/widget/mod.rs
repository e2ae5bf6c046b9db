//! Widget plumbing: geometry, pointer events, dispatch and the control seam.

mod control;
mod dispatcher;
mod events;
mod geometry;

pub use control::{HeadlessControl, PressableControl};
pub use dispatcher::{DispatchResult, PointerDispatcher, PointerHandlers};
pub use events::{
    EnterEvent, EventBase, LeaveEvent, MouseButton, MouseMoveEvent, MousePressEvent,
    MouseReleaseEvent, PointerEvent,
};
pub use geometry::{Point, Rect, Size};
