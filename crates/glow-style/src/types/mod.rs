//! Value types used by visual styles.

mod color;
mod cursor;
mod radii;

pub use color::Color;
pub use cursor::CursorShape;
pub use radii::CornerRadii;
