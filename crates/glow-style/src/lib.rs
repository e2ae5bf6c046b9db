//! Typed visual styles for Glow Lattice widgets.
//!
//! This crate keeps widgets free of toolkit-specific style syntax:
//!
//! - **Values**: [`Color`], [`CornerRadii`] and [`CursorShape`]
//! - **Visual styles**: [`VisualStyle`], a background/text/corner-radius bundle,
//!   and [`StylePresets`], the default/hovered/pressed triple a button swaps
//!   between
//! - **Parsing**: a lenient declaration parser that reads CSS-like style
//!   strings (including `-fx-` prefixed property names) into a `VisualStyle`
//!
//! # Example
//!
//! ```
//! use glow_style::prelude::*;
//!
//! let style = VisualStyle::parse(
//!     "-fx-background-color: rgba(109, 110, 193, 0.9); -fx-text-fill: #999bd4; -fx-border-radius: 12;",
//! );
//!
//! assert_eq!(style.corner_radius, 12.0);
//! assert_eq!(style.text_color, Color::from_rgb8(0x99, 0x9b, 0xd4));
//! ```

pub mod parser;
pub mod types;
mod visual;

mod error;

pub use error::{Error, Result};
pub use types::{Color, CornerRadii, CursorShape};
pub use visual::{StylePresets, VisualStyle};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::parser::parse_declarations;
    pub use crate::types::{Color, CornerRadii, CursorShape};
    pub use crate::visual::{StylePresets, VisualStyle};
}
