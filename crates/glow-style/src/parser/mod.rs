//! Style string parsing.
//!
//! Widgets receive their looks as short declaration lists such as
//! `"-fx-background-color: rgba(109, 110, 193, 0.9); -fx-border-radius: 12;"`.
//! The parser here is deliberately forgiving: it keeps every declaration it
//! understands and drops the rest with a warning, so a typo in one property
//! never costs the others.

mod declarations;

pub use declarations::{Declaration, parse_declarations};

pub(crate) use declarations::parse_color_strict;
