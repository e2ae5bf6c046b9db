//! Error types for the styling system.

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the strict style APIs.
///
/// The declaration parser used for widget styles never fails; it drops what
/// it cannot read. Only [`Color::parse_strict`](crate::Color::parse_strict)
/// reports problems.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The input is not a color this crate understands.
    #[error("Invalid color '{input}'")]
    InvalidColor { input: String },

    /// Extra tokens followed an otherwise valid value.
    #[error("Unexpected trailing input after '{input}'")]
    TrailingInput { input: String },
}

impl Error {
    /// Create an invalid color error.
    pub fn invalid_color(input: impl Into<String>) -> Self {
        Self::InvalidColor {
            input: input.into(),
        }
    }

    /// Create a trailing input error.
    pub fn trailing_input(input: impl Into<String>) -> Self {
        Self::TrailingInput {
            input: input.into(),
        }
    }
}
