//! Error types for Glow Lattice core facilities.

use std::fmt;
use std::thread::ThreadId;

/// The main error type for core operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlowError {
    /// A thread-bound object was touched from another thread.
    WrongThread {
        /// The thread the object belongs to.
        expected: ThreadId,
        /// The thread that attempted the access.
        actual: ThreadId,
    },
    /// The connection ID is invalid or has already been disconnected.
    InvalidConnection,
}

impl fmt::Display for GlowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongThread { expected, actual } => {
                write!(
                    f,
                    "Object bound to thread {expected:?} was accessed from thread {actual:?}"
                )
            }
            Self::InvalidConnection => write!(f, "Invalid or disconnected connection ID"),
        }
    }
}

impl std::error::Error for GlowError {}

/// A specialized Result type for core operations.
pub type Result<T> = std::result::Result<T, GlowError>;
