//! Error types for resource and font loading.

use std::path::PathBuf;

/// A font or other resource could not be loaded.
///
/// [`ButtonWidget::new`](crate::ButtonWidget::new) recovers from this by
/// falling back to the system sans-serif font;
/// [`ButtonWidget::try_new`](crate::ButtonWidget::try_new) returns it.
#[derive(Debug, thiserror::Error)]
pub enum ResourceLoadError {
    /// No embedded directory or filesystem root provides the resource.
    #[error("Resource not found: {path}")]
    NotFound { path: String },

    /// Reading the resource from the filesystem failed.
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The resource was read but is not a usable font.
    #[error("Invalid font {path}: {reason}")]
    InvalidFont { path: String, reason: String },
}

impl ResourceLoadError {
    /// Create a not found error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create an invalid font error.
    pub fn invalid_font(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFont {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Convert an I/O error, mapping a missing file to [`NotFound`](Self::NotFound).
    pub fn from_io(error: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if error.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.display().to_string(),
            }
        } else {
            Self::Io {
                path,
                source: error,
            }
        }
    }

    /// The resource path the error refers to.
    pub fn path(&self) -> String {
        match self {
            Self::NotFound { path } | Self::InvalidFont { path, .. } => path.clone(),
            Self::Io { path, .. } => path.display().to_string(),
        }
    }
}
