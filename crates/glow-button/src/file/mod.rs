//! Resource lookup for fonts and other assets.

mod resource;

pub use resource::{EmbeddedDir, ResourceManager, ResourcePath};
