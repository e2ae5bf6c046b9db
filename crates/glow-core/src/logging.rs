//! Logging facilities for Glow Lattice.
//!
//! Glow Lattice uses the `tracing` crate for instrumentation. Nothing is
//! printed unless the application installs a subscriber:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("glow_button=debug")
//!         .init();
//!
//!     // Build widgets...
//! }
//! ```
//!
//! Log calls in `glow-core` and `glow-button` use the constants in
//! [`targets`], which can be used verbatim in filter directives.
//! `glow-style` does not depend on this crate and logs under
//! `glow_style::parser`.

/// Operation names recorded on [`PerfSpan`]s.
pub mod span_names {
    /// Reading, validating and registering a font resource.
    pub const FONT_LOAD: &str = "glow::font_load";
    /// Scanning the system font directories.
    pub const SYSTEM_FONTS: &str = "glow::system_fonts";
}

/// Target names for log filtering.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "glow_core::signal";
    /// Thread affinity checks.
    pub const THREAD: &str = "glow_core::thread";
    /// Performance spans.
    pub const PERF: &str = "glow::perf";
    /// Button interaction state transitions.
    pub const INTERACTION: &str = "glow_button::interaction";
    /// Pointer event routing.
    pub const DISPATCH: &str = "glow_button::dispatch";
    /// Font resource loading.
    pub const FONT: &str = "glow_button::font";
    /// Embedded and filesystem resources.
    pub const RESOURCE: &str = "glow_button::resource";
}

/// A performance tracing span guard.
///
/// The span stays entered until the guard is dropped, so the subscriber sees
/// the duration of everything done in between.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
