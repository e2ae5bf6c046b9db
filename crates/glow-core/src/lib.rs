//! Core systems for Glow Lattice.
//!
//! This crate provides the small amount of infrastructure the widget crates
//! share:
//!
//! - **Signal/Slot System**: Type-safe notifications from widgets to
//!   application code
//! - **Thread Affinity**: Checks that UI state is only mutated on the thread
//!   that created it
//! - **Logging**: `tracing` target and span names used across the workspace
//!
//! # Signal/Slot Example
//!
//! ```
//! use glow_core::Signal;
//!
//! let clicked = Signal::<()>::new();
//! let conn_id = clicked.connect(|_| {
//!     println!("clicked");
//! });
//!
//! clicked.emit(());
//! clicked.disconnect(conn_id);
//! ```
//!
//! # Thread Affinity Example
//!
//! ```
//! use glow_core::ThreadAffinity;
//!
//! let affinity = ThreadAffinity::current();
//! assert!(affinity.check_same_thread().is_ok());
//! ```

mod error;
pub mod logging;
pub mod signal;
pub mod thread_check;

pub use error::{GlowError, Result};
pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use thread_check::ThreadAffinity;
