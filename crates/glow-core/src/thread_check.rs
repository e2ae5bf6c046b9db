//! Thread affinity checks for UI objects.
//!
//! Widget state in Glow Lattice is mutated without locks, on the thread that
//! dispatches pointer events. [`ThreadAffinity`] records that thread when an
//! object is created and lets the object verify later calls:
//!
//! ```
//! use glow_core::ThreadAffinity;
//!
//! struct MyWidget {
//!     affinity: ThreadAffinity,
//!     value: i32,
//! }
//!
//! impl MyWidget {
//!     fn new() -> Self {
//!         Self {
//!             affinity: ThreadAffinity::current(),
//!             value: 0,
//!         }
//!     }
//!
//!     fn set_value(&mut self, v: i32) {
//!         // Panics in debug builds if called from the wrong thread.
//!         self.affinity.debug_assert_same_thread();
//!         self.value = v;
//!     }
//! }
//!
//! let mut widget = MyWidget::new();
//! widget.set_value(3);
//! ```

use std::thread::ThreadId;

use crate::error::{GlowError, Result};
use crate::logging::targets;

/// Records the thread an object belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadAffinity {
    thread_id: ThreadId,
}

impl Default for ThreadAffinity {
    fn default() -> Self {
        Self::current()
    }
}

impl ThreadAffinity {
    /// Create a new thread affinity tracker for the current thread.
    #[inline]
    pub fn current() -> Self {
        Self {
            thread_id: std::thread::current().id(),
        }
    }

    /// Get the thread ID this affinity is bound to.
    #[inline]
    pub fn thread_id(&self) -> ThreadId {
        self.thread_id
    }

    /// Check if the current thread matches this affinity.
    #[inline]
    pub fn is_same_thread(&self) -> bool {
        std::thread::current().id() == self.thread_id
    }

    /// Return an error if called from a thread other than the bound one.
    pub fn check_same_thread(&self) -> Result<()> {
        let actual = std::thread::current().id();
        if actual == self.thread_id {
            Ok(())
        } else {
            tracing::error!(
                target: targets::THREAD,
                expected = ?self.thread_id,
                actual = ?actual,
                "thread affinity violation"
            );
            Err(GlowError::WrongThread {
                expected: self.thread_id,
                actual,
            })
        }
    }

    /// Assert that we are on the bound thread, in debug and release builds.
    ///
    /// # Panics
    ///
    /// Panics if called from a different thread.
    #[inline]
    pub fn assert_same_thread(&self) {
        if let Err(err) = self.check_same_thread() {
            panic_wrong_thread(&err);
        }
    }

    /// Debug-only assertion that we are on the bound thread.
    ///
    /// This is a no-op in release builds.
    #[inline]
    pub fn debug_assert_same_thread(&self) {
        #[cfg(debug_assertions)]
        self.assert_same_thread();
    }
}

#[cold]
#[inline(never)]
fn panic_wrong_thread(err: &GlowError) -> ! {
    let current = std::thread::current();
    let current_name = current.name().unwrap_or("<unnamed>");
    panic!("{err} (current thread name: \"{current_name}\"); post the operation to the UI thread instead")
}
