//! Performance instrumentation for the canvas hot paths.
//!
//! Event handlers and the paint pass open a `profile_scope!` at their top.
//! Without the `profiling` feature the macro expands to nothing; with it, each
//! scope is timed and reported through `tracing`.
//!
//! ## Usage
//!
//! ```ignore
//! use design_canvas::profile_scope;
//!
//! fn handle_motion() {
//!     profile_scope!("handle_motion");
//!     // ... event handling code ...
//! }
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
#[cfg(feature = "profiling")]
use tracing::trace;
use tracing::warn;

// ============================================================================
// Constants
// ============================================================================

/// Time an event handler or paint pass may take before it is reported (one
/// frame at 60 FPS)
pub const EVENT_BUDGET_MS: f64 = 16.67;

/// Threshold used by `profile_scope!` when the feature is on
const PROFILING_THRESHOLD_MS: f64 = 1.0;

/// Global flag to silence profiling output at runtime
static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

// ============================================================================
// Profiling Macros (zero-cost when disabled)
// ============================================================================

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

// ============================================================================
// Runtime Profiling Control
// ============================================================================

/// Enable or disable profiling output at runtime.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// A scoped timer that reports its duration on drop when it exceeds the
/// threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer with the per-event budget.
    pub fn with_event_budget(name: &'static str) -> Self {
        Self::new(name, EVENT_BUDGET_MS)
    }

    /// Timer for `profile_scope!` (1ms threshold).
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, PROFILING_THRESHOLD_MS)
    }

    /// Elapsed time without stopping the timer.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn threshold_ms(&self) -> f64 {
        self.threshold_ms
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if !is_profiling_enabled() {
            return;
        }

        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms <= self.threshold_ms {
            return;
        }

        #[cfg(feature = "profiling")]
        trace!("[PERF] {}: {:.2}ms", self.name, elapsed_ms);

        if elapsed_ms > EVENT_BUDGET_MS {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow operation"
            );
        }
    }
}
