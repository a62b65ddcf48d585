//! Log output setup for binaries and tools built on the canvas.
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is left to whoever embeds it.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "design_canvas=info";

/// Installs a fmt subscriber filtered by `RUST_LOG`, or by
/// [`DEFAULT_FILTER`] when the variable is unset or invalid.
///
/// Hosts embedding the canvas usually install their own subscriber; calling
/// this after one is set is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Like [`init`], with `verbose` forcing `debug` output for this crate.
pub fn init_with(verbose: bool) {
    if !verbose {
        init();
        return;
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("design_canvas=debug"))
        .try_init();
}
