//! Unit tests for the design canvas.

mod config_tests;
mod perf_tests;
mod snapshot_tests;
