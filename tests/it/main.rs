//! Single test binary entry point.
//!
//! Every integration test is compiled into this one binary, so the crate is
//! linked once for the whole suite.
//!
//! Structure:
//! - helpers: Canvas fixture over the in-memory host
//! - integration: Multi-component workflow tests
//! - unit: Single-component unit tests

mod integration;
mod unit;
