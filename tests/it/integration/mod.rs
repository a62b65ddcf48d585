//! Integration tests for the design canvas.
//!
//! These tests drive a canvas attached to the in-memory host through full
//! pointer gestures and check what reaches the host.

mod alignment_edit_tests;
mod margin_edit_tests;
mod overlay_tests;
mod resize_workflow_tests;
mod session_lifecycle_tests;
