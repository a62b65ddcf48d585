//! Overlay rendering.
//!
//! - `display_list` - retained commands the host replays
//! - `overlay` - the canvas paint pass (`DesignLayout::draw`)
//! - `frame` - frame outline and name tab
//! - `selection` - highlight of selected elements
//! - `dimensions` - pixel readouts during margin editing
//! - `pushpin` - margin nodes and alignment pins

pub mod dimensions;
pub mod display_list;
pub mod frame;
mod overlay;
pub mod pushpin;
pub mod selection;

pub use display_list::{DisplayList, DrawCommand, Paint, Path, StrokeStyle, TextRun};
pub use pushpin::{PinColors, render_node, render_pushpin};
