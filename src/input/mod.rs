//! Pointer input handling for the design canvas.
//!
//! Raw events first pass through the router, which may start a drag, enter
//! an edit mode or forward them to the element under the pointer. Events the
//! router leaves alone reach the canvas' own handlers, which drive the
//! activity state machine.
//!
//! ## Architecture
//!
//! One `Activity` value tracks the current gesture. Handlers are `impl
//! DesignLayout` blocks that receive the host as a `&mut dyn DesignHost`
//! context.
//!
//! ## Modules
//!
//! - `state` - Activity enum, edit snapshot and gesture origins
//! - `mouse_down` - Button press (gesture start, alignment toggling)
//! - `drag` - Motion (resizing, margin dragging, hover feedback, drag start)
//! - `mouse_up` - Button release and leave (margin commit, reset)
//! - `router` - Pre-dispatch filter over the embedded element tree
//! - `coords` - Container/content coordinate conversion and drag icons

pub mod coords;
mod drag;
mod mouse_down;
mod mouse_up;
mod router;
mod state;

pub use router::ElementHit;
pub use state::{Activity, DragSource, EditSnapshot, GestureOrigin};
