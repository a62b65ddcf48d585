//! Design canvas: the interactive surface a UI designer edits a toplevel on.
//!
//! The canvas embeds one toplevel element, draws a frame and name tab around
//! it, and turns pointer input into resize, margin and alignment edits that
//! are committed to the host's undo system.
//!
//! ## Modules
//!
//! - `session` - `DesignLayout`, lifecycle and project notifications
//! - `layout` - size negotiation with the host
//! - `input` - pointer state machine and event routing
//! - `hit_test` - resize handles, margin edges and anchor regions
//! - `render` - overlay drawing into a `DisplayList`
//! - `host` - traits the host implements, plus an in-memory host
//! - `config` / `error` - persisted tunables and their errors

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod host;
pub mod input;
pub mod layout;
pub mod logging;
pub mod perf;
pub mod render;
pub mod session;
pub mod types;

pub use color::{Palette, Rgba, ThemeColors};
pub use config::LayoutConfig;
pub use error::{ConfigError, ConfigResult};
pub use geometry::{Point, Rect, Region, Size};
pub use host::{CommandSink, DesignHost, ElementTree, ProjectModel, Surface};
pub use input::Activity;
pub use render::DisplayList;
pub use session::DesignLayout;
pub use types::{Align, EdgeInsets, ElementId, Margins, PointerEvent, PointerMode, Property};
