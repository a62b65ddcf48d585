//! Canvas-wide constants.
//!
//! Centralizes the magic numbers of the design canvas geometry so hit testing,
//! layout negotiation and overlay rendering agree on the same values.

// ============================================================================
// Frame Geometry
// ============================================================================

/// Width of the frame outline and of the margin hit band, in pixels
pub const OUTLINE_WIDTH: i32 = 4;

/// Padding between the canvas edge and the frame, in pixels
pub const PADDING: i32 = 12;

/// Radius of the curved bottom corners of the name tab
pub const TAB_CORNER_RADIUS: f64 = 8.0;

/// Width of the fade-out mask applied to an overflowing widget name
pub const NAME_FADE_WIDTH: f64 = 16.0;

// ============================================================================
// Margin & Alignment Editing
// ============================================================================

/// Default snap step for margin editing with the snap modifier held
pub const DEFAULT_MARGIN_STEP: i32 = 6;

/// Side of the square invalidated around each alignment pushpin
pub const ANCHOR_REGION_SIZE: i32 = 16;

// ============================================================================
// Dimension Readouts
// ============================================================================

/// Distance between the element box and its dimension lines
pub const DIMENSION_OFFSET: i32 = 9;

/// Overshoot of dimension lines past the measured edges
pub const DIMENSION_LINE_OFFSET: f64 = 4.0;

/// Font size used for pixel readouts
pub const DEFAULT_DIMENSION_FONT_SIZE: f64 = 8.0;

// ============================================================================
// Colors
// ============================================================================

/// Lightness shift applied to the frame background so it stands out
pub const FRAME_SHADE_OFFSET: f32 = 0.16;

/// Lightness boost of the inner gradient stop of selection overlays
pub const SELECTION_HIGHLIGHT: f32 = 0.24;

/// Opacity of the synthesized drag icon
pub const DRAG_ICON_OPACITY: f32 = 0.5;

// ============================================================================
// Input Handling
// ============================================================================

/// Default distance the pointer must travel before a drag gesture starts
pub const DEFAULT_DRAG_THRESHOLD: i32 = 8;
