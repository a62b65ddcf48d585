//! Activity state machine for pointer interactions on the canvas.
//!
//! A single `Activity` value describes what a held primary button is doing.
//! Margin-cursor variants never become the stored activity: they only pick
//! the cursor shown while hovering a margin edge.
//!
//! ## State Transitions
//!
//! ```text
//! None -> ResizeWidth / ResizeHeight / ResizeBoth   (press on a resize handle)
//! None -> Margins                                   (press on a margin edge in margin edit)
//! None -> Alignments                                (press on an anchor in align edit)
//!
//! Any -> None                                       (release - commits margin edits)
//! ```

use crate::geometry::Point;
use crate::host::CursorShape;
use crate::types::{Align, EdgeInsets, ElementId};

/// What the pointer is doing, or would do if pressed here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Activity {
    /// No active gesture
    #[default]
    None,
    ResizeWidth,
    ResizeHeight,
    ResizeBoth,
    /// Toggling alignment anchors of the edit selection
    Alignments,
    /// Dragging one or two margin edges of the edit selection
    Margins,
    MarginsVertical,
    MarginsHorizontal,
    MarginsTopLeft,
    MarginsTopRight,
    MarginsBottomLeft,
    MarginsBottomRight,
}

impl Activity {
    pub const ALL: [Activity; 12] = [
        Activity::None,
        Activity::ResizeWidth,
        Activity::ResizeHeight,
        Activity::ResizeBoth,
        Activity::Alignments,
        Activity::Margins,
        Activity::MarginsVertical,
        Activity::MarginsHorizontal,
        Activity::MarginsTopLeft,
        Activity::MarginsTopRight,
        Activity::MarginsBottomLeft,
        Activity::MarginsBottomRight,
    ];

    /// Returns true for the three toplevel resize gestures
    pub fn is_resize(self) -> bool {
        matches!(
            self,
            Activity::ResizeWidth | Activity::ResizeHeight | Activity::ResizeBoth
        )
    }

    /// Returns true if this is the idle state
    pub fn is_idle(self) -> bool {
        self == Activity::None
    }

    /// Cursor glyph shown for this activity, if any.
    pub fn cursor_shape(self) -> Option<CursorShape> {
        match self {
            Activity::ResizeHeight => Some(CursorShape::BottomSide),
            Activity::ResizeWidth => Some(CursorShape::RightSide),
            Activity::ResizeBoth => Some(CursorShape::BottomRightCorner),
            Activity::MarginsVertical => Some(CursorShape::VerticalDoubleArrow),
            Activity::MarginsHorizontal => Some(CursorShape::HorizontalDoubleArrow),
            Activity::MarginsTopLeft => Some(CursorShape::TopLeftCorner),
            Activity::MarginsTopRight => Some(CursorShape::TopRightCorner),
            Activity::MarginsBottomLeft => Some(CursorShape::BottomLeftCorner),
            Activity::MarginsBottomRight => Some(CursorShape::BottomRightCorner),
            Activity::None | Activity::Alignments | Activity::Margins => None,
        }
    }
}

/// Values of the edit selection captured when edit mode was entered, used to
/// tell which properties a gesture actually changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditSnapshot {
    pub margins: EdgeInsets,
    pub valign: Align,
    pub halign: Align,
}

/// Pointer offsets recorded at press time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GestureOrigin {
    /// Pointer minus the content box's bottom-right corner, for resizing
    pub dx: i32,
    pub dy: i32,
    /// Pointer position the margin values are measured from
    pub m_dx: i32,
    pub m_dy: i32,
}

/// Drag-and-drop source recorded by the event router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSource {
    pub element: ElementId,
    /// Press position in the source element's own coordinates
    pub hot_point: Point,
    /// Press position in container space, for the drag threshold
    pub press_point: Point,
}

impl DragSource {
    /// Returns true once the pointer moved further than `threshold` on
    /// either axis since the press.
    pub fn threshold_exceeded(&self, current: Point, threshold: i32) -> bool {
        (current.x - self.press_point.x).abs() > threshold
            || (current.y - self.press_point.y).abs() > threshold
    }
}
