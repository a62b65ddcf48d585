//! Host capabilities the canvas is composed with.
//!
//! The canvas does not own the widget tree, the undo stack or the project
//! model. Each entry point receives a `&mut dyn DesignHost` that bundles the
//! four collaborator traits, the same way event handlers receive their window
//! context, and reaches the outside world only through it.
//!
//! ## Traits
//!
//! - `ElementTree` - widget geometry, margins, alignment and event delivery
//! - `ProjectModel` - pointer mode, selection set and change subscriptions
//! - `CommandSink` - grouped, undoable property writes
//! - `Surface` - cursor, invalidation, text metrics and drag start

pub mod memory;

use crate::geometry::{Point, Rect, Region, Size};
use crate::types::{Align, EdgeInsets, ElementId, PointerEvent, PointerMode, Property};

// ============================================================================
// Element Tree
// ============================================================================

/// Project-level metadata attached to an element.
///
/// Internal children of composite widgets have none; they are never selected
/// or dragged themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementMetadata {
    pub name: String,
    /// Size the user requested for a toplevel, as stored in the project
    pub toplevel_size: Size,
}

/// Read/write access to the host widget tree.
///
/// Bounds are expressed in the coordinate space of the embedded content
/// surface, whose origin is the toplevel's top-left corner.
pub trait ElementTree {
    /// The toplevel element embedded in the canvas, if any
    fn toplevel(&self) -> Option<ElementId>;

    /// Returns false for handles of destroyed or foreign elements
    fn is_live(&self, id: ElementId) -> bool;

    fn is_visible(&self, id: ElementId) -> bool;

    fn is_mapped(&self, id: ElementId) -> bool;

    /// Allocated box of the element in content space, margins excluded
    fn bounds(&self, id: ElementId) -> Rect;

    fn margins(&self, id: ElementId) -> EdgeInsets;

    fn set_margins(&mut self, id: ElementId, margins: EdgeInsets);

    fn valign(&self, id: ElementId) -> Align;

    fn halign(&self, id: ElementId) -> Align;

    /// Children in stacking order, internal children included
    fn children(&self, id: ElementId) -> Vec<ElementId>;

    fn parent(&self, id: ElementId) -> Option<ElementId>;

    fn is_placeholder(&self, id: ElementId) -> bool;

    /// Returns true for containers that position children at fixed coordinates
    fn is_fixed_container(&self, id: ElementId) -> bool;

    fn metadata(&self, id: ElementId) -> Option<ElementMetadata>;

    /// Stores the requested toplevel size in the element's metadata
    fn set_toplevel_size(&mut self, id: ElementId, size: Size);

    /// Intrinsic size the element asks for, margins of its descendants
    /// included
    fn preferred_size(&self, id: ElementId) -> Size;

    /// Gives the toplevel its content box
    fn allocate(&mut self, id: ElementId, size: Size);

    /// Delivers an event to the element's own handler; returns true if handled
    fn dispatch_event(&mut self, id: ElementId, event: &PointerEvent) -> bool;

    /// Returns true if `ancestor` is a strict ancestor of `id`
    fn is_ancestor(&self, id: ElementId, ancestor: ElementId) -> bool {
        let mut current = self.parent(id);
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.parent(parent);
        }
        false
    }

    /// Returns true if the element or any of its ancestors is a fixed container
    fn is_inside_fixed(&self, id: ElementId) -> bool {
        let mut current = Some(id);
        while let Some(element) = current {
            if self.is_fixed_container(element) {
                return true;
            }
            current = self.parent(element);
        }
        false
    }
}

// ============================================================================
// Project Model
// ============================================================================

/// Notification channels the canvas subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    SelectionChanged,
    PointerModeChanged,
    /// Renames of one element
    NameChanged(ElementId),
}

/// Handle returned by [`ProjectModel::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

/// The observable project: current pointer mode and selection set.
///
/// The host delivers notifications for subscribed topics by calling the
/// matching `on_*` method of [`crate::DesignLayout`].
pub trait ProjectModel {
    fn pointer_mode(&self) -> PointerMode;

    fn set_pointer_mode(&mut self, mode: PointerMode);

    /// Selected elements in selection order
    fn selection(&self) -> Vec<ElementId>;

    fn set_selection(&mut self, id: ElementId, exclusive: bool);

    /// Suppress selection notifications until the matching thaw
    fn freeze_notifications(&mut self);

    fn thaw_notifications(&mut self);

    fn subscribe(&mut self, topic: Topic) -> SubscriptionId;

    fn unsubscribe(&mut self, id: SubscriptionId);
}

// ============================================================================
// Command Sink
// ============================================================================

/// Undoable property writes, grouped so one gesture yields one undo entry.
pub trait CommandSink {
    fn begin_group(&mut self, label: &str);

    fn set_property(&mut self, id: ElementId, property: Property) -> anyhow::Result<()>;

    fn end_group(&mut self);
}

// ============================================================================
// Surface
// ============================================================================

/// Cursor glyphs the canvas asks the windowing system for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorShape {
    BottomSide,
    RightSide,
    BottomRightCorner,
    VerticalDoubleArrow,
    HorizontalDoubleArrow,
    TopLeftCorner,
    TopRightCorner,
    BottomLeftCorner,
}

/// Part of the canvas that needs repainting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invalidation {
    All,
    Region(Region),
}

/// Measured size of a run of text.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextExtents {
    pub width: f64,
    pub height: f64,
    pub x_bearing: f64,
}

/// The canvas' own window as seen by the windowing system.
pub trait Surface {
    fn set_cursor(&mut self, cursor: Option<CursorShape>);

    fn invalidate(&mut self, area: Invalidation);

    fn queue_resize(&mut self);

    fn queue_draw(&mut self);

    /// Pixel size of a laid out label in the canvas font
    fn label_size(&self, text: &str) -> Size;

    /// Extents of `text` rendered at `font_size`
    fn text_extents(&self, text: &str, font_size: f64) -> TextExtents;

    /// Allocated size of the view enclosing the canvas
    fn view_size(&self) -> Size;

    /// Start a drag-and-drop gesture carrying `source`
    fn begin_drag(&mut self, source: ElementId, hot_point: Point);
}

/// Everything the canvas needs from its host, in one object.
pub trait DesignHost: ElementTree + ProjectModel + CommandSink + Surface {}

impl<T: ElementTree + ProjectModel + CommandSink + Surface + ?Sized> DesignHost for T {}
