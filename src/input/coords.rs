//! Coordinate conversion between the canvas and its embedded content.
//!
//! The toplevel is drawn onto a virtual surface placed at `child_offset`
//! inside the canvas. Pointer events may arrive in either space; everything
//! downstream works in container space.

use crate::constants::DRAG_ICON_OPACITY;
use crate::geometry::{Point, Rect, Size};
use crate::host::DesignHost;
use crate::session::DesignLayout;
use crate::types::{ElementId, EventOrigin, PointerEvent};
use tracing::debug;

/// The embedded content's surface as placed in the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VirtualSurface {
    pub offset: Point,
    pub size: Size,
}

impl VirtualSurface {
    #[inline]
    pub fn new(offset: Point, size: Size) -> Self {
        Self { offset, size }
    }

    /// Convert a content-space position to container space
    #[inline]
    pub fn to_parent(&self, p: Point) -> Point {
        p + self.offset
    }

    /// Convert a container-space position to content space
    #[inline]
    pub fn from_parent(&self, p: Point) -> Point {
        p - self.offset
    }

    /// Returns true if a container-space position falls on the content.
    ///
    /// Unlike rectangle hit tests this is half-open: the right and bottom
    /// edges belong to the frame.
    pub fn contains(&self, p: Point) -> bool {
        let local = self.from_parent(p);
        local.x >= 0 && local.x < self.size.width && local.y >= 0 && local.y < self.size.height
    }

    /// Container-space position of an event, whatever surface it came from.
    pub fn event_position(&self, event: &PointerEvent) -> Point {
        let p = event.position();
        match event.origin {
            EventOrigin::Container => p,
            EventOrigin::Content => self.to_parent(p),
        }
    }
}

/// Description of the image shown under the pointer while dragging an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragIcon {
    /// The element being dragged
    pub source: ElementId,
    /// Area of the canvas to capture, in container space
    pub area: Rect,
    pub opacity: f32,
    /// Pointer position inside the icon
    pub hot_point: Point,
}

impl DesignLayout {
    /// Surface the host should deliver a container-space event at `p` to.
    ///
    /// While an element is under edit the canvas keeps every event, so the
    /// margin and anchor handles outside the content stay reachable.
    pub fn pick_embedded(&self, p: Point) -> Option<EventOrigin> {
        let surface = self.virtual_surface();
        (self.selection.is_none() && surface.contains(p)).then_some(EventOrigin::Content)
    }

    /// A host drag started from the recorded drag source.
    pub fn drag_begin(&mut self, cx: &mut dyn DesignHost) -> Option<DragIcon> {
        let source = self.drag_source?;
        let area = cx
            .bounds(source.element)
            .translate(self.virtual_surface().offset);

        let icon = DragIcon {
            source: source.element,
            area,
            opacity: DRAG_ICON_OPACITY,
            hot_point: source.hot_point,
        };
        debug!("Drag started on {} from {:?}", source.element, area);

        self.drag_icon = Some(icon);
        Some(icon)
    }

    /// Payload of the current drag: the source element.
    pub fn drag_data(&self) -> Option<ElementId> {
        self.drag_source.map(|source| source.element)
    }

    /// The host drag finished, dropped or not.
    pub fn drag_end(&mut self) {
        self.drag_icon = None;
        self.drag_source = None;
    }
}
