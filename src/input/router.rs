//! Pre-dispatch event filter.
//!
//! Every pointer event on the canvas or its content passes through
//! [`DesignLayout::do_event`] before any element sees it. The router decides
//! whether the event starts a drag-and-drop gesture, enters margin or
//! alignment editing, or goes to the placeholder/element under the pointer.

use super::DragSource;
use crate::geometry::Point;
use crate::hit_test::margins_from_pointer;
use crate::host::{DesignHost, ElementTree};
use crate::profile_scope;
use crate::session::DesignLayout;
use crate::types::{ElementId, PointerEvent, PointerMode};
use tracing::{debug, trace};

/// What lies under the pointer in the embedded tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElementHit {
    /// Deepest project element containing the pointer
    pub element: Option<ElementId>,
    /// Placeholder containing the pointer
    pub placeholder: Option<ElementId>,
}

impl ElementHit {
    /// Walks the mapped elements below `root` for a container-space point.
    ///
    /// Boxes are widened by their margins, inclusive on the top/left side and
    /// exclusive on the bottom/right side. Children are searched before their
    /// parent, and internal children without metadata pass the hit up.
    pub fn find<T: ElementTree + ?Sized>(tree: &T, root: ElementId, child_offset: i32, p: Point) -> Self {
        let mut hit = ElementHit::default();
        hit.visit(tree, root, child_offset, p);
        hit
    }

    fn visit<T: ElementTree + ?Sized>(&mut self, tree: &T, id: ElementId, child_offset: i32, p: Point) {
        if self.element.is_some() || !tree.is_mapped(id) {
            return;
        }

        let bounds = tree.bounds(id);
        let m = tree.margins(id);
        let x = p.x - (bounds.x + child_offset);
        let y = p.y - (bounds.y + child_offset);
        let w = bounds.width + m.right;
        let h = bounds.height + m.bottom;

        if x < -m.left || x >= w || y < -m.top || y >= h {
            return;
        }

        if tree.is_placeholder(id) {
            self.placeholder = Some(id);
            return;
        }

        for child in tree.children(id) {
            self.visit(tree, child, child_offset, p);
        }

        if self.element.is_none() && tree.metadata(id).is_some() {
            self.element = Some(id);
        }
    }
}

impl DesignLayout {
    /// Filters a raw event before it reaches the embedded elements.
    ///
    /// Returns true if the event was consumed.
    pub fn do_event(&mut self, event: &PointerEvent, cx: &mut dyn DesignHost) -> bool {
        profile_scope!("do_event");

        let p = self.virtual_surface().event_position(event);
        let mode = cx.pointer_mode();
        let toplevel = cx.toplevel();

        let hit = toplevel
            .map(|root| ElementHit::find(&*cx, root, self.child_offset, p))
            .unwrap_or_default();
        trace!("Event at ({}, {}) over {:?}", p.x, p.y, hit);

        let primary_press = event.is_primary_press();
        let shift = event.state.shift();

        // Drag source
        if primary_press && ((shift && mode == PointerMode::Select) || mode == PointerMode::DragResize) {
            if let Some(element) = hit.element {
                if shift || !cx.is_inside_fixed(element) {
                    let origin = cx.bounds(element).origin() + Point::new(self.child_offset, self.child_offset);
                    self.drag_source = Some(DragSource {
                        element,
                        hot_point: p - origin,
                        press_point: p,
                    });
                    debug!("Recorded {} as drag source", element);
                    return true;
                }
            }
        }

        // Entering margin or alignment editing
        if primary_press && mode != PointerMode::DragResize {
            if let (Some(toplevel), [selected]) = (toplevel, cx.selection().as_slice()) {
                let selected = *selected;
                let inside = selected == toplevel || cx.is_ancestor(selected, toplevel);

                if cx.is_live(selected)
                    && inside
                    && !margins_from_pointer(&*cx, self.child_offset, selected, p).is_empty()
                {
                    if self.selection.is_none() {
                        let mode = if shift {
                            PointerMode::AlignEdit
                        } else {
                            PointerMode::MarginEdit
                        };
                        self.set_edit_selection(mode, Some(selected), cx);
                        return true;
                    }
                    return false;
                }
            }
        }

        cx.freeze_notifications();
        let handled = if hit.placeholder.is_some_and(|placeholder| cx.dispatch_event(placeholder, event)) {
            true
        } else if let Some(element) = hit.element {
            cx.dispatch_event(element, event)
        } else {
            false
        };
        cx.thaw_notifications();

        handled
    }
}
