//! Motion handling - toplevel resizing, margin dragging and hover feedback.
//!
//! ## Performance Notes
//!
//! Motion is the hottest path on the canvas. Hover only invalidates the
//! anchor regions that changed, and the cursor is only pushed to the surface
//! when it differs from the one shown.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use super::Activity;
use crate::constants::{OUTLINE_WIDTH, PADDING};
use crate::geometry::Point;
use crate::hit_test::{anchor_regions, margin_activity};
use crate::host::{DesignHost, Invalidation};
use crate::profile_scope;
use crate::session::DesignLayout;
use crate::types::{ElementId, ModifierState, PointerEvent, PointerMode};
use tracing::{debug, trace};

impl DesignLayout {
    pub fn handle_motion(&mut self, event: &PointerEvent, cx: &mut dyn DesignHost) -> bool {
        profile_scope!("handle_motion");

        let Some(toplevel) = cx.toplevel() else { return false };
        let p = self.virtual_surface().event_position(event);

        if event.state.primary_held() {
            if let Some(source) = self.drag_source {
                if source.threshold_exceeded(p, self.config.drag_threshold) {
                    debug!("Drag threshold exceeded for {}", source.element);
                    cx.begin_drag(source.element, source.hot_point);
                    return true;
                }
            }
        }

        let mut size = cx.bounds(toplevel).size();

        match self.activity {
            Activity::ResizeWidth => {
                size.width = self.resized_width(p);
            }
            Activity::ResizeHeight => {
                size.height = self.resized_height(p);
            }
            Activity::ResizeBoth => {
                size.height = self.resized_height(p);
                size.width = self.resized_width(p);
            }
            Activity::Margins => {
                // The ceilings stay as taken when the edit started
                if let Some(selection) = self.selection {
                    self.drag_margins(selection, p, event.state, cx);
                    cx.queue_resize();
                }
                return false;
            }
            _ => {
                self.hover(p, cx);
                return true;
            }
        }

        self.update_child(toplevel, size, cx);
        false
    }

    fn resized_width(&self, p: Point) -> i32 {
        (p.x - self.origin.dx - PADDING - OUTLINE_WIDTH).max(0)
    }

    fn resized_height(&self, p: Point) -> i32 {
        (p.y - self.origin.dy - PADDING - OUTLINE_WIDTH).max(0)
    }

    /// Applies the grabbed margin edges live while the button is held.
    ///
    /// Shift mirrors each edge onto its opposite, Control snaps to the
    /// margin step. Values are clamped to what the toplevel has room for.
    fn drag_margins(
        &mut self,
        selection: ElementId,
        p: Point,
        state: ModifierState,
        cx: &mut dyn DesignHost,
    ) {
        let shift = state.shift();
        let snap = state.control();
        let step = self.config.margin_step;
        let settle = |val: i32, max: i32| {
            let val = val.min(max).max(0);
            if snap { val / step * step } else { val }
        };

        let mut m = cx.margins(selection);

        if self.margin.has_top() {
            let max_height = if shift { self.max_height / 2 } else { self.max_height - m.bottom };
            let val = settle(self.origin.m_dy - p.y, max_height);
            m.top = val;
            if shift {
                m.bottom = val;
            }
        } else if self.margin.has_bottom() {
            let max_height = if shift { self.max_height / 2 } else { self.max_height - m.top };
            let val = settle(p.y - self.origin.m_dy, max_height);
            m.bottom = val;
            if shift {
                m.top = val;
            }
        }

        if self.margin.has_left() {
            let max_width = if shift { self.max_width / 2 } else { self.max_width - m.right };
            let val = settle(self.origin.m_dx - p.x, max_width);
            m.left = val;
            if shift {
                m.right = val;
            }
        } else if self.margin.has_right() {
            let max_width = if shift { self.max_width / 2 } else { self.max_width - m.left };
            let val = settle(p.x - self.origin.m_dx, max_width);
            m.right = val;
            if shift {
                m.left = val;
            }
        }

        trace!("Margins of {} now {:?}", selection, m);
        cx.set_margins(selection, m);
    }

    /// Idle motion: refreshes hovered anchors and the cursor.
    fn hover(&mut self, p: Point, cx: &mut dyn DesignHost) {
        let mut activity = self.activity_from_pointer(p, cx);

        if self.node_over != self.margin
            && (activity == Activity::Alignments || cx.pointer_mode() == PointerMode::AlignEdit)
        {
            match self.selection {
                Some(selection) => {
                    let region =
                        anchor_regions(&*cx, self.child_offset, selection, self.node_over | self.margin);
                    cx.invalidate(Invalidation::Region(region));
                }
                None => cx.invalidate(Invalidation::All),
            }
            self.node_over = self.margin;
        }

        if activity == Activity::Margins {
            activity = margin_activity(self.margin);
        }

        self.set_cursor(activity, cx);
    }
}
