//! The canvas paint pass.
//!
//! Paint order, bottom to top:
//! 1. the embedded content surface
//! 2. selection highlights of selected elements inside the toplevel
//! 3. the frame and name tab
//! 4. margin nodes or alignment pins of the element under edit
//!
//! ## Performance Notes
//!
//! Drawing runs on every invalidation. Nothing here allocates beyond the
//! display list itself and the selection snapshot from the host.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use super::dimensions::{DimensionStyle, render_dimensions};
use super::display_list::DisplayList;
use super::frame::render_frame;
use super::pushpin::{PinColors, render_node, render_pushpin};
use super::selection::render_selection;
use crate::constants::{OUTLINE_WIDTH, PADDING};
use crate::geometry::Rect;
use crate::hit_test::{element_box, margin_box_guides};
use crate::host::DesignHost;
use crate::profile_scope;
use crate::session::DesignLayout;
use crate::types::{ElementId, Margins, PointerMode};
use tracing::trace;

impl DesignLayout {
    /// Records everything the canvas paints, in container coordinates.
    ///
    /// Returns an empty list while there is no visible toplevel.
    pub fn draw(&self, cx: &dyn DesignHost) -> DisplayList {
        profile_scope!("draw");

        let mut list = DisplayList::new();
        let Some(toplevel) = cx.toplevel().filter(|id| cx.is_visible(*id)) else {
            return list;
        };

        let offset = self.child_offset;
        list.surface(Rect::new(offset, offset, self.current.width, self.current.height));

        let mut selected = false;
        for id in cx.selection() {
            if id == toplevel {
                selected = true;
            } else if cx.is_live(id) && cx.is_ancestor(id, toplevel) {
                self.draw_element_selection(&mut list, id, cx);
                selected = true;
            }
        }

        let border = self.config.border_width;
        let frame = Rect::new(
            border + PADDING,
            border + PADDING,
            self.current.width + 2 * OUTLINE_WIDTH,
            self.current.height + 2 * OUTLINE_WIDTH,
        );
        render_frame(
            &mut list,
            &self.palette,
            selected,
            frame,
            self.rects.south_east,
            self.name.as_ref(),
            self.layout_width,
        );

        if let Some(selection) = self.selection {
            self.draw_selection_nodes(&mut list, selection, cx);
        }

        trace!("Recorded {} draw commands", list.len());
        list
    }

    fn draw_element_selection(&self, list: &mut DisplayList, id: ElementId, cx: &dyn DesignHost) {
        let bounds = cx.bounds(id);
        if bounds.x < 0 || bounds.y < 0 {
            return;
        }

        let area = element_box(cx, self.child_offset, id);
        render_selection(list, area, cx.margins(id), self.palette.frame_active[0]);
    }

    /// Margin nodes and dimensions, or alignment pins, around the element
    /// under edit.
    fn draw_selection_nodes(&self, list: &mut DisplayList, selection: ElementId, cx: &dyn DesignHost) {
        let bounds = cx.bounds(selection);
        if bounds.x < 0 || bounds.y < 0 {
            return;
        }

        let c1 = self.palette.frame_active[0];
        let c2 = self.palette.frame_active[1];
        let c3 = self.palette.frame[0];
        let fg = self.palette.fg;

        let area = element_box(cx, self.child_offset, selection);
        let m = cx.margins(selection);
        let (x1, x2, x3, y1, y2, y3) = margin_box_guides(cx, self.child_offset, selection);
        let (x1, x2, x3) = (x1 as f64, x2 as f64, x3 as f64);
        let (y1, y2, y3) = (y1 as f64, y2 as f64, y3 as f64);

        match cx.pointer_mode() {
            PointerMode::MarginEdit => {
                render_node(list, x2, y1, c1, c2);
                render_node(list, x2, y3, c1, c2);
                render_node(list, x1, y2, c1, c2);
                render_node(list, x3, y2, c1, c2);

                if !m.is_zero() {
                    let style = DimensionStyle {
                        bg: c2,
                        fg,
                        font_size: self.config.dimension_font_size,
                    };
                    render_dimensions(
                        list,
                        cx,
                        &style,
                        area.x as f64 + 0.5,
                        area.y as f64 + 0.5,
                        area.width,
                        area.height,
                        m,
                    );
                }
            }
            PointerMode::AlignEdit => {
                let colors = PinColors {
                    outline: c3,
                    fill: c2,
                    active_outline: c1,
                    fg,
                };
                let node = self.node_over;
                let (top, bottom) = cx.valign(selection).anchors();
                let (left, right) = cx.halign(selection).anchors();

                render_pushpin(list, x2, y1, 45.0, &colors, node.contains(Margins::TOP), top);
                render_pushpin(list, x2, y3 - 4.0, -45.0, &colors, node.contains(Margins::BOTTOM), bottom);
                render_pushpin(list, x1, y2, -45.0, &colors, node.contains(Margins::LEFT), left);
                render_pushpin(list, x3, y2, 45.0, &colors, node.contains(Margins::RIGHT), right);
            }
            PointerMode::Select | PointerMode::DragResize => {}
        }
    }
}
