//! Button press handling - gesture start and alignment toggling.
//!
//! The canvas never consumes presses: the return value tells the host
//! whether the event was handled, and it is always `false` so element
//! handlers further down still see the click.

use super::Activity;
use crate::geometry::Point;
use crate::hit_test::{self, margin_activity};
use crate::host::DesignHost;
use crate::profile_scope;
use crate::session::DesignLayout;
use crate::types::{ElementId, Margins, PointerEvent, PointerMode, Property};
use tracing::{debug, error};

impl DesignLayout {
    /// Activity a press at `p` would start. Caches the margin edges hit.
    pub(crate) fn activity_from_pointer(&mut self, p: Point, cx: &dyn DesignHost) -> Activity {
        if let Some(selection) = self.selection {
            self.margin = hit_test::margins_from_pointer(cx, self.child_offset, selection, p);

            if !self.margin.is_empty() {
                return if cx.pointer_mode() == PointerMode::AlignEdit {
                    Activity::Alignments
                } else {
                    Activity::Margins
                };
            }
        }

        self.rects.activity_at(p)
    }

    pub fn handle_button_press(&mut self, event: &PointerEvent, cx: &mut dyn DesignHost) -> bool {
        profile_scope!("handle_button_press");

        if !event.is_primary_press() {
            return false;
        }
        let Some(toplevel) = cx.toplevel() else { return false };

        let p = self.virtual_surface().event_position(event);
        let activity = self.activity_from_pointer(p, cx);
        self.activity = activity;

        if let Some(selection) = self.selection {
            match activity {
                Activity::None => {
                    self.set_edit_selection(PointerMode::Select, None, cx);
                    return false;
                }
                Activity::Alignments => {
                    self.toggle_alignment(selection, self.margin, cx);
                }
                Activity::Margins => {
                    let m = cx.margins(selection);
                    self.origin.m_dx = p.x + if self.margin.has_left() { m.left } else { -m.right };
                    self.origin.m_dy = p.y + if self.margin.has_top() { m.top } else { -m.bottom };

                    self.set_cursor(margin_activity(self.margin), cx);
                    return false;
                }
                _ => self.set_cursor(activity, cx),
            }
        }

        self.origin.dx = p.x - (self.current.width + self.child_offset);
        self.origin.dy = p.y - (self.current.height + self.child_offset);

        if !activity.is_idle() && !toplevel_active(toplevel, cx) {
            cx.freeze_notifications();
            cx.set_selection(toplevel, true);
            cx.thaw_notifications();
        }

        debug!("Press at ({}, {}) started {:?}", p.x, p.y, activity);
        false
    }

    /// Flips the alignment anchor of the clicked `node` edges and commits the
    /// result as one undoable group.
    pub(crate) fn toggle_alignment(&mut self, selection: ElementId, node: Margins, cx: &mut dyn DesignHost) {
        let current_valign = cx.valign(selection);
        let current_halign = cx.halign(selection);

        let valign = if node.has_top() {
            current_valign.toggle_start()
        } else if node.has_bottom() {
            current_valign.toggle_end()
        } else {
            current_valign
        };

        let halign = if node.has_left() {
            current_halign.toggle_start()
        } else if node.has_right() {
            current_halign.toggle_end()
        } else {
            current_halign
        };

        let Some(meta) = cx.metadata(selection) else { return };

        cx.begin_group(&format!("Editing alignments of {}", meta.name));
        if valign != current_valign {
            if let Err(e) = cx.set_property(selection, Property::Valign(valign)) {
                error!("Failed to set valign of {}: {}", meta.name, e);
            }
        }
        if halign != current_halign {
            if let Err(e) = cx.set_property(selection, Property::Halign(halign)) {
                error!("Failed to set halign of {}: {}", meta.name, e);
            }
        }
        cx.end_group();
    }
}

/// Returns true if anything inside `toplevel` is selected
fn toplevel_active(toplevel: ElementId, cx: &dyn DesignHost) -> bool {
    cx.selection()
        .into_iter()
        .any(|id| cx.is_live(id) && cx.is_ancestor(id, toplevel))
}
