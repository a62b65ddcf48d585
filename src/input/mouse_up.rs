//! Button release and leave handling - commit margin edits, reset the gesture.

use super::Activity;
use crate::host::{DesignHost, Invalidation};
use crate::session::DesignLayout;
use crate::types::{ElementId, Margins, PointerEvent, Property};
use tracing::{debug, error};

impl DesignLayout {
    pub fn handle_button_release(&mut self, _event: &PointerEvent, cx: &mut dyn DesignHost) -> bool {
        // A press that never became a host drag leaves no drag source behind
        if self.drag_icon.is_none() {
            self.drag_source = None;
        }

        if cx.toplevel().is_none() {
            return false;
        }

        match (self.selection, self.activity) {
            (Some(selection), Activity::Margins) => self.commit_margins(selection, cx),
            (_, Activity::Alignments) => {
                self.node_over = Margins::empty();
                cx.invalidate(Invalidation::All);
            }
            _ => {}
        }

        self.activity = Activity::None;
        self.set_cursor_shape(None, cx);
        false
    }

    /// The pointer left the canvas.
    pub fn handle_leave(&mut self, _event: &PointerEvent, cx: &mut dyn DesignHost) -> bool {
        if self.activity.is_idle() {
            self.set_cursor_shape(None, cx);
        }
        false
    }

    /// Turns the live margin edits of a drag into one undoable group.
    ///
    /// Only edges that differ from the snapshot are written; a drag that ends
    /// where it started leaves the undo stack untouched.
    fn commit_margins(&mut self, selection: ElementId, cx: &mut dyn DesignHost) {
        let Some(meta) = cx.metadata(selection) else { return };

        let current = cx.margins(selection);
        let before = self.snapshot.margins;

        let changes: Vec<Property> = [
            (before.top != current.top).then_some(Property::MarginTop(current.top)),
            (before.bottom != current.bottom).then_some(Property::MarginBottom(current.bottom)),
            (before.left != current.left).then_some(Property::MarginLeft(current.left)),
            (before.right != current.right).then_some(Property::MarginRight(current.right)),
        ]
        .into_iter()
        .flatten()
        .collect();

        if changes.is_empty() {
            return;
        }

        cx.begin_group(&format!("Editing margins of {}", meta.name));
        for property in changes {
            if let Err(e) = cx.set_property(selection, property) {
                error!("Failed to set {} of {}: {}", property.name(), meta.name, e);
            }
        }
        cx.end_group();

        debug!("Committed margins {:?} of {}", current, meta.name);
        self.snapshot.margins = current;
    }
}
