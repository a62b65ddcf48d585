//! Size negotiation between the canvas, its host and the embedded toplevel.
//!
//! The canvas asks for room around the toplevel for the frame, the resize
//! handles and the name tab, then places the toplevel at `child_offset`.

use crate::constants::{OUTLINE_WIDTH, PADDING};
use crate::geometry::Size;
use crate::hit_test::ResizeRects;
use crate::host::{DesignHost, ElementMetadata, ElementTree};
use crate::session::DesignLayout;
use crate::types::ElementId;
use tracing::trace;

/// Metadata of a visible toplevel. Its absence is a host contract violation.
fn toplevel_metadata<T: ElementTree + ?Sized>(tree: &T, toplevel: ElementId) -> ElementMetadata {
    let Some(meta) = tree.metadata(toplevel) else {
        panic!("visible toplevel {} has no project metadata", toplevel);
    };
    meta
}

impl DesignLayout {
    fn visible_toplevel(cx: &dyn DesignHost) -> Option<ElementId> {
        cx.toplevel().filter(|id| cx.is_visible(*id))
    }

    /// Height of the name tab's text, or the padding without a name
    pub(crate) fn name_height(&self) -> i32 {
        self.name.as_ref().map_or(PADDING, |name| name.size.height)
    }

    /// Width the canvas needs for the toplevel and its decorations.
    ///
    /// # Panics
    ///
    /// If the toplevel is visible but carries no project metadata.
    pub fn preferred_width(&self, cx: &dyn DesignHost) -> i32 {
        let mut minimum = 0;

        if let Some(toplevel) = Self::visible_toplevel(cx) {
            let meta = toplevel_metadata(cx, toplevel);
            let child_width = meta.toplevel_size.width.max(cx.preferred_size(toplevel).width);
            minimum = minimum.max(2 * PADDING + 2 * OUTLINE_WIDTH + child_width);
        }

        minimum + self.config.border_width * 2
    }

    /// Height the canvas needs for the toplevel, its decorations and the
    /// name tab.
    ///
    /// # Panics
    ///
    /// If the toplevel is visible but carries no project metadata.
    pub fn preferred_height(&self, cx: &dyn DesignHost) -> i32 {
        let mut minimum = 0;

        if let Some(toplevel) = Self::visible_toplevel(cx) {
            let meta = toplevel_metadata(cx, toplevel);
            let child_height = meta.toplevel_size.height.max(cx.preferred_size(toplevel).height);
            minimum = minimum.max(
                PADDING + OUTLINE_WIDTH * 5 / 2 + self.name_height() + child_height,
            );
        }

        minimum + self.config.border_width * 2
    }

    /// Places the toplevel inside a canvas of size `allocation` and
    /// recomputes the resize handles.
    pub fn size_allocate(&mut self, allocation: Size, cx: &mut dyn DesignHost) {
        self.allocation = allocation;

        let Some(toplevel) = Self::visible_toplevel(cx) else { return };

        let offset = self.config.border_width + PADDING + OUTLINE_WIDTH;
        self.child_offset = offset;

        let name_height = self.name_height();
        let content = Size::new(
            allocation.width - offset * 2,
            allocation.height - (offset + OUTLINE_WIDTH * 3 / 2 + name_height),
        );
        self.current = content;

        cx.allocate(toplevel, content);

        let (rects, layout_width) =
            ResizeRects::compute(content, offset, self.name.as_ref().map(|n| n.size));
        self.rects = rects;
        self.layout_width = layout_width;

        trace!(
            "Allocated {}x{} content at offset {}",
            content.width, content.height, offset
        );
    }

    /// Stores a new requested toplevel size and asks for a relayout.
    pub(crate) fn update_child(&mut self, toplevel: ElementId, size: Size, cx: &mut dyn DesignHost) {
        cx.set_toplevel_size(toplevel, size);

        if self.selection.is_some() {
            self.update_max_margins(size, cx);
        }

        cx.queue_resize();
    }

    /// Recomputes how far the edit selection's margins may grow when the
    /// toplevel is `toplevel_size`.
    ///
    /// The margins may use whatever the toplevel has beyond its own request,
    /// plus the slack of an enclosing view larger than the canvas.
    pub(crate) fn update_max_margins(&mut self, toplevel_size: Size, cx: &mut dyn DesignHost) {
        let (Some(selection), Some(toplevel)) = (self.selection, cx.toplevel()) else {
            return;
        };

        let req = cx.preferred_size(toplevel);
        let m = cx.margins(selection);
        let view = cx.view_size();

        self.max_width = toplevel_size.width - (req.width - m.left - m.right);
        if view.width > self.allocation.width {
            self.max_width += view.width - self.allocation.width - (PADDING - OUTLINE_WIDTH);
        }

        self.max_height = toplevel_size.height - (req.height - m.top - m.bottom);
        if view.height > self.allocation.height {
            self.max_height += view.height - self.allocation.height - (PADDING - OUTLINE_WIDTH);
        }
    }
}
