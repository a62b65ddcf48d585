//! The per-canvas layout session.
//!
//! `DesignLayout` holds everything one canvas instance knows between events:
//! the current activity, the element under margin/alignment edit, cached
//! hit-test rectangles, gesture origins, the pre-edit snapshot and the
//! subscriptions it holds on the project model.
//!
//! The pointer handlers live in `input`, layout negotiation in `layout` and
//! drawing in `render`; this module covers construction, lifecycle and the
//! project notifications.

use crate::color::{Palette, ThemeColors};
use crate::config::LayoutConfig;
use crate::geometry::{Point, Size};
use crate::hit_test::ResizeRects;
use crate::host::{CursorShape, DesignHost, Invalidation, SubscriptionId, Topic};
use crate::input::coords::{DragIcon, VirtualSurface};
use crate::input::{Activity, DragSource, EditSnapshot, GestureOrigin};
use crate::types::{ElementId, Margins, PointerMode};
use std::collections::HashMap;
use tracing::debug;

/// The toplevel's name as laid out in the name tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameLabel {
    pub text: String,
    pub size: Size,
}

#[derive(Debug, Default)]
struct Subscriptions {
    selection: Option<SubscriptionId>,
    pointer_mode: Option<SubscriptionId>,
    name: Option<(ElementId, SubscriptionId)>,
}

/// Interaction and layout state of one design canvas.
#[derive(Debug)]
pub struct DesignLayout {
    pub(crate) config: LayoutConfig,
    pub(crate) palette: Palette,

    pub(crate) activity: Activity,
    /// Element under margin or alignment edit
    pub(crate) selection: Option<ElementId>,
    /// Edges under the pointer at the last hit test
    pub(crate) margin: Margins,
    /// Edges whose anchors are drawn hovered
    pub(crate) node_over: Margins,

    pub(crate) rects: ResizeRects,
    pub(crate) child_offset: i32,
    /// Size of the content box at the last allocation
    pub(crate) current: Size,
    /// Size of the canvas itself at the last allocation
    pub(crate) allocation: Size,

    pub(crate) origin: GestureOrigin,
    pub(crate) max_width: i32,
    pub(crate) max_height: i32,
    pub(crate) snapshot: EditSnapshot,

    pub(crate) drag_source: Option<DragSource>,
    pub(crate) drag_icon: Option<DragIcon>,

    pub(crate) name: Option<NameLabel>,
    pub(crate) layout_width: i32,

    cursors: HashMap<Activity, CursorShape>,
    pub(crate) cursor: Option<CursorShape>,
    subscriptions: Subscriptions,
    attached: bool,
}

impl DesignLayout {
    pub fn new(config: LayoutConfig) -> Self {
        let palette = Palette::from_theme(&config.theme);
        Self {
            config,
            palette,
            activity: Activity::None,
            selection: None,
            margin: Margins::empty(),
            node_over: Margins::empty(),
            rects: ResizeRects::default(),
            child_offset: 0,
            current: Size::default(),
            allocation: Size::default(),
            origin: GestureOrigin::default(),
            max_width: 0,
            max_height: 0,
            snapshot: EditSnapshot::default(),
            drag_source: None,
            drag_icon: None,
            name: None,
            layout_width: 0,
            cursors: HashMap::new(),
            cursor: None,
            subscriptions: Subscriptions::default(),
            attached: false,
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn activity(&self) -> Activity {
        self.activity
    }

    /// Element currently under margin or alignment edit
    pub fn edit_selection(&self) -> Option<ElementId> {
        self.selection
    }

    pub fn margin(&self) -> Margins {
        self.margin
    }

    pub fn node_over(&self) -> Margins {
        self.node_over
    }

    pub fn rects(&self) -> &ResizeRects {
        &self.rects
    }

    pub fn child_offset(&self) -> i32 {
        self.child_offset
    }

    pub fn current_size(&self) -> Size {
        self.current
    }

    /// Largest margin totals the edit selection may take, per axis
    pub fn max_margins(&self) -> Size {
        Size::new(self.max_width, self.max_height)
    }

    pub fn snapshot(&self) -> &EditSnapshot {
        &self.snapshot
    }

    pub fn gesture_origin(&self) -> &GestureOrigin {
        &self.origin
    }

    pub fn drag_source(&self) -> Option<&DragSource> {
        self.drag_source.as_ref()
    }

    pub fn drag_icon(&self) -> Option<&DragIcon> {
        self.drag_icon.as_ref()
    }

    /// Press position of the drag source in its own coordinates
    pub fn hot_point(&self) -> Option<Point> {
        self.drag_source.map(|source| source.hot_point)
    }

    pub fn name(&self) -> Option<&NameLabel> {
        self.name.as_ref()
    }

    pub fn layout_width(&self) -> i32 {
        self.layout_width
    }

    pub fn cursor(&self) -> Option<CursorShape> {
        self.cursor
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// The embedded content surface as currently placed in the canvas
    pub fn virtual_surface(&self) -> VirtualSurface {
        VirtualSurface::new(Point::new(self.child_offset, self.child_offset), self.current)
    }

    // ------------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------------

    /// Connects the canvas to its project and prepares per-instance resources.
    pub fn attach(&mut self, cx: &mut dyn DesignHost) {
        if self.attached {
            return;
        }

        self.subscriptions.selection = Some(cx.subscribe(Topic::SelectionChanged));
        self.subscriptions.pointer_mode = Some(cx.subscribe(Topic::PointerModeChanged));

        self.cursors = Activity::ALL
            .iter()
            .filter_map(|activity| activity.cursor_shape().map(|shape| (*activity, shape)))
            .collect();

        self.palette = Palette::from_theme(&self.config.theme);
        self.subscribe_name(cx);
        self.refresh_name(cx);
        self.attached = true;

        debug!("Design layout attached");
    }

    /// Releases everything [`Self::attach`] acquired.
    pub fn detach(&mut self, cx: &mut dyn DesignHost) {
        if !self.attached {
            return;
        }

        if let Some(id) = self.subscriptions.selection.take() {
            cx.unsubscribe(id);
        }
        if let Some(id) = self.subscriptions.pointer_mode.take() {
            cx.unsubscribe(id);
        }
        self.unsubscribe_name(cx);

        self.cursors.clear();
        self.cursor = None;
        cx.set_cursor(None);
        self.name = None;
        self.attached = false;

        debug!("Design layout detached");
    }

    /// Re-derives the frame palette after a theme change.
    pub fn set_theme(&mut self, theme: ThemeColors, cx: &mut dyn DesignHost) {
        self.config.theme = theme;
        self.palette = Palette::from_theme(&theme);
        cx.queue_draw();
    }

    /// A toplevel was embedded into the canvas.
    pub fn child_added(&mut self, cx: &mut dyn DesignHost) {
        self.current = Size::default();
        self.unsubscribe_name(cx);
        self.subscribe_name(cx);
        self.refresh_name(cx);
        cx.queue_draw();
    }

    /// The toplevel `child` was taken out of the canvas.
    pub fn child_removed(&mut self, child: ElementId, cx: &mut dyn DesignHost) {
        if let Some((element, id)) = self.subscriptions.name {
            if element == child {
                cx.unsubscribe(id);
                self.subscriptions.name = None;
            }
        }
        cx.queue_draw();
    }

    fn subscribe_name(&mut self, cx: &mut dyn DesignHost) {
        let Some(toplevel) = cx.toplevel() else { return };
        if self.subscriptions.name.is_none() && cx.metadata(toplevel).is_some() {
            let id = cx.subscribe(Topic::NameChanged(toplevel));
            self.subscriptions.name = Some((toplevel, id));
        }
    }

    fn unsubscribe_name(&mut self, cx: &mut dyn DesignHost) {
        if let Some((_, id)) = self.subscriptions.name.take() {
            cx.unsubscribe(id);
        }
    }

    fn refresh_name(&mut self, cx: &mut dyn DesignHost) {
        self.name = cx
            .toplevel()
            .and_then(|toplevel| cx.metadata(toplevel))
            .map(|meta| {
                let size = cx.label_size(&meta.name);
                NameLabel {
                    text: meta.name,
                    size,
                }
            });
    }

    // ------------------------------------------------------------------------
    // Project notifications
    // ------------------------------------------------------------------------

    /// The toplevel was renamed.
    pub fn on_name_changed(&mut self, cx: &mut dyn DesignHost) {
        self.refresh_name(cx);
        cx.queue_resize();
    }

    /// The project selection changed.
    pub fn on_selection_changed(&mut self, cx: &mut dyn DesignHost) {
        if self.selection.is_some() {
            self.set_edit_selection(PointerMode::Select, None, cx);
            return;
        }

        let mode = cx.pointer_mode();
        if mode.is_edit_mode() {
            let first = cx.selection().first().copied();
            self.set_edit_selection(mode, first, cx);
        }
    }

    /// The project pointer mode changed.
    pub fn on_pointer_mode_changed(&mut self, cx: &mut dyn DesignHost) {
        let mode = cx.pointer_mode();

        let single = if mode.is_edit_mode() {
            let selection = cx.selection();
            let single = match selection.as_slice() {
                [only] if cx.is_live(*only) => Some(*only),
                _ => None,
            };
            // Clear first so the snapshot is retaken for the new mode
            self.set_edit_selection(mode, None, cx);
            single
        } else {
            None
        };

        self.set_edit_selection(mode, single, cx);
        cx.invalidate(Invalidation::All);
    }

    /// Puts `selection` under edit in `mode`, or leaves edit mode with `None`.
    ///
    /// Dead elements and the toplevel itself normalize to `None`. Setting the
    /// element already under edit is a no-op, the pointer mode included.
    pub fn set_edit_selection(
        &mut self,
        mode: PointerMode,
        selection: Option<ElementId>,
        cx: &mut dyn DesignHost,
    ) {
        let toplevel = cx.toplevel();
        let selection = selection.filter(|id| cx.is_live(*id) && Some(*id) != toplevel);

        if self.selection == selection {
            return;
        }
        self.selection = selection;

        match selection {
            Some(element) => {
                match mode {
                    PointerMode::MarginEdit => {
                        self.snapshot.margins = cx.margins(element);
                        if let Some(toplevel) = toplevel {
                            let size = cx.bounds(toplevel).size();
                            self.update_max_margins(size, cx);
                        }
                    }
                    PointerMode::AlignEdit => {
                        self.snapshot.valign = cx.valign(element);
                        self.snapshot.halign = cx.halign(element);
                    }
                    PointerMode::Select | PointerMode::DragResize => {}
                }
                debug!("Editing {} in {:?}", element, mode);
                cx.invalidate(Invalidation::All);
            }
            None => {
                debug!("Leaving edit mode for {:?}", mode);
                self.set_cursor_shape(None, cx);
            }
        }

        cx.set_pointer_mode(mode);
    }

    // ------------------------------------------------------------------------
    // Cursor
    // ------------------------------------------------------------------------

    /// Shows the cursor cached for `activity`, touching the surface only when
    /// it changes.
    pub(crate) fn set_cursor(&mut self, activity: Activity, cx: &mut dyn DesignHost) {
        let shape = self.cursors.get(&activity).copied();
        self.set_cursor_shape(shape, cx);
    }

    pub(crate) fn set_cursor_shape(&mut self, shape: Option<CursorShape>, cx: &mut dyn DesignHost) {
        if self.cursor != shape {
            self.cursor = shape;
            cx.set_cursor(shape);
        }
    }
}

impl Default for DesignLayout {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}
