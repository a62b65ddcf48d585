//! In-memory host.
//!
//! A self-contained implementation of every host trait: a small widget tree,
//! a project model, a recording command sink that applies what it records,
//! and a surface that logs cursor changes, invalidations and drags. It backs
//! the test suite and serves as a reference for toolkit adapters.

use super::{
    CommandSink, CursorShape, ElementMetadata, ElementTree, Invalidation, ProjectModel, Surface,
    SubscriptionId, TextExtents, Topic,
};
use crate::geometry::{Point, Rect, Size};
use crate::types::{Align, EdgeInsets, ElementId, PointerEvent, PointerEventKind, PointerMode, Property};
use std::collections::{BTreeMap, HashSet};

/// Width of one character of the canvas font, in pixels
const CHAR_WIDTH: i32 = 7;
/// Line height of the canvas font, in pixels
const LINE_HEIGHT: i32 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Widget,
    Fixed,
    Placeholder,
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    bounds: Rect,
    margins: EdgeInsets,
    valign: Align,
    halign: Align,
    kind: NodeKind,
    metadata: Option<ElementMetadata>,
    preferred: Size,
    visible: bool,
    mapped: bool,
}

impl Node {
    fn new(parent: Option<ElementId>, bounds: Rect, kind: NodeKind, name: Option<&str>) -> Self {
        Self {
            parent,
            children: Vec::new(),
            bounds,
            margins: EdgeInsets::ZERO,
            valign: Align::Fill,
            halign: Align::Fill,
            kind,
            metadata: name.map(|name| ElementMetadata {
                name: name.to_string(),
                toplevel_size: Size::default(),
            }),
            preferred: bounds.size(),
            visible: true,
            mapped: true,
        }
    }
}

/// One entry of the command log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandRecord {
    BeginGroup(String),
    Set(ElementId, Property),
    EndGroup,
}

/// In-memory implementation of [`super::DesignHost`].
#[derive(Debug, Default)]
pub struct MemoryHost {
    nodes: BTreeMap<ElementId, Node>,
    toplevel: Option<ElementId>,
    next_id: u64,

    // Project model
    pointer_mode: PointerMode,
    selection: Vec<ElementId>,
    freeze_depth: u32,
    /// Maximum freeze depth reached, to verify freeze/thaw pairing
    pub max_freeze_depth: u32,
    subscriptions: BTreeMap<SubscriptionId, Topic>,
    next_subscription: u64,

    // Command sink
    pub commands: Vec<CommandRecord>,
    /// When set, every property write fails
    pub fail_writes: bool,

    // Element event handlers
    consuming: HashSet<ElementId>,
    pub dispatched: Vec<(ElementId, PointerEventKind)>,

    // Surface
    pub cursor: Option<CursorShape>,
    pub cursor_changes: usize,
    pub invalidations: Vec<Invalidation>,
    pub resize_requests: usize,
    pub draw_requests: usize,
    pub drags: Vec<(ElementId, Point)>,
    pub view_size: Size,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc_id(&mut self) -> ElementId {
        self.next_id += 1;
        ElementId(self.next_id)
    }

    fn node(&self, id: ElementId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    fn node_mut(&mut self, id: ElementId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    fn insert(&mut self, parent: Option<ElementId>, node: Node) -> ElementId {
        let id = self.alloc_id();
        if let Some(parent) = parent.and_then(|p| self.nodes.get_mut(&p)) {
            parent.children.push(id);
        }
        self.nodes.insert(id, node);
        id
    }

    // ------------------------------------------------------------------------
    // Tree building
    // ------------------------------------------------------------------------

    /// Adds the toplevel with its intrinsic size; it is allocated at (0, 0).
    pub fn add_toplevel(&mut self, name: &str, preferred: Size) -> ElementId {
        let node = Node::new(None, Rect::from_origin_size(Point::default(), preferred), NodeKind::Widget, Some(name));
        let id = self.insert(None, node);
        self.toplevel = Some(id);
        id
    }

    /// Adds a project element with `bounds` in content space.
    pub fn add_widget(&mut self, parent: ElementId, name: &str, bounds: Rect) -> ElementId {
        let node = Node::new(Some(parent), bounds, NodeKind::Widget, Some(name));
        self.insert(Some(parent), node)
    }

    /// Adds a fixed-position container element.
    pub fn add_fixed(&mut self, parent: ElementId, name: &str, bounds: Rect) -> ElementId {
        let node = Node::new(Some(parent), bounds, NodeKind::Fixed, Some(name));
        self.insert(Some(parent), node)
    }

    /// Adds an internal child that carries no project metadata.
    pub fn add_internal(&mut self, parent: ElementId, bounds: Rect) -> ElementId {
        let node = Node::new(Some(parent), bounds, NodeKind::Widget, None);
        self.insert(Some(parent), node)
    }

    pub fn add_placeholder(&mut self, parent: ElementId, bounds: Rect) -> ElementId {
        let node = Node::new(Some(parent), bounds, NodeKind::Placeholder, None);
        self.insert(Some(parent), node)
    }

    /// Removes an element and its subtree, leaving dangling handles dead.
    pub fn remove(&mut self, id: ElementId) {
        let Some(node) = self.nodes.remove(&id) else { return };
        if let Some(parent) = node.parent.and_then(|p| self.nodes.get_mut(&p)) {
            parent.children.retain(|c| *c != id);
        }
        for child in node.children {
            self.remove(child);
        }
        if self.toplevel == Some(id) {
            self.toplevel = None;
        }
        self.selection.retain(|s| *s != id);
    }

    pub fn set_element_margins(&mut self, id: ElementId, margins: EdgeInsets) {
        self.set_margins(id, margins);
    }

    pub fn set_alignment(&mut self, id: ElementId, valign: Align, halign: Align) {
        if let Some(node) = self.node_mut(id) {
            node.valign = valign;
            node.halign = halign;
        }
    }

    pub fn set_preferred(&mut self, id: ElementId, size: Size) {
        if let Some(node) = self.node_mut(id) {
            node.preferred = size;
        }
    }

    pub fn set_visible(&mut self, id: ElementId, visible: bool) {
        if let Some(node) = self.node_mut(id) {
            node.visible = visible;
            node.mapped = visible;
        }
    }

    pub fn rename(&mut self, id: ElementId, name: &str) {
        if let Some(meta) = self.node_mut(id).and_then(|n| n.metadata.as_mut()) {
            meta.name = name.to_string();
        }
    }

    /// Drops the project metadata of an element, breaking the host contract.
    pub fn strip_metadata(&mut self, id: ElementId) {
        if let Some(node) = self.node_mut(id) {
            node.metadata = None;
        }
    }

    /// Makes the element's own handler report events as handled
    pub fn consume_events(&mut self, id: ElementId) {
        self.consuming.insert(id);
    }

    pub fn set_selection_list(&mut self, ids: &[ElementId]) {
        self.selection = ids.to_vec();
    }

    pub fn set_mode(&mut self, mode: PointerMode) {
        self.pointer_mode = mode;
    }

    // ------------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------------

    pub fn is_frozen(&self) -> bool {
        self.freeze_depth > 0
    }

    pub fn subscriptions(&self) -> Vec<Topic> {
        self.subscriptions.values().copied().collect()
    }

    /// Property writes in the log, without group markers
    pub fn property_writes(&self) -> Vec<(ElementId, Property)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                CommandRecord::Set(id, p) => Some((*id, *p)),
                _ => None,
            })
            .collect()
    }

    pub fn groups(&self) -> Vec<String> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                CommandRecord::BeginGroup(label) => Some(label.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn toplevel_size(&self, id: ElementId) -> Option<Size> {
        self.metadata(id).map(|m| m.toplevel_size)
    }
}

impl ElementTree for MemoryHost {
    fn toplevel(&self) -> Option<ElementId> {
        self.toplevel
    }

    fn is_live(&self, id: ElementId) -> bool {
        self.nodes.contains_key(&id)
    }

    fn is_visible(&self, id: ElementId) -> bool {
        self.node(id).is_some_and(|n| n.visible)
    }

    fn is_mapped(&self, id: ElementId) -> bool {
        self.node(id).is_some_and(|n| n.mapped)
    }

    fn bounds(&self, id: ElementId) -> Rect {
        self.node(id).map(|n| n.bounds).unwrap_or_default()
    }

    fn margins(&self, id: ElementId) -> EdgeInsets {
        self.node(id).map(|n| n.margins).unwrap_or_default()
    }

    fn set_margins(&mut self, id: ElementId, margins: EdgeInsets) {
        if let Some(node) = self.node_mut(id) {
            node.margins = margins;
        }
    }

    fn valign(&self, id: ElementId) -> Align {
        self.node(id).map(|n| n.valign).unwrap_or_default()
    }

    fn halign(&self, id: ElementId) -> Align {
        self.node(id).map(|n| n.halign).unwrap_or_default()
    }

    fn children(&self, id: ElementId) -> Vec<ElementId> {
        self.node(id).map(|n| n.children.clone()).unwrap_or_default()
    }

    fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.node(id).and_then(|n| n.parent)
    }

    fn is_placeholder(&self, id: ElementId) -> bool {
        self.node(id).is_some_and(|n| n.kind == NodeKind::Placeholder)
    }

    fn is_fixed_container(&self, id: ElementId) -> bool {
        self.node(id).is_some_and(|n| n.kind == NodeKind::Fixed)
    }

    fn metadata(&self, id: ElementId) -> Option<ElementMetadata> {
        self.node(id).and_then(|n| n.metadata.clone())
    }

    fn set_toplevel_size(&mut self, id: ElementId, size: Size) {
        if let Some(meta) = self.node_mut(id).and_then(|n| n.metadata.as_mut()) {
            meta.toplevel_size = size;
        }
    }

    fn preferred_size(&self, id: ElementId) -> Size {
        self.node(id).map(|n| n.preferred).unwrap_or_default()
    }

    fn allocate(&mut self, id: ElementId, size: Size) {
        if let Some(node) = self.node_mut(id) {
            node.bounds = Rect::from_origin_size(Point::default(), size);
        }
    }

    fn dispatch_event(&mut self, id: ElementId, event: &PointerEvent) -> bool {
        self.dispatched.push((id, event.kind));
        self.consuming.contains(&id)
    }
}

impl ProjectModel for MemoryHost {
    fn pointer_mode(&self) -> PointerMode {
        self.pointer_mode
    }

    fn set_pointer_mode(&mut self, mode: PointerMode) {
        self.pointer_mode = mode;
    }

    fn selection(&self) -> Vec<ElementId> {
        self.selection.clone()
    }

    fn set_selection(&mut self, id: ElementId, exclusive: bool) {
        if exclusive {
            self.selection.clear();
        }
        if !self.selection.contains(&id) {
            self.selection.push(id);
        }
    }

    fn freeze_notifications(&mut self) {
        self.freeze_depth += 1;
        self.max_freeze_depth = self.max_freeze_depth.max(self.freeze_depth);
    }

    fn thaw_notifications(&mut self) {
        self.freeze_depth = self.freeze_depth.saturating_sub(1);
    }

    fn subscribe(&mut self, topic: Topic) -> SubscriptionId {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.subscriptions.insert(id, topic);
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscriptions.remove(&id);
    }
}

impl CommandSink for MemoryHost {
    fn begin_group(&mut self, label: &str) {
        self.commands.push(CommandRecord::BeginGroup(label.to_string()));
    }

    fn set_property(&mut self, id: ElementId, property: Property) -> anyhow::Result<()> {
        if self.fail_writes {
            anyhow::bail!("property {} of {} is read-only", property.name(), id);
        }
        let node = self
            .node_mut(id)
            .ok_or_else(|| anyhow::anyhow!("no element {}", id))?;

        match property {
            Property::MarginTop(v) => node.margins.top = v,
            Property::MarginBottom(v) => node.margins.bottom = v,
            Property::MarginLeft(v) => node.margins.left = v,
            Property::MarginRight(v) => node.margins.right = v,
            Property::Valign(a) => node.valign = a,
            Property::Halign(a) => node.halign = a,
        }
        self.commands.push(CommandRecord::Set(id, property));
        Ok(())
    }

    fn end_group(&mut self) {
        self.commands.push(CommandRecord::EndGroup);
    }
}

impl Surface for MemoryHost {
    fn set_cursor(&mut self, cursor: Option<CursorShape>) {
        self.cursor = cursor;
        self.cursor_changes += 1;
    }

    fn invalidate(&mut self, area: Invalidation) {
        self.invalidations.push(area);
    }

    fn queue_resize(&mut self) {
        self.resize_requests += 1;
    }

    fn queue_draw(&mut self) {
        self.draw_requests += 1;
    }

    fn label_size(&self, text: &str) -> Size {
        Size::new(text.chars().count() as i32 * CHAR_WIDTH, LINE_HEIGHT)
    }

    fn text_extents(&self, text: &str, font_size: f64) -> TextExtents {
        TextExtents {
            width: text.chars().count() as f64 * font_size * 0.5,
            height: font_size,
            x_bearing: 0.0,
        }
    }

    fn view_size(&self) -> Size {
        self.view_size
    }

    fn begin_drag(&mut self, source: ElementId, hot_point: Point) {
        self.drags.push((source, hot_point));
    }
}
