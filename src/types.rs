//! Core types for the design canvas.
//!
//! This module defines the data model shared by hit testing, the activity state
//! machine, the event router and the overlay renderer: element handles, pointer
//! modes, margin edge sets, alignment values and raw pointer events.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geometry::Point;

// ============================================================================
// Elements
// ============================================================================

/// Handle to an element of the host widget tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Per-edge margin values of an element, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeInsets {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets::new(0, 0, 0, 0);

    pub const fn new(top: i32, bottom: i32, left: i32, right: i32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Alignment of an element inside the space its parent allocates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Fill,
    Start,
    End,
    Center,
}

impl Align {
    /// Decomposes the alignment into `(anchored at start, anchored at end)`.
    ///
    /// `Fill` is anchored at both ends, `Center` at neither.
    pub fn anchors(self) -> (bool, bool) {
        match self {
            Align::Fill => (true, true),
            Align::Start => (true, false),
            Align::End => (false, true),
            Align::Center => (false, false),
        }
    }

    /// Next alignment after clicking the anchor at the start edge.
    pub fn toggle_start(self) -> Align {
        match self.anchors() {
            (true, true) => Align::End,
            (true, false) => Align::Center,
            (false, true) => Align::Fill,
            (false, false) => Align::Start,
        }
    }

    /// Next alignment after clicking the anchor at the end edge.
    pub fn toggle_end(self) -> Align {
        match self.anchors() {
            (true, true) => Align::Start,
            (false, true) => Align::Center,
            (true, false) => Align::Fill,
            (false, false) => Align::End,
        }
    }
}

// ============================================================================
// Modes & Edges
// ============================================================================

/// Interaction mode owned by the project model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerMode {
    #[default]
    Select,
    DragResize,
    MarginEdit,
    AlignEdit,
}

impl PointerMode {
    /// Returns true for the modes that put a single element under edit
    pub fn is_edit_mode(self) -> bool {
        matches!(self, PointerMode::MarginEdit | PointerMode::AlignEdit)
    }
}

bitflags! {
    /// Edges of an element's margin box.
    ///
    /// Several bits may be set at once: a corner grab sets one vertical and
    /// one horizontal edge.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Margins: u8 {
        const TOP    = 1 << 0;
        const BOTTOM = 1 << 1;
        const LEFT   = 1 << 2;
        const RIGHT  = 1 << 3;
    }
}

impl Margins {
    #[inline]
    pub fn has_top(self) -> bool {
        self.contains(Margins::TOP)
    }

    #[inline]
    pub fn has_bottom(self) -> bool {
        self.contains(Margins::BOTTOM)
    }

    #[inline]
    pub fn has_left(self) -> bool {
        self.contains(Margins::LEFT)
    }

    #[inline]
    pub fn has_right(self) -> bool {
        self.contains(Margins::RIGHT)
    }
}

bitflags! {
    /// Keyboard modifiers and held pointer buttons at the time of an event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierState: u8 {
        /// Symmetric margin editing, additive selection, alignment edit entry.
        const SHIFT   = 1 << 0;
        /// Snap margins to the configured step.
        const CONTROL = 1 << 1;
        const ALT     = 1 << 2;
        const BUTTON1 = 1 << 3;
        const BUTTON2 = 1 << 4;
        const BUTTON3 = 1 << 5;
    }
}

impl ModifierState {
    #[inline]
    pub fn shift(self) -> bool {
        self.contains(ModifierState::SHIFT)
    }

    #[inline]
    pub fn control(self) -> bool {
        self.contains(ModifierState::CONTROL)
    }

    #[inline]
    pub fn primary_held(self) -> bool {
        self.contains(ModifierState::BUTTON1)
    }
}

// ============================================================================
// Pointer Events
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Primary,
    Middle,
    Secondary,
}

/// Surface the event coordinates are expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EventOrigin {
    /// The canvas' own coordinate space.
    #[default]
    Container,
    /// The embedded content's virtual surface.
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    /// Button press; `click_count` is 2 for the second press of a double click.
    Press { button: MouseButton, click_count: u8 },
    Release { button: MouseButton },
    Motion,
    Leave,
}

/// A raw pointer event as delivered by the host event loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub x: f64,
    pub y: f64,
    pub origin: EventOrigin,
    pub state: ModifierState,
}

impl PointerEvent {
    pub fn press(x: f64, y: f64) -> Self {
        Self {
            kind: PointerEventKind::Press {
                button: MouseButton::Primary,
                click_count: 1,
            },
            x,
            y,
            origin: EventOrigin::Container,
            state: ModifierState::empty(),
        }
    }

    pub fn release(x: f64, y: f64) -> Self {
        Self {
            kind: PointerEventKind::Release {
                button: MouseButton::Primary,
            },
            x,
            y,
            origin: EventOrigin::Container,
            state: ModifierState::BUTTON1,
        }
    }

    pub fn motion(x: f64, y: f64) -> Self {
        Self {
            kind: PointerEventKind::Motion,
            x,
            y,
            origin: EventOrigin::Container,
            state: ModifierState::empty(),
        }
    }

    pub fn leave(x: f64, y: f64) -> Self {
        Self {
            kind: PointerEventKind::Leave,
            x,
            y,
            origin: EventOrigin::Container,
            state: ModifierState::empty(),
        }
    }

    pub fn with_state(mut self, state: ModifierState) -> Self {
        self.state = state;
        self
    }

    pub fn with_origin(mut self, origin: EventOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// Event position truncated to integer pixels.
    pub fn position(&self) -> Point {
        Point::from_f64(self.x, self.y)
    }

    /// Returns true for a single press of the primary button
    pub fn is_primary_press(&self) -> bool {
        matches!(
            self.kind,
            PointerEventKind::Press {
                button: MouseButton::Primary,
                click_count: 1
            }
        )
    }
}

// ============================================================================
// Commands
// ============================================================================

/// A property write issued to the command (undo) system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Property {
    MarginTop(i32),
    MarginBottom(i32),
    MarginLeft(i32),
    MarginRight(i32),
    Valign(Align),
    Halign(Align),
}

impl Property {
    /// Name of the property as the project model knows it.
    pub fn name(&self) -> &'static str {
        match self {
            Property::MarginTop(_) => "margin-top",
            Property::MarginBottom(_) => "margin-bottom",
            Property::MarginLeft(_) => "margin-left",
            Property::MarginRight(_) => "margin-right",
            Property::Valign(_) => "valign",
            Property::Halign(_) => "halign",
        }
    }
}
