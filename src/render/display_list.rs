//! Retained drawing commands produced by the overlay renderer.
//!
//! The canvas does not rasterize anything itself. `DesignLayout::draw`
//! records what to paint into a [`DisplayList`] in container coordinates, and
//! the host replays it with whatever 2D backend it uses.

use crate::color::Rgba;
use crate::geometry::Rect;
use serde::Serialize;

/// A point in fractional container coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rotation about the origin followed by a translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    cos: f64,
    sin: f64,
    offset: Vec2,
}

impl Affine {
    pub fn translate(x: f64, y: f64) -> Self {
        Self {
            cos: 1.0,
            sin: 0.0,
            offset: Vec2::new(x, y),
        }
    }

    /// Rotates by `degrees` (clockwise on screen), then moves to `(x, y)`.
    pub fn rotate_then_translate(degrees: f64, x: f64, y: f64) -> Self {
        let radians = degrees.to_radians();
        Self {
            cos: radians.cos(),
            sin: radians.sin(),
            offset: Vec2::new(x, y),
        }
    }

    pub fn apply(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x * self.cos - p.y * self.sin + self.offset.x,
            p.x * self.sin + p.y * self.cos + self.offset.y,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PathElement {
    MoveTo(Vec2),
    LineTo(Vec2),
    CurveTo(Vec2, Vec2, Vec2),
    /// A full circle, starting a new sub-path
    Circle { center: Vec2, radius: f64 },
    Close,
}

/// Outline made of straight lines, cubic curves and circles.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Path {
    elements: Vec<PathElement>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        let mut path = Self::new();
        path.move_to(x, y)
            .line_to(x + width, y)
            .line_to(x + width, y + height)
            .line_to(x, y + height)
            .close();
        path
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self::rect(rect.x as f64, rect.y as f64, rect.width as f64, rect.height as f64)
    }

    pub fn circle(x: f64, y: f64, radius: f64) -> Self {
        let mut path = Self::new();
        path.elements.push(PathElement::Circle {
            center: Vec2::new(x, y),
            radius,
        });
        path
    }

    /// A single straight segment.
    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let mut path = Self::new();
        path.move_to(x1, y1).line_to(x2, y2);
        path
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.elements.push(PathElement::MoveTo(Vec2::new(x, y)));
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.elements.push(PathElement::LineTo(Vec2::new(x, y)));
        self
    }

    pub fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> &mut Self {
        self.elements.push(PathElement::CurveTo(
            Vec2::new(x1, y1),
            Vec2::new(x2, y2),
            Vec2::new(x3, y3),
        ));
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.elements.push(PathElement::Close);
        self
    }

    /// Appends every element of `other`.
    pub fn extend(&mut self, other: &Path) -> &mut Self {
        self.elements.extend_from_slice(&other.elements);
        self
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Maps every point through `affine`. Circle radii are kept.
    pub fn transformed(&self, affine: &Affine) -> Path {
        let elements = self
            .elements
            .iter()
            .map(|element| match *element {
                PathElement::MoveTo(p) => PathElement::MoveTo(affine.apply(p)),
                PathElement::LineTo(p) => PathElement::LineTo(affine.apply(p)),
                PathElement::CurveTo(a, b, c) => {
                    PathElement::CurveTo(affine.apply(a), affine.apply(b), affine.apply(c))
                }
                PathElement::Circle { center, radius } => PathElement::Circle {
                    center: affine.apply(center),
                    radius,
                },
                PathElement::Close => PathElement::Close,
            })
            .collect();
        Path { elements }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Rgba,
}

impl GradientStop {
    pub fn new(offset: f64, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// What a fill or stroke is painted with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Paint {
    Solid(Rgba),
    Linear {
        start: Vec2,
        end: Vec2,
        stops: Vec<GradientStop>,
    },
    Radial {
        center: Vec2,
        inner_radius: f64,
        outer_radius: f64,
        stops: Vec<GradientStop>,
    },
}

impl Paint {
    /// Two-stop linear gradient from `from` at offset 0 to `to` at offset 1.
    pub fn linear(start: Vec2, end: Vec2, from: Rgba, to: Rgba) -> Self {
        Paint::Linear {
            start,
            end,
            stops: vec![GradientStop::new(0.0, from), GradientStop::new(1.0, to)],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrokeStyle {
    pub width: f64,
    pub join: LineJoin,
    pub cap: LineCap,
}

impl StrokeStyle {
    pub fn new(width: f64) -> Self {
        Self {
            width,
            join: LineJoin::Miter,
            cap: LineCap::Butt,
        }
    }

    pub fn round(width: f64) -> Self {
        Self {
            width,
            join: LineJoin::Round,
            cap: LineCap::Round,
        }
    }
}

/// How a text origin relates to the glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextAnchor {
    /// Origin is the top-left corner of the laid out text
    TopLeft,
    /// Origin is the start of the baseline
    Baseline,
}

/// Outline stroked around glyphs so they read over busy backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextHalo {
    pub color: Rgba,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    pub text: String,
    pub origin: Vec2,
    pub anchor: TextAnchor,
    /// `None` uses the surface's label font
    pub font_size: Option<f64>,
    /// Rotation about the origin, in degrees
    pub rotation: f64,
    pub paint: Paint,
    pub halo: Option<TextHalo>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    /// Paint the embedded content's surface into `area`
    Surface { area: Rect },
    Fill { path: Path, paint: Paint },
    Stroke { path: Path, paint: Paint, style: StrokeStyle },
    Text(TextRun),
}

impl DrawCommand {
    /// Short name of the command kind
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCommand::Surface { .. } => "surface",
            DrawCommand::Fill { .. } => "fill",
            DrawCommand::Stroke { .. } => "stroke",
            DrawCommand::Text(_) => "text",
        }
    }
}

/// Ordered drawing commands; later commands paint over earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn surface(&mut self, area: Rect) {
        self.commands.push(DrawCommand::Surface { area });
    }

    pub fn fill(&mut self, path: Path, paint: Paint) {
        self.commands.push(DrawCommand::Fill { path, paint });
    }

    pub fn stroke(&mut self, path: Path, paint: Paint, style: StrokeStyle) {
        self.commands.push(DrawCommand::Stroke { path, paint, style });
    }

    pub fn text(&mut self, run: TextRun) {
        self.commands.push(DrawCommand::Text(run));
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Kinds of every command, in paint order
    pub fn kinds(&self) -> Vec<&'static str> {
        self.commands.iter().map(DrawCommand::kind).collect()
    }

    /// Every text run, in paint order
    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(run) => Some(run),
            _ => None,
        })
    }
}
