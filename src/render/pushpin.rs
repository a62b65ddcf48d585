//! Edit handles: round margin nodes and alignment pushpins.
//!
//! Both are also drawn by hosts outside the canvas (e.g. a property editor
//! mirroring the canvas' handles), so they take explicit colors.

use super::display_list::{Affine, DisplayList, LineCap, LineJoin, Paint, Path, StrokeStyle};
use crate::color::Rgba;
use crate::constants::{FRAME_SHADE_OFFSET, OUTLINE_WIDTH};

/// Colors of an alignment pushpin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinColors {
    /// Outline of a pin that is not anchoring
    pub outline: Rgba,
    pub fill: Rgba,
    /// Outline of a pin that is anchoring
    pub active_outline: Rgba,
    pub fg: Rgba,
}

/// A margin handle: a circle of radius `OUTLINE_WIDTH` outlined in `bg`
/// and filled with `fg`.
pub fn render_node(list: &mut DisplayList, x: f64, y: f64, fg: Rgba, bg: Rgba) {
    let path = Path::circle(x, y, OUTLINE_WIDTH as f64);
    list.stroke(path.clone(), Paint::Solid(bg), StrokeStyle::round(OUTLINE_WIDTH as f64));
    list.fill(path, Paint::Solid(fg));
}

/// An alignment pushpin at `(x, y)`.
///
/// An active pin is stuck in, tilted by `angle` degrees with a short
/// needle. An inactive pin stands upright. Hovering swaps outline and fill.
pub fn render_pushpin(
    list: &mut DisplayList,
    x: f64,
    y: f64,
    angle: f64,
    colors: &PinColors,
    over: bool,
    active: bool,
) {
    let (affine, mut outline) = if active {
        (Affine::rotate_then_translate(angle, x + 0.5, y), colors.active_outline)
    } else {
        (Affine::translate(x + 1.5, y), colors.outline)
    };
    let mut fill = colors.fill;

    if over {
        std::mem::swap(&mut outline, &mut fill);
    }
    let bg = if over { outline } else { fill };
    let needle = if active { 2.5 } else { 4.0 };

    render_pin_shape(list, &affine, needle, outline, fill, bg, colors.fg);
}

/// The pin itself in local coordinates: needle pointing down from `y = 2`,
/// head between `y = -7` and `y = 0`.
pub fn render_pin_shape(
    list: &mut DisplayList,
    affine: &Affine,
    needle: f64,
    outline: Rgba,
    fill: Rgba,
    bg: Rgba,
    fg: Rgba,
) {
    let butt = StrokeStyle {
        width: 1.0,
        join: LineJoin::Round,
        cap: LineCap::Butt,
    };

    // Needle with its shadow
    list.stroke(
        Path::line(1.0, 2.0, 1.0, 2.0 + needle).transformed(affine),
        Paint::Solid(bg.with_alpha(0.9)),
        butt,
    );
    list.stroke(
        Path::line(0.0, 2.0, 0.0, 2.0 + needle).transformed(affine),
        Paint::Solid(fg),
        butt,
    );

    // Top and bottom caps
    let mut caps = Path::new();
    caps.move_to(-4.0, 0.0).line_to(4.0, 0.0);
    caps.move_to(-2.5, -7.0).line_to(2.5, -7.0);
    let caps = caps.transformed(affine);
    list.stroke(caps.clone(), Paint::Solid(outline), StrokeStyle::round(4.0));
    list.stroke(caps, Paint::Solid(fill), StrokeStyle::round(2.0));

    // Body
    let mut body = Path::new();
    body.move_to(-2.0, -5.0)
        .line_to(2.0, -5.0)
        .line_to(3.0, -2.0)
        .line_to(-3.0, -2.0)
        .close();
    let body = body.transformed(affine);
    list.stroke(body.clone(), Paint::Solid(outline), StrokeStyle::round(2.0));
    list.fill(body, Paint::Solid(fill));

    let shade = fill.offset(-FRAME_SHADE_OFFSET).with_alpha(1.0);
    list.stroke(
        Path::line(1.0, -5.0, 1.5, -2.0).transformed(affine),
        Paint::Solid(shade),
        StrokeStyle::round(1.0),
    );
}
