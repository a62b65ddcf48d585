//! Highlight of selected elements: a radial wash over the box, a gradient
//! wedge per non-zero margin and an outline around the margin box.

use super::display_list::{DisplayList, GradientStop, Paint, Path, StrokeStyle, Vec2};
use crate::color::Rgba;
use crate::constants::{OUTLINE_WIDTH, SELECTION_HIGHLIGHT};
use crate::geometry::Rect;
use crate::types::EdgeInsets;

/// Draw the selection overlay of an element whose box is `area` in
/// container space.
pub fn render_selection(list: &mut DisplayList, area: Rect, margins: EdgeInsets, color: Rgba) {
    let Rect { x, y, width: w, height: h } = area;
    let xw = x + w;
    let yh = y + h;
    let y_top = y - margins.top;
    let yh_bottom = yh + margins.bottom;
    let x_left = x - margins.left;
    let xw_right = xw + margins.right;

    let center = Vec2::new((x + w / 2) as f64, (y + h / 2) as f64);
    list.fill(
        Path::from_rect(area),
        Paint::Radial {
            center,
            inner_radius: (w.min(h) / 6) as f64,
            outer_radius: (w.max(h) / 2) as f64,
            stops: vec![
                GradientStop::new(0.0, color.offset(SELECTION_HIGHLIGHT).with_alpha(0.16)),
                GradientStop::new(1.0, color.with_alpha(0.28)),
            ],
        },
    );

    if margins.top != 0 {
        margin_wedge(list, [(x, y), (xw, y), (xw_right, y_top), (x_left, y_top)], (x, y_top), color);
    }
    if margins.bottom != 0 {
        margin_wedge(
            list,
            [(x, yh), (xw, yh), (xw_right, yh_bottom), (x_left, yh_bottom)],
            (x, yh_bottom),
            color,
        );
    }
    if margins.left != 0 {
        margin_wedge(list, [(x, y), (x, yh), (x_left, yh_bottom), (x_left, y_top)], (x_left, y), color);
    }
    if margins.right != 0 {
        margin_wedge(
            list,
            [(xw, y), (xw, yh), (xw_right, yh_bottom), (xw_right, y_top)],
            (xw_right, y),
            color,
        );
    }

    let outline = area.expand(margins.top, margins.bottom, margins.left, margins.right);
    list.stroke(
        Path::from_rect(outline),
        Paint::Solid(color.with_alpha(0.75)),
        StrokeStyle::round((OUTLINE_WIDTH / 2) as f64),
    );
}

/// Quad between an element edge and its margin edge, shaded from the first
/// corner toward `end`.
fn margin_wedge(list: &mut DisplayList, corners: [(i32, i32); 4], end: (i32, i32), color: Rgba) {
    let [first, rest @ ..] = corners;

    let mut path = Path::new();
    path.move_to(first.0 as f64, first.1 as f64);
    for (px, py) in rest {
        path.line_to(px as f64, py as f64);
    }
    path.close();

    let paint = Paint::linear(
        Vec2::new(first.0 as f64, first.1 as f64),
        Vec2::new(end.0 as f64, end.1 as f64),
        color.offset(SELECTION_HIGHLIGHT).with_alpha(0.08),
        color.with_alpha(0.16),
    );
    list.fill(path, paint);
}
