//! Pixel readouts of an element's size and margins while editing margins.
//!
//! Horizontal values sit on a line above the element, vertical values on a
//! line to its right with the text turned a quarter counter-clockwise. When
//! a margin leaves too little room, lines and values get a halo in the
//! background color so they stay legible over the content.

use super::display_list::{DisplayList, Paint, Path, StrokeStyle, TextAnchor, TextHalo, TextRun, Vec2};
use crate::color::Rgba;
use crate::constants::{DIMENSION_LINE_OFFSET, DIMENSION_OFFSET, OUTLINE_WIDTH};
use crate::host::Surface;
use crate::types::EdgeInsets;

/// Colors and font of the readouts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionStyle {
    /// Halo color behind lines and text
    pub bg: Rgba,
    pub fg: Rgba,
    pub font_size: f64,
}

/// Draw dimension lines for an element box at `(x, y)` of `width` x
/// `height` with margins `m`. `x` and `y` are pixel centers.
#[allow(clippy::too_many_arguments)]
pub fn render_dimensions<S: Surface + ?Sized>(
    list: &mut DisplayList,
    surface: &S,
    style: &DimensionStyle,
    x: f64,
    y: f64,
    width: i32,
    height: i32,
    m: EdgeInsets,
) {
    let w = width - 1;
    let h = height - 1;
    let offset = DIMENSION_OFFSET as f64;
    let xx = x + w as f64 + offset;
    let yy = y - offset;
    let h_clutter = m.top < DIMENSION_OFFSET * 2;
    let v_clutter = m.right < DIMENSION_OFFSET + OUTLINE_WIDTH;
    let guide_color = Rgba::half_tone(style.bg, style.fg);

    let (left, right) = (m.left as f64, m.right as f64);
    let (top, bottom) = (m.top as f64, m.bottom as f64);
    let (wf, hf) = (w as f64, h as f64);

    if m.left != 0 || m.right != 0 {
        let remark = m.top < DIMENSION_OFFSET + OUTLINE_WIDTH;

        let mut lines = Path::line(x - left - DIMENSION_LINE_OFFSET, yy, x + wf + right + DIMENSION_LINE_OFFSET, yy);
        if m.top < DIMENSION_OFFSET {
            vguide(&mut lines, x - left, yy, DIMENSION_OFFSET - m.top);
            vguide(&mut lines, x + wf + right, yy, DIMENSION_OFFSET - m.top);
        }
        vguide(&mut lines, x, yy, DIMENSION_OFFSET);
        vguide(&mut lines, x + wf, yy, DIMENSION_OFFSET);
        stroke_lines(list, lines, style.bg, guide_color, remark);

        let mut marks = Path::new();
        if m.left != 0 {
            hmark(&mut marks, x - left, yy);
        }
        hmark(&mut marks, x, yy);
        hmark(&mut marks, x + wf, yy);
        if m.right != 0 {
            hmark(&mut marks, x + wf + right, yy);
        }
        stroke_lines(list, marks, style.bg, style.fg, remark);

        pixel_value(list, surface, style, x + (w / 2) as f64, yy, false, h_clutter, w + 1);
        if m.left != 0 {
            pixel_value(list, surface, style, x - (m.left / 2) as f64, yy, false, h_clutter, m.left);
        }
        if m.right != 0 {
            pixel_value(list, surface, style, x + wf + (m.right / 2) as f64, yy, false, h_clutter, m.right);
        }
    }

    if m.top != 0 || m.bottom != 0 {
        let mut lines = Path::line(xx, y - top - DIMENSION_LINE_OFFSET, xx, y + hf + bottom + DIMENSION_LINE_OFFSET);
        if m.right < DIMENSION_OFFSET {
            hguide(&mut lines, xx, y - top, DIMENSION_OFFSET - m.right);
            hguide(&mut lines, xx, y + hf + bottom, DIMENSION_OFFSET - m.right);
        }
        hguide(&mut lines, xx, y, DIMENSION_OFFSET);
        hguide(&mut lines, xx, y + hf, DIMENSION_OFFSET);
        stroke_lines(list, lines, style.bg, guide_color, v_clutter);

        let mut marks = Path::new();
        if m.top != 0 {
            vmark(&mut marks, xx, y - top);
        }
        vmark(&mut marks, xx, y);
        vmark(&mut marks, xx, y + hf);
        if m.bottom != 0 {
            vmark(&mut marks, xx, y + hf + bottom);
        }
        stroke_lines(list, marks, style.bg, style.fg, v_clutter);

        pixel_value(list, surface, style, xx, y + (h / 2) as f64, true, v_clutter, h + 1);
        if m.top != 0 {
            pixel_value(list, surface, style, xx, y - (m.top / 2) as f64, true, v_clutter, m.top);
        }
        if m.bottom != 0 {
            pixel_value(list, surface, style, xx, y + hf + (m.bottom / 2) as f64, true, v_clutter, m.bottom);
        }
    }
}

fn hmark(path: &mut Path, x: f64, y: f64) {
    path.move_to(x + 2.0, y - 2.0).line_to(x - 2.0, y + 2.0);
}

fn vmark(path: &mut Path, x: f64, y: f64) {
    path.move_to(x - 2.0, y - 2.0).line_to(x + 2.0, y + 2.0);
}

fn vguide(path: &mut Path, x: f64, y: f64, len: i32) {
    path.move_to(x, y - DIMENSION_LINE_OFFSET).line_to(x, y + len as f64);
}

fn hguide(path: &mut Path, x: f64, y: f64, len: i32) {
    path.move_to(x + DIMENSION_LINE_OFFSET, y).line_to(x - len as f64, y);
}

fn stroke_lines(list: &mut DisplayList, path: Path, bg: Rgba, color: Rgba, remark: bool) {
    if remark {
        list.stroke(path.clone(), Paint::Solid(bg.with_alpha(0.9)), StrokeStyle::round(3.0));
    }
    list.stroke(path, Paint::Solid(color), StrokeStyle::round(1.0));
}

#[allow(clippy::too_many_arguments)]
fn pixel_value<S: Surface + ?Sized>(
    list: &mut DisplayList,
    surface: &S,
    style: &DimensionStyle,
    x: f64,
    y: f64,
    rotate: bool,
    draw_border: bool,
    value: i32,
) {
    let text = value.to_string();
    let extents = surface.text_extents(&text, style.font_size);

    let (origin, rotation) = if rotate {
        (Vec2::new(x - 1.5, y + 0.5 + extents.width / 2.0), -90.0)
    } else {
        (Vec2::new(x - (extents.width + extents.x_bearing) / 2.0, y - 2.0), 0.0)
    };

    let halo = (draw_border || extents.width + 4.0 >= value as f64).then_some(TextHalo {
        color: style.bg.with_alpha(0.9),
        width: 3.0,
    });

    list.text(TextRun {
        text,
        origin,
        anchor: TextAnchor::Baseline,
        font_size: Some(style.font_size),
        rotation,
        paint: Paint::Solid(style.fg),
        halo,
    });
}
