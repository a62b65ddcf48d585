//! The frame around the toplevel and the name tab hanging off its corner.

use super::display_list::{DisplayList, Paint, Path, StrokeStyle, TextAnchor, TextRun, Vec2};
use crate::color::Palette;
use crate::constants::{NAME_FADE_WIDTH, OUTLINE_WIDTH, TAB_CORNER_RADIUS};
use crate::geometry::Rect;
use crate::session::NameLabel;

/// Draw the frame outline, then the name tab in the south-east handle.
///
/// A name wider than the tab fades out over its last pixels instead of
/// being clipped hard.
pub fn render_frame(
    list: &mut DisplayList,
    palette: &Palette,
    selected: bool,
    frame: Rect,
    tab: Rect,
    name: Option<&NameLabel>,
    layout_width: i32,
) {
    let [frame_color, text_color] = *palette.frame_colors(selected);

    list.stroke(
        Path::from_rect(frame),
        Paint::Solid(frame_color),
        StrokeStyle::round(OUTLINE_WIDTH as f64),
    );

    let Some(name) = name else { return };

    list.fill(tab_path(tab), Paint::Solid(frame_color));

    let right = (tab.x + tab.width) as f64;
    let outline = OUTLINE_WIDTH as f64;
    let paint = if tab.width < layout_width {
        Paint::linear(
            Vec2::new(right - NAME_FADE_WIDTH - outline, 0.0),
            Vec2::new(right - outline, 0.0),
            text_color.with_alpha(1.0),
            text_color.with_alpha(0.0),
        )
    } else {
        Paint::Solid(text_color)
    };

    list.text(TextRun {
        text: name.text.clone(),
        origin: Vec2::new(tab.x as f64 + outline, tab.y as f64 + outline),
        anchor: TextAnchor::TopLeft,
        font_size: None,
        rotation: 0.0,
        paint,
        halo: None,
    });
}

/// Square top, rounded bottom corners.
fn tab_path(tab: Rect) -> Path {
    let (x, y) = (tab.x as f64, tab.y as f64);
    let xx = x + tab.width as f64;
    let yy = y + tab.height as f64;
    let r = TAB_CORNER_RADIUS;

    let mut path = Path::new();
    path.move_to(x, y)
        .line_to(xx, y)
        .line_to(xx, yy - r)
        .curve_to(xx, yy, xx, yy, xx - r, yy)
        .line_to(x + r, yy)
        .curve_to(x, yy, x, yy, x, yy - r)
        .close();
    path
}
