//! Integration tests for resizing the toplevel through the frame handles.
//!
//! The default fixture is a 200x100 "window1" at offset 16, so the east
//! handle spans x 216..232 and the content's bottom edge sits at y 116.

use crate::helpers::{TestCanvasBuilder, assert_thawed};
use design_canvas::geometry::Size;
use design_canvas::host::{CursorShape, ProjectModel};
use design_canvas::types::ModifierState;
use design_canvas::Activity;

#[test]
fn test_hover_shows_resize_cursors() {
    let mut canvas = TestCanvasBuilder::new().build();

    canvas.hover(220, 60);
    assert_eq!(canvas.host.cursor, Some(CursorShape::RightSide));

    canvas.hover(60, 120);
    assert_eq!(canvas.host.cursor, Some(CursorShape::BottomSide));

    canvas.hover(190, 125);
    assert_eq!(canvas.host.cursor, Some(CursorShape::BottomRightCorner));

    canvas.hover(100, 60);
    assert_eq!(canvas.host.cursor, None);
}

#[test]
fn test_cursor_only_pushed_on_change() {
    let mut canvas = TestCanvasBuilder::new().build();

    canvas.hover(220, 60);
    let changes = canvas.host.cursor_changes;
    canvas.hover(221, 61);
    canvas.hover(222, 62);
    assert_eq!(canvas.host.cursor_changes, changes);
}

#[test]
fn test_width_resize_gesture() {
    let mut canvas = TestCanvasBuilder::new().build();
    let toplevel = canvas.toplevel;

    canvas.press(220, 60);
    assert_eq!(canvas.layout.activity(), Activity::ResizeWidth);
    assert_eq!(canvas.layout.gesture_origin().dx, 4);
    assert_eq!(canvas.host.selection(), vec![toplevel]);
    assert_thawed(&canvas.host);

    canvas.drag_to(260, 60, ModifierState::empty());
    assert_eq!(canvas.host.toplevel_size(toplevel), Some(Size::new(240, 100)));
    assert!(canvas.host.resize_requests > 0);

    canvas.release(260, 60);
    assert_eq!(canvas.layout.activity(), Activity::None);
    assert_eq!(canvas.host.cursor, None);
}

#[test]
fn test_height_resize_keeps_width() {
    let mut canvas = TestCanvasBuilder::new().build();
    let toplevel = canvas.toplevel;

    canvas.press(60, 120);
    assert_eq!(canvas.layout.activity(), Activity::ResizeHeight);

    canvas.drag_to(60, 150, ModifierState::empty());
    assert_eq!(canvas.host.toplevel_size(toplevel), Some(Size::new(200, 130)));
}

#[test]
fn test_tab_resizes_both_axes() {
    let mut canvas = TestCanvasBuilder::new().build();
    let toplevel = canvas.toplevel;

    canvas.press(190, 125);
    assert_eq!(canvas.layout.activity(), Activity::ResizeBoth);

    canvas.drag_to(170, 145, ModifierState::empty());
    assert_eq!(canvas.host.toplevel_size(toplevel), Some(Size::new(180, 120)));
}

#[test]
fn test_resize_never_goes_negative() {
    let mut canvas = TestCanvasBuilder::new().build();
    let toplevel = canvas.toplevel;

    canvas.press(220, 60);
    canvas.drag_to(-400, 60, ModifierState::empty());
    assert_eq!(canvas.host.toplevel_size(toplevel), Some(Size::new(0, 100)));
}

#[test]
fn test_relayout_follows_new_size() {
    let mut canvas = TestCanvasBuilder::new().build();

    canvas.press(220, 60);
    canvas.drag_to(260, 60, ModifierState::empty());
    canvas.release(260, 60);
    canvas.allocate();

    assert_eq!(canvas.layout.current_size(), Size::new(240, 100));
    assert_eq!(canvas.layout.rects().east.x, 256);
}

#[test]
fn test_press_on_handle_keeps_existing_child_selection() {
    let mut canvas = TestCanvasBuilder::new()
        .with_widget("label1", design_canvas::Rect::new(10, 10, 40, 20), Default::default())
        .build();
    let label = canvas.widget(0);
    canvas.host.set_selection(label, true);

    canvas.press(220, 60);
    assert_eq!(canvas.host.selection(), vec![label]);
}
