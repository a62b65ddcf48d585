//! Integration tests for dragging margins in margin edit mode.
//!
//! The fixture places `button1` at (100, 100) in container space, 60x40,
//! with margins top 0, bottom 10, left 10, right 10. The toplevel has
//! 200x140 of slack over its intrinsic size.

use crate::helpers::{TestCanvas, TestCanvasBuilder, assert_groups, assert_thawed};
use design_canvas::geometry::Rect;
use design_canvas::host::ProjectModel;
use design_canvas::host::memory::CommandRecord;
use design_canvas::types::{EdgeInsets, ModifierState, PointerMode, Property};
use design_canvas::Activity;

fn margin_canvas() -> TestCanvas {
    let mut canvas = TestCanvasBuilder::new()
        .with_toplevel_size(300, 200)
        .with_minimum_size(100, 60)
        .with_widget("button1", Rect::new(84, 84, 60, 40), EdgeInsets::new(0, 10, 10, 10))
        .build();
    let button = canvas.widget(0);
    canvas.enter_mode(PointerMode::MarginEdit, button);
    canvas
}

#[test]
fn test_drag_top_edge_with_snap() {
    let mut canvas = margin_canvas();
    let button = canvas.widget(0);

    canvas.press(130, 98);
    assert_eq!(canvas.layout.activity(), Activity::Margins);

    canvas.drag_to(130, 78, ModifierState::CONTROL);
    // 20 pixels of travel snap down to a multiple of 6
    assert_eq!(canvas.margins(button).top, 18);
    assert!(canvas.host.commands.is_empty(), "live edits must not hit the undo stack");

    canvas.release(130, 78);
    assert_groups(&canvas.host, &["Editing margins of button1"]);
    assert_eq!(canvas.host.property_writes(), vec![(button, Property::MarginTop(18))]);
    assert_eq!(canvas.layout.activity(), Activity::None);
    assert_thawed(&canvas.host);
}

#[test]
fn test_second_release_commits_nothing() {
    let mut canvas = margin_canvas();

    canvas.press(130, 98);
    canvas.drag_to(130, 78, ModifierState::empty());
    canvas.release(130, 78);
    let committed = canvas.host.commands.len();

    canvas.release(130, 78);
    assert_eq!(canvas.host.commands.len(), committed);
}

#[test]
fn test_drag_back_to_start_commits_nothing() {
    let mut canvas = margin_canvas();

    canvas.press(130, 98);
    canvas.drag_to(130, 70, ModifierState::empty());
    canvas.drag_to(130, 98, ModifierState::empty());
    canvas.release(130, 98);

    assert!(canvas.host.commands.is_empty());
}

#[test]
fn test_margin_is_clamped_to_available_room() {
    let mut canvas = margin_canvas();
    let button = canvas.widget(0);

    canvas.press(130, 98);
    canvas.drag_to(130, -500, ModifierState::empty());

    // 150 of vertical room minus the 10 already taken by the bottom margin
    assert_eq!(canvas.margins(button).top, 140);
}

#[test]
fn test_ceiling_holds_over_repeated_motion() {
    let mut canvas = margin_canvas();
    let button = canvas.widget(0);
    let max_height = canvas.layout.max_margins().height;
    assert_eq!(max_height, 150);

    canvas.press(130, 98);
    for _ in 0..4 {
        canvas.drag_to(130, -2000, ModifierState::empty());
        let m = canvas.margins(button);
        assert_eq!(m.top, 140);
        assert!(m.top + m.bottom <= max_height, "margins {:?} exceed {}", m, max_height);
    }
    assert_eq!(canvas.layout.max_margins().height, max_height);

    canvas.release(130, -2000);
    assert_eq!(canvas.host.property_writes(), vec![(button, Property::MarginTop(140))]);
}

#[test]
fn test_margin_never_goes_negative() {
    let mut canvas = margin_canvas();
    let button = canvas.widget(0);

    canvas.press(130, 98);
    canvas.drag_to(130, 300, ModifierState::empty());
    assert_eq!(canvas.margins(button).top, 0);
}

#[test]
fn test_shift_mirrors_onto_opposite_edge() {
    let mut canvas = margin_canvas();
    let button = canvas.widget(0);

    canvas.press(130, 138);
    canvas.drag_to(130, 152, ModifierState::SHIFT);

    let m = canvas.margins(button);
    assert_eq!((m.top, m.bottom), (24, 24));

    canvas.release(130, 152);
    assert_eq!(
        canvas.host.property_writes(),
        vec![
            (button, Property::MarginTop(24)),
            (button, Property::MarginBottom(24)),
        ]
    );
}

#[test]
fn test_corner_grab_moves_both_edges() {
    let mut canvas = margin_canvas();
    let button = canvas.widget(0);

    // Bottom-right corner of the element box
    canvas.press(158, 138);
    canvas.drag_to(170, 148, ModifierState::empty());

    let m = canvas.margins(button);
    assert_eq!((m.bottom, m.right), (20, 22));
    assert_eq!((m.top, m.left), (0, 10));
}

#[test]
fn test_commit_is_one_group_per_gesture() {
    let mut canvas = margin_canvas();

    canvas.press(158, 138);
    canvas.drag_to(170, 148, ModifierState::empty());
    canvas.release(170, 148);

    let begins = canvas
        .host
        .commands
        .iter()
        .filter(|c| matches!(c, CommandRecord::BeginGroup(_)))
        .count();
    let ends = canvas
        .host
        .commands
        .iter()
        .filter(|c| matches!(c, CommandRecord::EndGroup))
        .count();
    assert_eq!((begins, ends), (1, 1));
    assert_eq!(canvas.host.property_writes().len(), 2);
}

#[test]
fn test_failed_write_still_closes_group() {
    let mut canvas = margin_canvas();
    canvas.host.fail_writes = true;

    canvas.press(130, 98);
    canvas.drag_to(130, 78, ModifierState::empty());
    canvas.release(130, 78);

    assert_eq!(
        canvas.host.commands,
        vec![
            CommandRecord::BeginGroup("Editing margins of button1".to_string()),
            CommandRecord::EndGroup,
        ]
    );
}

#[test]
fn test_hover_shows_edge_cursor() {
    use design_canvas::host::CursorShape;

    let mut canvas = margin_canvas();

    canvas.hover(130, 98);
    assert_eq!(canvas.host.cursor, Some(CursorShape::VerticalDoubleArrow));

    canvas.hover(90, 120);
    assert_eq!(canvas.host.cursor, Some(CursorShape::HorizontalDoubleArrow));

    canvas.hover(158, 138);
    assert_eq!(canvas.host.cursor, Some(CursorShape::BottomRightCorner));
}

#[test]
fn test_press_outside_leaves_edit_mode() {
    let mut canvas = margin_canvas();

    canvas.press(40, 40);
    assert_eq!(canvas.layout.edit_selection(), None);
    assert_eq!(canvas.host.pointer_mode(), PointerMode::Select);
}
