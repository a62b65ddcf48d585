//! Integration tests for attaching, detaching and reacting to project
//! notifications.

use crate::helpers::TestCanvasBuilder;
use design_canvas::geometry::{Rect, Size};
use design_canvas::host::{CursorShape, ProjectModel, Topic};
use design_canvas::types::{Align, EdgeInsets, PointerMode};
use design_canvas::{DesignLayout, LayoutConfig};

#[test]
fn test_attach_is_idempotent() {
    let mut canvas = TestCanvasBuilder::new().build();
    assert_eq!(canvas.host.subscriptions().len(), 3);

    canvas.layout.attach(&mut canvas.host);
    assert_eq!(canvas.host.subscriptions().len(), 3);
}

#[test]
fn test_rename_updates_tab_and_requests_relayout() {
    let mut canvas = TestCanvasBuilder::new().build();
    let resizes = canvas.host.resize_requests;

    canvas.host.rename(canvas.toplevel, "main_window");
    canvas.layout.on_name_changed(&mut canvas.host);

    let name = canvas.layout.name().unwrap();
    assert_eq!(name.text, "main_window");
    assert_eq!(name.size, Size::new(77, 14));
    assert_eq!(canvas.host.resize_requests, resizes + 1);

    canvas.allocate();
    assert_eq!(canvas.layout.layout_width(), 85);
}

#[test]
fn test_detach_releases_everything() {
    let mut canvas = TestCanvasBuilder::new().build();
    canvas.hover(220, 60);
    assert_eq!(canvas.host.cursor, Some(CursorShape::RightSide));

    canvas.layout.detach(&mut canvas.host);

    assert!(canvas.host.subscriptions().is_empty());
    assert_eq!(canvas.host.cursor, None);
    assert!(!canvas.layout.is_attached());
}

#[test]
fn test_reattach_after_detach() {
    let mut canvas = TestCanvasBuilder::new().build();
    canvas.layout.detach(&mut canvas.host);
    canvas.layout.attach(&mut canvas.host);

    assert_eq!(canvas.host.subscriptions().len(), 3);
    assert_eq!(canvas.layout.name().map(|n| n.text.as_str()), Some("window1"));
}

#[test]
fn test_removing_toplevel_drops_name_subscription() {
    let mut canvas = TestCanvasBuilder::new().build();
    let toplevel = canvas.toplevel;

    canvas.layout.child_removed(toplevel, &mut canvas.host);
    assert!(!canvas.host.subscriptions().contains(&Topic::NameChanged(toplevel)));
    assert_eq!(canvas.host.subscriptions().len(), 2);
}

#[test]
fn test_new_toplevel_is_subscribed_and_named() {
    let mut host = design_canvas::host::memory::MemoryHost::new();
    let mut layout = DesignLayout::new(LayoutConfig::default());
    layout.attach(&mut host);
    assert_eq!(host.subscriptions().len(), 2);
    assert!(layout.name().is_none());

    let toplevel = host.add_toplevel("dialog1", Size::new(120, 80));
    layout.child_added(&mut host);

    assert!(host.subscriptions().contains(&Topic::NameChanged(toplevel)));
    assert_eq!(layout.name().map(|n| n.text.as_str()), Some("dialog1"));
    assert!(host.draw_requests > 0);
}

#[test]
fn test_switching_edit_modes_retakes_snapshot() {
    let mut canvas = TestCanvasBuilder::new()
        .with_toplevel_size(300, 200)
        .with_widget("button1", Rect::new(84, 84, 60, 40), EdgeInsets::new(0, 10, 10, 10))
        .build();
    let button = canvas.widget(0);
    canvas.host.set_alignment(button, Align::Center, Align::Start);

    canvas.enter_mode(PointerMode::MarginEdit, button);
    assert_eq!(canvas.layout.snapshot().margins, EdgeInsets::new(0, 10, 10, 10));

    canvas.host.set_pointer_mode(PointerMode::AlignEdit);
    canvas.layout.on_pointer_mode_changed(&mut canvas.host);

    assert_eq!(canvas.layout.edit_selection(), Some(button));
    assert_eq!(canvas.layout.snapshot().valign, Align::Center);
    assert_eq!(canvas.layout.snapshot().halign, Align::Start);
}

#[test]
fn test_leaving_to_select_mode_clears_edit_selection() {
    let mut canvas = TestCanvasBuilder::new()
        .with_toplevel_size(300, 200)
        .with_widget("button1", Rect::new(84, 84, 60, 40), EdgeInsets::default())
        .build();
    let button = canvas.widget(0);
    canvas.enter_mode(PointerMode::MarginEdit, button);

    canvas.host.set_pointer_mode(PointerMode::Select);
    canvas.layout.on_pointer_mode_changed(&mut canvas.host);

    assert_eq!(canvas.layout.edit_selection(), None);
}

#[test]
fn test_removed_element_leaves_edit_mode() {
    let mut canvas = TestCanvasBuilder::new()
        .with_toplevel_size(300, 200)
        .with_widget("button1", Rect::new(84, 84, 60, 40), EdgeInsets::default())
        .build();
    let button = canvas.widget(0);
    canvas.enter_mode(PointerMode::MarginEdit, button);

    canvas.host.remove(button);
    canvas.layout.on_selection_changed(&mut canvas.host);

    assert_eq!(canvas.layout.edit_selection(), None);
    assert_eq!(canvas.host.pointer_mode(), PointerMode::Select);

    // A dead handle never becomes the edit selection again
    canvas
        .layout
        .set_edit_selection(PointerMode::MarginEdit, Some(button), &mut canvas.host);
    assert_eq!(canvas.layout.edit_selection(), None);
}

#[test]
fn test_selection_change_in_edit_mode_adopts_first_selected() {
    let mut canvas = TestCanvasBuilder::new()
        .with_toplevel_size(300, 200)
        .with_widget("button1", Rect::new(84, 84, 60, 40), EdgeInsets::default())
        .with_widget("label1", Rect::new(10, 10, 40, 20), EdgeInsets::default())
        .build();
    let label = canvas.widget(1);
    canvas.host.set_pointer_mode(PointerMode::MarginEdit);

    canvas.host.set_selection_list(&[label]);
    canvas.layout.on_selection_changed(&mut canvas.host);

    assert_eq!(canvas.layout.edit_selection(), Some(label));
}
