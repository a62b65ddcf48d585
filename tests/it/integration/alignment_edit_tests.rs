//! Integration tests for toggling alignment anchors in alignment edit mode.

use crate::helpers::{TestCanvas, TestCanvasBuilder, assert_groups};
use design_canvas::geometry::Rect;
use design_canvas::host::{ElementTree, Invalidation};
use design_canvas::types::{Align, EdgeInsets, Margins, PointerMode, Property};
use design_canvas::Activity;

fn align_canvas() -> TestCanvas {
    let mut canvas = TestCanvasBuilder::new()
        .with_toplevel_size(300, 200)
        .with_widget("button1", Rect::new(84, 84, 60, 40), EdgeInsets::new(0, 10, 10, 10))
        .build();
    let button = canvas.widget(0);
    canvas.enter_mode(PointerMode::AlignEdit, button);
    canvas
}

#[test]
fn test_top_anchor_toggles_valign() {
    let mut canvas = align_canvas();
    let button = canvas.widget(0);

    canvas.press(130, 98);
    assert_eq!(canvas.layout.activity(), Activity::Alignments);
    assert_eq!(canvas.host.valign(button), Align::End);
    assert_groups(&canvas.host, &["Editing alignments of button1"]);
    assert_eq!(canvas.host.property_writes(), vec![(button, Property::Valign(Align::End))]);
}

#[test]
fn test_second_click_restores_alignment() {
    let mut canvas = align_canvas();
    let button = canvas.widget(0);

    canvas.press(130, 98);
    canvas.release(130, 98);
    canvas.press(130, 98);
    canvas.release(130, 98);

    assert_eq!(canvas.host.valign(button), Align::Fill);
    assert_eq!(canvas.host.groups().len(), 2);
}

#[test]
fn test_corner_toggles_both_axes() {
    let mut canvas = align_canvas();
    let button = canvas.widget(0);

    // Bottom-left corner: end of the vertical axis, start of the horizontal
    canvas.press(102, 138);

    assert_eq!(canvas.host.valign(button), Align::Start);
    assert_eq!(canvas.host.halign(button), Align::End);
    assert_eq!(canvas.host.property_writes().len(), 2);
}

#[test]
fn test_release_clears_hovered_anchors() {
    let mut canvas = align_canvas();

    canvas.hover(130, 98);
    assert_eq!(canvas.layout.node_over(), Margins::TOP);

    canvas.press(130, 98);
    canvas.host.invalidations.clear();
    canvas.release(130, 98);

    assert_eq!(canvas.layout.node_over(), Margins::empty());
    assert_eq!(canvas.host.invalidations, vec![Invalidation::All]);
    assert_eq!(canvas.layout.activity(), Activity::None);
}

#[test]
fn test_hover_invalidates_only_anchor_regions() {
    let mut canvas = align_canvas();
    canvas.host.invalidations.clear();

    canvas.hover(130, 98);
    assert!(matches!(
        canvas.host.invalidations.as_slice(),
        [Invalidation::Region(region)] if !region.is_empty()
    ));

    // Same edge again: nothing changed, nothing to repaint
    canvas.host.invalidations.clear();
    canvas.hover(131, 98);
    assert!(canvas.host.invalidations.is_empty());
}

#[test]
fn test_pins_are_redrawn_for_the_new_alignment() {
    let mut canvas = align_canvas();
    let before = canvas.layout.draw(&canvas.host);

    canvas.press(130, 98);
    let after = canvas.layout.draw(&canvas.host);

    assert_eq!(before.len(), after.len());
    assert_ne!(before, after);
}
