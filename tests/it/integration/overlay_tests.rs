//! Integration tests for the recorded overlay of a laid out canvas.

use crate::helpers::TestCanvasBuilder;
use design_canvas::geometry::Rect;
use design_canvas::host::ProjectModel;
use design_canvas::render::{DrawCommand, Paint};
use design_canvas::types::{EdgeInsets, PointerMode};
use design_canvas::{Rgba, ThemeColors};

fn frame_paint(commands: &[DrawCommand]) -> Option<&Paint> {
    commands.iter().rev().find_map(|command| match command {
        DrawCommand::Stroke { paint, .. } => Some(paint),
        _ => None,
    })
}

#[test]
fn test_surface_is_placed_at_child_offset() {
    let canvas = TestCanvasBuilder::new().build();
    let list = canvas.layout.draw(&canvas.host);

    assert_eq!(
        list.commands().first(),
        Some(&DrawCommand::Surface {
            area: Rect::new(16, 16, 200, 100)
        })
    );
}

#[test]
fn test_frame_turns_active_when_toplevel_selected() {
    let mut canvas = TestCanvasBuilder::new().build();
    let palette = *canvas.layout.palette();

    let idle = canvas.layout.draw(&canvas.host);
    assert_eq!(frame_paint(idle.commands()), Some(&Paint::Solid(palette.frame[0])));

    canvas.host.set_selection(canvas.toplevel, true);
    let selected = canvas.layout.draw(&canvas.host);
    assert_eq!(frame_paint(selected.commands()), Some(&Paint::Solid(palette.frame_active[0])));
}

#[test]
fn test_name_fades_when_tab_is_too_narrow() {
    let canvas = TestCanvasBuilder::new().with_toplevel_size(30, 100).build();
    let list = canvas.layout.draw(&canvas.host);

    let name = list.texts().next().unwrap();
    assert_eq!(name.text, "window1");
    assert!(matches!(name.paint, Paint::Linear { .. }));
}

#[test]
fn test_name_is_solid_when_it_fits() {
    let canvas = TestCanvasBuilder::new().build();
    let list = canvas.layout.draw(&canvas.host);

    let name = list.texts().next().unwrap();
    assert!(matches!(name.paint, Paint::Solid(_)));
}

#[test]
fn test_elements_at_negative_positions_are_not_highlighted() {
    let mut canvas = TestCanvasBuilder::new()
        .with_widget("label1", Rect::new(-10, 5, 40, 20), EdgeInsets::default())
        .build();
    let label = canvas.widget(0);
    canvas.host.set_selection(label, true);

    let list = canvas.layout.draw(&canvas.host);
    // The frame still shows the toplevel as active
    assert_eq!(list.kinds(), vec!["surface", "stroke", "fill", "text"]);
}

#[test]
fn test_hidden_toplevel_draws_nothing() {
    let mut canvas = TestCanvasBuilder::new().build();
    canvas.host.set_visible(canvas.toplevel, false);

    assert!(canvas.layout.draw(&canvas.host).is_empty());
}

#[test]
fn test_zero_margins_draw_nodes_without_readouts() {
    let mut canvas = TestCanvasBuilder::new()
        .with_toplevel_size(300, 200)
        .with_widget("button1", Rect::new(84, 84, 60, 40), EdgeInsets::default())
        .build();
    let button = canvas.widget(0);
    canvas.enter_mode(PointerMode::MarginEdit, button);

    let list = canvas.layout.draw(&canvas.host);
    let texts: Vec<&str> = list.texts().map(|run| run.text.as_str()).collect();
    assert_eq!(texts, vec!["window1"]);
}

#[test]
fn test_theme_change_repaints_with_new_palette() {
    let mut canvas = TestCanvasBuilder::new().build();
    let draws = canvas.host.draw_requests;

    let dark = ThemeColors {
        background: Rgba::rgb(0.1, 0.1, 0.1),
        ..ThemeColors::default()
    };
    canvas.layout.set_theme(dark, &mut canvas.host);

    assert_eq!(canvas.host.draw_requests, draws + 1);
    // Dark backgrounds get a lighter frame
    assert!(canvas.layout.palette().frame[0].red > 0.1);
}

#[test]
fn test_tab_shows_toplevel_name() {
    let canvas = TestCanvasBuilder::new().with_name("dialog1").build();
    let list = canvas.layout.draw(&canvas.host);

    let texts: Vec<&str> = list.texts().map(|run| run.text.as_str()).collect();
    assert_eq!(texts, vec!["dialog1"]);
}
