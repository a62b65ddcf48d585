//! Snapshot tests using the insta crate.
//!
//! Snapshots pin the serialized configuration format and the shape of the
//! recorded display lists. Both are consumed outside this crate: the config
//! file by users, the display list by host renderers.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::TestCanvasBuilder;
use design_canvas::geometry::Rect;
use design_canvas::types::{EdgeInsets, PointerMode};
use design_canvas::LayoutConfig;

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn snapshot_default_config() {
    insta::assert_json_snapshot!(LayoutConfig::default(), @r###"
    {
      "border_width": 0,
      "margin_step": 6,
      "drag_threshold": 8,
      "dimension_font_size": 8.0,
      "theme": {
        "background": {
          "red": 0.96,
          "green": 0.96,
          "blue": 0.96,
          "alpha": 1.0
        },
        "text": {
          "red": 0.18,
          "green": 0.2,
          "blue": 0.21,
          "alpha": 1.0
        },
        "selected_background": {
          "red": 0.29,
          "green": 0.56,
          "blue": 0.85,
          "alpha": 1.0
        },
        "selected_text": {
          "red": 1.0,
          "green": 1.0,
          "blue": 1.0,
          "alpha": 1.0
        }
      }
    }
    "###);
}

// ============================================================================
// Display Lists
// ============================================================================

#[test]
fn snapshot_idle_canvas_commands() {
    let canvas = TestCanvasBuilder::new().build();
    let list = canvas.layout.draw(&canvas.host);

    insta::assert_debug_snapshot!(list.kinds(), @r###"
    [
        "surface",
        "stroke",
        "fill",
        "text",
    ]
    "###);
}

#[test]
fn snapshot_margin_edit_readouts() {
    let mut canvas = TestCanvasBuilder::new()
        .with_toplevel_size(300, 200)
        .with_widget("button1", Rect::new(84, 84, 60, 40), EdgeInsets::new(0, 10, 10, 10))
        .build();
    let button = canvas.widget(0);
    canvas.enter_mode(PointerMode::MarginEdit, button);

    let list = canvas.layout.draw(&canvas.host);
    let texts: Vec<&str> = list.texts().map(|run| run.text.as_str()).collect();

    insta::assert_debug_snapshot!(texts, @r###"
    [
        "window1",
        "60",
        "10",
        "10",
        "40",
        "10",
    ]
    "###);
}
