// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted walkthrough of the headless menu controller.
//!
//! Drives a nested menu through keyboard navigation, a safe-triangle hover
//! sequence, and a leaf activation, dumping the frame after each step.
//!
//! Run:
//! - `cargo run -p trellis_demos --example menu_walkthrough`

use kurbo::{Point, Rect};
use trellis_menu::{Effect, Key, MenuConfig, MenuController, MenuFrame, RowState};
use trellis_tree::MenuItem;

fn items() -> Vec<MenuItem<u32>> {
    vec![
        MenuItem::heading(90, "Layer"),
        MenuItem::new(1).with_label("Rename"),
        MenuItem::new(2).with_label("Duplicate").with_badge("⌘D"),
        MenuItem::divider(91),
        MenuItem::new(3).with_label("Export as").with_children(vec![
            MenuItem::new(31).with_label("PNG"),
            MenuItem::new(32).with_label("SVG"),
            MenuItem::new(33).with_label("PDF").disabled(),
        ]),
        MenuItem::new(4).with_label("Arrange").with_children(vec![
            MenuItem::new(41).with_label("Bring to front"),
            MenuItem::new(42).with_label("Send to back"),
        ]),
    ]
}

fn dump(frame: &MenuFrame<'_, u32>) {
    for panel in &frame.panels {
        println!(
            "  panel depth={} origin=({:.0}, {:.0}) side={:?} z={}",
            panel.depth, panel.origin.x, panel.origin.y, panel.side, panel.z_index
        );
        for row in &panel.rows {
            let text = row
                .item
                .heading
                .as_deref()
                .or(row.item.label.as_deref())
                .unwrap_or("────────");
            let marker = match row.state {
                RowState::Focused => '>',
                RowState::Hovered => '~',
                RowState::Pressed => 'v',
                RowState::Default => ' ',
            };
            println!(
                "    {marker} {text:<16} role={:?} tabindex={} expanded={:?}",
                row.role.map(|r| r.as_aria()),
                row.tab_index,
                row.aria_expanded,
            );
        }
    }
}

fn report(label: &str, effects: &[Effect<u32>], menu: &mut MenuController<u32>) {
    println!("{label}: effects={effects:?} path={:?}", menu.expansion_path());
    dump(&menu.render());
}

fn main() {
    let mut menu = MenuController::new(
        MenuConfig::new(items())
            .at_point(Point::new(120.0, 160.0))
            .with_title("Layer actions"),
    );

    // Measured row rectangles for the two submenu parents, as a host would
    // report them after layout.
    menu.set_row_rect(3, Rect::new(120.0, 250.0, 340.0, 282.0));
    menu.set_row_rect(4, Rect::new(120.0, 282.0, 340.0, 314.0));

    println!("initial frame:");
    dump(&menu.render());

    // Keyboard: walk down to "Export as" and open it.
    for key in [Key::ArrowDown, Key::ArrowDown] {
        let effects = menu.on_key(key);
        report("ArrowDown", &effects, &mut menu);
    }
    let effects = menu.on_key(Key::ArrowRight);
    report("ArrowRight", &effects, &mut menu);

    // Tell the controller where the submenu panel landed, then hover the
    // "Arrange" sibling while travelling toward the open panel: the switch
    // is deferred until the debounce deadline.
    menu.set_panel_rect(1, Rect::new(344.0, 250.0, 564.0, 360.0));
    menu.on_pointer_move(Point::new(200.0, 260.0), 1_000);
    menu.on_pointer_move(Point::new(240.0, 266.0), 1_016);
    let effects = menu.on_hover(4, 1_016);
    report("hover Arrange (aimed at panel)", &effects, &mut menu);
    println!("  pending switch deadline: {:?}", menu.next_deadline());

    let effects = menu.poll(1_016 + 300);
    report("debounce elapsed", &effects, &mut menu);

    // Activate a leaf: the controller reports it and asks to close.
    let effects = menu.on_activate(41);
    println!("activate 'Bring to front': effects={effects:?}");
}
