// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driving a dropdown with synthetic keyboard and pointer events.
//!
//! This example shows how a host wires the widget to its own event source:
//! - `bracken_choices` for the option model read from a wrapped control,
//! - `bracken_dropdown` for dispatch and the projected markup,
//! - pointer clicks resolved through the viewport's hit mapping.
//!
//! Run:
//! - `cargo run -p bracken_demos --example dropdown_walkthrough`

use bracken_choices::{ChoiceList, ChoiceSpec, SelectionChange};
use bracken_dropdown::{Dropdown, Key, KeyOutcome, ListMetrics, Markup, Modifiers};
use kurbo::Point;

/// Stand-in for the hidden native control the host keeps for submission.
#[derive(Debug)]
struct NativeControl {
    values: Vec<&'static str>,
    selected: usize,
}

impl NativeControl {
    /// Mirror a reported change, as a real host would after every event.
    fn apply(&mut self, change: SelectionChange) {
        self.selected = change.selected;
    }
}

fn print_state(step: &str, widget: &Dropdown, native: &NativeControl) {
    let markup = Markup::project(widget);
    println!(
        "{step:<28} label={:<8} open={:<5} native={}",
        markup.label.text,
        markup.list.open,
        native.values[native.selected],
    );
}

fn main() {
    let choices = ChoiceList::new([
        ChoiceSpec::selected("ash", "Ash"),
        ChoiceSpec::new("beech", "Beech"),
        ChoiceSpec::new("birch", "Birch"),
        ChoiceSpec::new("cedar", "Cedar"),
        ChoiceSpec::new("chestnut", "Chestnut"),
        ChoiceSpec::new("elm", "Elm"),
    ])
    .unwrap();

    let mut native = NativeControl {
        values: vec!["ash", "beech", "birch", "cedar", "chestnut", "elm"],
        selected: 0,
    };

    // Rows of 20 units, a window three rows tall, 120 units wide.
    let mut widget = Dropdown::new(choices, ListMetrics::new(20.0, 60.0, 120.0));
    print_state("constructed", &widget, &native);

    // Space opens the list.
    widget.on_key(Key::Space, Modifiers::empty(), 0);
    print_state("space", &widget, &native);

    // Type-ahead: "ce" within the window lands on Cedar.
    for (c, at) in [('c', 100), ('e', 300)] {
        if let KeyOutcome::Selected(change) =
            widget.on_key(Key::Char(c), Modifiers::empty(), at)
        {
            native.apply(change);
        }
    }
    print_state("typed \"ce\"", &widget, &native);

    // After a pause, "e" starts a fresh term: Elm.
    if let KeyOutcome::Selected(change) =
        widget.on_key(Key::Char('e'), Modifiers::empty(), 1_000)
    {
        native.apply(change);
    }
    print_state("typed \"e\" after pause", &widget, &native);

    // Arrow up steps back to Chestnut; the viewport follows.
    if let KeyOutcome::Selected(change) =
        widget.on_key(Key::Up, Modifiers::empty(), 1_100)
    {
        native.apply(change);
    }
    print_state("arrow up", &widget, &native);
    println!(
        "{:<28} scroll={} visible={:?}",
        "",
        widget.viewport().scroll_offset(),
        widget.viewport().visible_range(),
    );

    // A pointer click inside the list: resolve the point to an entry, then
    // select it. Clicking always closes the list.
    let click = Point::new(30.0, 10.0);
    if let Some(index) = widget.viewport().entry_at(click) {
        if let Some(change) = widget.on_entry_click(index) {
            native.apply(change);
        }
    }
    print_state("click first visible row", &widget, &native);

    // Losing focus always closes.
    widget.on_label_click();
    widget.on_blur();
    print_state("blur", &widget, &native);
}
