// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dropdown widget state machine.

use bracken_choices::{Choice, ChoiceList, SelectError, SelectionChange};
use bracken_typeahead::TypeAhead;

use crate::event::{Key, KeyOutcome, Modifiers};
use crate::viewport::{ListMetrics, ListViewport};

/// A keyboard-navigable dropdown over a fixed option list.
///
/// The widget owns explicit state only: the option list with its single
/// selected index, the type-ahead buffer, the list viewport, and the `open`
/// and `focused` booleans. Rendered surfaces are derived from this state via
/// [`Markup::project`](crate::Markup::project), never mutated directly.
///
/// Every selection-changing path (value lookup, arrow navigation, type-ahead,
/// entry clicks) funnels through [`ChoiceList`]'s single mutation path and
/// then scrolls the new entry into view, so the uniqueness and sync
/// invariants cannot be bypassed. Hosts mirror each reported
/// [`SelectionChange`] onto the native control they wrap before handling the
/// next event.
#[derive(Clone, Debug)]
pub struct Dropdown {
    choices: ChoiceList,
    typeahead: TypeAhead,
    viewport: ListViewport,
    open: bool,
    focused: bool,
}

impl Dropdown {
    /// Creates a widget over `choices`, closed, with the initially selected
    /// entry scrolled into view.
    #[must_use]
    pub fn new(choices: ChoiceList, metrics: ListMetrics) -> Self {
        let mut viewport = ListViewport::new(choices.len(), metrics);
        viewport.scroll_into_view(choices.selected_index());
        Self {
            choices,
            typeahead: TypeAhead::new(),
            viewport,
            open: false,
            focused: false,
        }
    }

    /// The option list.
    #[must_use]
    pub const fn choices(&self) -> &ChoiceList {
        &self.choices
    }

    /// The list viewport.
    #[must_use]
    pub const fn viewport(&self) -> &ListViewport {
        &self.viewport
    }

    /// The type-ahead buffer.
    #[must_use]
    pub const fn typeahead(&self) -> &TypeAhead {
        &self.typeahead
    }

    /// The currently selected option.
    #[must_use]
    pub fn selected_option(&self) -> &Choice {
        self.choices.selected()
    }

    /// Index of the currently selected option.
    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.choices.selected_index()
    }

    /// Whether the options list is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the widget root has focus.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Selects the option with the given value.
    ///
    /// On success the new entry is scrolled into view with the nearest-edge
    /// policy. An unknown value fails fast and changes nothing; visibility is
    /// unaffected either way.
    pub fn select_value(&mut self, value: &str) -> Result<SelectionChange, SelectError> {
        let change = self.choices.select_value(value)?;
        self.viewport.scroll_into_view(change.selected);
        Ok(change)
    }

    /// Shows the options list. Returns `true` if it was hidden.
    pub fn open(&mut self) -> bool {
        let changed = !self.open;
        self.open = true;
        changed
    }

    /// Hides the options list. Returns `true` if it was shown.
    pub fn close(&mut self) -> bool {
        let changed = self.open;
        self.open = false;
        changed
    }

    /// Toggles the options list. Returns the new visibility.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// The widget root gained focus.
    pub fn on_focus(&mut self) {
        self.focused = true;
    }

    /// The widget root lost focus; the options list always closes.
    pub fn on_blur(&mut self) {
        self.focused = false;
        self.open = false;
    }

    /// A click on the label surface toggles the list; returns new visibility.
    pub fn on_label_click(&mut self) -> bool {
        self.toggle()
    }

    /// A click on the entry at `index` selects it and closes the list.
    ///
    /// Out-of-bounds indices change nothing and return `None`.
    pub fn on_entry_click(&mut self, index: usize) -> Option<SelectionChange> {
        let change = self.choices.select_index(index)?;
        self.viewport.scroll_into_view(change.selected);
        self.open = false;
        Some(change)
    }

    /// Dispatches a key event.
    ///
    /// Priority order: Space toggles visibility; Up/Down move the selection
    /// without wrapping; Enter and Escape close the list; anything printable
    /// feeds the type-ahead search, whose first prefix hit selects. CTRL and
    /// ALT chords belong to the host and are ignored wholesale.
    ///
    /// `timestamp_ms` is the host's event clock in milliseconds; it only
    /// drives the type-ahead inactivity window.
    pub fn on_key(&mut self, key: Key, modifiers: Modifiers, timestamp_ms: u64) -> KeyOutcome {
        match key {
            Key::Space => KeyOutcome::Toggled { open: self.toggle() },
            Key::Up => match self.choices.select_prev() {
                Some(change) => {
                    self.viewport.scroll_into_view(change.selected);
                    KeyOutcome::Selected(change)
                }
                None => KeyOutcome::Ignored,
            },
            Key::Down => match self.choices.select_next() {
                Some(change) => {
                    self.viewport.scroll_into_view(change.selected);
                    KeyOutcome::Selected(change)
                }
                None => KeyOutcome::Ignored,
            },
            Key::Enter | Key::Escape => {
                if self.close() {
                    KeyOutcome::Closed
                } else {
                    KeyOutcome::Ignored
                }
            }
            Key::Char(c) => {
                if modifiers.intersects(Modifiers::CTRL | Modifiers::ALT) {
                    return KeyOutcome::Ignored;
                }
                self.typeahead.push(c, timestamp_ms);
                let hit = self
                    .typeahead
                    .find_match(self.choices.choices().iter().map(|choice| choice.label()));
                match hit.and_then(|index| self.choices.select_index(index)) {
                    Some(change) => {
                        self.viewport.scroll_into_view(change.selected);
                        KeyOutcome::Selected(change)
                    }
                    // A miss keeps the buffer; a later keystroke may match.
                    None => KeyOutcome::Ignored,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bracken_choices::ChoiceSpec;

    const NONE: Modifiers = Modifiers::empty();

    fn fruit_widget() -> Dropdown {
        let choices = ChoiceList::new([
            ChoiceSpec::selected("a", "Apple"),
            ChoiceSpec::new("b", "Banana"),
            ChoiceSpec::new("c", "Cherry"),
        ])
        .unwrap();
        Dropdown::new(choices, ListMetrics::new(10.0, 30.0, 50.0))
    }

    #[test]
    fn two_option_control_end_to_end() {
        // The wrap-a-native-control scenario: construct, read the label,
        // select by value, observe both representations move.
        let choices = ChoiceList::new([
            ChoiceSpec::selected("1", "One"),
            ChoiceSpec::new("2", "Two"),
        ])
        .unwrap();
        let mut widget = Dropdown::new(choices, ListMetrics::new(10.0, 30.0, 50.0));
        assert_eq!(widget.selected_option().label(), "One");

        let change = widget.select_value("2").unwrap();
        assert_eq!((change.previous, change.selected), (0, 1));
        assert_eq!(widget.selected_option().label(), "Two");
        assert_eq!(widget.selected_index(), 1);
    }

    #[test]
    fn unknown_value_fails_without_side_effects() {
        let mut widget = fruit_widget();
        widget.open();
        let err = widget.select_value("zz").unwrap_err();
        assert_eq!(err, SelectError::UnknownValue);
        assert_eq!(widget.selected_option().value(), "a");
        assert!(widget.is_open());
    }

    #[test]
    fn space_toggles_and_double_toggle_returns_to_closed() {
        let mut widget = fruit_widget();
        assert_eq!(
            widget.on_key(Key::Space, NONE, 0),
            KeyOutcome::Toggled { open: true }
        );
        assert_eq!(
            widget.on_key(Key::Space, NONE, 10),
            KeyOutcome::Toggled { open: false }
        );
        assert!(!widget.is_open());
        // A third press leaves it open.
        widget.on_key(Key::Space, NONE, 20);
        assert!(widget.is_open());
    }

    #[test]
    fn arrows_move_without_wrapping() {
        let mut widget = fruit_widget();
        // At the first option, Up is a no-op.
        assert_eq!(widget.on_key(Key::Up, NONE, 0), KeyOutcome::Ignored);
        assert_eq!(widget.selected_index(), 0);

        widget.on_key(Key::Down, NONE, 10);
        widget.on_key(Key::Down, NONE, 20);
        assert_eq!(widget.selected_index(), 2);
        // At the last option, Down is a no-op.
        assert_eq!(widget.on_key(Key::Down, NONE, 30), KeyOutcome::Ignored);
        assert_eq!(widget.selected_index(), 2);
    }

    #[test]
    fn enter_and_escape_close_without_selecting() {
        let mut widget = fruit_widget();
        widget.open();
        assert_eq!(widget.on_key(Key::Enter, NONE, 0), KeyOutcome::Closed);
        assert_eq!(widget.selected_index(), 0);
        // Already closed: nothing to do.
        assert_eq!(widget.on_key(Key::Escape, NONE, 10), KeyOutcome::Ignored);
    }

    #[test]
    fn typeahead_selects_first_prefix_match() {
        let mut widget = fruit_widget();
        let outcome = widget.on_key(Key::Char('b'), NONE, 1_000);
        assert_eq!(
            outcome,
            KeyOutcome::Selected(SelectionChange {
                previous: 0,
                selected: 1
            })
        );
        assert_eq!(widget.selected_option().label(), "Banana");
    }

    #[test]
    fn typeahead_accumulates_within_the_window() {
        let mut widget = fruit_widget();
        widget.select_value("c").unwrap();
        widget.on_key(Key::Char('a'), NONE, 1_000);
        // "ap" within 500 ms matches Apple, not Banana.
        let outcome = widget.on_key(Key::Char('p'), NONE, 1_300);
        assert_eq!(
            outcome,
            KeyOutcome::Selected(SelectionChange {
                previous: 0,
                selected: 0
            })
        );
        assert_eq!(widget.selected_option().label(), "Apple");
    }

    #[test]
    fn typeahead_resets_after_inactivity() {
        let mut widget = fruit_widget();
        widget.on_key(Key::Char('a'), NONE, 1_000);
        // 600 ms later, "b" starts a fresh term and selects Banana, not a
        // (nonexistent) "ab" match.
        let outcome = widget.on_key(Key::Char('b'), NONE, 1_600);
        assert_eq!(
            outcome,
            KeyOutcome::Selected(SelectionChange {
                previous: 0,
                selected: 1
            })
        );
    }

    #[test]
    fn typeahead_miss_leaves_selection_and_keeps_buffer() {
        let mut widget = fruit_widget();
        assert_eq!(widget.on_key(Key::Char('z'), NONE, 0), KeyOutcome::Ignored);
        assert_eq!(widget.selected_index(), 0);
        assert_eq!(widget.typeahead().len(), 1);
    }

    #[test]
    fn host_chords_bypass_typeahead() {
        let mut widget = fruit_widget();
        let outcome = widget.on_key(Key::Char('b'), Modifiers::CTRL, 0);
        assert_eq!(outcome, KeyOutcome::Ignored);
        assert!(widget.typeahead().is_empty());
        assert_eq!(widget.selected_index(), 0);
    }

    #[test]
    fn shifted_characters_still_search() {
        let mut widget = fruit_widget();
        let outcome = widget.on_key(Key::Char('B'), Modifiers::SHIFT, 0);
        assert_eq!(
            outcome,
            KeyOutcome::Selected(SelectionChange {
                previous: 0,
                selected: 1
            })
        );
    }

    #[test]
    fn label_click_toggles() {
        let mut widget = fruit_widget();
        assert!(widget.on_label_click());
        assert!(widget.is_open());
        assert!(!widget.on_label_click());
        assert!(!widget.is_open());
    }

    #[test]
    fn entry_click_selects_and_closes() {
        let mut widget = fruit_widget();
        widget.open();
        let change = widget.on_entry_click(2).unwrap();
        assert_eq!((change.previous, change.selected), (0, 2));
        assert!(!widget.is_open());
        assert_eq!(widget.selected_option().value(), "c");
    }

    #[test]
    fn entry_click_out_of_bounds_is_inert() {
        let mut widget = fruit_widget();
        widget.open();
        assert!(widget.on_entry_click(7).is_none());
        assert!(widget.is_open());
        assert_eq!(widget.selected_index(), 0);
    }

    #[test]
    fn blur_always_closes() {
        let mut widget = fruit_widget();
        widget.on_focus();
        widget.open();
        widget.on_blur();
        assert!(!widget.is_open());
        assert!(!widget.is_focused());
    }

    #[test]
    fn selection_scrolls_nearest_edge_into_view() {
        // Six rows of 10 units in a 30-unit window.
        let choices = ChoiceList::new([
            ChoiceSpec::selected("1", "One"),
            ChoiceSpec::new("2", "Two"),
            ChoiceSpec::new("3", "Three"),
            ChoiceSpec::new("4", "Four"),
            ChoiceSpec::new("5", "Five"),
            ChoiceSpec::new("6", "Six"),
        ])
        .unwrap();
        let mut widget = Dropdown::new(choices, ListMetrics::new(10.0, 30.0, 50.0));

        widget.select_value("5").unwrap();
        // Row 4 aligned with the viewport end: rows 2..=4 visible.
        assert_eq!(widget.viewport().scroll_offset(), 20.0);
        assert!(widget.viewport().is_fully_visible(4));

        // Arrow navigation within the window does not move the viewport.
        widget.on_key(Key::Up, NONE, 0);
        assert_eq!(widget.viewport().scroll_offset(), 20.0);
    }

    #[test]
    fn construction_scrolls_initial_selection_into_view() {
        let choices = ChoiceList::new([
            ChoiceSpec::new("1", "One"),
            ChoiceSpec::new("2", "Two"),
            ChoiceSpec::new("3", "Three"),
            ChoiceSpec::new("4", "Four"),
            ChoiceSpec::selected("5", "Five"),
        ])
        .unwrap();
        let widget = Dropdown::new(choices, ListMetrics::new(10.0, 30.0, 50.0));
        assert!(widget.viewport().is_fully_visible(4));
        assert_eq!(widget.viewport().scroll_offset(), 20.0);
    }

    #[test]
    fn every_valid_mutation_keeps_exactly_one_selection() {
        let mut widget = fruit_widget();
        let steps: [&dyn Fn(&mut Dropdown); 4] = [
            &|w| {
                w.select_value("b").unwrap();
            },
            &|w| {
                w.on_key(Key::Down, NONE, 0);
            },
            &|w| {
                w.on_key(Key::Char('a'), NONE, 10_000);
            },
            &|w| {
                w.on_entry_click(2);
            },
        ];
        for step in steps {
            step(&mut widget);
            let index = widget.selected_index();
            assert!(index < widget.choices().len());
            assert_eq!(widget.selected_option().value(), {
                widget.choices().get(index).unwrap().value()
            });
        }
    }
}
