// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events and dispatch outcomes.
//!
//! The widget does not talk to any concrete input backend. Hosts translate
//! their own key events into [`Key`] + [`Modifiers`] and feed them to
//! [`Dropdown::on_key`](crate::Dropdown::on_key), which answers with a
//! [`KeyOutcome`] describing exactly what happened.

use bracken_choices::SelectionChange;

/// Simplified key representation for dropdown dispatch.
///
/// Only the keys the widget distinguishes are named; everything printable
/// arrives as [`Key::Char`] and feeds the type-ahead search.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Toggles the options list.
    Space,
    /// Moves the selection to the previous option.
    Up,
    /// Moves the selection to the next option.
    Down,
    /// Closes the options list without changing the selection.
    Enter,
    /// Closes the options list without changing the selection.
    Escape,
    /// Any other printable key; accumulated into the type-ahead buffer.
    Char(char),
}

bitflags::bitflags! {
    /// Keyboard modifiers held during a key event.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift key. Does not affect dispatch; shifted characters arrive
        /// already uppercased in [`Key::Char`].
        const SHIFT = 0b0000_0001;
        /// Control key. Chords are left to the host and bypass type-ahead.
        const CTRL = 0b0000_0010;
        /// Alt key. Chords are left to the host and bypass type-ahead.
        const ALT = 0b0000_0100;
    }
}

/// What a key event did to the widget.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The options list visibility was toggled; `open` is the new state.
    Toggled {
        /// Whether the list is shown after the toggle.
        open: bool,
    },
    /// The selection moved; the host mirrors the change onto its control.
    Selected(SelectionChange),
    /// The options list was closed with the selection untouched.
    Closed,
    /// Nothing observable happened (boundary navigation, a type-ahead miss,
    /// a close request while already closed, or a host chord).
    Ignored,
}
