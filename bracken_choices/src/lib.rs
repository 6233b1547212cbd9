// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bracken Choices: an ordered option-list model with a single-selection invariant.
//!
//! This crate models the option set of a dropdown ("select") control as an
//! ordered, fixed-at-construction list of [`Choice`] records plus a single
//! selected index. Exactly one option is selected at all times; the invariant
//! is structural rather than a convention, because selection is stored as one
//! index instead of a mutable flag on every record.
//!
//! All mutation flows through the `select_*` methods, and every successful
//! mutation reports a [`SelectionChange`] that hosts mirror onto whatever
//! concrete control they wrap (for example, a hidden native form element that
//! must stay in sync for submission).
//!
//! ## Minimal example
//!
//! ```rust
//! use bracken_choices::{ChoiceList, ChoiceSpec};
//!
//! let mut choices = ChoiceList::new([
//!     ChoiceSpec::selected("1", "One"),
//!     ChoiceSpec::new("2", "Two"),
//! ])
//! .unwrap();
//!
//! assert_eq!(choices.selected().label(), "One");
//!
//! let change = choices.select_value("2").unwrap();
//! assert_eq!(change.previous, 0);
//! assert_eq!(change.selected, 1);
//! assert_eq!(choices.selected().label(), "Two");
//! ```
//!
//! Navigation to a neighboring option does not wrap; at either end it is a
//! silent no-op reported as `None`:
//!
//! ```rust
//! use bracken_choices::{ChoiceList, ChoiceSpec};
//!
//! let mut choices = ChoiceList::new([
//!     ChoiceSpec::selected("a", "Apple"),
//!     ChoiceSpec::new("b", "Banana"),
//! ])
//! .unwrap();
//!
//! assert!(choices.select_prev().is_none());
//! assert!(choices.select_next().is_some());
//! assert!(choices.select_next().is_none());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;

/// One selectable option: a stable `value` identifier and a display `label`.
///
/// Choices are immutable once the list is built; selection state lives on the
/// [`ChoiceList`], not on the individual record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Choice {
    value: String,
    label: String,
}

impl Choice {
    /// The stable identifier used for lookup and host-side form submission.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The display string shown in the rendered list and the label surface.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Construction-time description of one option, mirroring a native option's
/// `value`, `label`, and `selected` attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceSpec {
    /// Stable identifier; should be unique across the list. When duplicates
    /// occur, value lookup resolves to the first occurrence.
    pub value: String,
    /// Display string.
    pub label: String,
    /// Whether this option is marked selected in the source control.
    pub selected: bool,
}

impl ChoiceSpec {
    /// Creates an unselected spec.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            selected: false,
        }
    }

    /// Creates a spec marked as initially selected.
    pub fn selected(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            selected: true,
            ..Self::new(value, label)
        }
    }
}

/// Reported by every successful selection mutation.
///
/// `previous` and `selected` are indices into the list. Hosts that wrap a
/// concrete control apply the change to it (clear the previous option, mark
/// the new one) before handling the next event, so that both representations
/// agree between operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SelectionChange {
    /// Index that was selected before the mutation.
    pub previous: usize,
    /// Index that is selected now.
    pub selected: usize,
}

impl SelectionChange {
    /// Returns `true` if the mutation actually moved the selection.
    ///
    /// Re-selecting the current option succeeds but reports
    /// `previous == selected`.
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.previous != self.selected
    }
}

/// Error constructing a [`ChoiceList`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChoicesError {
    /// The source control contained no options. A list with nothing to select
    /// has no valid initial selection, so construction fails.
    Empty,
}

impl fmt::Display for ChoicesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "choice list must contain at least one option"),
        }
    }
}

impl core::error::Error for ChoicesError {}

/// Error from [`ChoiceList::select_value`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectError {
    /// No option carries the requested value. The list is left untouched.
    UnknownValue,
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownValue => write!(f, "no option with the requested value"),
        }
    }
}

impl core::error::Error for SelectError {}

/// An ordered option list with exactly one selected entry.
///
/// The set of options is fixed at construction; adding or removing options
/// afterwards is not supported. Value lookup uses a first-occurrence map, so
/// duplicate values resolve to the earliest matching option.
#[derive(Clone, Debug)]
pub struct ChoiceList {
    choices: Vec<Choice>,
    selected: usize,
    by_value: HashMap<String, usize>,
}

impl ChoiceList {
    /// Builds a list from construction specs, in source order.
    ///
    /// Initial selection is the first spec marked `selected`; when none is
    /// marked, index 0 is selected. Zero specs is an error.
    pub fn new<I>(specs: I) -> Result<Self, ChoicesError>
    where
        I: IntoIterator<Item = ChoiceSpec>,
    {
        let mut choices = Vec::new();
        let mut by_value = HashMap::new();
        let mut selected = None;

        for spec in specs {
            let index = choices.len();
            if spec.selected && selected.is_none() {
                selected = Some(index);
            }
            by_value.entry(spec.value.clone()).or_insert(index);
            choices.push(Choice {
                value: spec.value,
                label: spec.label,
            });
        }

        if choices.is_empty() {
            return Err(ChoicesError::Empty);
        }

        Ok(Self {
            choices,
            selected: selected.unwrap_or(0),
            by_value,
        })
    }

    /// Number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// Always `false` for a constructed list; present for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// All options in source order.
    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// The option at `index`, if in bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Choice> {
        self.choices.get(index)
    }

    /// Index of the currently selected option.
    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    /// The currently selected option.
    #[must_use]
    pub fn selected(&self) -> &Choice {
        // `selected` is kept in bounds by construction and by every mutation.
        &self.choices[self.selected]
    }

    /// Resolves a value to its (first-occurrence) index without mutating.
    #[must_use]
    pub fn index_of_value(&self, value: &str) -> Option<usize> {
        self.by_value.get(value).copied()
    }

    /// Selects the option whose value equals `value`.
    ///
    /// This is the single mutation path; navigation and pointer selection in
    /// higher layers resolve to an index and funnel through the same internal
    /// transition. An unknown value fails with [`SelectError::UnknownValue`]
    /// and leaves the selection untouched.
    pub fn select_value(&mut self, value: &str) -> Result<SelectionChange, SelectError> {
        let index = self
            .index_of_value(value)
            .ok_or(SelectError::UnknownValue)?;
        Ok(self.transition(index))
    }

    /// Selects the option at `index`, or returns `None` when out of bounds.
    pub fn select_index(&mut self, index: usize) -> Option<SelectionChange> {
        if index >= self.choices.len() {
            return None;
        }
        Some(self.transition(index))
    }

    /// Selects the previous option, or `None` when already at the first.
    ///
    /// Navigation does not wrap.
    pub fn select_prev(&mut self) -> Option<SelectionChange> {
        let previous = self.selected.checked_sub(1)?;
        Some(self.transition(previous))
    }

    /// Selects the next option, or `None` when already at the last.
    ///
    /// Navigation does not wrap.
    pub fn select_next(&mut self) -> Option<SelectionChange> {
        let next = self.selected + 1;
        if next >= self.choices.len() {
            return None;
        }
        Some(self.transition(next))
    }

    fn transition(&mut self, index: usize) -> SelectionChange {
        let previous = self.selected;
        self.selected = index;
        SelectionChange {
            previous,
            selected: index,
        }
    }
}
