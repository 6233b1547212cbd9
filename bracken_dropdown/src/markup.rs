// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Markup projection: the rendered surfaces as a pure function of state.
//!
//! The widget never mutates markup in place. After any operation, hosts call
//! [`Markup::project`] and reconcile the result against whatever they render
//! (DOM nodes, terminal cells, retained scene nodes). Because the projection
//! is recomputed from [`Dropdown`](crate::Dropdown) state alone, the rendered
//! surfaces cannot drift from the selection or visibility state, no matter
//! how many code paths mutate the widget.
//!
//! The structural contract: fixed class names from [`class`], a `value`
//! payload on every entry (the host's data-attribute), an `open` marker on
//! the list while shown, and a `selected` marker on exactly one entry.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;

use crate::Dropdown;

/// Structural class names and marker classes for host integration.
///
/// These cover behavior wiring only; visual styling is the host's concern.
pub mod class {
    /// Root surface; focusable.
    pub const CONTAINER: &str = "bracken-dropdown";
    /// Current-selection label surface.
    pub const LABEL: &str = "bracken-dropdown__label";
    /// Options-list surface.
    pub const OPTIONS: &str = "bracken-dropdown__options";
    /// One option entry.
    pub const OPTION: &str = "bracken-dropdown__option";
    /// Marker on the options list while it is shown.
    pub const OPEN: &str = "open";
    /// Marker on the selected entry.
    pub const SELECTED: &str = "selected";
}

/// The focusable root surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainerSurface {
    /// Structural class, always [`class::CONTAINER`].
    pub class: &'static str,
    /// The root participates in focus traversal.
    pub focusable: bool,
    /// Whether the widget currently has focus.
    pub focused: bool,
}

/// The current-selection label surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelSurface {
    /// Structural class, always [`class::LABEL`].
    pub class: &'static str,
    /// Label of the selected option.
    pub text: String,
}

/// The options-list surface.
#[derive(Clone, Debug, PartialEq)]
pub struct ListSurface {
    /// Structural class, always [`class::OPTIONS`].
    pub class: &'static str,
    /// Whether the [`class::OPEN`] marker is present.
    pub open: bool,
    /// One surface per option, in source order.
    pub entries: Vec<EntrySurface>,
}

/// One rendered option entry.
#[derive(Clone, Debug, PartialEq)]
pub struct EntrySurface {
    /// Structural class, always [`class::OPTION`].
    pub class: &'static str,
    /// The option's value; hosts expose it as a data-attribute for lookup.
    pub value: String,
    /// Display text.
    pub label: String,
    /// Whether the [`class::SELECTED`] marker is present.
    pub selected: bool,
    /// Viewport-local rectangle from the widget's [`ListViewport`].
    ///
    /// [`ListViewport`]: crate::ListViewport
    pub rect: Rect,
}

/// A full projection of the widget's rendered surfaces.
#[derive(Clone, Debug, PartialEq)]
pub struct Markup {
    /// Root surface.
    pub container: ContainerSurface,
    /// Label surface.
    pub label: LabelSurface,
    /// Options-list surface with its entries.
    pub list: ListSurface,
}

impl Markup {
    /// Projects the widget state into surfaces.
    #[must_use]
    pub fn project(dropdown: &Dropdown) -> Self {
        let selected = dropdown.selected_index();
        let entries = dropdown
            .choices()
            .choices()
            .iter()
            .enumerate()
            .map(|(index, choice)| EntrySurface {
                class: class::OPTION,
                value: String::from(choice.value()),
                label: String::from(choice.label()),
                selected: index == selected,
                rect: dropdown.viewport().entry_rect(index),
            })
            .collect();

        Self {
            container: ContainerSurface {
                class: class::CONTAINER,
                focusable: true,
                focused: dropdown.is_focused(),
            },
            label: LabelSurface {
                class: class::LABEL,
                text: String::from(dropdown.selected_option().label()),
            },
            list: ListSurface {
                class: class::OPTIONS,
                open: dropdown.is_open(),
                entries,
            },
        }
    }
}
