// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bracken Dropdown: a dropdown ("select") widget state machine.
//!
//! This crate models a custom dropdown that wraps a host-owned native control
//! (for example a hidden form element kept for submission). It is built from:
//!
//! - **Explicit state** ([`Dropdown`]): an option list with a single selected
//!   index (`bracken_choices`), a debounced type-ahead buffer
//!   (`bracken_typeahead`), a uniform-row [`ListViewport`], and `open` /
//!   `focused` booleans.
//! - **Input events** ([`Key`], [`Modifiers`]) dispatched by
//!   [`Dropdown::on_key`] in priority order: Space toggles the list, Up/Down
//!   move the selection without wrapping, Enter/Escape close, and printable
//!   characters feed a case-insensitive prefix search over option labels.
//!   Every event answers with a [`KeyOutcome`].
//! - **A pure projection** ([`Markup`]): the rendered surfaces (container,
//!   label, options list, entries) recomputed from state on demand, with
//!   fixed structural classes and `open`/`selected` markers, so markup can
//!   never drift from the widget state.
//!
//! The crate has no event loop, renderer, or timer. Hosts feed events with
//! their own millisecond timestamps and mirror each reported
//! [`SelectionChange`](bracken_choices::SelectionChange) onto the control
//! they wrap; the widget is the only writer of its own state.
//!
//! ## Minimal example
//!
//! ```rust
//! use bracken_choices::{ChoiceList, ChoiceSpec};
//! use bracken_dropdown::{Dropdown, Key, KeyOutcome, ListMetrics, Markup, Modifiers};
//!
//! let choices = ChoiceList::new([
//!     ChoiceSpec::selected("1", "One"),
//!     ChoiceSpec::new("2", "Two"),
//! ])
//! .unwrap();
//! let mut widget = Dropdown::new(choices, ListMetrics::new(20.0, 60.0, 120.0));
//!
//! // Space opens the list…
//! let outcome = widget.on_key(Key::Space, Modifiers::empty(), 0);
//! assert_eq!(outcome, KeyOutcome::Toggled { open: true });
//!
//! // …ArrowDown selects the next option…
//! widget.on_key(Key::Down, Modifiers::empty(), 100);
//! assert_eq!(widget.selected_option().label(), "Two");
//!
//! // …and the projected markup reflects the new state.
//! let markup = Markup::project(&widget);
//! assert_eq!(markup.label.text, "Two");
//! assert!(markup.list.open);
//! assert!(markup.list.entries[1].selected);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for
//!   floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod dropdown;
mod event;
mod markup;
mod viewport;

pub use dropdown::Dropdown;
pub use event::{Key, KeyOutcome, Modifiers};
pub use markup::{ContainerSurface, EntrySurface, LabelSurface, ListSurface, Markup, class};
pub use viewport::{ListMetrics, ListViewport};
