// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bracken Typeahead: a debounced prefix-search buffer.
//!
//! Selecting an option by typing the start of its label needs two pieces of
//! state: a rolling buffer of recently typed characters and a rule for when
//! that buffer goes stale. This crate provides both as a plain state machine.
//!
//! Time enters as caller-supplied millisecond timestamps rather than through a
//! scheduler: each [`TypeAhead::push`] compares the gap since the previous
//! keystroke against the inactivity window and resets the buffer first when
//! the gap is too large. For a single-threaded event loop this is equivalent
//! to the classic cancel-and-reschedule timer, and it keeps the machine fully
//! testable without one.
//!
//! Matching is a case-insensitive prefix test over labels in order; the first
//! label whose lowercase form starts with the buffer wins. The buffer starts
//! explicitly empty and keeps accumulating even while nothing matches, so a
//! later keystroke can never concatenate onto an "unset" sentinel.
//!
//! ## Minimal example
//!
//! ```rust
//! use bracken_typeahead::TypeAhead;
//!
//! let labels = ["Apple", "Banana", "Cherry"];
//! let mut search = TypeAhead::new();
//!
//! // "b" matches Banana.
//! search.push('b', 1_000);
//! assert_eq!(search.find_match(labels), Some(1));
//!
//! // "a" then "p" within the window accumulates to "ap": Apple.
//! search.clear();
//! search.push('a', 2_000);
//! search.push('p', 2_200);
//! assert_eq!(search.find_match(labels), Some(0));
//!
//! // A pause longer than the window starts a fresh term.
//! search.push('b', 3_000);
//! assert_eq!(search.find_match(labels), Some(1));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use smallvec::SmallVec;

/// Default inactivity window after which the buffer is considered stale.
pub const DEFAULT_WINDOW_MS: u64 = 500;

/// Rolling, debounced search term.
///
/// Characters are lowercased as they enter the buffer. The buffer is reset
/// when the gap between consecutive [`push`](Self::push) calls exceeds the
/// configured window; a gap equal to the window still accumulates.
#[derive(Clone, Debug)]
pub struct TypeAhead {
    buffer: SmallVec<[char; 16]>,
    last_input: Option<u64>,
    window_ms: u64,
}

impl TypeAhead {
    /// Creates a buffer with the default 500 ms window.
    #[must_use]
    pub fn new() -> Self {
        Self::with_window(DEFAULT_WINDOW_MS)
    }

    /// Creates a buffer with a custom inactivity window in milliseconds.
    #[must_use]
    pub fn with_window(window_ms: u64) -> Self {
        Self {
            buffer: SmallVec::new(),
            last_input: None,
            window_ms,
        }
    }

    /// The configured inactivity window in milliseconds.
    #[must_use]
    pub const fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Appends a keystroke at the given timestamp (milliseconds).
    ///
    /// When the time since the previous keystroke exceeds the window, the
    /// buffer is cleared before the new character is appended, so the
    /// character always starts a fresh term rather than extending a stale one.
    pub fn push(&mut self, c: char, timestamp_ms: u64) {
        if let Some(last) = self.last_input {
            if timestamp_ms.saturating_sub(last) > self.window_ms {
                self.buffer.clear();
            }
        }
        self.last_input = Some(timestamp_ms);
        self.buffer.extend(c.to_lowercase());
    }

    /// Finds the first label whose lowercase form starts with the buffer.
    ///
    /// Labels are scanned in iteration order. An empty buffer matches nothing.
    pub fn find_match<'a, I>(&self, labels: I) -> Option<usize>
    where
        I: IntoIterator<Item = &'a str>,
    {
        if self.buffer.is_empty() {
            return None;
        }
        labels
            .into_iter()
            .position(|label| self.label_matches(label))
    }

    fn label_matches(&self, label: &str) -> bool {
        let mut lowered = label.chars().flat_map(char::to_lowercase);
        self.buffer.iter().all(|&c| lowered.next() == Some(c))
    }

    /// Empties the buffer and forgets the last keystroke time.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.last_input = None;
    }

    /// Returns `true` if no characters are buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of buffered (lowercased) characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// The buffered characters, lowercased, oldest first.
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.buffer
    }
}

impl Default for TypeAhead {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELS: [&str; 3] = ["Apple", "Banana", "Cherry"];

    #[test]
    fn empty_buffer_matches_nothing() {
        let search = TypeAhead::new();
        assert!(search.is_empty());
        assert_eq!(search.find_match(LABELS), None);
    }

    #[test]
    fn single_character_prefix_match() {
        let mut search = TypeAhead::new();
        search.push('b', 0);
        assert_eq!(search.find_match(LABELS), Some(1));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let mut search = TypeAhead::new();
        search.push('B', 0);
        assert_eq!(search.chars(), ['b']);
        assert_eq!(search.find_match(LABELS), Some(1));
    }

    #[test]
    fn characters_within_window_accumulate() {
        let mut search = TypeAhead::new();
        search.push('a', 1_000);
        search.push('p', 1_400);
        assert_eq!(search.len(), 2);
        assert_eq!(search.find_match(LABELS), Some(0));
    }

    #[test]
    fn gap_equal_to_window_still_accumulates() {
        // Threshold comparisons are inclusive, as elsewhere in the stack.
        let mut search = TypeAhead::new();
        search.push('a', 1_000);
        search.push('p', 1_500);
        assert_eq!(search.len(), 2);
    }

    #[test]
    fn gap_beyond_window_starts_fresh_term() {
        let mut search = TypeAhead::new();
        search.push('a', 1_000);
        search.push('b', 1_600);
        assert_eq!(search.chars(), ['b']);
        assert_eq!(search.find_match(LABELS), Some(1));
    }

    #[test]
    fn unmatched_characters_still_accumulate() {
        let mut search = TypeAhead::new();
        search.push('z', 0);
        assert_eq!(search.find_match(LABELS), None);
        // The miss did not discard the buffer.
        search.push('z', 100);
        assert_eq!(search.len(), 2);
    }

    #[test]
    fn first_matching_label_wins() {
        let mut search = TypeAhead::new();
        search.push('b', 0);
        let labels = ["Berry", "Banana"];
        assert_eq!(search.find_match(labels), Some(0));
    }

    #[test]
    fn buffer_longer_than_label_does_not_match() {
        let mut search = TypeAhead::new();
        for (i, c) in "apples".chars().enumerate() {
            search.push(c, i as u64 * 10);
        }
        assert_eq!(search.find_match(["Apple"]), None);
    }

    #[test]
    fn clear_resets_buffer_and_clock() {
        let mut search = TypeAhead::new();
        search.push('a', 1_000);
        search.clear();
        assert!(search.is_empty());
        // After a clear, even an ancient timestamp starts cleanly.
        search.push('b', 0);
        assert_eq!(search.chars(), ['b']);
    }

    #[test]
    fn custom_window_is_honored() {
        let mut search = TypeAhead::with_window(50);
        search.push('a', 0);
        search.push('p', 40);
        assert_eq!(search.len(), 2);
        search.push('x', 200);
        assert_eq!(search.chars(), ['x']);
    }

    #[test]
    fn multi_char_lowercasing_expands_in_place() {
        // 'İ' lowercases to two scalar values; both land in the buffer.
        let mut search = TypeAhead::new();
        search.push('İ', 0);
        assert_eq!(search.len(), 2);
    }
}
