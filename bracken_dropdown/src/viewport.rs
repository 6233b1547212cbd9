// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A uniform-row 1D viewport over the options list.
//!
//! Rows share one fixed extent, so offsets are plain multiplications and the
//! visible range needs no prefix sums. The viewport owns the scroll offset,
//! answers visibility queries, scrolls an index into view with the
//! nearest-edge policy, and maps between entry indices and viewport-local
//! geometry for pointer handling.

use kurbo::{Point, Rect};

/// Geometry of the options list, in a caller-chosen coordinate space
/// (typically logical pixels).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ListMetrics {
    /// Extent of one option row along the scroll axis.
    pub row_extent: f64,
    /// Extent of the visible window along the scroll axis.
    pub viewport_extent: f64,
    /// Width of the list, used for entry rectangles and hit mapping.
    pub row_width: f64,
}

impl ListMetrics {
    /// Creates metrics, clamping finite negative values to zero.
    ///
    /// Extents are expected to be finite; NaNs and infinities are caught in
    /// debug builds so misuse does not go unnoticed.
    #[must_use]
    pub fn new(row_extent: f64, viewport_extent: f64, row_width: f64) -> Self {
        debug_assert!(
            row_extent.is_finite() && viewport_extent.is_finite() && row_width.is_finite(),
            "ListMetrics extents must be finite; got {row_extent:?}, {viewport_extent:?}, {row_width:?}"
        );
        Self {
            row_extent: row_extent.max(0.0),
            viewport_extent: viewport_extent.max(0.0),
            row_width: row_width.max(0.0),
        }
    }
}

/// Scroll state and geometry over a fixed number of uniform rows.
#[derive(Copy, Clone, Debug)]
pub struct ListViewport {
    len: usize,
    metrics: ListMetrics,
    scroll_offset: f64,
}

impl ListViewport {
    /// Creates a viewport over `len` rows with the given metrics, scrolled to
    /// the start.
    #[must_use]
    pub fn new(len: usize, metrics: ListMetrics) -> Self {
        Self {
            len,
            metrics: ListMetrics::new(metrics.row_extent, metrics.viewport_extent, metrics.row_width),
            scroll_offset: 0.0,
        }
    }

    /// Number of rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The list geometry.
    #[must_use]
    pub const fn metrics(&self) -> ListMetrics {
        self.metrics
    }

    /// The current scroll offset from the start of the content.
    #[must_use]
    pub const fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Total extent of all rows.
    #[must_use]
    pub fn content_extent(&self) -> f64 {
        self.len as f64 * self.metrics.row_extent
    }

    /// Offset of the start of the given row from the start of the content.
    #[must_use]
    pub fn offset_of(&self, index: usize) -> f64 {
        index as f64 * self.metrics.row_extent
    }

    /// Sets the scroll offset, clamped so the viewport stays within content.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        let max_offset = (self.content_extent() - self.metrics.viewport_extent).max(0.0);
        self.scroll_offset = offset.clamp(0.0, max_offset);
    }

    /// Returns `true` if the row at `index` is entirely inside the viewport.
    #[must_use]
    pub fn is_fully_visible(&self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        let item_start = self.offset_of(index);
        let item_end = item_start + self.metrics.row_extent;
        let view_start = self.scroll_offset;
        let view_end = self.scroll_offset + self.metrics.viewport_extent;
        item_start >= view_start && item_end <= view_end
    }

    /// Scrolls just enough to make the row at `index` fully visible.
    ///
    /// Nearest-edge policy: a row already fully visible leaves the offset
    /// unchanged; a row before the viewport aligns its start with the
    /// viewport start; a row after it aligns its end with the viewport end.
    pub fn scroll_into_view(&mut self, index: usize) {
        if self.len == 0 {
            self.set_scroll_offset(0.0);
            return;
        }
        let index = index.min(self.len - 1);
        let item_start = self.offset_of(index);
        let item_end = item_start + self.metrics.row_extent;
        let view_start = self.scroll_offset;
        let view_end = view_start + self.metrics.viewport_extent;

        if item_start >= view_start && item_end <= view_end {
            return;
        }
        if item_start < view_start {
            self.set_scroll_offset(item_start);
        } else {
            self.set_scroll_offset(item_end - self.metrics.viewport_extent);
        }
    }

    /// The `[start, end)` range of rows that overlap the viewport.
    #[must_use]
    pub fn visible_range(&self) -> core::ops::Range<usize> {
        let row = self.metrics.row_extent;
        if self.len == 0 || row <= 0.0 || self.metrics.viewport_extent <= 0.0 {
            return 0..0;
        }
        let start_ratio = self.scroll_offset / row;
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "Ratio is non-negative and clamped to bounds after the cast"
        )]
        let start = (start_ratio as usize).min(self.len - 1);

        let view_end = self.scroll_offset + self.metrics.viewport_extent;
        let end_ratio = view_end / row;
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "Ratio is non-negative and clamped to bounds after the cast"
        )]
        let mut end = end_ratio as usize;
        // Round up when the viewport edge cuts into a row.
        if self.offset_of(end) < view_end {
            end += 1;
        }
        start..end.min(self.len)
    }

    /// The rectangle of the row at `index`, in viewport-local coordinates.
    ///
    /// Rows outside the viewport yield rectangles outside `0..viewport_extent`
    /// on the y axis; callers typically only realize [`visible_range`] rows.
    ///
    /// [`visible_range`]: Self::visible_range
    #[must_use]
    pub fn entry_rect(&self, index: usize) -> Rect {
        let y0 = self.offset_of(index) - self.scroll_offset;
        Rect::new(0.0, y0, self.metrics.row_width, y0 + self.metrics.row_extent)
    }

    /// Maps a viewport-local point to the row under it, if any.
    #[must_use]
    pub fn entry_at(&self, point: Point) -> Option<usize> {
        let row = self.metrics.row_extent;
        if row <= 0.0 {
            return None;
        }
        if point.x < 0.0 || point.x >= self.metrics.row_width {
            return None;
        }
        if point.y < 0.0 || point.y >= self.metrics.viewport_extent {
            return None;
        }
        let content_y = point.y + self.scroll_offset;
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "content_y is non-negative and the index is bounds-checked below"
        )]
        let index = (content_y / row) as usize;
        (index < self.len).then_some(index)
    }
}
