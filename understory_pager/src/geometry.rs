// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page frames, page ranges, and viewport intersection helpers.

use core::ops::Range;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size};

use crate::config::RangeStrategy;

/// Geometry of a horizontal strip of equally-sized pages.
///
/// Page `i` occupies `[i * width, (i + 1) * width) × [0, height)` in content
/// coordinates. The geometry is a pure value: it is recomputed from the
/// current [`PageLayout`](crate::PageLayout) whenever the viewport changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    page_size: Size,
}

impl PageGeometry {
    /// Creates a geometry for pages of `page_size`.
    #[must_use]
    pub const fn new(page_size: Size) -> Self {
        Self { page_size }
    }

    /// Returns the size shared by every page.
    #[must_use]
    pub const fn page_size(&self) -> Size {
        self.page_size
    }

    /// Returns the frame of page `index` in content coordinates.
    ///
    /// No bounds clamping is applied; an index past the end of the strip
    /// yields a well-formed frame that simply lies outside the content.
    #[must_use]
    pub fn frame_for_index(&self, index: usize) -> Rect {
        let x = index as f64 * self.page_size.width;
        Rect::from_origin_size(Point::new(x, 0.0), self.page_size)
    }

    /// Returns the scrollable content size for `count` pages.
    ///
    /// The height follows the viewport rather than the page so that layouts
    /// with shorter pages still fill the surface vertically.
    #[must_use]
    pub fn content_size(&self, count: usize, viewport: Size) -> Size {
        let width = count as f64 * self.page_size.width;
        Size::new(width, viewport.height)
    }

    /// Computes the pages of a `count`-long strip that overlap `viewport`.
    #[must_use]
    pub fn visible_range(
        &self,
        count: usize,
        viewport: Rect,
        strategy: RangeStrategy,
    ) -> PageRange {
        match strategy {
            RangeStrategy::BruteForce => self.visible_range_brute_force(count, viewport),
            RangeStrategy::Analytic => self.visible_range_analytic(count, viewport),
        }
    }

    /// Tests every page frame against `viewport`.
    ///
    /// Linear in `count`; fine for the tens of pages a pager usually holds.
    #[must_use]
    pub fn visible_range_brute_force(&self, count: usize, viewport: Rect) -> PageRange {
        let mut hits = (0..count).filter(|&i| intersects(self.frame_for_index(i), viewport));
        let Some(first) = hits.next() else {
            return PageRange::EMPTY;
        };
        let last = hits.next_back().unwrap_or(first);
        PageRange::new(first, last + 1)
    }

    /// Derives the visible pages from `viewport.x0 / page_width` in constant time.
    ///
    /// Produces exactly the same range as [`Self::visible_range_brute_force`]:
    /// the estimate is nudged against the frame intersection test at both ends.
    #[must_use]
    pub fn visible_range_analytic(&self, count: usize, viewport: Rect) -> PageRange {
        let page = self.page_size;
        if count == 0 || is_degenerate(page) || is_degenerate(viewport.size()) {
            return PageRange::EMPTY;
        }
        // Pages all share the same vertical band.
        if viewport.y0 >= page.height || viewport.y1 <= 0.0 {
            return PageRange::EMPTY;
        }

        let last_index = count - 1;
        #[allow(
            clippy::cast_precision_loss,
            reason = "page counts are far below the f64 mantissa range"
        )]
        let max = last_index as f64;
        // Clamp in f64 so the casts below never see an out-of-range value.
        let first = (viewport.x0 / page.width).floor().clamp(0.0, max);
        let last = ((viewport.x1 / page.width).ceil() - 1.0).clamp(0.0, max);
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "both values are clamped to `0..=last_index` above"
        )]
        let (mut first, mut last) = (first as usize, last as usize);
        last = last.max(first);

        let hit = |i: usize| intersects(self.frame_for_index(i), viewport);

        // Division can round across a page boundary; settle both ends on the
        // exact intersection predicate.
        while first > 0 && hit(first - 1) {
            first -= 1;
        }
        while first < last && !hit(first) {
            first += 1;
        }
        if !hit(first) && first < last_index && hit(first + 1) {
            first += 1;
            last = last.max(first);
        }
        if !hit(first) {
            return PageRange::EMPTY;
        }
        while last < last_index && hit(last + 1) {
            last += 1;
        }
        while last > first && !hit(last) {
            last -= 1;
        }
        PageRange::new(first, last + 1)
    }
}

/// A dense, half-open range of page indices `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PageRange {
    /// First index in the range (inclusive).
    pub start: usize,
    /// One past the last index in the range (exclusive).
    pub end: usize,
}

impl PageRange {
    /// The empty range.
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    /// Creates the range `start..end`. An inverted range collapses to empty.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        if end <= start {
            Self::EMPTY
        } else {
            Self { start, end }
        }
    }

    /// Returns `true` if the range holds no indices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Number of indices in the range.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if `index` lies inside the range.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    /// First index, if any.
    #[must_use]
    pub const fn first(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.start)
        }
    }

    /// Last index, if any.
    #[must_use]
    pub const fn last(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.end - 1)
        }
    }

    /// Iterates the indices in ascending order.
    pub fn iter(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Widens the range by `distance` on each side, clamped to `0..count`.
    ///
    /// An empty range stays empty: with nothing on screen there is nothing to
    /// preload around.
    #[must_use]
    pub fn expanded(&self, distance: usize, count: usize) -> Self {
        if self.is_empty() || count == 0 {
            return Self::EMPTY;
        }
        let start = self.start.saturating_sub(distance);
        let end = self.end.saturating_add(distance).min(count);
        Self::new(start, end)
    }
}

impl IntoIterator for PageRange {
    type Item = usize;
    type IntoIter = Range<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Returns `true` if the rectangles share a region of positive area.
///
/// Rectangles that only touch along an edge do not intersect, so the page
/// just past a viewport's trailing edge is not counted as visible. A
/// zero-area rectangle intersects nothing.
#[must_use]
pub fn intersects(a: Rect, b: Rect) -> bool {
    !is_degenerate(a.size())
        && !is_degenerate(b.size())
        && a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}

/// Horizontal scroll progress: `offset_x / (content_width - viewport_width)`.
///
/// Returns `0.0` when the content exactly fits the viewport. The result is
/// not clamped; overscroll and bounce report values outside `0.0..=1.0`.
#[must_use]
pub fn scroll_progress(offset_x: f64, content_width: f64, viewport_width: f64) -> f64 {
    let max_offset = content_width - viewport_width;
    if max_offset == 0.0 {
        0.0
    } else {
        offset_x / max_offset
    }
}

/// Returns `true` if `size` has no area.
#[must_use]
pub fn is_degenerate(size: Size) -> bool {
    !(size.width > 0.0 && size.height > 0.0)
}
