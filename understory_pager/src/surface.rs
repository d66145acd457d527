// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scrollable surface a pager drives.
//!
//! [`ScrollSurface`] is the seam to the host toolkit's scroll view. The pager
//! reads the offset and viewport size from it, writes back the content size
//! and programmatic offsets, and asks it to insert and remove page content.
//! Scroll notifications flow the other way: the host forwards them to
//! [`Pager::on_scrolled`](crate::Pager::on_scrolled) and friends.
//!
//! [`Viewport`] is a headless implementation for tests, simulations, and
//! hosts that keep scroll state themselves.

use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;

use crate::ContentUnit;
use crate::geometry::intersects;

/// A 2D scrollable surface.
pub trait ScrollSurface {
    /// Top-left corner of the viewport in content coordinates.
    fn content_offset(&self) -> Point;

    /// Moves the viewport without animation.
    fn set_content_offset(&mut self, offset: Point);

    /// Size of the visible viewport.
    fn viewport_size(&self) -> Size;

    /// Resizes the visible viewport.
    fn set_viewport_size(&mut self, size: Size);

    /// Total scrollable content size.
    fn content_size(&self) -> Size;

    /// Sets the total scrollable content size.
    fn set_content_size(&mut self, size: Size);

    /// Scrolls the least distance needed to bring `rect` into view.
    ///
    /// When `animated` is `true` the surface may finish asynchronously; the
    /// host then reports completion through
    /// [`Pager::on_scroll_animation_finished`](crate::Pager::on_scroll_animation_finished).
    fn scroll_rect_to_visible(&mut self, rect: Rect, animated: bool);

    /// Inserts the content of page `index` into the surface.
    fn add_page<C: ContentUnit>(&mut self, index: usize, content: &mut C);

    /// Removes the content of page `index` from the surface.
    fn remove_page<C: ContentUnit>(&mut self, index: usize, content: &mut C);

    /// The viewport rectangle in content coordinates.
    fn visible_rect(&self) -> Rect {
        Rect::from_origin_size(self.content_offset(), self.viewport_size())
    }

    /// Returns `true` if `rect` overlaps the viewport with positive area.
    fn is_visible(&self, rect: Rect) -> bool {
        intersects(rect, self.visible_rect())
    }
}

/// A headless [`ScrollSurface`] that only records state.
///
/// Programmatic scrolls, animated or not, land immediately and are clamped
/// to the content. Inserted pages are tracked by index.
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    offset: Point,
    size: Size,
    content_size: Size,
    attached: SmallVec<[usize; 4]>,
}

impl Viewport {
    /// Creates a viewport of `size` scrolled to the origin.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Indices of the pages currently inserted, ascending.
    #[must_use]
    pub fn attached_pages(&self) -> &[usize] {
        &self.attached
    }

    /// Largest offset that keeps the viewport inside the content, per axis.
    #[must_use]
    pub fn max_offset(&self) -> Point {
        Point::new(
            (self.content_size.width - self.size.width).max(0.0),
            (self.content_size.height - self.size.height).max(0.0),
        )
    }
}

impl ScrollSurface for Viewport {
    fn content_offset(&self) -> Point {
        self.offset
    }

    fn set_content_offset(&mut self, offset: Point) {
        self.offset = offset;
    }

    fn viewport_size(&self) -> Size {
        self.size
    }

    fn set_viewport_size(&mut self, size: Size) {
        self.size = size;
    }

    fn content_size(&self) -> Size {
        self.content_size
    }

    fn set_content_size(&mut self, size: Size) {
        self.content_size = size;
    }

    fn scroll_rect_to_visible(&mut self, rect: Rect, _animated: bool) {
        let max = self.max_offset();
        let x = reveal(self.offset.x, self.size.width, rect.x0, rect.x1).clamp(0.0, max.x);
        let y = reveal(self.offset.y, self.size.height, rect.y0, rect.y1).clamp(0.0, max.y);
        self.offset = Point::new(x, y);
    }

    fn add_page<C: ContentUnit>(&mut self, index: usize, _content: &mut C) {
        if let Err(pos) = self.attached.binary_search(&index) {
            self.attached.insert(pos, index);
        }
    }

    fn remove_page<C: ContentUnit>(&mut self, index: usize, _content: &mut C) {
        if let Ok(pos) = self.attached.binary_search(&index) {
            self.attached.remove(pos);
        }
    }
}

/// Smallest move along one axis that brings `[start, end)` into a window of
/// `extent` starting at `offset`. Spans larger than the window align their
/// start.
fn reveal(offset: f64, extent: f64, start: f64, end: f64) -> f64 {
    if start < offset || end - start >= extent {
        start
    } else if end > offset + extent {
        end - extent
    } else {
        offset
    }
}
