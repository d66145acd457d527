// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page sizing policies.
//!
//! A [`PageLayout`] decides how large each page is for a given viewport and
//! which page a resize should keep anchored. The pager consults it for every
//! frame, content-size, and offset computation, so a layout fully controls
//! the strip's geometry.

use kurbo::Size;

/// Smallest page width [`DualPageLayout`] will produce by default.
pub const DEFAULT_MIN_PAGE_WIDTH: f64 = 320.0;

/// Policy mapping a viewport size onto a page size.
pub trait PageLayout {
    /// Size of every page when the viewport is `viewport`.
    ///
    /// Defaults to one page per viewport.
    fn page_size(&self, viewport: Size) -> Size {
        viewport
    }

    /// Page to keep aligned with the viewport's leading edge after a resize.
    ///
    /// `previous` is the first page that was visible before the resize and
    /// `viewport` is the new size. Layouts that group pages into spreads can
    /// snap to the start of the spread here.
    fn realign_index(&self, previous: usize, viewport: Size) -> usize {
        let _ = viewport;
        previous
    }
}

/// One page fills the whole viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FullPageLayout;

impl PageLayout for FullPageLayout {}

/// Shows two pages side by side once the viewport is wide enough.
///
/// Below `2 * min_page_width` the layout falls back to one page per viewport.
/// In dual mode a resize keeps the spread anchored on its even page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualPageLayout {
    min_page_width: f64,
}

impl DualPageLayout {
    /// Creates a layout that splits the viewport once each half is at least
    /// `min_page_width` wide.
    #[must_use]
    pub fn new(min_page_width: f64) -> Self {
        Self {
            min_page_width: min_page_width.max(0.0),
        }
    }

    /// Minimum width of a page in dual mode.
    #[must_use]
    pub const fn min_page_width(&self) -> f64 {
        self.min_page_width
    }

    /// Returns `true` if `viewport` is wide enough for two pages.
    #[must_use]
    pub fn is_dual(&self, viewport: Size) -> bool {
        viewport.width >= self.min_page_width * 2.0
    }
}

impl Default for DualPageLayout {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PAGE_WIDTH)
    }
}

impl PageLayout for DualPageLayout {
    fn page_size(&self, viewport: Size) -> Size {
        if self.is_dual(viewport) {
            Size::new(viewport.width / 2.0, viewport.height)
        } else {
            viewport
        }
    }

    fn realign_index(&self, previous: usize, viewport: Size) -> usize {
        if self.is_dual(viewport) {
            previous - previous % 2
        } else {
            previous
        }
    }
}
