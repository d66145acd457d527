// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-supplied data source for a [`Pager`](crate::Pager).

use crate::ContentUnit;

/// Supplies page content and receives page-change notifications.
///
/// The notification hooks are optional and default to doing nothing. They
/// only receive the delegate itself, so they cannot call back into the pager
/// while an update pass is running; hosts that want to react by reloading do
/// so once the pager call returns.
pub trait PagerDelegate {
    /// Content type stored in each materialized page.
    type Content: ContentUnit;

    /// Number of pages.
    ///
    /// Must stay equal to the count seen by the last
    /// [`Pager::reload`](crate::Pager::reload) until the next reload.
    fn page_count(&self) -> usize;

    /// Creates the content for page `index`.
    ///
    /// Only called for `index < page_count()`. The same index is requested
    /// again only after its previous content has been dematerialized.
    fn content_at(&mut self, index: usize) -> Self::Content;

    /// The first visible page changed to `index`.
    ///
    /// Edge-triggered: never fires twice in a row with the same index, and
    /// always before any progress update caused by the same event.
    fn page_index_changed(&mut self, index: usize) {
        let _ = index;
    }

    /// The strip scrolled; `progress` is the horizontal scroll fraction.
    ///
    /// Fires on every scroll sample. The value is not clamped and leaves
    /// `0.0..=1.0` during overscroll.
    fn scroll_progress_updated(&mut self, progress: f64) {
        let _ = progress;
    }
}
