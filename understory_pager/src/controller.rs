// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewport-driven controller tying surface, delegate, and pages together.

use kurbo::{Point, Rect, Size};

use crate::error::{self, ContractViolation};
use crate::geometry::{self, is_degenerate};
use crate::{
    FullPageLayout, PageGeometry, PageLayout, PageRange, PageSet, PagerConfig, PagerDelegate,
    ScrollSurface,
};

/// Which pages an update pass materializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateArea {
    /// Only pages that intersect the viewport. Cheap; run on every scroll sample.
    Visible,
    /// The visible pages plus the preload window around them. Run when
    /// scrolling settles or the page set is reloaded.
    Preload,
}

/// A horizontally paged container.
///
/// `Pager` owns the page slots, the delegate that fills them, the scroll
/// surface that shows them, and a [`PageLayout`] that sizes them. The host
/// forwards surface events to it:
///
/// - [`on_layout`](Self::on_layout) / [`on_size_changed`](Self::on_size_changed)
///   when the viewport is resized,
/// - [`on_scrolled`](Self::on_scrolled) on every scroll sample,
/// - [`on_scroll_settled`](Self::on_scroll_settled) when momentum stops,
/// - [`on_scroll_animation_finished`](Self::on_scroll_animation_finished) when
///   an animated [`scroll_to_index`](Self::scroll_to_index) completes.
///
/// Each event recomputes the visible range, materializes and dematerializes
/// pages accordingly, refreshes the content size, and reports page-index and
/// progress changes to the delegate.
///
/// Eviction always works against the preload window, even during visible-only
/// passes: a fast scroll never tears down a page that a settled pass would
/// immediately rebuild.
#[derive(Debug)]
pub struct Pager<D: PagerDelegate, S, L = FullPageLayout> {
    delegate: Option<D>,
    surface: S,
    layout: L,
    config: PagerConfig,
    pages: PageSet<D::Content>,
    reported_page_index: Option<usize>,
    pending_animated_scroll: bool,
}

impl<D: PagerDelegate, S: ScrollSurface> Pager<D, S, FullPageLayout> {
    /// Creates a pager over `surface` with one page per viewport and no delegate.
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self::with_layout(surface, FullPageLayout)
    }
}

impl<D: PagerDelegate, S: ScrollSurface, L: PageLayout> Pager<D, S, L> {
    /// Creates a pager over `surface` whose pages are sized by `layout`.
    #[must_use]
    pub fn with_layout(surface: S, layout: L) -> Self {
        Self {
            delegate: None,
            surface,
            layout,
            config: PagerConfig::default(),
            pages: PageSet::new(),
            reported_page_index: None,
            pending_animated_scroll: false,
        }
    }

    /// Replaces the configuration. Takes effect on the next update pass.
    #[must_use]
    pub fn with_config(mut self, config: PagerConfig) -> Self {
        self.config = config;
        self
    }

    /// Installs or removes the delegate.
    ///
    /// Installing a delegate, or removing one that was installed, reloads
    /// every page. Setting `None` over `None` does nothing.
    pub fn set_delegate(&mut self, delegate: Option<D>) {
        let changed = self.delegate.is_some() || delegate.is_some();
        self.delegate = delegate;
        if changed {
            self.reload();
        }
    }

    /// Removes and returns the delegate, reloading to an empty strip.
    pub fn take_delegate(&mut self) -> Option<D> {
        let delegate = self.delegate.take();
        if delegate.is_some() {
            self.reload();
        }
        delegate
    }

    /// The installed delegate.
    #[must_use]
    pub fn delegate(&self) -> Option<&D> {
        self.delegate.as_ref()
    }

    /// Mutable access to the installed delegate.
    ///
    /// If the delegate's page count changes, call [`reload`](Self::reload)
    /// before the next event; update passes treat a silent count change as a
    /// [`ContractViolation::CountMismatch`].
    pub fn delegate_mut(&mut self) -> Option<&mut D> {
        self.delegate.as_mut()
    }

    /// The scroll surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the scroll surface.
    ///
    /// Moving the offset here does not run an update pass; follow up with
    /// [`on_scrolled`](Self::on_scrolled) or [`on_scroll_settled`](Self::on_scroll_settled).
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The page layout.
    #[must_use]
    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// Mutable access to the page layout. Takes effect on the next update pass.
    pub fn layout_mut(&mut self) -> &mut L {
        &mut self.layout
    }

    /// The page slots.
    #[must_use]
    pub fn pages(&self) -> &PageSet<D::Content> {
        &self.pages
    }

    /// The current configuration.
    #[must_use]
    pub const fn config(&self) -> &PagerConfig {
        &self.config
    }

    /// Replaces the configuration. Takes effect on the next update pass.
    pub fn set_config(&mut self, config: PagerConfig) {
        self.config = config;
    }

    /// Number of off-screen pages kept on each side once scrolling settles.
    #[must_use]
    pub const fn preload_distance(&self) -> usize {
        self.config.preload_distance
    }

    /// Sets the preload distance. Takes effect on the next update pass.
    pub fn set_preload_distance(&mut self, preload_distance: usize) {
        self.config.preload_distance = preload_distance;
    }

    /// Size of every page for the current viewport, as decided by the layout.
    #[must_use]
    pub fn page_size(&self) -> Size {
        self.layout.page_size(self.surface.viewport_size())
    }

    /// Geometry of the strip for the current viewport.
    #[must_use]
    pub fn geometry(&self) -> PageGeometry {
        PageGeometry::new(self.page_size())
    }

    /// Frame of page `index` in content coordinates.
    #[must_use]
    pub fn frame_for_index(&self, index: usize) -> Rect {
        self.geometry().frame_for_index(index)
    }

    /// Pages whose frame overlaps the viewport.
    #[must_use]
    pub fn visible_range(&self) -> PageRange {
        self.geometry().visible_range(
            self.pages.len(),
            self.surface.visible_rect(),
            self.config.range_strategy,
        )
    }

    /// The visible range widened by the preload distance.
    #[must_use]
    pub fn preload_range(&self) -> PageRange {
        self.visible_range()
            .expanded(self.config.preload_distance, self.pages.len())
    }

    /// The current page: the first visible one, if any.
    #[must_use]
    pub fn page_index(&self) -> Option<usize> {
        self.visible_range().first()
    }

    /// The first visible page, or `0` when nothing is visible.
    #[must_use]
    pub fn currently_visible_index(&self) -> usize {
        self.page_index().unwrap_or(0)
    }

    /// The page index last reported to the delegate.
    #[must_use]
    pub const fn reported_page_index(&self) -> Option<usize> {
        self.reported_page_index
    }

    /// Horizontal scroll fraction; see [`scroll_progress`](crate::scroll_progress).
    #[must_use]
    pub fn scroll_progress(&self) -> f64 {
        geometry::scroll_progress(
            self.surface.content_offset().x,
            self.surface.content_size().width,
            self.surface.viewport_size().width,
        )
    }

    /// Checks that the delegate still reports the loaded page count.
    pub fn check_count(&self) -> Result<(), ContractViolation> {
        match &self.delegate {
            Some(delegate) if delegate.page_count() != self.pages.len() => {
                Err(ContractViolation::CountMismatch {
                    expected: self.pages.len(),
                    actual: delegate.page_count(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Rebuilds every page from the delegate, failing on a degenerate viewport.
    ///
    /// All materialized pages are detached in index order, the slots are
    /// resized to the delegate's count (zero without a delegate), and a
    /// preload pass fills the window around the viewport.
    pub fn try_reload(&mut self) -> Result<(), ContractViolation> {
        self.check_viewport()?;
        self.reload_pages();
        Ok(())
    }

    /// Rebuilds every page from the delegate.
    ///
    /// Same as [`try_reload`](Self::try_reload), except that a degenerate
    /// viewport is reported as a contract violation: logged, and fatal in
    /// debug builds.
    pub fn reload(&mut self) {
        if let Err(violation) = self.check_viewport() {
            error::report(&violation);
        }
        self.reload_pages();
    }

    fn check_viewport(&self) -> Result<(), ContractViolation> {
        let size = self.surface.viewport_size();
        if is_degenerate(size) {
            Err(ContractViolation::DegenerateViewport { size })
        } else {
            Ok(())
        }
    }

    fn reload_pages(&mut self) {
        let count = self.delegate.as_ref().map_or(0, D::page_count);
        log::debug!(
            "reloading {count} pages at page size {:?}",
            self.page_size()
        );
        self.pages.reset(count, &mut self.surface);
        self.update_pages(UpdateArea::Preload);
    }

    /// Runs one update pass.
    ///
    /// Materializes the pages of `area`, dematerializes everything outside the
    /// preload window, realigns frames, and refreshes the content size.
    pub fn update_pages(&mut self, area: UpdateArea) {
        if let Err(violation) = self.check_count() {
            error::report(&violation);
        }

        let geometry = self.geometry();
        let count = self.pages.len();
        let visible = self.visible_range();
        let preload = visible.expanded(self.config.preload_distance, count);
        let target = match area {
            UpdateArea::Visible => visible,
            UpdateArea::Preload => preload,
        };
        log::trace!("{area:?} pass: visible {visible:?}, preload {preload:?}");

        if let Some(delegate) = self.delegate.as_mut() {
            for index in target {
                self.pages
                    .materialize(index, &geometry, delegate, &mut self.surface);
            }
        }
        self.pages.dematerialize_outside(preload, &mut self.surface);
        self.pages.sync_frames(&geometry);

        let content = geometry.content_size(count, self.surface.viewport_size());
        self.surface.set_content_size(content);
    }

    /// Reports the current page to the delegate if it changed since the last
    /// report. Returns `true` if the delegate was notified.
    pub fn update_page_index(&mut self) -> bool {
        let Some(index) = self.page_index() else {
            return false;
        };
        if self.reported_page_index == Some(index) {
            return false;
        }
        self.reported_page_index = Some(index);
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.page_index_changed(index);
        }
        true
    }

    /// Applies a new viewport size from a layout pass.
    ///
    /// Does nothing if the size is unchanged, since hosts tend to lay out
    /// repeatedly. Otherwise resizes the surface and runs a visible pass.
    /// Returns `true` if the size changed.
    pub fn on_layout(&mut self, size: Size) -> bool {
        if self.surface.viewport_size() == size {
            return false;
        }
        log::debug!(
            "viewport resized from {:?} to {size:?}",
            self.surface.viewport_size()
        );
        self.surface.set_viewport_size(size);
        self.update_pages(UpdateArea::Visible);
        true
    }

    /// Applies a new viewport size and keeps the current page in place.
    ///
    /// The page that led the viewport before the resize (as adjusted by
    /// [`PageLayout::realign_index`]) leads it afterwards, a visible pass
    /// materializes it at its new offset, and the page index is re-reported.
    /// Does nothing if the size is unchanged.
    pub fn on_size_changed(&mut self, size: Size) {
        if self.surface.viewport_size() == size {
            return;
        }
        let previous = self.currently_visible_index();
        self.on_layout(size);
        let anchor = self.layout.realign_index(previous, size);
        self.realign_to_index(anchor);
        self.update_pages(UpdateArea::Visible);
        self.update_page_index();
    }

    /// Scrolls so page `index` leads the viewport, clamped to the content on
    /// each axis. No update pass is run.
    pub fn realign_to_index(&mut self, index: usize) {
        let origin = self.frame_for_index(index).origin();
        let content = self.surface.content_size();
        let viewport = self.surface.viewport_size();
        let max_x = (content.width - viewport.width).max(0.0);
        let max_y = (content.height - viewport.height).max(0.0);
        self.surface.set_content_offset(Point::new(
            origin.x.clamp(0.0, max_x),
            origin.y.clamp(0.0, max_y),
        ));
    }

    /// The surface scrolled: materialize what came into view and report progress.
    pub fn on_scrolled(&mut self) {
        self.update_pages(UpdateArea::Visible);
        let progress = self.scroll_progress();
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.scroll_progress_updated(progress);
        }
    }

    /// Momentum scrolling stopped: report the page, then fill the preload window.
    pub fn on_scroll_settled(&mut self) {
        self.update_page_index();
        self.update_pages(UpdateArea::Preload);
    }

    /// Scrolls to page `index`.
    ///
    /// Without animation the surface jumps, the newly visible pages are
    /// materialized, and the page index is reported right away. With
    /// animation the report waits for
    /// [`on_scroll_animation_finished`](Self::on_scroll_animation_finished).
    pub fn scroll_to_index(&mut self, index: usize, animated: bool) {
        let frame = self.frame_for_index(index);
        self.surface.scroll_rect_to_visible(frame, animated);
        if animated {
            self.pending_animated_scroll = true;
        } else {
            self.pending_animated_scroll = false;
            self.update_pages(UpdateArea::Visible);
            self.update_page_index();
        }
    }

    /// The animation started by [`scroll_to_index`](Self::scroll_to_index)
    /// ended. Reports the page index if the animation ran to completion.
    pub fn on_scroll_animation_finished(&mut self, completed: bool) {
        if !core::mem::take(&mut self.pending_animated_scroll) {
            return;
        }
        if completed {
            self.update_page_index();
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Point, Size};

    use super::{Pager, UpdateArea};
    use crate::page_set::tests::{Event, Page, Pages};
    use crate::{
        ContentUnit, ContractViolation, DualPageLayout, PageLayout, PageRange, PagerConfig,
        RangeStrategy, ScrollSurface, Viewport,
    };

    const PAGE: Size = Size::new(100.0, 100.0);

    fn pager(count: usize) -> Pager<Pages, Viewport> {
        let mut pager = Pager::new(Viewport::new(PAGE));
        pager.set_delegate(Some(Pages::new(count)));
        pager
    }

    fn materialized<L: PageLayout>(pager: &Pager<Pages, Viewport, L>) -> Vec<usize> {
        pager.pages().materialized().collect()
    }

    fn events<L: PageLayout>(pager: &Pager<Pages, Viewport, L>) -> Vec<Event> {
        pager.delegate().unwrap().events()
    }

    fn clear<L: PageLayout>(pager: &Pager<Pages, Viewport, L>) {
        pager.delegate().unwrap().clear();
    }

    fn scroll_to<L: PageLayout>(pager: &mut Pager<Pages, Viewport, L>, x: f64) {
        pager.surface_mut().set_content_offset(Point::new(x, 0.0));
    }

    #[test]
    fn attaching_a_delegate_preloads_around_the_first_page() {
        let mut pager = pager(4);
        assert_eq!(pager.visible_range(), PageRange::new(0, 1));
        assert_eq!(pager.preload_range(), PageRange::new(0, 2));
        assert_eq!(materialized(&pager), [0, 1]);
        assert_eq!(pager.surface().content_size(), Size::new(400.0, 100.0));
        assert_eq!(pager.surface().attached_pages(), &[0, 1]);

        pager.on_scroll_settled();
        assert_eq!(pager.reported_page_index(), Some(0));
        assert_eq!(pager.page_index(), Some(0));
    }

    #[test]
    fn settling_one_page_right_widens_the_window() {
        let mut pager = pager(4);
        pager.on_scroll_settled();
        clear(&pager);

        scroll_to(&mut pager, 100.0);
        pager.on_scroll_settled();

        assert_eq!(pager.visible_range(), PageRange::new(1, 2));
        assert_eq!(pager.preload_range(), PageRange::new(0, 3));
        assert_eq!(materialized(&pager), [0, 1, 2]);
        assert!(!pager.pages().is_materialized(3));
        assert_eq!(pager.reported_page_index(), Some(1));
        assert_eq!(events(&pager)[0], Event::PageIndex(1));
    }

    #[test]
    fn materialized_frames_match_their_index() {
        let mut pager = pager(4);
        pager.set_preload_distance(3);
        pager.update_pages(UpdateArea::Preload);
        for index in 0..4 {
            let page: &Page = pager.pages().get(index).unwrap();
            assert_eq!(page.frame(), pager.frame_for_index(index));
        }
    }

    #[test]
    fn visible_pass_never_evicts_inside_the_preload_window() {
        let mut pager = pager(6);
        pager.set_preload_distance(2);
        pager.update_pages(UpdateArea::Preload);
        assert_eq!(materialized(&pager), [0, 1, 2]);

        // Half a page right: pages 0 and 1 visible, 2 still in the window.
        scroll_to(&mut pager, 50.0);
        pager.on_scrolled();
        assert_eq!(materialized(&pager), [0, 1, 2]);

        // Three pages right: the window is 1..=5, so page 0 goes and only the
        // visible page 3 is created.
        scroll_to(&mut pager, 300.0);
        pager.on_scrolled();
        assert_eq!(materialized(&pager), [1, 2, 3]);

        pager.on_scroll_settled();
        assert_eq!(materialized(&pager), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn scrolled_reports_progress_every_sample() {
        let mut pager = pager(4);
        clear(&pager);
        scroll_to(&mut pager, 150.0);
        pager.on_scrolled();
        pager.on_scrolled();
        let progress = events(&pager)
            .iter()
            .filter(|event| **event == Event::Progress)
            .count();
        assert_eq!(progress, 2);
        assert_eq!(pager.scroll_progress(), 0.5);
    }

    #[test]
    fn page_index_reports_only_on_change() {
        let mut pager = pager(4);
        clear(&pager);
        pager.on_scroll_settled();
        pager.on_scroll_settled();
        scroll_to(&mut pager, 100.0);
        pager.on_scroll_settled();
        pager.on_scroll_settled();
        scroll_to(&mut pager, 0.0);
        pager.on_scroll_settled();

        let reports: Vec<_> = events(&pager)
            .into_iter()
            .filter(|event| matches!(event, Event::PageIndex(_)))
            .collect();
        assert_eq!(
            reports,
            [Event::PageIndex(0), Event::PageIndex(1), Event::PageIndex(0)]
        );
    }

    #[test]
    fn empty_viewport_reports_nothing() {
        let mut pager = pager(0);
        assert_eq!(pager.page_index(), None);
        assert_eq!(pager.currently_visible_index(), 0);
        assert!(!pager.update_page_index());
        pager.on_scrolled();
        assert_eq!(pager.scroll_progress(), 0.0);
        assert_eq!(pager.surface().content_size(), Size::new(0.0, 100.0));
    }

    #[test]
    fn single_page_progress_is_zero() {
        let mut pager = pager(1);
        pager.on_scrolled();
        assert_eq!(pager.surface().content_size().width, 100.0);
        assert_eq!(pager.scroll_progress(), 0.0);
    }

    #[test]
    fn resize_keeps_the_leading_page() {
        let mut pager = pager(4);
        scroll_to(&mut pager, 100.0);
        pager.on_scroll_settled();
        clear(&pager);

        pager.on_size_changed(Size::new(50.0, 100.0));
        assert_eq!(pager.surface().content_size(), Size::new(200.0, 100.0));
        assert_eq!(pager.surface().content_offset(), Point::new(50.0, 0.0));
        assert_eq!(pager.page_index(), Some(1));
        assert_eq!(pager.reported_page_index(), Some(1));
        // Still on page 1, so no new report.
        assert!(!events(&pager).contains(&Event::PageIndex(1)));

        pager.on_scroll_settled();
        for index in pager.pages().materialized() {
            let page = pager.pages().get(index).unwrap();
            assert_eq!(page.frame(), pager.frame_for_index(index));
        }
    }

    #[test]
    fn resize_clamps_the_offset_to_the_content() {
        let mut pager = pager(2);
        scroll_to(&mut pager, 100.0);
        pager.on_scroll_settled();

        // The last page cannot lead a viewport wider than one page.
        pager.on_size_changed(Size::new(150.0, 100.0));
        assert_eq!(pager.surface().content_size(), Size::new(300.0, 100.0));
        assert_eq!(pager.surface().content_offset(), Point::new(150.0, 0.0));
    }

    #[test]
    fn resize_materializes_the_realigned_page() {
        let mut pager = pager(4);
        scroll_to(&mut pager, 300.0);
        pager.on_scroll_settled();
        assert_eq!(materialized(&pager), [2, 3]);

        // Halving the width moves page 3 to x = 150, outside the old window.
        pager.on_size_changed(Size::new(50.0, 100.0));
        assert_eq!(pager.surface().content_offset(), Point::new(150.0, 0.0));
        assert_eq!(pager.visible_range(), PageRange::new(3, 4));
        assert!(pager.pages().is_materialized(3));
        assert_eq!(pager.surface().attached_pages(), &[3]);
        let page = pager.pages().get(3).unwrap();
        assert_eq!(page.frame(), pager.frame_for_index(3));
        assert_eq!(pager.page_index(), Some(3));
        assert_eq!(pager.reported_page_index(), Some(3));
    }

    #[test]
    fn unchanged_size_is_ignored() {
        let mut pager = pager(4);
        scroll_to(&mut pager, 30.0);
        clear(&pager);
        assert!(!pager.on_layout(PAGE));
        pager.on_size_changed(PAGE);
        assert_eq!(pager.surface().content_offset(), Point::new(30.0, 0.0));
        assert!(events(&pager).is_empty());
    }

    #[test]
    fn dual_layout_snaps_to_the_spread() {
        let surface = Viewport::new(Size::new(320.0, 480.0));
        let mut pager: Pager<Pages, Viewport, DualPageLayout> =
            Pager::with_layout(surface, DualPageLayout::default());
        pager.set_delegate(Some(Pages::new(4)));
        scroll_to(&mut pager, 960.0);
        pager.on_scroll_settled();
        assert_eq!(pager.page_index(), Some(3));

        // Rotate to landscape: two 320-wide pages per viewport, anchored on page 2.
        pager.on_size_changed(Size::new(640.0, 320.0));
        assert_eq!(pager.page_size(), Size::new(320.0, 320.0));
        assert_eq!(pager.surface().content_offset(), Point::new(640.0, 0.0));
        assert_eq!(pager.visible_range(), PageRange::new(2, 4));
        assert!(pager.pages().is_materialized(2));
        assert!(pager.pages().is_materialized(3));
        assert_eq!(pager.reported_page_index(), Some(2));
    }

    #[test]
    fn scroll_to_index_reports_immediately_without_animation() {
        let mut pager = pager(4);
        pager.on_scroll_settled();
        clear(&pager);

        pager.scroll_to_index(2, false);
        assert_eq!(pager.surface().content_offset(), Point::new(200.0, 0.0));
        assert_eq!(pager.reported_page_index(), Some(2));
        assert!(pager.pages().is_materialized(2));
        assert!(events(&pager).contains(&Event::PageIndex(2)));
    }

    #[test]
    fn animated_scroll_waits_for_completion() {
        let mut pager = pager(4);
        pager.on_scroll_settled();

        pager.scroll_to_index(3, true);
        assert_eq!(pager.reported_page_index(), Some(0));

        // An interrupted animation reports nothing.
        pager.on_scroll_animation_finished(false);
        assert_eq!(pager.reported_page_index(), Some(0));

        pager.scroll_to_index(3, true);
        pager.on_scroll_animation_finished(true);
        assert_eq!(pager.reported_page_index(), Some(3));

        // A stray completion without a pending scroll is ignored.
        scroll_to(&mut pager, 0.0);
        pager.on_scroll_animation_finished(true);
        assert_eq!(pager.reported_page_index(), Some(3));
    }

    #[test]
    fn reload_rebuilds_from_the_new_count() {
        let mut pager = pager(4);
        pager.delegate_mut().unwrap().count = 2;
        clear(&pager);
        pager.reload();

        assert_eq!(pager.pages().len(), 2);
        assert_eq!(materialized(&pager), [0, 1]);
        let events = events(&pager);
        // Old pages detach in index order before new content is created.
        assert_eq!(
            &events[..4],
            &[
                Event::WillDetach(0),
                Event::DidDetach(0),
                Event::WillDetach(1),
                Event::DidDetach(1),
            ]
        );
        assert_eq!(events[4], Event::Created(0));
    }

    #[test]
    fn replacing_and_removing_the_delegate_reloads() {
        let mut pager = pager(4);
        pager.set_delegate(Some(Pages::new(3)));
        assert_eq!(pager.pages().len(), 3);

        let old = pager.take_delegate().unwrap();
        assert_eq!(old.count, 3);
        assert!(pager.pages().is_empty());
        assert!(pager.surface().attached_pages().is_empty());

        // None over None leaves everything alone, even with no viewport.
        pager.on_layout(Size::ZERO);
        pager.set_delegate(None);
        assert!(pager.pages().is_empty());
    }

    #[test]
    fn preload_distance_applies_on_the_next_pass() {
        let mut pager = pager(6);
        pager.set_config(PagerConfig::default().with_preload_distance(0));
        assert_eq!(materialized(&pager), [0, 1]);
        pager.on_scroll_settled();
        assert_eq!(materialized(&pager), [0]);

        pager.set_preload_distance(4);
        assert_eq!(pager.preload_distance(), 4);
        pager.on_scroll_settled();
        assert_eq!(materialized(&pager), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn analytic_strategy_drives_the_same_lifecycle() {
        let config = PagerConfig::default().with_range_strategy(RangeStrategy::Analytic);
        let mut pager: Pager<Pages, Viewport> = Pager::new(Viewport::new(PAGE)).with_config(config);
        pager.set_delegate(Some(Pages::new(4)));
        scroll_to(&mut pager, 100.0);
        pager.on_scroll_settled();
        assert_eq!(materialized(&pager), [0, 1, 2]);
        assert_eq!(pager.reported_page_index(), Some(1));
    }

    #[test]
    fn try_reload_rejects_a_degenerate_viewport() {
        let mut pager: Pager<Pages, Viewport> = Pager::new(Viewport::default());
        assert_eq!(
            pager.try_reload(),
            Err(ContractViolation::DegenerateViewport { size: Size::ZERO })
        );
        assert!(pager.pages().is_empty());
    }

    #[test]
    #[should_panic(expected = "degenerate viewport")]
    fn reload_with_a_degenerate_viewport_panics_in_debug() {
        let mut pager: Pager<Pages, Viewport> = Pager::new(Viewport::default());
        pager.set_delegate(Some(Pages::new(2)));
    }

    #[test]
    fn count_changes_without_reload_are_detected() {
        let mut pager = pager(4);
        assert_eq!(pager.check_count(), Ok(()));
        pager.delegate_mut().unwrap().count = 5;
        assert_eq!(
            pager.check_count(),
            Err(ContractViolation::CountMismatch {
                expected: 4,
                actual: 5,
            })
        );
    }

    #[test]
    #[should_panic(expected = "call `reload` after changing the page count")]
    fn update_pass_panics_on_count_mismatch_in_debug() {
        let mut pager = pager(4);
        pager.delegate_mut().unwrap().count = 5;
        pager.on_scrolled();
    }
}
