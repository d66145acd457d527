// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pager --heading-base-level=0

//! Understory Pager: viewport-driven page lifecycle for horizontal pagers.
//!
//! This crate manages a horizontally scrolling strip of equally-sized pages
//! whose content is created lazily by a host-supplied delegate. As the user
//! scrolls, it decides which pages must exist (materialized: created,
//! attached, framed) and which can be released (dematerialized: detached,
//! dropped), keeping memory bounded while scrolling stays smooth and the
//! reported current page stays accurate.
//!
//! The core concepts are:
//!
//! - [`Pager`]: the controller. It owns the page slots, the delegate, the
//!   scroll surface, and a page layout, and reacts to surface events
//!   ([`Pager::on_scrolled`], [`Pager::on_scroll_settled`],
//!   [`Pager::on_size_changed`], ...).
//! - [`PageSet`]: the dense slot collection with idempotent
//!   [`materialize`](PageSet::materialize) and
//!   [`dematerialize`](PageSet::dematerialize).
//! - [`PagerDelegate`]: supplies the page count and content, and receives
//!   edge-triggered page-index and per-sample progress notifications.
//! - [`ContentUnit`]: what a page's content must support: a frame and the
//!   will/did attach and detach hooks.
//! - [`ScrollSurface`]: the seam to the host toolkit's scroll view, with
//!   [`Viewport`] as a headless implementation.
//! - [`PageLayout`]: decides page size and the resize anchor;
//!   [`FullPageLayout`] (the default) and [`DualPageLayout`] ship with the crate.
//!
//! ## Update passes
//!
//! Scroll samples run a cheap *visible* pass that only creates pages
//! intersecting the viewport. When scrolling settles, a *preload* pass also
//! creates [`PagerConfig::preload_distance`] pages on each side. Both passes
//! release only pages outside the preload window, so fast scrolling does not
//! thrash pages that are about to be needed again.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use understory_pager::{ContentUnit, Pager, PagerDelegate, ScrollSurface, Viewport};
//!
//! struct Card {
//!     frame: Rect,
//! }
//!
//! impl ContentUnit for Card {
//!     fn frame(&self) -> Rect {
//!         self.frame
//!     }
//!
//!     fn set_frame(&mut self, frame: Rect) {
//!         self.frame = frame;
//!     }
//! }
//!
//! struct Deck {
//!     current: Option<usize>,
//! }
//!
//! impl PagerDelegate for Deck {
//!     type Content = Card;
//!
//!     fn page_count(&self) -> usize {
//!         4
//!     }
//!
//!     fn content_at(&mut self, _index: usize) -> Card {
//!         Card { frame: Rect::ZERO }
//!     }
//!
//!     fn page_index_changed(&mut self, index: usize) {
//!         self.current = Some(index);
//!     }
//! }
//!
//! let mut pager = Pager::new(Viewport::new(Size::new(100.0, 100.0)));
//! pager.set_delegate(Some(Deck { current: None }));
//!
//! // The first page plus one page of preload.
//! assert_eq!(pager.pages().materialized().collect::<Vec<_>>(), [0, 1]);
//!
//! // The user flings one page to the right and the scroll view settles.
//! pager.surface_mut().set_content_offset(Point::new(100.0, 0.0));
//! pager.on_scroll_settled();
//!
//! assert_eq!(pager.delegate().unwrap().current, Some(1));
//! assert_eq!(pager.pages().materialized().collect::<Vec<_>>(), [0, 1, 2]);
//! ```
//!
//! ## Contract violations
//!
//! Reloading with a zero-area viewport, or changing the delegate's page count
//! without reloading, are integration bugs. They are logged through the
//! [`log`] facade and panic in debug builds; [`Pager::try_reload`] and
//! [`Pager::check_count`] return them as [`ContractViolation`] instead.
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

mod config;
mod content;
mod controller;
mod delegate;
mod error;
mod geometry;
mod layout;
mod page_set;
mod surface;

pub use config::{DEFAULT_PRELOAD_DISTANCE, PagerConfig, RangeStrategy};
pub use content::ContentUnit;
pub use controller::{Pager, UpdateArea};
pub use delegate::PagerDelegate;
pub use error::ContractViolation;
pub use geometry::{PageGeometry, PageRange, intersects, is_degenerate, scroll_progress};
pub use layout::{DEFAULT_MIN_PAGE_WIDTH, DualPageLayout, FullPageLayout, PageLayout};
pub use page_set::PageSet;
pub use surface::{ScrollSurface, Viewport};
