// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dense slot collection backing a pager.

use alloc::vec::Vec;

use crate::{ContentUnit, PageGeometry, PageRange, PagerDelegate, ScrollSurface};

/// Ordered page slots, each either empty or holding materialized content.
///
/// Slots are indexed `0..len()` with no gaps. The set is sized wholesale by
/// [`reset`](Self::reset); individual slots fill and empty through
/// [`materialize`](Self::materialize) and [`dematerialize`](Self::dematerialize).
/// At most one content unit lives in a slot at a time.
#[derive(Debug)]
pub struct PageSet<C> {
    slots: Vec<Option<C>>,
}

impl<C> Default for PageSet<C> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<C: ContentUnit> PageSet<C> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if there are no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Content of slot `index`, if materialized.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&C> {
        self.slots.get(index)?.as_ref()
    }

    /// Mutable content of slot `index`, if materialized.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut C> {
        self.slots.get_mut(index)?.as_mut()
    }

    /// Returns `true` if slot `index` holds content.
    #[must_use]
    pub fn is_materialized(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Indices of materialized slots, ascending.
    pub fn materialized(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|_| index))
    }

    /// Dematerializes every slot in index order, then replaces the set with
    /// `count` empty slots.
    pub fn reset<S: ScrollSurface>(&mut self, count: usize, surface: &mut S) {
        for index in 0..self.slots.len() {
            self.dematerialize(index, surface);
        }
        self.slots.clear();
        self.slots.resize_with(count, || None);
    }

    /// Fills slot `index` with content from `delegate`, framed by `geometry`.
    ///
    /// Does nothing if `index` is out of range or already materialized.
    /// Returns `true` if new content was created.
    pub fn materialize<D, S>(
        &mut self,
        index: usize,
        geometry: &PageGeometry,
        delegate: &mut D,
        surface: &mut S,
    ) -> bool
    where
        D: PagerDelegate<Content = C>,
        S: ScrollSurface,
    {
        if !matches!(self.slots.get(index), Some(None)) {
            return false;
        }
        let mut content = delegate.content_at(index);
        content.will_attach();
        content.set_frame(geometry.frame_for_index(index));
        surface.add_page(index, &mut content);
        content.did_attach();
        log::trace!("materialized page {index}");
        self.slots[index] = Some(content);
        true
    }

    /// Empties slot `index`, detaching its content from `surface`.
    ///
    /// Does nothing if `index` is out of range or the slot is empty. Returns
    /// the removed content.
    pub fn dematerialize<S: ScrollSurface>(&mut self, index: usize, surface: &mut S) -> Option<C> {
        let mut content = self.slots.get_mut(index)?.take()?;
        content.will_detach();
        surface.remove_page(index, &mut content);
        content.did_detach();
        log::trace!("dematerialized page {index}");
        Some(content)
    }

    /// Dematerializes every slot outside `keep`.
    pub fn dematerialize_outside<S: ScrollSurface>(&mut self, keep: PageRange, surface: &mut S) {
        for index in 0..self.slots.len() {
            if !keep.contains(index) {
                self.dematerialize(index, surface);
            }
        }
    }

    /// Moves every materialized unit whose frame drifted from `geometry`.
    pub fn sync_frames(&mut self, geometry: &PageGeometry) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if let Some(content) = slot {
                let expected = geometry.frame_for_index(index);
                if content.frame() != expected {
                    content.set_frame(expected);
                }
            }
        }
    }
}
