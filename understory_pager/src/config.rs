// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunables for a [`Pager`](crate::Pager).

/// Number of off-screen pages kept materialized on each side by default.
pub const DEFAULT_PRELOAD_DISTANCE: usize = 1;

/// How the visible page range is derived from the viewport.
///
/// Both strategies agree on every input; they differ only in cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RangeStrategy {
    /// Intersect every page frame with the viewport. Linear in the page count.
    #[default]
    BruteForce,
    /// Divide the viewport edges by the page width. Constant time, suited to
    /// pagers with many pages.
    Analytic,
}

/// Configuration for a [`Pager`](crate::Pager).
///
/// Changes take effect on the next update pass; setting a config never
/// triggers a pass by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerConfig {
    /// How many adjacent, non-visible pages to keep materialized on each side
    /// of the visible range once scrolling settles.
    pub preload_distance: usize,
    /// Strategy used to compute the visible range.
    pub range_strategy: RangeStrategy,
}

impl PagerConfig {
    /// Returns a copy with `preload_distance` replaced.
    #[must_use]
    pub const fn with_preload_distance(mut self, preload_distance: usize) -> Self {
        self.preload_distance = preload_distance;
        self
    }

    /// Returns a copy with `range_strategy` replaced.
    #[must_use]
    pub const fn with_range_strategy(mut self, range_strategy: RangeStrategy) -> Self {
        self.range_strategy = range_strategy;
        self
    }
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            preload_distance: DEFAULT_PRELOAD_DISTANCE,
            range_strategy: RangeStrategy::default(),
        }
    }
}
