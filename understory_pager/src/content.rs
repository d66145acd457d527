// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability a page's content must provide.

use kurbo::Rect;

/// A content unit occupying one page.
///
/// The pager drives attachment in a fixed order so the unit can tell
/// "about to be shown in this pager" apart from "already inserted":
///
/// - materialize: [`will_attach`](Self::will_attach), the surface inserts
///   the unit, [`did_attach`](Self::did_attach);
/// - dematerialize: [`will_detach`](Self::will_detach), the surface removes
///   the unit, [`did_detach`](Self::did_detach).
///
/// Detach hooks run while the unit is still inserted, so it can still read
/// its frame.
pub trait ContentUnit {
    /// Current frame in the pager's content coordinates.
    fn frame(&self) -> Rect;

    /// Moves or resizes the unit.
    fn set_frame(&mut self, frame: Rect);

    /// Called before the unit is inserted into the surface.
    fn will_attach(&mut self) {}

    /// Called after the unit has been inserted and positioned.
    fn did_attach(&mut self) {}

    /// Called before the unit is removed from the surface.
    fn will_detach(&mut self) {}

    /// Called after the unit has been removed.
    fn did_detach(&mut self) {}
}
