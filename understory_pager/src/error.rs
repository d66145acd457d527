// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contract violations raised by the host application.

use kurbo::Size;

/// A broken contract between the host and the pager.
///
/// These are integration bugs, not runtime failures. Checked entry points
/// such as [`Pager::try_reload`](crate::Pager::try_reload) return them; the
/// unchecked paths log them and panic in debug builds.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ContractViolation {
    /// Pages were reloaded while the viewport had zero area.
    #[error("cannot lay out pages in a degenerate viewport of {size:?}")]
    DegenerateViewport {
        /// Viewport size at the time of the reload.
        size: Size,
    },
    /// The delegate's page count changed without a reload.
    #[error("delegate reports {actual} pages but {expected} were loaded; call `reload` after changing the page count")]
    CountMismatch {
        /// Slot count established by the last reload.
        expected: usize,
        /// Count the delegate reports now.
        actual: usize,
    },
}

/// Reports a violation: always logged, fatal when debug assertions are on.
pub(crate) fn report(violation: &ContractViolation) {
    log::error!("pager contract violated: {violation}");
    if cfg!(debug_assertions) {
        panic!("{violation}");
    }
}
