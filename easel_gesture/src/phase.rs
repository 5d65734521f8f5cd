// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture callback phases.

/// Phase of a host-delivered gesture callback.
///
/// Hosts deliver one callback per recognizer update; the phase mirrors the
/// began/changed/ended progression toolkit recognizers report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// The gesture was recognized and produced its first update.
    Began,
    /// The gesture produced a subsequent update.
    Changed,
    /// The gesture finished normally.
    Ended,
    /// The gesture was interrupted by the host before finishing.
    Cancelled,
}

impl GesturePhase {
    /// Returns `true` for the phases that carry deltas to apply,
    /// [`Began`] and [`Changed`].
    ///
    /// [`Began`]: GesturePhase::Began
    /// [`Changed`]: GesturePhase::Changed
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Began | Self::Changed)
    }
}
