// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan session helper: compute translation deltas from pan callbacks.
//!
//! ## Usage
//!
//! 1) On a began callback, call [`PanSession::begin`] with the location and
//!    touch count.
//! 2) On each changed callback, call [`PanSession::update`] to get the
//!    translation delta since the previous callback.
//! 3) On ended or cancelled callbacks, optionally call [`PanSession::end`]
//!    to drop the session; the next `begin` re-initializes it either way.
//!
//! A change in the number of active touches re-anchors the session without
//! producing a delta, so planting or lifting a finger mid-pan never jumps
//! the canvas.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use easel_gesture::PanSession;
//!
//! let mut pan = PanSession::default();
//!
//! // Two fingers land at (10, 10).
//! pan.begin(Point::new(10.0, 10.0), 2);
//! assert!(pan.is_panning());
//!
//! // They move to (15, 12): delta is (5, 2).
//! let delta = pan.update(Point::new(15.0, 12.0), 2).unwrap();
//! assert_eq!(delta.x, 5.0);
//! assert_eq!(delta.y, 2.0);
//!
//! // A third finger lands: no delta, tracking continues from here.
//! assert_eq!(pan.update(Point::new(40.0, 40.0), 3), None);
//! let delta = pan.update(Point::new(42.0, 41.0), 3).unwrap();
//! assert_eq!(delta.x, 2.0);
//! assert_eq!(delta.y, 1.0);
//! ```

use kurbo::{Point, Vec2};

/// Tracks one pan gesture across its callbacks.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct PanSession {
    /// Location reported by the previous callback, while a pan is tracked.
    pub last_location: Option<Point>,
    /// Touch count reported by the previous callback.
    pub touch_count: usize,
}

impl PanSession {
    /// Start tracking a pan from the given location and touch count.
    pub fn begin(&mut self, location: Point, touch_count: usize) {
        self.last_location = Some(location);
        self.touch_count = touch_count;
    }

    /// Feed a changed callback into the session, returning the translation
    /// delta since the previous callback.
    ///
    /// Returns `None` when the callback only re-anchors the session: the
    /// touch count differs from the previous callback's, or no `begin` has
    /// been seen. Either way the session continues from `location`.
    pub fn update(&mut self, location: Point, touch_count: usize) -> Option<Vec2> {
        let Some(last) = self.last_location else {
            self.begin(location, touch_count);
            return None;
        };
        if self.touch_count != touch_count {
            self.begin(location, touch_count);
            return None;
        }
        self.last_location = Some(location);
        Some(location - last)
    }

    /// End the current pan and reset state.
    pub fn end(&mut self) {
        self.last_location = None;
        self.touch_count = 0;
    }

    /// Returns `true` while a pan is being tracked.
    pub fn is_panning(&self) -> bool {
        self.last_location.is_some()
    }
}
