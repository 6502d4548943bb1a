// Copyright 2026 the Lorgnette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Double-tap detection by release-timestamp comparison.
///
/// Tracked independently of the pan/pinch state machine: every release is
/// recorded, and a release within the threshold of the previous one is a
/// double-tap. There is no scheduled timeout; this is a pure comparison.
#[derive(Clone, Copy, Debug)]
pub struct TapTracker {
    last_release_ms: f64,
}

impl TapTracker {
    /// Creates a tracker with no recorded release.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_release_ms: f64::NEG_INFINITY,
        }
    }

    /// Records a release and reports whether it completed a double-tap.
    ///
    /// `timestamp_ms` must come from the same monotonic clock as previous
    /// releases. The timestamp is recorded either way, so a triple-tap
    /// counts as two overlapping pairs.
    pub fn on_release(&mut self, timestamp_ms: f64, threshold_ms: f64) -> bool {
        let double = timestamp_ms - self.last_release_ms < threshold_ms;
        self.last_release_ms = timestamp_ms;
        double
    }
}

impl Default for TapTracker {
    fn default() -> Self {
        Self::new()
    }
}
