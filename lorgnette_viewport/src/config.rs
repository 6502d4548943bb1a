// Copyright 2026 the Lorgnette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use lorgnette_extent::ConstraintSpec;
use lorgnette_viewbox::{Align, MeetOrSlice};

/// Squared single-contact displacement (in pixels) before a drag claims the
/// gesture: 25, i.e. 5px of movement.
pub const DEFAULT_MOVE_THRESHOLD_SQ: f64 = 25.0;

/// Default discrete zoom factor for double-taps and `zoom_in`/`zoom_out`.
pub const DEFAULT_DOUBLE_TAP_ZOOM: f64 = 1.3;

/// Default wheel-tick zoom factor for notched mouse wheels.
pub const DEFAULT_WHEEL_ZOOM: f64 = 1.2;

/// Wheel-tick zoom factor suited to fine-grained trackpad deltas, as
/// delivered on macOS. The host decides which factor applies; the core does
/// no platform sniffing.
pub const MAC_TRACKPAD_WHEEL_ZOOM: f64 = 1.03;

/// Caller-supplied viewport configuration.
///
/// Every field has a permissive default; in particular `constrain: None`
/// disables the extent solver entirely and `double_tap_threshold_ms: None`
/// disables double-tap zooming.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConfig {
    /// ViewBox alignment within the surface.
    pub align: Align,
    /// Whether content fits inside the surface or fills it.
    pub meet_or_slice: MeetOrSlice,
    /// Pan/zoom bounds, or `None` to leave the viewport unconstrained.
    pub constrain: Option<ConstraintSpec>,
    /// Squared displacement before a single-contact drag claims the gesture.
    pub move_threshold_sq: f64,
    /// Maximum gap between releases that counts as a double-tap.
    pub double_tap_threshold_ms: Option<f64>,
    /// Discrete zoom factor for double-taps and `zoom_in`/`zoom_out`.
    pub double_tap_zoom: f64,
    /// Zoom factor applied per wheel event.
    pub wheel_zoom: f64,
    /// Disables gesture capture entirely; programmatic operations and wheel
    /// zooming still work.
    pub lock: bool,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            align: Align::default(),
            meet_or_slice: MeetOrSlice::default(),
            constrain: None,
            move_threshold_sq: DEFAULT_MOVE_THRESHOLD_SQ,
            double_tap_threshold_ms: None,
            double_tap_zoom: DEFAULT_DOUBLE_TAP_ZOOM,
            wheel_zoom: DEFAULT_WHEEL_ZOOM,
            lock: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use lorgnette_viewbox::{Align, MeetOrSlice};

    use super::ViewportConfig;

    #[test]
    fn defaults_are_permissive() {
        let config = ViewportConfig::default();
        assert_eq!(config.align, Align::XMidYMid);
        assert_eq!(config.meet_or_slice, MeetOrSlice::Meet);
        assert!(config.constrain.is_none());
        assert!(config.double_tap_threshold_ms.is_none());
        assert!(!config.lock);
    }
}
