// Copyright 2026 the Lorgnette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size, Vec2};

use lorgnette_viewbox::{FitTransform, ViewState};

/// A [`ConstraintSpec`](crate::ConstraintSpec) resolved against a concrete
/// base transform and surface size.
///
/// Obtained from [`ConstraintSpec::resolve`](crate::ConstraintSpec::resolve)
/// and consulted on every gesture step. [`ResolvedConstraint::constrain`]
/// never rejects a proposal; it returns the nearest legal state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedConstraint {
    base: FitTransform,
    surface: Size,
    /// Extent size remembered for clamp-time widening (dynamic mode only).
    dynamic: Option<Size>,
    min_zoom: f64,
    max_zoom: f64,
    translate_extent: Rect,
}

impl ResolvedConstraint {
    pub(crate) fn new(
        base: FitTransform,
        surface: Size,
        dynamic: Option<Size>,
        scale_extent: (f64, f64),
        translate_extent: Rect,
    ) -> Self {
        Self {
            base,
            surface,
            dynamic,
            min_zoom: scale_extent.0,
            max_zoom: scale_extent.1,
            translate_extent,
        }
    }

    /// Effective `(min_zoom, max_zoom)` after resolution.
    #[must_use]
    pub fn scale_extent(&self) -> (f64, f64) {
        (self.min_zoom, self.max_zoom)
    }

    /// Effective translate extent after resolution, in content coordinates.
    #[must_use]
    pub fn translate_extent(&self) -> Rect {
        self.translate_extent
    }

    /// Clamps a proposed view state to the resolved bounds.
    ///
    /// The zoom is clamped first; then the visible content rectangle implied
    /// by the clamped transform is pushed back inside the translate extent,
    /// axis by axis. When the extent is smaller than the visible area the
    /// extent is widened by the overflow (dynamic mode) or the correction
    /// falls back to whichever one-sided fix is non-trivial, defaulting to
    /// zero so small content stays put.
    #[must_use]
    pub fn constrain(&self, proposed: ViewState) -> ViewState {
        let zoom = proposed.zoom.clamp(self.min_zoom, self.max_zoom);
        let t = self.base.with_view(&ViewState {
            zoom,
            pan: proposed.pan,
        });

        // Visible content rectangle: origin and size in content coordinates.
        let vl = -t.translate.x / t.scale.x;
        let vt = -t.translate.y / t.scale.y;
        let vw = self.surface.width / t.scale.x;
        let vh = self.surface.height / t.scale.y;

        let mut min_x = self.translate_extent.x0;
        let mut min_y = self.translate_extent.y0;
        let mut max_x = self.translate_extent.x1;
        let mut max_y = self.translate_extent.y1;

        if let Some(extent) = self.dynamic {
            // Free space when zoomed out beyond the extent.
            let free_x = (vw - extent.width).max(0.0);
            let free_y = (vh - extent.height).max(0.0);
            min_x -= free_x;
            max_x += free_x;
            min_y -= free_y;
            max_y += free_y;
        }

        let x = corrected_origin(vl, vw, min_x, max_x);
        let y = corrected_origin(vt, vh, min_y, max_y);

        ViewState {
            zoom,
            pan: Vec2::new(
                proposed.pan.x + (vl - x) * t.scale.x,
                proposed.pan.y + (vt - y) * t.scale.y,
            ),
        }
    }

    /// Saturates a multiplicative zoom factor against the zoom bounds.
    ///
    /// Applied mid-gesture before the factor touches the pan coordinates, so
    /// that once zoom has hit a bound the pan stops accumulating too: the
    /// returned factor lands `current_zoom * factor` exactly on the bound.
    #[must_use]
    pub fn constrain_zoom_delta(&self, factor: f64, current_zoom: f64) -> f64 {
        let next = current_zoom * factor;
        if next <= self.min_zoom {
            self.min_zoom / current_zoom
        } else if next >= self.max_zoom {
            self.max_zoom / current_zoom
        } else {
            factor
        }
    }
}

/// Corrects one axis of the visible rectangle's origin against its bounds.
fn corrected_origin(start: f64, size: f64, bound_min: f64, bound_max: f64) -> f64 {
    let d0 = start.max(bound_min);
    let d1 = start.min(bound_max - size);
    if d1 > d0 {
        // Extent comfortably larger than the view: split the slack.
        (d0 + d1) / 2.0
    } else {
        // Pick whichever one-sided correction is non-trivial; exact zero on
        // both sides means small content stays centered at the origin.
        let low = d0.min(0.0);
        if low != 0.0 { low } else { d1.max(0.0) }
    }
}
