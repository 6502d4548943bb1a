// Copyright 2026 the Lorgnette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

use lorgnette_viewbox::FitTransform;

use crate::resolved::ResolvedConstraint;

/// How the zoom range and translate extent combine when the view zooms out
/// far enough that the visible area exceeds the extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Combine {
    /// Keep the caller's bounds verbatim, but widen them symmetrically at
    /// clamp time by however much the visible area overflows the extent.
    #[default]
    Dynamic,
    /// Use the caller's bounds verbatim with no relaxation.
    Static,
    /// Pre-widen the translate extent by the free space that exists at the
    /// minimum zoom, then treat it as static.
    Union,
    /// Raise the minimum zoom until the extent always fills the surface,
    /// then treat the bounds as static.
    Intersect,
}

/// Caller-supplied pan/zoom bounds.
///
/// The default is fully permissive: an unbounded zoom range and an infinite
/// translate extent, neither of which ever constrains anything. Partial or
/// non-finite fields therefore degrade to "unconstrained" rather than being
/// rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstraintSpec {
    /// How zoom and translate bounds interact; see [`Combine`].
    pub combine: Combine,
    /// `(min_zoom, max_zoom)` bounds on the zoom multiplier.
    pub scale_extent: (f64, f64),
    /// Bounds on the visible content rectangle, in content coordinates.
    pub translate_extent: Rect,
}

impl Default for ConstraintSpec {
    fn default() -> Self {
        Self {
            combine: Combine::default(),
            scale_extent: (0.0, f64::INFINITY),
            translate_extent: Rect::new(
                f64::NEG_INFINITY,
                f64::NEG_INFINITY,
                f64::INFINITY,
                f64::INFINITY,
            ),
        }
    }
}

impl ConstraintSpec {
    /// Resolves this spec against a base fit transform and surface size.
    ///
    /// Resolution is where the [`Combine`] mode is paid for; the returned
    /// [`ResolvedConstraint`] only does simple arithmetic per gesture step.
    /// Call this again whenever the viewBox, the surface, or this spec
    /// changes.
    #[must_use]
    pub fn resolve(&self, base: &FitTransform, surface: Size) -> ResolvedConstraint {
        let (mut min_zoom, max_zoom) = if self.scale_extent.0 <= self.scale_extent.1 {
            self.scale_extent
        } else {
            (self.scale_extent.1, self.scale_extent.0)
        };

        // Surface size in content units at zoom 1.
        let vw = surface.width / base.scale.x;
        let vh = surface.height / base.scale.y;

        let extent = self.translate_extent;
        let (dynamic, extent) = match self.combine {
            Combine::Dynamic => (Some(extent.size()), extent),
            Combine::Static => (None, extent),
            Combine::Union => {
                // Free space on each axis when zoomed all the way out.
                let free_x = (vw / min_zoom - extent.width()).max(0.0);
                let free_y = (vh / min_zoom - extent.height()).max(0.0);
                (None, extent.inflate(free_x, free_y))
            }
            Combine::Intersect => {
                // Zoom at which the extent exactly fills the surface.
                min_zoom = min_zoom
                    .max(vw / extent.width())
                    .max(vh / extent.height());
                (None, extent)
            }
        };

        ResolvedConstraint::new(*base, surface, dynamic, (min_zoom, max_zoom), extent)
    }
}
