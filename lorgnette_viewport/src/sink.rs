// Copyright 2026 the Lorgnette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use lorgnette_viewbox::FitTransform;

/// Receives the composed content transform after every committed change.
///
/// This is the seam between the viewport core and whatever actually draws:
/// a renderer applies the transform to its content, an SVG host might set a
/// `transform` attribute from [`FitTransform::to_svg`]. Implement it on the
/// renderer itself, wrap a closure in [`FnSink`], or use `()` to discard.
pub trait RenderSink {
    /// Called once per committed state change with the final transform.
    fn present(&mut self, transform: &FitTransform);
}

/// Discards every transform. Useful for headless or test viewports.
impl RenderSink for () {
    fn present(&mut self, _transform: &FitTransform) {}
}

/// Adapter implementing [`RenderSink`] for a closure.
pub struct FnSink<F>(
    /// The wrapped closure, called with each presented transform.
    pub F,
);

impl<F: FnMut(&FitTransform)> RenderSink for FnSink<F> {
    fn present(&mut self, transform: &FitTransform) {
        (self.0)(transform);
    }
}

impl<F> core::fmt::Debug for FnSink<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FnSink").finish_non_exhaustive()
    }
}
