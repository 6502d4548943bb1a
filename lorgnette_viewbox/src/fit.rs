// Copyright 2026 the Lorgnette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

use kurbo::{Affine, Rect, Vec2};

use crate::align::{Align, MeetOrSlice};

/// Affine map from content (viewBox) coordinates to surface coordinates.
///
/// The map is `p -> translate + scale * p` with independent per-axis scale
/// factors. It is always a derived value: either the output of
/// [`fit_transform`] or that output composed with a [`ViewState`] via
/// [`FitTransform::with_view`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitTransform {
    /// Translation applied after scaling, in surface coordinates.
    pub translate: Vec2,
    /// Per-axis scale factors.
    pub scale: Vec2,
}

impl FitTransform {
    /// The identity map.
    pub const IDENTITY: Self = Self {
        translate: Vec2::ZERO,
        scale: Vec2::new(1.0, 1.0),
    };

    /// Composes a user's pan/zoom on top of this base transform.
    ///
    /// The zoom multiplies both the scale and the base translation, and the
    /// pan is added in surface space afterwards. Composing with the default
    /// [`ViewState`] returns the base transform unchanged.
    #[must_use]
    pub fn with_view(&self, state: &ViewState) -> Self {
        Self {
            translate: state.pan + state.zoom * self.translate,
            scale: state.zoom * self.scale,
        }
    }

    /// Returns this map as a [`kurbo::Affine`].
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translate) * Affine::scale_non_uniform(self.scale.x, self.scale.y)
    }

    /// Serializes this map as an SVG `transform` attribute value,
    /// `translate(tx ty) scale(sx sy)`.
    #[must_use]
    pub fn to_svg(&self) -> String {
        format!(
            "translate({} {}) scale({} {})",
            self.translate.x, self.translate.y, self.scale.x, self.scale.y
        )
    }
}

impl Default for FitTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// The three degrees of freedom a viewer can manipulate: a positive zoom
/// multiplier and a surface-space pan offset applied on top of the base fit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// Zoom multiplier. Must stay positive.
    pub zoom: f64,
    /// Surface-space offset; `pan.x` is "left", `pan.y` is "top".
    pub pan: Vec2,
}

impl ViewState {
    /// Creates a view state from a zoom and left/top offsets.
    #[must_use]
    pub fn new(zoom: f64, left: f64, top: f64) -> Self {
        Self {
            zoom,
            pan: Vec2::new(left, top),
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Vec2::ZERO,
        }
    }
}

/// Computes the viewBox-to-surface transform, following the SVG 2 algorithm
/// for computing a viewport's transform from `viewBox`,
/// `preserveAspectRatio`, and the element's position and size.
///
/// With [`Align::None`] the content is scaled uniformly by the smaller axis
/// ratio and recentered; otherwise [`MeetOrSlice`] selects the uniform scale
/// and the alignment distributes the per-axis leftover.
#[must_use]
pub fn fit_transform(
    view_box: Rect,
    surface: Rect,
    align: Align,
    meet_or_slice: MeetOrSlice,
) -> FitTransform {
    let vb_width = view_box.width();
    let vb_height = view_box.height();
    let s_width = surface.width();
    let s_height = surface.height();

    let mut scale_x = s_width / vb_width;
    let mut scale_y = s_height / vb_height;

    let mut translate_x = surface.x0 - view_box.x0 * scale_x;
    let mut translate_y = surface.y0 - view_box.y0 * scale_y;

    if align == Align::None {
        let scale = scale_x.min(scale_y);
        scale_x = scale;
        scale_y = scale;

        if scale > 1.0 {
            translate_x -= (s_width / scale - vb_width) / 2.0;
            translate_y -= (s_height / scale - vb_height) / 2.0;
        } else {
            translate_x -= (s_width - vb_width * scale) / 2.0;
            translate_y -= (s_height - vb_height * scale) / 2.0;
        }
    } else {
        let scale = match meet_or_slice {
            MeetOrSlice::Meet => scale_x.min(scale_y),
            MeetOrSlice::Slice => scale_x.max(scale_y),
        };
        scale_x = scale;
        scale_y = scale;

        if align.x_mid() {
            translate_x += (s_width - vb_width * scale_x) / 2.0;
        }
        if align.x_max() {
            translate_x += s_width - vb_width * scale_x;
        }
        if align.y_mid() {
            translate_y += (s_height - vb_height * scale_y) / 2.0;
        }
        if align.y_max() {
            translate_y += s_height - vb_height * scale_y;
        }
    }

    FitTransform {
        translate: Vec2::new(translate_x, translate_y),
        scale: Vec2::new(scale_x, scale_y),
    }
}
