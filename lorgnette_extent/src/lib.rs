// Copyright 2026 the Lorgnette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lorgnette Extent: pan/zoom constraints for a viewBox viewport.
//!
//! Callers describe bounds with a [`ConstraintSpec`]: a zoom range, a
//! translate extent in content coordinates, and a [`Combine`] mode saying how
//! the two interact when the view zooms out past the extent. The spec is
//! resolved once per viewBox/surface change into a [`ResolvedConstraint`],
//! which is then cheap to consult on every gesture step:
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use lorgnette_extent::{Combine, ConstraintSpec};
//! use lorgnette_viewbox::{FitTransform, ViewState};
//!
//! let spec = ConstraintSpec {
//!     combine: Combine::Dynamic,
//!     scale_extent: (0.5, 4.0),
//!     translate_extent: Rect::new(0.0, 0.0, 100.0, 100.0),
//! };
//! let resolved = spec.resolve(&FitTransform::IDENTITY, Size::new(100.0, 100.0));
//!
//! // A wildly out-of-range proposal comes back legal.
//! let corrected = resolved.constrain(ViewState::new(100.0, -5000.0, 0.0));
//! assert_eq!(corrected.zoom, 4.0);
//! ```
//!
//! Missing or non-finite bounds simply never constrain; there is no error
//! path. The clamp degrades gracefully when a proposal admits no exact
//! solution (content smaller than the view), preferring a centered or
//! one-sided correction over a jump.
//!
//! This crate is `no_std`.

#![no_std]

mod resolved;
mod spec;

pub use resolved::ResolvedConstraint;
pub use spec::{Combine, ConstraintSpec};
