// Copyright 2026 the Lorgnette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lorgnette Viewbox: SVG viewBox fitting and pan/zoom composition.
//!
//! This crate is the pure geometry layer of Lorgnette. It answers one
//! question: given a content coordinate rectangle (an SVG `viewBox`) and a
//! rendering surface of arbitrary size, what affine transform maps content
//! onto the surface? It covers:
//! - [`Align`] / [`MeetOrSlice`]: the `preserveAspectRatio` vocabulary,
//!   including lenient keyword parsing.
//! - [`fit_transform`]: the viewBox-to-viewport transform solver.
//! - [`ViewState`] and [`FitTransform::with_view`]: composing a user's
//!   pan/zoom on top of the base fit.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use lorgnette_viewbox::{Align, FitTransform, MeetOrSlice, ViewState, fit_transform};
//!
//! // Content is a 100x100 viewBox, surface is a 400x200 window.
//! let view_box = Rect::new(0.0, 0.0, 100.0, 100.0);
//! let surface = Rect::new(0.0, 0.0, 400.0, 200.0);
//!
//! let base = fit_transform(view_box, surface, Align::XMidYMid, MeetOrSlice::Meet);
//! // `meet` picks the smaller scale and centers on the slack axis.
//! assert_eq!(base.scale.x, 2.0);
//! assert_eq!(base.scale.y, 2.0);
//! assert_eq!(base.translate.x, 100.0);
//!
//! // Compose the user's pan/zoom on top of the base fit.
//! let state = ViewState::new(2.0, 10.0, 0.0);
//! let composed = base.with_view(&state);
//! assert_eq!(composed.scale.x, 4.0);
//! assert_eq!(composed.translate.x, 210.0);
//! ```
//!
//! All functions here are pure and deterministic; state lives in higher
//! layers (`lorgnette_gesture`, `lorgnette_viewport`).
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod align;
mod fit;

pub use align::{Align, MeetOrSlice};
pub use fit::{FitTransform, ViewState, fit_transform};
