// Copyright 2026 the Lorgnette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lorgnette Viewport: the controller that ties the pieces together.
//!
//! A [`Viewport`] owns the committed pan/zoom [`ViewState`] for one viewBox
//! over one rendering surface. It derives the base fit transform from
//! `lorgnette_viewbox`, resolves constraints through `lorgnette_extent`,
//! feeds movement events through `lorgnette_gesture`, and emits the final
//! composed transform to an injected [`RenderSink`] after every committed
//! change.
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use lorgnette_gesture::MoveEvent;
//! use lorgnette_viewport::{Viewport, ViewportConfig};
//!
//! // A 100x100 viewBox displayed on a 400x400 surface; no render sink.
//! let view_box = Rect::new(0.0, 0.0, 100.0, 100.0);
//! let surface = Rect::new(0.0, 0.0, 400.0, 400.0);
//! let mut vp = Viewport::new(view_box, surface, ViewportConfig::default(), ());
//!
//! // Drag by (30, 15).
//! vp.handle_move(&MoveEvent::single(Point::new(10.0, 10.0)));
//! vp.handle_move(&MoveEvent::single(Point::new(40.0, 25.0)));
//! assert_eq!(vp.state().pan.x, 30.0);
//!
//! // Zoom in around the surface center, then read the composed transform.
//! vp.zoom_in();
//! let transform = vp.transform();
//! assert!(transform.scale.x > 4.0);
//! ```
//!
//! Everything is synchronous and single-threaded: each event is fully
//! processed, committed, and presented before the next one is looked at.
//! Independent viewports share nothing.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod controller;
mod sink;

pub use config::{
    DEFAULT_DOUBLE_TAP_ZOOM, DEFAULT_MOVE_THRESHOLD_SQ, DEFAULT_WHEEL_ZOOM,
    MAC_TRACKPAD_WHEEL_ZOOM, ViewportConfig,
};
pub use controller::{Viewport, ViewportDebugInfo};
pub use sink::{FnSink, RenderSink};

pub use lorgnette_viewbox::{FitTransform, ViewState};
