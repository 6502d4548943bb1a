// Copyright 2026 the Lorgnette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lorgnette Gesture: pan and pinch recognition over normalized touch events.
//!
//! The input shape is deliberately small: a [`MoveEvent`] is an ordered list
//! of active contact positions in surface-local coordinates. Adapting raw
//! platform events (DOM touches, pointer events, pan responders) into this
//! shape is the host's job; this crate only interprets it.
//!
//! [`GestureRecognizer`] is the state machine. It is `Idle` until a movement
//! event arrives, pans on one contact, pinches on two, and produces a
//! proposed [`ViewState`] for every steady-state movement. Proposals are run
//! through a [`ResolvedConstraint`] when one is supplied, so a gesture can
//! never commit an out-of-bounds state.
//!
//! ```rust
//! use kurbo::Point;
//! use lorgnette_gesture::{GestureRecognizer, MoveEvent};
//! use lorgnette_viewbox::ViewState;
//!
//! let mut gestures = GestureRecognizer::new();
//! let committed = ViewState::default();
//!
//! // First single-contact movement only snapshots the gesture start.
//! let start = MoveEvent::single(Point::new(10.0, 10.0));
//! assert_eq!(gestures.on_move(&start, committed, None), None);
//!
//! // Subsequent movements propose a pan relative to that snapshot.
//! let drag = MoveEvent::single(Point::new(40.0, 25.0));
//! let proposed = gestures.on_move(&drag, committed, None).unwrap();
//! assert_eq!(proposed.pan.x, 30.0);
//! assert_eq!(proposed.pan.y, 15.0);
//! ```
//!
//! Double-taps are tracked separately by [`TapTracker`], a pure timestamp
//! comparison with no scheduled callbacks.
//!
//! This crate is `no_std`.

#![no_std]

mod event;
mod recognizer;
mod tap;

pub use event::{MoveEvent, should_claim};
pub use recognizer::GestureRecognizer;
pub use tap::TapTracker;
