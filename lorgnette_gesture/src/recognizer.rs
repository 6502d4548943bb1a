// Copyright 2026 the Lorgnette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use lorgnette_extent::ResolvedConstraint;
use lorgnette_viewbox::ViewState;

use crate::event::MoveEvent;

/// Snapshot taken when a one-contact drag begins.
#[derive(Clone, Copy, Debug, PartialEq)]
struct PanStart {
    origin: Point,
    pan: Vec2,
}

/// Snapshot taken when a two-contact pinch begins.
#[derive(Clone, Copy, Debug, PartialEq)]
struct PinchStart {
    origin: Point,
    pan: Vec2,
    zoom: f64,
    distance: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
enum Phase {
    #[default]
    Idle,
    Panning(PanStart),
    Pinching(PinchStart),
}

/// State machine turning contact-list movement events into proposed view
/// states.
///
/// The recognizer holds no committed state of its own; the caller passes the
/// currently committed [`ViewState`] into [`GestureRecognizer::on_move`] and
/// decides what to do with the proposal that comes back. Gesture-start
/// snapshots live only as long as the gesture: ending or abandoning a
/// gesture drops them.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureRecognizer {
    phase: Phase,
}

impl GestureRecognizer {
    /// Creates a recognizer in the `Idle` phase.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes a movement event against the committed view state.
    ///
    /// Returns a proposed next state for steady-state movements, or `None`
    /// when the event only starts (or re-anchors) a gesture. Proposals are
    /// clamped through `constraint` when one is supplied; zoom saturation is
    /// applied to the pinch ratio before it touches the pan, so pan stops
    /// accumulating once zoom hits a bound.
    pub fn on_move(
        &mut self,
        event: &MoveEvent,
        committed: ViewState,
        constraint: Option<&ResolvedConstraint>,
    ) -> Option<ViewState> {
        match *event.contacts.as_slice() {
            [position] => self.pan(position, committed, constraint),
            [first, second] => self.pinch(first, second, committed, constraint),
            // Zero or 3+ contacts: not a gesture this viewport interprets.
            _ => None,
        }
    }

    /// Ends the current gesture, dropping its snapshot without committing
    /// anything. Used for both normal release and abandonment.
    pub fn end(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Returns `true` while a one-contact drag is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self.phase, Phase::Panning(_))
    }

    /// Returns `true` while a two-contact pinch is in progress.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        matches!(self.phase, Phase::Pinching(_))
    }

    fn pan(
        &mut self,
        position: Point,
        committed: ViewState,
        constraint: Option<&ResolvedConstraint>,
    ) -> Option<ViewState> {
        if let Phase::Panning(start) = self.phase {
            let proposed = ViewState {
                zoom: committed.zoom,
                pan: start.pan + (position - start.origin),
            };
            Some(apply(constraint, proposed))
        } else {
            // First one-contact movement, or a pinch collapsing to one
            // finger: re-anchor on the committed state.
            self.phase = Phase::Panning(PanStart {
                origin: position,
                pan: committed.pan,
            });
            None
        }
    }

    fn pinch(
        &mut self,
        first: Point,
        second: Point,
        committed: ViewState,
        constraint: Option<&ResolvedConstraint>,
    ) -> Option<ViewState> {
        let distance = first.distance(second);
        let mid = first.midpoint(second);

        match self.phase {
            // A start distance of zero cannot produce a ratio; fall through
            // and re-anchor until the contacts separate.
            Phase::Pinching(start) if start.distance > 0.0 => {
                if distance == 0.0 {
                    // Contacts collapsed onto one point mid-gesture; skip
                    // this sample rather than proposing a zero zoom.
                    return None;
                }
                let ratio = distance / start.distance;
                let ratio = match constraint {
                    Some(c) => c.constrain_zoom_delta(ratio, start.zoom),
                    None => ratio,
                };

                let anchor = mid.to_vec2();
                let drift = mid - start.origin;
                let proposed = ViewState {
                    zoom: start.zoom * ratio,
                    pan: (start.pan + drift - anchor) * ratio + anchor,
                };
                Some(apply(constraint, proposed))
            }
            _ => {
                self.phase = Phase::Pinching(PinchStart {
                    origin: mid,
                    pan: committed.pan,
                    zoom: committed.zoom,
                    distance,
                });
                None
            }
        }
    }
}

fn apply(constraint: Option<&ResolvedConstraint>, proposed: ViewState) -> ViewState {
    match constraint {
        Some(c) => c.constrain(proposed),
        None => proposed,
    }
}
