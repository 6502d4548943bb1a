// Copyright 2026 the Lorgnette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

/// A normalized movement event: the ordered list of active contacts, each
/// with a position in surface-local coordinates.
///
/// One or two contacts cover every gesture this crate interprets, so the
/// list stores up to two positions inline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MoveEvent {
    /// Active contact positions, in the order reported by the input source.
    pub contacts: SmallVec<[Point; 2]>,
}

impl MoveEvent {
    /// Creates a single-contact (drag) event.
    #[must_use]
    pub fn single(position: Point) -> Self {
        let mut contacts = SmallVec::new();
        contacts.push(position);
        Self { contacts }
    }

    /// Creates a two-contact (pinch) event.
    #[must_use]
    pub fn pair(first: Point, second: Point) -> Self {
        let mut contacts = SmallVec::new();
        contacts.push(first);
        contacts.push(second);
        Self { contacts }
    }
}

/// Decides whether the viewport should claim an incoming gesture, or let the
/// events fall through to interactive content underneath.
///
/// A gesture is claimed when two contacts are down, when the single contact
/// has moved at least `move_threshold_sq` (squared pixels) since touch-down,
/// or when double-tap detection is enabled and therefore every release must
/// be observed.
#[must_use]
pub fn should_claim(
    contact_count: usize,
    total_offset: Vec2,
    move_threshold_sq: f64,
    double_tap_enabled: bool,
) -> bool {
    contact_count == 2 || total_offset.hypot2() >= move_threshold_sq || double_tap_enabled
}
