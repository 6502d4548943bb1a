// Copyright 2026 the Lorgnette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

use lorgnette_extent::ResolvedConstraint;
use lorgnette_gesture::{GestureRecognizer, MoveEvent, TapTracker};
use lorgnette_viewbox::{FitTransform, ViewState, fit_transform};

use crate::config::ViewportConfig;
use crate::sink::RenderSink;

/// Controller for one pannable, zoomable viewBox viewport.
///
/// The viewport owns the committed [`ViewState`], the single source of truth
/// for where the user currently is, plus the derived base transform and
/// resolved constraint. All mutation funnels through the commit path:
/// a proposed state is constrained (when constraints are configured),
/// stored, composed with the base transform, and presented to the sink.
pub struct Viewport<S> {
    view_box: Rect,
    surface: Rect,
    config: ViewportConfig,
    base: FitTransform,
    resolved: Option<ResolvedConstraint>,
    state: ViewState,
    recognizer: GestureRecognizer,
    taps: TapTracker,
    sink: S,
}

impl<S: RenderSink> Viewport<S> {
    /// Creates a viewport and presents the initial transform to the sink.
    ///
    /// The initial view state is `(zoom 1, left 0, top 0)`, run through the
    /// constraint solver when one is configured.
    pub fn new(view_box: Rect, surface: Rect, config: ViewportConfig, sink: S) -> Self {
        let base = fit_transform(view_box, surface, config.align, config.meet_or_slice);
        let resolved = config
            .constrain
            .as_ref()
            .map(|spec| spec.resolve(&base, surface.size()));
        let mut vp = Self {
            view_box,
            surface,
            config,
            base,
            resolved,
            state: ViewState::default(),
            recognizer: GestureRecognizer::new(),
            taps: TapTracker::new(),
            sink,
        };
        let initial = vp.apply_constraint(vp.state);
        vp.commit(initial);
        vp
    }

    /// The committed view state.
    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// The base viewBox-to-surface transform, before pan/zoom.
    #[must_use]
    pub fn base_transform(&self) -> FitTransform {
        self.base
    }

    /// The final content transform: base fit composed with the committed
    /// view state. This is what the sink last received.
    #[must_use]
    pub fn transform(&self) -> FitTransform {
        self.base.with_view(&self.state)
    }

    /// The current configuration.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// The render sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the render sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Returns `true` while a one-contact drag is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.recognizer.is_panning()
    }

    /// Returns `true` while a two-contact pinch is in progress.
    #[must_use]
    pub fn is_zooming(&self) -> bool {
        self.recognizer.is_pinching()
    }

    /// Decides whether this viewport should claim an incoming gesture given
    /// the contact count and the displacement since touch-down. Always
    /// `false` while locked.
    #[must_use]
    pub fn should_claim(&self, contact_count: usize, total_offset: Vec2) -> bool {
        !self.config.lock
            && lorgnette_gesture::should_claim(
                contact_count,
                total_offset,
                self.config.move_threshold_sq,
                self.config.double_tap_threshold_ms.is_some(),
            )
    }

    /// Resets to `(zoom 1, left 0, top 0)`, through the constraint solver.
    pub fn reset(&mut self) {
        self.set_state(ViewState::default());
    }

    /// Sets the view state directly, through the constraint solver.
    pub fn set_state(&mut self, state: ViewState) {
        let next = self.apply_constraint(state);
        self.commit(next);
    }

    /// Zooms by `factor`, keeping `center` (in surface coordinates) fixed.
    ///
    /// The factor is saturated against the zoom bounds first so the pan
    /// stays anchored when zoom is already at a limit. Non-positive factors
    /// are ignored.
    pub fn zoom_by(&mut self, factor: f64, center: Point) {
        if factor <= 0.0 {
            return;
        }
        let factor = match &self.resolved {
            Some(c) => c.constrain_zoom_delta(factor, self.state.zoom),
            None => factor,
        };
        let anchor = center.to_vec2();
        let proposed = ViewState {
            zoom: self.state.zoom * factor,
            pan: (self.state.pan - anchor) * factor + anchor,
        };
        let next = self.apply_constraint(proposed);
        self.commit(next);
    }

    /// Discrete zoom-in about the surface center.
    pub fn zoom_in(&mut self) {
        self.zoom_by(self.config.double_tap_zoom, self.surface.center());
    }

    /// Discrete zoom-out about the surface center.
    pub fn zoom_out(&mut self) {
        self.zoom_by(1.0 / self.config.double_tap_zoom, self.surface.center());
    }

    /// Handles a wheel event at `center` with a signed vertical delta.
    /// Positive deltas zoom in by the configured wheel factor, negative
    /// deltas zoom out by its reciprocal.
    pub fn wheel(&mut self, center: Point, delta_y: f64) {
        let factor = if delta_y > 0.0 {
            self.config.wheel_zoom
        } else {
            1.0 / self.config.wheel_zoom
        };
        self.zoom_by(factor, center);
    }

    /// Feeds a movement event through the gesture recognizer, committing
    /// any proposed state. Ignored while locked.
    pub fn handle_move(&mut self, event: &MoveEvent) {
        if self.config.lock {
            return;
        }
        if let Some(next) = self.recognizer.on_move(event, self.state, self.resolved.as_ref()) {
            self.commit(next);
        }
    }

    /// Handles the release of the last contact.
    ///
    /// Checks the release against the double-tap window (when configured),
    /// zooming in about the release position (out, when `shift` is set), then
    /// returns the recognizer to idle.
    pub fn handle_release(&mut self, timestamp_ms: f64, position: Point, shift: bool) {
        if let Some(threshold) = self.config.double_tap_threshold_ms
            && self.taps.on_release(timestamp_ms, threshold)
        {
            let factor = if shift {
                1.0 / self.config.double_tap_zoom
            } else {
                self.config.double_tap_zoom
            };
            self.zoom_by(factor, position);
        }
        self.recognizer.end();
    }

    /// Abandons any in-progress gesture without committing anything. Used
    /// when the input source loses its contacts without a release.
    pub fn handle_cancel(&mut self) {
        self.recognizer.end();
    }

    /// Replaces the viewBox, re-deriving the base transform and resolved
    /// constraint while keeping the committed view state.
    pub fn set_view_box(&mut self, view_box: Rect) {
        if self.view_box == view_box {
            return;
        }
        self.view_box = view_box;
        self.rederive();
    }

    /// Replaces the surface rectangle (for example on resize), re-deriving
    /// the base transform and resolved constraint while keeping the
    /// committed view state.
    pub fn set_surface(&mut self, surface: Rect) {
        if self.surface == surface {
            return;
        }
        self.surface = surface;
        self.rederive();
    }

    /// Replaces the configuration, re-deriving everything derived from it.
    pub fn set_config(&mut self, config: ViewportConfig) {
        self.config = config;
        self.rederive();
    }

    /// Snapshot of the current controller state for debugging and
    /// inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            view_box: self.view_box,
            surface: self.surface,
            base: self.base,
            state: self.state,
            is_panning: self.is_panning(),
            is_zooming: self.is_zooming(),
        }
    }

    fn apply_constraint(&self, state: ViewState) -> ViewState {
        match &self.resolved {
            Some(c) => c.constrain(state),
            None => state,
        }
    }

    fn commit(&mut self, next: ViewState) {
        self.state = next;
        let transform = self.base.with_view(&self.state);
        self.sink.present(&transform);
    }

    fn rederive(&mut self) {
        self.base = fit_transform(
            self.view_box,
            self.surface,
            self.config.align,
            self.config.meet_or_slice,
        );
        self.resolved = self
            .config
            .constrain
            .as_ref()
            .map(|spec| spec.resolve(&self.base, self.surface.size()));
        let next = self.apply_constraint(self.state);
        self.commit(next);
    }
}

impl<S> core::fmt::Debug for Viewport<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Viewport")
            .field("view_box", &self.view_box)
            .field("surface", &self.surface)
            .field("config", &self.config)
            .field("base", &self.base)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Content coordinate extent being fitted.
    pub view_box: Rect,
    /// Rendering surface extent in device coordinates.
    pub surface: Rect,
    /// Base viewBox-to-surface transform.
    pub base: FitTransform,
    /// Committed view state.
    pub state: ViewState,
    /// Whether a one-contact drag is in progress.
    pub is_panning: bool,
    /// Whether a two-contact pinch is in progress.
    pub is_zooming: bool,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Vec2};

    use lorgnette_extent::{Combine, ConstraintSpec};
    use lorgnette_gesture::MoveEvent;
    use lorgnette_viewbox::{FitTransform, ViewState};

    use super::{Viewport, ViewportConfig};
    use crate::sink::RenderSink;

    fn approx(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[derive(Debug, Default)]
    struct Recorder {
        presented: usize,
        last: Option<FitTransform>,
    }

    impl RenderSink for Recorder {
        fn present(&mut self, transform: &FitTransform) {
            self.presented += 1;
            self.last = Some(*transform);
        }
    }

    fn square_viewport(config: ViewportConfig) -> Viewport<()> {
        Viewport::new(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(0.0, 0.0, 100.0, 100.0),
            config,
            (),
        )
    }

    #[test]
    fn drag_commits_the_exact_displacement() {
        let mut vp = square_viewport(ViewportConfig::default());

        vp.handle_move(&MoveEvent::single(Point::new(10.0, 10.0)));
        assert!(vp.is_panning());
        vp.handle_move(&MoveEvent::single(Point::new(40.0, 25.0)));

        approx(vp.state().pan.x, 30.0);
        approx(vp.state().pan.y, 15.0);
        approx(vp.state().zoom, 1.0);

        vp.handle_release(500.0, Point::new(40.0, 25.0), false);
        assert!(!vp.is_panning());
        // The committed state survives the release.
        approx(vp.state().pan.x, 30.0);
    }

    #[test]
    fn pinch_commits_the_doubled_zoom() {
        let mut vp = square_viewport(ViewportConfig::default());

        vp.handle_move(&MoveEvent::pair(Point::new(0.0, 0.0), Point::new(100.0, 0.0)));
        assert!(vp.is_zooming());
        vp.handle_move(&MoveEvent::pair(Point::new(0.0, 0.0), Point::new(200.0, 0.0)));

        approx(vp.state().zoom, 2.0);
        approx(vp.state().pan.x, 0.0);
        approx(vp.state().pan.y, 0.0);
    }

    #[test]
    fn double_tap_zooms_about_the_release_point() {
        let mut vp = square_viewport(ViewportConfig {
            double_tap_threshold_ms: Some(300.0),
            ..Default::default()
        });

        vp.handle_release(1000.0, Point::new(60.0, 40.0), false);
        approx(vp.state().zoom, 1.0);

        // 150ms later: a double-tap, zooming in by the default 1.3.
        vp.handle_release(1150.0, Point::new(60.0, 40.0), false);
        approx(vp.state().zoom, 1.3);
        approx(vp.state().pan.x, (0.0 - 60.0) * 1.3 + 60.0);
        approx(vp.state().pan.y, (0.0 - 40.0) * 1.3 + 40.0);

        // 850ms later: too slow, nothing happens.
        let before = vp.state();
        vp.handle_release(2000.0, Point::new(60.0, 40.0), false);
        assert_eq!(vp.state(), before);
    }

    #[test]
    fn shifted_double_tap_zooms_out() {
        let mut vp = square_viewport(ViewportConfig {
            double_tap_threshold_ms: Some(300.0),
            ..Default::default()
        });

        vp.handle_release(0.0, Point::new(50.0, 50.0), true);
        vp.handle_release(100.0, Point::new(50.0, 50.0), true);
        approx(vp.state().zoom, 1.0 / 1.3);
    }

    #[test]
    fn zoom_by_round_trips_without_constraints() {
        let mut vp = square_viewport(ViewportConfig::default());
        vp.set_state(ViewState::new(1.0, 12.0, -8.0));

        let center = Point::new(33.0, 47.0);
        vp.zoom_by(1.7, center);
        vp.zoom_by(1.0 / 1.7, center);

        approx(vp.state().zoom, 1.0);
        approx(vp.state().pan.x, 12.0);
        approx(vp.state().pan.y, -8.0);
    }

    #[test]
    fn zoom_in_and_out_center_on_the_surface() {
        let mut vp = Viewport::new(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(0.0, 0.0, 400.0, 400.0),
            ViewportConfig::default(),
            (),
        );

        vp.zoom_in();
        approx(vp.state().zoom, 1.3);
        approx(vp.state().pan.x, (0.0 - 200.0) * 1.3 + 200.0);

        vp.zoom_out();
        approx(vp.state().zoom, 1.0);
        approx(vp.state().pan.x, 0.0);
    }

    #[test]
    fn wheel_direction_selects_the_factor() {
        let mut vp = square_viewport(ViewportConfig::default());

        vp.wheel(Point::new(0.0, 0.0), 3.0);
        approx(vp.state().zoom, 1.2);

        vp.wheel(Point::new(0.0, 0.0), -3.0);
        approx(vp.state().zoom, 1.0);
    }

    #[test]
    fn non_positive_zoom_factors_are_ignored() {
        let mut vp = square_viewport(ViewportConfig::default());
        vp.zoom_by(0.0, Point::new(50.0, 50.0));
        vp.zoom_by(-2.0, Point::new(50.0, 50.0));
        approx(vp.state().zoom, 1.0);
    }

    #[test]
    fn constraints_apply_to_initial_state_and_reset() {
        let config = ViewportConfig {
            constrain: Some(ConstraintSpec {
                combine: Combine::Static,
                scale_extent: (2.0, 4.0),
                translate_extent: Rect::new(
                    f64::NEG_INFINITY,
                    f64::NEG_INFINITY,
                    f64::INFINITY,
                    f64::INFINITY,
                ),
            }),
            ..Default::default()
        };
        let mut vp = square_viewport(config);
        approx(vp.state().zoom, 2.0);

        vp.set_state(ViewState::new(10.0, 0.0, 0.0));
        approx(vp.state().zoom, 4.0);

        vp.reset();
        approx(vp.state().zoom, 2.0);
    }

    #[test]
    fn constrained_drag_stays_inside_the_extent() {
        let config = ViewportConfig {
            constrain: Some(ConstraintSpec {
                combine: Combine::Static,
                scale_extent: (0.0, f64::INFINITY),
                translate_extent: Rect::new(0.0, 0.0, 100.0, 100.0),
            }),
            ..Default::default()
        };
        let mut vp = square_viewport(config);

        vp.handle_move(&MoveEvent::single(Point::new(0.0, 0.0)));
        vp.handle_move(&MoveEvent::single(Point::new(500.0, 0.0)));

        // The 100-unit extent exactly fills the surface; no pan is legal.
        approx(vp.state().pan.x, 0.0);
    }

    #[test]
    fn sink_sees_every_commit() {
        let mut vp = Viewport::new(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(0.0, 0.0, 100.0, 100.0),
            ViewportConfig::default(),
            Recorder::default(),
        );
        assert_eq!(vp.sink().presented, 1);

        vp.handle_move(&MoveEvent::single(Point::new(0.0, 0.0)));
        // Gesture start only snapshots; nothing is committed or presented.
        assert_eq!(vp.sink().presented, 1);

        vp.handle_move(&MoveEvent::single(Point::new(10.0, 5.0)));
        assert_eq!(vp.sink().presented, 2);
        let last = vp.sink().last.unwrap();
        approx(last.translate.x, 10.0);
        approx(last.translate.y, 5.0);
    }

    #[test]
    fn resize_rederives_base_but_keeps_state() {
        let mut vp = square_viewport(ViewportConfig::default());
        vp.set_state(ViewState::new(2.0, 10.0, 10.0));

        vp.set_surface(Rect::new(0.0, 0.0, 200.0, 200.0));
        approx(vp.base_transform().scale.x, 2.0);
        approx(vp.state().zoom, 2.0);
        approx(vp.state().pan.x, 10.0);

        // Setting an identical surface is a no-op (no extra commit).
        let mut counting = Viewport::new(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(0.0, 0.0, 100.0, 100.0),
            ViewportConfig::default(),
            Recorder::default(),
        );
        counting.set_surface(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(counting.sink().presented, 1);
    }

    #[test]
    fn lock_disables_gestures_but_not_programmatic_zoom() {
        let mut vp = square_viewport(ViewportConfig {
            lock: true,
            ..Default::default()
        });

        vp.handle_move(&MoveEvent::single(Point::new(0.0, 0.0)));
        vp.handle_move(&MoveEvent::single(Point::new(50.0, 50.0)));
        approx(vp.state().pan.x, 0.0);
        assert!(!vp.should_claim(2, Vec2::ZERO));

        vp.zoom_in();
        approx(vp.state().zoom, 1.3);
    }

    #[test]
    fn claiming_follows_threshold_and_contact_count() {
        let vp = square_viewport(ViewportConfig::default());
        assert!(vp.should_claim(2, Vec2::ZERO));
        assert!(vp.should_claim(1, Vec2::new(5.0, 0.0)));
        assert!(!vp.should_claim(1, Vec2::new(2.0, 2.0)));
    }

    #[test]
    fn cancel_abandons_the_gesture_without_commit() {
        let mut vp = square_viewport(ViewportConfig::default());
        vp.handle_move(&MoveEvent::single(Point::new(0.0, 0.0)));
        vp.handle_cancel();
        assert!(!vp.is_panning());
        approx(vp.state().pan.x, 0.0);
    }

    #[test]
    fn debug_info_reflects_the_controller() {
        let vp = square_viewport(ViewportConfig::default());
        let info = vp.debug_info();
        assert_eq!(info.state, ViewState::default());
        assert!(!info.is_panning);
        assert!(!info.is_zooming);
    }
}
