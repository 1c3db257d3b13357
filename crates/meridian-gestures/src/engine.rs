//! Gesture state machine and pointer-event dispatcher.

use crate::clock::{Clock, MonotonicClock};
use crate::config::{
    GestureConfig, PanningMode, DOUBLE_TAP_TIMEOUT, DUAL_KINETIC_HOLD_DURATION,
    DUAL_STOP_HOLD_DURATION, GUESS_MAX_DELTA_Y_INCHES, GUESS_MIN_SWIPE_LENGTH_OPPOSITE,
    GUESS_MIN_SWIPE_LENGTH_SAME, LONG_PRESS_TIMEOUT, MAX_PITCH_FOR_PAN_LIMITING,
    ROTATION_SCALING_THRESHOLD_STICKY, SINGLE_POINTER_ZOOM_SENSITIVITY, THRESHOLD_START_PAN,
    THRESHOLD_START_ZOOM,
};
use crate::error::GestureError;
use crate::event::{ClickKind, PointerAction};
use crate::kinetic::KineticMotion;
use crate::listener::{ClickListener, InteractionListener, ListenerBroker};
use crate::transform::{rotate_about, translation_between, zoom_about};
use crate::view::MapView;
use glam::Vec2;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, trace};

/// Interpretation the state machine currently holds for the touch
/// sequence. Exactly one mode is active at any moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureMode {
    /// One pointer down, possibly a tap.
    SingleClickGuess,
    /// Two pointers down, possibly a two-finger tap.
    DualClickGuess,
    /// One pointer panning.
    SinglePan,
    /// One pointer drag-zooming after a double tap.
    SingleZoom,
    /// Two pointers down, gesture family undecided.
    DualGuess,
    /// Two pointers tilting.
    DualTilt,
    /// Two pointers rotating (sticky policies).
    DualRotate,
    /// Two pointers scaling (sticky policies).
    DualScale,
    /// Two pointers rotating and scaling freely.
    DualFree,
}

impl GestureMode {
    /// Whether this mode is an in-progress two-pointer gesture.
    fn is_dual(self) -> bool {
        matches!(
            self,
            Self::DualGuess | Self::DualTilt | Self::DualRotate | Self::DualScale | Self::DualFree
        )
    }
}

/// Multi-touch gesture engine for one map view.
///
/// Feed pointer actions through [`GestureEngine::on_touch`] from the UI
/// thread and drive [`GestureEngine::update`] once per frame while a fling
/// is in progress. The engine mutates the view only through the
/// [`MapView`] interface and never re-orders, coalesces, or drops actions,
/// so the resulting view mutations are deterministic for a given input
/// sequence.
pub struct GestureEngine {
    config: GestureConfig,
    clock: Box<dyn Clock>,
    listeners: Arc<ListenerBroker>,
    kinetic: KineticMotion,

    mode: GestureMode,
    pointers_down: u8,
    no_dual_pointer_yet: bool,
    interaction_consumed: bool,

    prev1: Vec2,
    prev2: Vec2,
    swipe1: Vec2,
    swipe2: Vec2,

    first_tap_pos: Vec2,
    first_tap_time: Option<Instant>,
    p1_down_time: Option<Instant>,
    dual_release_time: Option<Instant>,
    last_move_time: Option<Instant>,

    double_tap_start_pos: Vec2,
    single_zoom_start_zoom: f32,
}

impl GestureEngine {
    /// Create an engine with the given configuration and the system clock.
    pub fn new(config: GestureConfig) -> Self {
        Self::with_clock(config, Box::new(MonotonicClock))
    }

    /// Create an engine that samples time from `clock`.
    pub fn with_clock(config: GestureConfig, clock: Box<dyn Clock>) -> Self {
        Self {
            config,
            clock,
            listeners: Arc::new(ListenerBroker::default()),
            kinetic: KineticMotion::new(),
            mode: GestureMode::SingleClickGuess,
            pointers_down: 0,
            no_dual_pointer_yet: true,
            interaction_consumed: false,
            prev1: Vec2::ZERO,
            prev2: Vec2::ZERO,
            swipe1: Vec2::ZERO,
            swipe2: Vec2::ZERO,
            first_tap_pos: Vec2::ZERO,
            first_tap_time: None,
            p1_down_time: None,
            dual_release_time: None,
            last_move_time: None,
            double_tap_start_pos: Vec2::ZERO,
            single_zoom_start_zoom: 0.0,
        }
    }

    /// Current gesture mode.
    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    /// Number of pointers currently down.
    pub fn pointers_down(&self) -> u8 {
        self.pointers_down
    }

    /// Current configuration.
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Kinetic velocity state.
    pub fn kinetic(&self) -> &KineticMotion {
        &self.kinetic
    }

    /// Set the device DPI used for physical-unit thresholds.
    pub fn set_dpi(&mut self, dpi: f32) {
        self.config.dpi = dpi;
    }

    /// Set the rotate/scale combination policy.
    pub fn set_panning_mode(&mut self, mode: PanningMode) {
        self.config.panning_mode = mode;
    }

    /// Enable or disable single-finger panning.
    pub fn set_pan_enabled(&mut self, enabled: bool) {
        self.config.pan_enabled = enabled;
    }

    /// Enable or disable pinch zooming and drag zooming.
    pub fn set_zoom_enabled(&mut self, enabled: bool) {
        self.config.zoom_enabled = enabled;
    }

    /// Enable or disable two-finger rotation.
    pub fn set_rotate_enabled(&mut self, enabled: bool) {
        self.config.rotate_enabled = enabled;
    }

    /// Enable or disable two-finger tilting.
    pub fn set_tilt_enabled(&mut self, enabled: bool) {
        self.config.tilt_enabled = enabled;
    }

    /// Enable or disable double-tap recognition.
    pub fn set_double_tap_enabled(&mut self, enabled: bool) {
        self.config.double_tap_enabled = enabled;
    }

    /// Enable or disable drag-to-zoom after a double tap.
    pub fn set_double_tap_drag_enabled(&mut self, enabled: bool) {
        self.config.double_tap_drag_enabled = enabled;
    }

    /// Shared listener holders, for registration from any thread.
    pub fn listeners(&self) -> Arc<ListenerBroker> {
        Arc::clone(&self.listeners)
    }

    /// Install or clear the click listener.
    pub fn set_click_listener(&self, listener: Option<Arc<dyn ClickListener>>) {
        self.listeners.set_click_listener(listener);
    }

    /// Install or clear the interaction listener.
    pub fn set_interaction_listener(&self, listener: Option<Arc<dyn InteractionListener>>) {
        self.listeners.set_interaction_listener(listener);
    }

    /// Route one pointer action into the state machine.
    ///
    /// Positions are in device pixels; pass [`crate::event::NO_POSITION`]
    /// for a pointer the action does not carry. Returns whether the
    /// interaction listener has consumed the current continuous gesture.
    pub fn on_touch(
        &mut self,
        view: &mut dyn MapView,
        action: PointerAction,
        pos1: Vec2,
        pos2: Vec2,
    ) -> bool {
        // A duplicate down without an intervening up implies a cancel
        // before the new action; a stray up is dropped outright.
        match action {
            PointerAction::PrimaryDown if self.pointers_down > 0 => self.cancel(),
            PointerAction::SecondaryDown if self.pointers_down != 1 => self.cancel(),
            PointerAction::PrimaryUp | PointerAction::SecondaryUp if self.pointers_down == 0 => {
                return self.interaction_consumed;
            }
            _ => {}
        }

        match action {
            PointerAction::PrimaryDown => self.on_primary_down(view, pos1),
            PointerAction::SecondaryDown => self.on_secondary_down(pos1, pos2),
            PointerAction::Move => self.on_move(view, pos1, pos2),
            PointerAction::Cancel => self.cancel(),
            PointerAction::PrimaryUp => self.on_primary_up(view, pos1, pos2),
            PointerAction::SecondaryUp => self.on_secondary_up(view, pos1, pos2),
        }

        self.track_pointer_count(action);
        self.interaction_consumed
    }

    /// Decode and route a wire-coded action from a platform bridge.
    pub fn on_touch_raw(
        &mut self,
        view: &mut dyn MapView,
        code: u8,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    ) -> Result<bool, GestureError> {
        let action = PointerAction::from_code(code)?;
        Ok(self.on_touch(view, action, Vec2::new(x1, y1), Vec2::new(x2, y2)))
    }

    /// Advance the kinetic fling by `dt` seconds.
    ///
    /// Returns whether a fling is still in progress. Negative `dt` is
    /// treated as zero; the fling only runs while no pointer is down.
    pub fn update(&mut self, view: &mut dyn MapView, dt: f32) -> bool {
        let dt = dt.max(0.0);
        if self.pointers_down > 0 {
            return false;
        }
        self.kinetic.update(view, dt)
    }

    /// Abort any gesture in progress and return to the idle state.
    pub fn cancel(&mut self) {
        self.kinetic.stop();
        self.set_mode(GestureMode::SingleClickGuess);
        self.pointers_down = 0;
        self.interaction_consumed = false;
        self.p1_down_time = None;
        self.swipe1 = Vec2::ZERO;
        self.swipe2 = Vec2::ZERO;
    }

    fn track_pointer_count(&mut self, action: PointerAction) {
        match action {
            PointerAction::PrimaryDown | PointerAction::SecondaryDown => {
                self.pointers_down = (self.pointers_down + 1).min(2);
            }
            PointerAction::PrimaryUp | PointerAction::SecondaryUp => {
                self.pointers_down = self.pointers_down.saturating_sub(1);
            }
            PointerAction::Cancel => self.pointers_down = 0,
            PointerAction::Move => {}
        }
    }

    fn set_mode(&mut self, mode: GestureMode) {
        if self.mode != mode {
            trace!(from = ?self.mode, to = ?mode, "gesture mode change");
            self.mode = mode;
        }
    }

    fn on_primary_down(&mut self, view: &mut dyn MapView, pos1: Vec2) {
        let now = self.clock.now();
        self.p1_down_time = Some(now);
        self.last_move_time = Some(now);
        self.no_dual_pointer_yet = true;
        self.interaction_consumed = false;
        self.kinetic.stop();
        self.prev1 = pos1;

        let second_tap = self.config.double_tap_enabled
            && self.mode == GestureMode::SingleClickGuess
            && self
                .first_tap_time
                .is_some_and(|t| now.saturating_duration_since(t) < DOUBLE_TAP_TIMEOUT)
            && pos1.distance(self.first_tap_pos) < self.config.tap_threshold_px();

        if second_tap {
            // Consume the pending tap so a third touch cannot chain.
            self.first_tap_time = None;
            if self.config.double_tap_drag_enabled
                && !self.consume_interaction(false, true, false, false)
            {
                self.start_single_zoom(view, pos1);
            }
        } else {
            self.first_tap_time = Some(now);
            self.first_tap_pos = pos1;
        }
    }

    fn start_single_zoom(&mut self, view: &dyn MapView, pos1: Vec2) {
        self.single_zoom_start_zoom = view.zoom();
        self.double_tap_start_pos = pos1;
        self.prev1 = pos1;
        self.set_mode(GestureMode::SingleZoom);
    }

    fn on_secondary_down(&mut self, pos1: Vec2, pos2: Vec2) {
        self.no_dual_pointer_yet = false;
        match self.mode {
            GestureMode::SingleClickGuess => {
                self.prev2 = pos2;
                self.swipe1 = Vec2::ZERO;
                self.swipe2 = Vec2::ZERO;
                self.set_mode(GestureMode::DualClickGuess);
            }
            GestureMode::SinglePan | GestureMode::SingleZoom => {
                self.start_dual_pointer(pos1, pos2);
            }
            _ => {}
        }
    }

    fn start_dual_pointer(&mut self, pos1: Vec2, pos2: Vec2) {
        self.prev1 = pos1;
        self.prev2 = pos2;
        self.swipe1 = Vec2::ZERO;
        self.swipe2 = Vec2::ZERO;
        self.set_mode(GestureMode::DualGuess);
    }

    fn on_move(&mut self, view: &mut dyn MapView, pos1: Vec2, pos2: Vec2) {
        if self.interaction_consumed {
            return;
        }
        let now = self.clock.now();
        match self.mode {
            GestureMode::SingleClickGuess => {
                if pos1.distance(self.prev1) > self.config.tap_threshold_px()
                    && self.config.pan_enabled
                    && !self.consume_interaction(true, false, false, false)
                {
                    self.set_mode(GestureMode::SinglePan);
                    self.prev1 = pos1;
                    self.last_move_time = Some(now);
                }
            }
            GestureMode::DualClickGuess => {
                if !self.consume_interaction(true, true, true, true) {
                    self.set_mode(GestureMode::DualGuess);
                    self.guess_then_dispatch(view, pos1, pos2);
                }
            }
            GestureMode::SinglePan => {
                let held = self
                    .dual_release_time
                    .is_some_and(|t| now.saturating_duration_since(t) < DUAL_STOP_HOLD_DURATION);
                if !held {
                    self.single_pointer_pan(view, pos1, now);
                }
            }
            GestureMode::SingleZoom => self.single_pointer_zoom(view, pos1, now),
            GestureMode::DualGuess => self.guess_then_dispatch(view, pos1, pos2),
            GestureMode::DualTilt
            | GestureMode::DualRotate
            | GestureMode::DualScale
            | GestureMode::DualFree => self.dual_move(view, pos1, pos2),
        }
    }

    /// Classify an undecided dual gesture; when a family is chosen the
    /// triggering move is dispatched under the new mode right away, with
    /// the pre-classification anchors.
    fn guess_then_dispatch(&mut self, view: &mut dyn MapView, pos1: Vec2, pos2: Vec2) {
        self.classify_dual(pos1, pos2);
        if self.mode != GestureMode::DualGuess && self.mode.is_dual() {
            self.dual_move(view, pos1, pos2);
        }
    }

    fn classify_dual(&mut self, pos1: Vec2, pos2: Vec2) {
        let tilt_family = self.config.tilt_enabled;
        let spin_family = self.config.rotate_enabled || self.config.zoom_enabled;
        match (tilt_family, spin_family) {
            (false, false) => {
                self.set_mode(GestureMode::SingleClickGuess);
                return;
            }
            (true, false) => {
                self.set_mode(GestureMode::DualTilt);
                return;
            }
            (false, true) => {
                self.set_mode(GestureMode::DualFree);
                return;
            }
            (true, true) => {}
        }

        let dpi = self.config.dpi;
        if (pos1.y - pos2.y).abs() / dpi > GUESS_MAX_DELTA_Y_INCHES {
            // Fingers too far apart vertically to be a tilt.
            self.set_mode(GestureMode::DualFree);
            return;
        }

        self.swipe1 += (pos1 - self.prev1) / dpi;
        self.swipe2 += (pos2 - self.prev2) / dpi;
        let longest = self.swipe1.length().max(self.swipe2.length());
        let vertical_product = self.swipe1.y * self.swipe2.y;

        if longest > GUESS_MIN_SWIPE_LENGTH_OPPOSITE && vertical_product <= 0.0 {
            let mode = match self.config.panning_mode {
                PanningMode::Free => GestureMode::DualFree,
                PanningMode::Sticky | PanningMode::StickyFinal => GestureMode::DualRotate,
            };
            self.set_mode(mode);
        } else if longest > GUESS_MIN_SWIPE_LENGTH_SAME && vertical_product > 0.0 {
            self.set_mode(GestureMode::DualTilt);
        } else {
            self.prev1 = pos1;
            self.prev2 = pos2;
        }
    }

    fn dual_move(&mut self, view: &mut dyn MapView, pos1: Vec2, pos2: Vec2) {
        match self.mode {
            GestureMode::DualTilt => self.dual_pointer_tilt(view, pos1),
            GestureMode::DualRotate | GestureMode::DualScale => {
                if self.config.panning_mode == PanningMode::Sticky {
                    self.resolve_sticky(pos1, pos2);
                }
                let rotate = self.mode == GestureMode::DualRotate;
                self.dual_pointer_pan(view, pos1, pos2, rotate, !rotate);
            }
            GestureMode::DualFree => self.dual_pointer_pan(view, pos1, pos2, true, true),
            _ => {}
        }
    }

    /// Dominance of rotation over scaling since the previous move:
    /// positive when the angle change dominates the distance-ratio change
    /// by at least 2x, negative for the reverse, zero when neither leads.
    fn rotating_scaling_factor(&self, pos1: Vec2, pos2: Vec2) -> f32 {
        let prev_span = self.prev2 - self.prev1;
        let span = pos2 - pos1;
        let prev_dist = prev_span.length();
        let dist = span.length();
        if prev_dist <= f32::EPSILON || dist <= f32::EPSILON {
            return 0.0;
        }

        let angle_change =
            angle_delta(span.y.atan2(span.x) - prev_span.y.atan2(prev_span.x)).abs();
        let scale_change = (dist / prev_dist - 1.0).abs();
        if angle_change >= 2.0 * scale_change {
            angle_change
        } else if scale_change >= 2.0 * angle_change {
            -scale_change
        } else {
            0.0
        }
    }

    fn resolve_sticky(&mut self, pos1: Vec2, pos2: Vec2) {
        let factor = self.rotating_scaling_factor(pos1, pos2);
        if factor > ROTATION_SCALING_THRESHOLD_STICKY {
            self.set_mode(GestureMode::DualRotate);
        } else if factor < -ROTATION_SCALING_THRESHOLD_STICKY {
            self.set_mode(GestureMode::DualScale);
        }
    }

    fn single_pointer_pan(&mut self, view: &mut dyn MapView, pos1: Vec2, now: Instant) {
        let delta = translation_between(&*view, self.prev1, pos1);
        view.translate(delta.x, delta.y);
        if let Some(last) = self.last_move_time {
            let dt = now.saturating_duration_since(last).as_secs_f32();
            if dt > 0.0 {
                self.kinetic.velocity_pan = delta / dt;
            }
        }
        self.last_move_time = Some(now);
        self.prev1 = pos1;
    }

    fn single_pointer_zoom(&mut self, view: &mut dyn MapView, pos1: Vec2, now: Instant) {
        let delta = (pos1.y - self.prev1.y) * SINGLE_POINTER_ZOOM_SENSITIVITY;
        zoom_about(view, delta, self.double_tap_start_pos);
        if let Some(last) = self.last_move_time {
            let dt = now.saturating_duration_since(last).as_secs_f32();
            if dt > 0.0 {
                self.kinetic.velocity_zoom = delta / dt;
            }
        }
        self.last_move_time = Some(now);
        self.prev1 = pos1;
    }

    fn dual_pointer_pan(
        &mut self,
        view: &mut dyn MapView,
        pos1: Vec2,
        pos2: Vec2,
        rotate: bool,
        scale: bool,
    ) {
        let prev_center = (self.prev1 + self.prev2) * 0.5;
        let center = (pos1 + pos2) * 0.5;

        if self.config.pan_enabled {
            let delta = translation_between(&*view, prev_center, center);
            view.translate(delta.x, delta.y);
        }
        if scale && self.config.zoom_enabled {
            let prev_dist = self.prev1.distance(self.prev2);
            let dist = pos1.distance(pos2);
            if prev_dist > 0.0 && dist > 0.0 {
                zoom_about(view, (dist / prev_dist).log2(), center);
            }
        }
        if rotate && self.config.rotate_enabled {
            let prev_span = self.prev2 - self.prev1;
            let span = pos2 - pos1;
            let delta = angle_delta(span.y.atan2(span.x) - prev_span.y.atan2(prev_span.x));
            if delta != 0.0 {
                rotate_about(view, delta, center);
            }
        }

        self.prev1 = pos1;
        self.prev2 = pos2;
    }

    fn dual_pointer_tilt(&mut self, view: &mut dyn MapView, pos1: Vec2) {
        let angle = -std::f32::consts::PI * (pos1.y - self.prev1.y) / view.height();
        let pitch = view.pitch();
        let max = view.max_pitch().min(MAX_PITCH_FOR_PAN_LIMITING);
        let target = (pitch + angle).clamp(0.0, max);
        if target != pitch {
            view.tilt_by(target - pitch);
        }
        self.prev1 = pos1;
    }

    fn on_primary_up(&mut self, view: &mut dyn MapView, pos1: Vec2, pos2: Vec2) {
        let now = self.clock.now();
        let tap_duration = self.p1_down_time.map(|t| now.saturating_duration_since(t));
        let move_dist = pos1.distance(self.prev1);
        let tap_threshold = self.config.tap_threshold_px();

        match self.mode {
            GestureMode::SingleClickGuess => {
                if let Some(duration) = tap_duration {
                    if move_dist < tap_threshold && duration >= LONG_PRESS_TIMEOUT {
                        self.emit_click(ClickKind::Long, pos1);
                    } else if duration < DOUBLE_TAP_TIMEOUT {
                        self.emit_click(ClickKind::Single, self.prev1);
                    }
                }
            }
            GestureMode::DualClickGuess => self.set_mode(GestureMode::SingleClickGuess),
            GestureMode::SinglePan => {
                self.set_mode(GestureMode::SingleClickGuess);
                self.arm_kinetic_pan(view, now);
            }
            GestureMode::SingleZoom => {
                if let Some(duration) = tap_duration {
                    if duration < DOUBLE_TAP_TIMEOUT
                        && move_dist < tap_threshold
                        && !self.emit_click(ClickKind::Double, pos1)
                    {
                        let target = self.single_zoom_start_zoom + 1.0;
                        let delta = target - view.zoom();
                        zoom_about(view, delta, self.double_tap_start_pos);
                    }
                }
                self.set_mode(GestureMode::SingleClickGuess);
                self.arm_kinetic_zoom(now);
            }
            GestureMode::DualGuess
            | GestureMode::DualTilt
            | GestureMode::DualRotate
            | GestureMode::DualScale
            | GestureMode::DualFree => {
                // The second pointer survives and becomes the pan anchor.
                self.dual_release_time = Some(now);
                self.p1_down_time = None;
                self.prev1 = pos2;
                self.set_mode(GestureMode::SinglePan);
            }
        }
    }

    fn on_secondary_up(&mut self, view: &mut dyn MapView, pos1: Vec2, pos2: Vec2) {
        let now = self.clock.now();
        match self.mode {
            GestureMode::DualClickGuess => {
                let quick = self
                    .p1_down_time
                    .is_some_and(|t| now.saturating_duration_since(t) < DOUBLE_TAP_TIMEOUT);
                if quick {
                    let center = (pos1 + pos2) * 0.5;
                    if !self.emit_click(ClickKind::Dual, center) {
                        zoom_about(view, -1.0, center);
                    }
                }
                self.p1_down_time = None;
                self.set_mode(GestureMode::SingleClickGuess);
            }
            GestureMode::DualGuess
            | GestureMode::DualTilt
            | GestureMode::DualRotate
            | GestureMode::DualScale
            | GestureMode::DualFree => {
                self.dual_release_time = Some(now);
                self.prev1 = pos1;
                self.set_mode(GestureMode::SinglePan);
            }
            _ => {}
        }
    }

    fn arm_kinetic_pan(&mut self, view: &dyn MapView, now: Instant) {
        let recently_dual = self
            .dual_release_time
            .is_some_and(|t| now.saturating_duration_since(t) < DUAL_KINETIC_HOLD_DURATION);
        let speed_px_per_s =
            self.kinetic.velocity_pan.length() * view.pixels_per_meter() / view.pixel_scale();
        if !self.no_dual_pointer_yet || recently_dual || speed_px_per_s < THRESHOLD_START_PAN {
            self.kinetic.velocity_pan = Vec2::ZERO;
        }
    }

    fn arm_kinetic_zoom(&mut self, now: Instant) {
        let recently_dual = self
            .dual_release_time
            .is_some_and(|t| now.saturating_duration_since(t) < DUAL_KINETIC_HOLD_DURATION);
        if !self.no_dual_pointer_yet
            || recently_dual
            || self.kinetic.velocity_zoom.abs() < THRESHOLD_START_ZOOM
        {
            self.kinetic.velocity_zoom = 0.0;
        }
    }

    fn consume_interaction(
        &mut self,
        panning: bool,
        zooming: bool,
        rotating: bool,
        tilting: bool,
    ) -> bool {
        let consumed = self
            .listeners
            .dispatch_interaction(panning, zooming, rotating, tilting);
        if consumed {
            debug!(panning, zooming, rotating, tilting, "interaction consumed");
            self.interaction_consumed = true;
        }
        consumed
    }

    fn emit_click(&mut self, kind: ClickKind, pos: Vec2) -> bool {
        debug!(?kind, x = pos.x, y = pos.y, "map click");
        self.listeners.dispatch_click(kind, pos.x, pos.y)
    }
}

/// Wrap an angle difference into `(-PI, PI]`.
fn angle_delta(radians: f32) -> f32 {
    use std::f32::consts::PI;
    let mut wrapped = radians;
    while wrapped > PI {
        wrapped -= 2.0 * PI;
    }
    while wrapped <= -PI {
        wrapped += 2.0 * PI;
    }
    wrapped
}
