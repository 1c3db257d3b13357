//! Kinetic fling driver: exponential velocity decay for pan and zoom.

use crate::config::{DAMPING_PAN, DAMPING_ZOOM, THRESHOLD_STOP_PAN, THRESHOLD_STOP_ZOOM};
use crate::view::MapView;
use glam::Vec2;

/// Velocity state integrated by the per-frame kinetic tick.
///
/// Pan velocity is held in map meters per second and converted to screen
/// pixels per second for the stop check, so a fling feels the same at any
/// zoom level. Zoom velocity is in zoom levels per second.
#[derive(Debug, Clone, Default)]
pub struct KineticMotion {
    pub(crate) velocity_pan: Vec2,
    pub(crate) velocity_zoom: f32,
}

impl KineticMotion {
    /// Create a motion at rest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pan velocity in map meters per second.
    pub fn velocity_pan(&self) -> Vec2 {
        self.velocity_pan
    }

    /// Zoom velocity in zoom levels per second.
    pub fn velocity_zoom(&self) -> f32 {
        self.velocity_zoom
    }

    /// Whether either velocity is above its stop threshold for `view`.
    pub fn is_active(&self, view: &dyn MapView) -> bool {
        let pan_px_per_s =
            self.velocity_pan.length() * view.pixels_per_meter() / view.pixel_scale();
        pan_px_per_s > THRESHOLD_STOP_PAN || self.velocity_zoom.abs() > THRESHOLD_STOP_ZOOM
    }

    /// Integrate one tick of `dt` seconds, mutating `view`.
    ///
    /// Returns whether the fling is still in progress. Both velocities are
    /// zeroed once the motion falls below the stop thresholds.
    pub fn update(&mut self, view: &mut dyn MapView, dt: f32) -> bool {
        if !self.is_active(&*view) {
            self.stop();
            return false;
        }
        self.velocity_pan *= 1.0 - (dt * DAMPING_PAN).min(1.0);
        view.translate(dt * self.velocity_pan.x, dt * self.velocity_pan.y);
        self.velocity_zoom *= 1.0 - (dt * DAMPING_ZOOM).min(1.0);
        view.zoom_by(dt * self.velocity_zoom);
        true
    }

    /// Zero both velocities.
    pub fn stop(&mut self) {
        self.velocity_pan = Vec2::ZERO;
        self.velocity_zoom = 0.0;
    }
}
