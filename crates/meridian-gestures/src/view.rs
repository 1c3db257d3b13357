//! Map view interface consumed by the gesture engine, plus a flat
//! reference implementation for tests and demos.

use glam::Vec2;

/// Narrow interface through which gestures query and mutate a map view.
///
/// Implementations own the projection math; the engine only composes the
/// primitive mutations below, so visual stability (e.g. zooming about a
/// fixed screen anchor) holds for any consistent implementation.
pub trait MapView {
    /// Viewport width in pixels.
    fn width(&self) -> f32;
    /// Viewport height in pixels.
    fn height(&self) -> f32;
    /// Screen pixels per map meter at the view center.
    fn pixels_per_meter(&self) -> f32;
    /// Display density scale factor.
    fn pixel_scale(&self) -> f32;
    /// Current zoom level.
    fn zoom(&self) -> f32;
    /// Current pitch in radians.
    fn pitch(&self) -> f32;
    /// Maximum pitch the view supports, in radians.
    fn max_pitch(&self) -> f32;
    /// Move the view center by a ground-plane delta in map meters.
    fn translate(&mut self, dx: f32, dy: f32);
    /// Change the zoom level by a delta.
    fn zoom_by(&mut self, delta: f32);
    /// Rotate the view by a delta in radians.
    fn rotate_by(&mut self, radians: f32);
    /// Tilt the view by a pitch delta in radians.
    fn tilt_by(&mut self, radians: f32);
    /// Project a screen position onto the ground plane at the given
    /// elevation, in map meters.
    ///
    /// Returns `None` when the position does not hit the plane or the
    /// projection is not finite.
    fn screen_to_ground_plane(&self, pos: Vec2, elevation: f32) -> Option<Vec2>;
    /// Elevation of the map surface under a screen position, in meters.
    fn elevation_at(&self, pos: Vec2) -> f32;
}

/// Flat, top-down reference implementation of [`MapView`].
///
/// Projects screen positions onto a level ground plane through the view
/// center, honoring zoom and rotation. Pitch is tracked but does not skew
/// the projection, which keeps the math exact for replay tests and demos.
#[derive(Debug, Clone)]
pub struct PlanarView {
    width: f32,
    height: f32,
    pixel_scale: f32,
    max_pitch: f32,
    /// Ground-plane position under the view center, in map meters.
    center: Vec2,
    zoom: f32,
    rotation: f32,
    pitch: f32,
}

impl PlanarView {
    /// Create a view with the given viewport size in pixels.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            pixel_scale: 1.0,
            max_pitch: std::f32::consts::FRAC_PI_2,
            center: Vec2::ZERO,
            zoom: 0.0,
            rotation: 0.0,
            pitch: 0.0,
        }
    }

    /// Set the initial zoom level.
    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }

    /// Set the display density scale factor.
    pub fn with_pixel_scale(mut self, pixel_scale: f32) -> Self {
        self.pixel_scale = pixel_scale;
        self
    }

    /// Ground-plane position under the view center, in map meters.
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Current rotation in radians.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    fn screen_center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

impl MapView for PlanarView {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn pixels_per_meter(&self) -> f32 {
        self.pixel_scale * 2_f32.powf(self.zoom)
    }

    fn pixel_scale(&self) -> f32 {
        self.pixel_scale
    }

    fn zoom(&self) -> f32 {
        self.zoom
    }

    fn pitch(&self) -> f32 {
        self.pitch
    }

    fn max_pitch(&self) -> f32 {
        self.max_pitch
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.center.x += dx;
        self.center.y += dy;
    }

    fn zoom_by(&mut self, delta: f32) {
        self.zoom += delta;
    }

    fn rotate_by(&mut self, radians: f32) {
        self.rotation += radians;
    }

    fn tilt_by(&mut self, radians: f32) {
        self.pitch = (self.pitch + radians).clamp(0.0, self.max_pitch);
    }

    fn screen_to_ground_plane(&self, pos: Vec2, _elevation: f32) -> Option<Vec2> {
        if !pos.is_finite() {
            return None;
        }
        let offset = (pos - self.screen_center()) / self.pixels_per_meter();
        Some(self.center + Vec2::from_angle(self.rotation).rotate(offset))
    }

    fn elevation_at(&self, _pos: Vec2) -> f32 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_screen_center_projects_to_view_center() {
        let view = PlanarView::new(800.0, 600.0).with_zoom(10.0);
        let ground = view
            .screen_to_ground_plane(Vec2::new(400.0, 300.0), 0.0)
            .unwrap();
        assert_eq!(ground, Vec2::ZERO);
    }

    #[test]
    fn test_projection_scales_with_zoom() {
        let mut view = PlanarView::new(800.0, 600.0).with_zoom(10.0);
        let before = view
            .screen_to_ground_plane(Vec2::new(500.0, 300.0), 0.0)
            .unwrap();
        view.zoom_by(1.0);
        let after = view
            .screen_to_ground_plane(Vec2::new(500.0, 300.0), 0.0)
            .unwrap();
        assert_relative_eq!(after.x, before.x * 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_projection_honors_rotation() {
        let mut view = PlanarView::new(800.0, 600.0).with_zoom(10.0);
        view.rotate_by(std::f32::consts::FRAC_PI_2);
        let ground = view
            .screen_to_ground_plane(Vec2::new(500.0, 300.0), 0.0)
            .unwrap();
        // A quarter turn maps the +x screen offset onto +y ground.
        assert_relative_eq!(ground.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(ground.y, 100.0 / 1024.0, epsilon = 1e-6);
    }

    #[test]
    fn test_non_finite_position_rejected() {
        let view = PlanarView::new(800.0, 600.0);
        assert!(view
            .screen_to_ground_plane(Vec2::new(f32::NAN, 0.0), 0.0)
            .is_none());
    }

    #[test]
    fn test_tilt_clamped_to_max_pitch() {
        let mut view = PlanarView::new(800.0, 600.0);
        view.tilt_by(10.0);
        assert_eq!(view.pitch(), view.max_pitch());
        view.tilt_by(-20.0);
        assert_eq!(view.pitch(), 0.0);
    }
}
