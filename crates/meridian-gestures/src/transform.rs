//! Geometric transforms that convert pointer deltas into view mutations.
//!
//! Everything here works through the [`MapView`] interface only. A view
//! reporting a non-finite projection yields a zero transform for that
//! frame; the caller's gesture state is never affected by it.

use crate::config::MAX_PITCH_FOR_PAN_LIMITING;
use crate::view::MapView;
use glam::Vec2;

/// Ground-plane translation that moves the point under `start` to `end`,
/// in map meters.
///
/// Both screen points are projected at the elevation under `start`. Above
/// the pan-limiting pitch the delta is clamped to the on-screen pixel
/// distance to keep pans near the horizon bounded.
pub fn translation_between(view: &dyn MapView, start: Vec2, end: Vec2) -> Vec2 {
    let elevation = view.elevation_at(start);
    let (Some(from), Some(to)) = (
        view.screen_to_ground_plane(start, elevation),
        view.screen_to_ground_plane(end, elevation),
    ) else {
        return Vec2::ZERO;
    };

    let mut delta = from - to;
    if !delta.is_finite() {
        return Vec2::ZERO;
    }
    if view.pitch() > MAX_PITCH_FOR_PAN_LIMITING {
        let limit = (end - start).length() / view.pixels_per_meter();
        if delta.length() > limit {
            delta = delta.normalize_or_zero() * limit;
        }
    }
    delta
}

/// Apply a zoom delta while keeping `anchor` fixed on the ground plane.
pub fn zoom_about(view: &mut dyn MapView, delta: f32, anchor: Vec2) {
    with_anchor(view, anchor, |v| v.zoom_by(delta));
}

/// Apply a rotation delta while keeping `anchor` fixed on the ground plane.
pub fn rotate_about(view: &mut dyn MapView, radians: f32, anchor: Vec2) {
    with_anchor(view, anchor, |v| v.rotate_by(radians));
}

/// Run a view mutation, then translate so the ground point under `anchor`
/// stays screen-fixed. The correction is skipped when either projection
/// fails.
fn with_anchor(view: &mut dyn MapView, anchor: Vec2, mutate: impl FnOnce(&mut dyn MapView)) {
    let before = view.screen_to_ground_plane(anchor, 0.0);
    mutate(view);
    let after = view.screen_to_ground_plane(anchor, 0.0);
    if let (Some(before), Some(after)) = (before, after) {
        let correction = before - after;
        if correction.is_finite() {
            view.translate(correction.x, correction.y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::PlanarView;
    use approx::assert_relative_eq;

    #[test]
    fn test_translation_moves_start_to_end() {
        let view = PlanarView::new(800.0, 600.0).with_zoom(10.0);
        let delta = translation_between(&view, Vec2::new(400.0, 300.0), Vec2::new(430.0, 300.0));
        // Dragging right pulls the view center left.
        assert_relative_eq!(delta.x, -30.0 / 1024.0, epsilon = 1e-6);
        assert_relative_eq!(delta.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_translation_zero_for_zero_delta() {
        let view = PlanarView::new(800.0, 600.0).with_zoom(10.0);
        let delta = translation_between(&view, Vec2::new(123.0, 456.0), Vec2::new(123.0, 456.0));
        assert_eq!(delta, Vec2::ZERO);
    }

    #[test]
    fn test_zoom_about_keeps_anchor_fixed() {
        let mut view = PlanarView::new(800.0, 600.0).with_zoom(10.0);
        let anchor = Vec2::new(550.0, 180.0);
        let before = view.screen_to_ground_plane(anchor, 0.0).unwrap();

        zoom_about(&mut view, 1.3, anchor);

        let after = view.screen_to_ground_plane(anchor, 0.0).unwrap();
        assert_relative_eq!(view.zoom(), 11.3, epsilon = 1e-6);
        assert_relative_eq!(before.x, after.x, epsilon = 1e-6);
        assert_relative_eq!(before.y, after.y, epsilon = 1e-6);
    }

    #[test]
    fn test_rotate_about_keeps_anchor_fixed() {
        let mut view = PlanarView::new(800.0, 600.0).with_zoom(10.0);
        let anchor = Vec2::new(250.0, 420.0);
        let before = view.screen_to_ground_plane(anchor, 0.0).unwrap();

        rotate_about(&mut view, 0.7, anchor);

        let after = view.screen_to_ground_plane(anchor, 0.0).unwrap();
        assert_relative_eq!(view.rotation(), 0.7, epsilon = 1e-6);
        assert_relative_eq!(before.x, after.x, epsilon = 1e-5);
        assert_relative_eq!(before.y, after.y, epsilon = 1e-5);
    }

    /// View whose ground projection blows up away from the screen center,
    /// the way a near-horizon perspective projection does.
    struct HorizonView {
        inner: PlanarView,
        exaggeration: f32,
    }

    impl MapView for HorizonView {
        fn width(&self) -> f32 {
            self.inner.width()
        }
        fn height(&self) -> f32 {
            self.inner.height()
        }
        fn pixels_per_meter(&self) -> f32 {
            self.inner.pixels_per_meter()
        }
        fn pixel_scale(&self) -> f32 {
            self.inner.pixel_scale()
        }
        fn zoom(&self) -> f32 {
            self.inner.zoom()
        }
        fn pitch(&self) -> f32 {
            self.inner.pitch()
        }
        fn max_pitch(&self) -> f32 {
            self.inner.max_pitch()
        }
        fn translate(&mut self, dx: f32, dy: f32) {
            self.inner.translate(dx, dy);
        }
        fn zoom_by(&mut self, delta: f32) {
            self.inner.zoom_by(delta);
        }
        fn rotate_by(&mut self, radians: f32) {
            self.inner.rotate_by(radians);
        }
        fn tilt_by(&mut self, radians: f32) {
            self.inner.tilt_by(radians);
        }
        fn screen_to_ground_plane(&self, pos: Vec2, elevation: f32) -> Option<Vec2> {
            self.inner
                .screen_to_ground_plane(pos, elevation)
                .map(|ground| ground * self.exaggeration)
        }
        fn elevation_at(&self, pos: Vec2) -> f32 {
            self.inner.elevation_at(pos)
        }
    }

    #[test]
    fn test_pan_limited_above_max_pitch() {
        let mut view = HorizonView {
            inner: PlanarView::new(800.0, 600.0).with_zoom(10.0),
            exaggeration: 50.0,
        };
        view.tilt_by(80.0_f32.to_radians());

        let start = Vec2::new(400.0, 300.0);
        let end = Vec2::new(400.0, 330.0);
        let delta = translation_between(&view, start, end);
        let limit = (end - start).length() / view.pixels_per_meter();
        assert_relative_eq!(delta.length(), limit, epsilon = 1e-6);
    }

    #[test]
    fn test_pan_not_limited_below_max_pitch() {
        let view = HorizonView {
            inner: PlanarView::new(800.0, 600.0).with_zoom(10.0),
            exaggeration: 50.0,
        };

        let start = Vec2::new(400.0, 300.0);
        let end = Vec2::new(400.0, 330.0);
        let delta = translation_between(&view, start, end);
        let limit = (end - start).length() / view.pixels_per_meter();
        assert!(delta.length() > limit);
    }
}
