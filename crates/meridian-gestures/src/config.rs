//! Gesture tuning constants and per-view configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Exponential decay rate for kinetic panning, per second.
pub const DAMPING_PAN: f32 = 4.0;
/// Exponential decay rate for kinetic zooming, per second.
pub const DAMPING_ZOOM: f32 = 6.0;
/// Minimum release speed that arms a kinetic pan, in screen px/s.
pub const THRESHOLD_START_PAN: f32 = 350.0;
/// Pan speed below which a kinetic pan stops, in screen px/s.
pub const THRESHOLD_STOP_PAN: f32 = 24.0;
/// Minimum release speed that arms a kinetic zoom, in zoom levels/s.
pub const THRESHOLD_START_ZOOM: f32 = 1.0;
/// Zoom speed below which a kinetic zoom stops, in zoom levels/s.
pub const THRESHOLD_STOP_ZOOM: f32 = 0.3;
/// Maximum delay between the taps of a double tap.
pub const DOUBLE_TAP_TIMEOUT: Duration = Duration::from_millis(300);
/// Minimum press duration for a long-press click.
pub const LONG_PRESS_TIMEOUT: Duration = Duration::from_millis(500);
/// Single-pointer pan hold-off after one pointer of a dual gesture lifts.
pub const DUAL_STOP_HOLD_DURATION: Duration = Duration::from_millis(500);
/// Kinetic arming hold-off after a dual gesture ends.
pub const DUAL_KINETIC_HOLD_DURATION: Duration = Duration::from_millis(200);
/// Maximum movement for a press to still count as a tap, in inches.
pub const TAP_MOVEMENT_THRESHOLD_INCHES: f32 = 0.1;
/// Maximum vertical finger separation for a tilt candidate, in inches.
pub const GUESS_MAX_DELTA_Y_INCHES: f32 = 1.0;
/// Minimum same-direction swipe length that classifies a tilt, in inches.
pub const GUESS_MIN_SWIPE_LENGTH_SAME: f32 = 0.1;
/// Minimum opposite-direction swipe length that classifies rotate/scale, in inches.
pub const GUESS_MIN_SWIPE_LENGTH_OPPOSITE: f32 = 0.075;
/// Dominance factor at which a sticky gesture switches between rotate and scale.
pub const ROTATION_SCALING_THRESHOLD_STICKY: f32 = 0.3;
/// Zoom levels per pixel of vertical drag during a double-tap drag.
pub const SINGLE_POINTER_ZOOM_SENSITIVITY: f32 = 0.005;
/// Pitch above which ground-plane pan deltas are clamped, in radians.
pub const MAX_PITCH_FOR_PAN_LIMITING: f32 = 75.0 * std::f32::consts::PI / 180.0;
/// Fallback dots-per-inch when the platform cannot report one.
pub const DEFAULT_DPI: f32 = 160.0;

/// Policy for combining rotation and scaling in a two-finger gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanningMode {
    /// Rotate and scale apply simultaneously.
    Free,
    /// Lock to rotate or scale, switching mid-gesture when the other dominates.
    Sticky,
    /// Lock to rotate or scale until both pointers release.
    StickyFinal,
}

/// Tunable gesture settings for one map view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Device dots per inch, for converting pixel distances to physical units.
    pub dpi: f32,
    /// Rotate/scale combination policy for dual-pointer gestures.
    pub panning_mode: PanningMode,
    /// Enable single-finger panning.
    pub pan_enabled: bool,
    /// Enable pinch zooming and drag zooming.
    pub zoom_enabled: bool,
    /// Enable two-finger rotation.
    pub rotate_enabled: bool,
    /// Enable two-finger tilting.
    pub tilt_enabled: bool,
    /// Enable double-tap recognition.
    pub double_tap_enabled: bool,
    /// Enable drag-to-zoom after a double tap.
    pub double_tap_drag_enabled: bool,
}

impl GestureConfig {
    /// Tap threshold in pixels at the configured DPI.
    pub fn tap_threshold_px(&self) -> f32 {
        TAP_MOVEMENT_THRESHOLD_INCHES * self.dpi
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            panning_mode: PanningMode::Free,
            pan_enabled: true,
            zoom_enabled: true,
            rotate_enabled: true,
            tilt_enabled: true,
            double_tap_enabled: true,
            double_tap_drag_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GestureConfig::default();
        assert_eq!(config.dpi, DEFAULT_DPI);
        assert_eq!(config.panning_mode, PanningMode::Free);
        assert!(config.pan_enabled);
        assert!(config.double_tap_drag_enabled);
    }

    #[test]
    fn test_tap_threshold_scales_with_dpi() {
        let mut config = GestureConfig::default();
        assert_eq!(config.tap_threshold_px(), 16.0);

        config.dpi = 320.0;
        assert_eq!(config.tap_threshold_px(), 32.0);
    }
}
