//! # Meridian Gestures
//!
//! Multi-touch gesture recognition and kinetic navigation for the Meridian
//! map view.
//!
//! The engine ingests raw pointer actions (up to two simultaneous
//! pointers), disambiguates overlapping gesture hypotheses in real time,
//! and drives a map view through the narrow [`MapView`] interface:
//!
//! - pan, pinch zoom, rotate, and tilt with screen-anchored geometry
//! - single, long, double, and two-finger taps
//! - kinetic fling with exponential velocity decay
//! - application listeners that may observe or suppress interactions
//!
//! ## Example
//!
//! ```rust
//! use glam::Vec2;
//! use meridian_gestures::{
//!     GestureConfig, GestureEngine, PlanarView, PointerAction, NO_POSITION,
//! };
//!
//! let mut engine = GestureEngine::new(GestureConfig::default());
//! let mut view = PlanarView::new(800.0, 600.0).with_zoom(10.0);
//!
//! engine.on_touch(&mut view, PointerAction::PrimaryDown, Vec2::new(400.0, 300.0), NO_POSITION);
//! engine.on_touch(&mut view, PointerAction::Move, Vec2::new(430.0, 300.0), NO_POSITION);
//! engine.on_touch(&mut view, PointerAction::PrimaryUp, Vec2::new(430.0, 300.0), NO_POSITION);
//!
//! // Per-frame kinetic tick.
//! engine.update(&mut view, 1.0 / 60.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::too_many_arguments)]

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod kinetic;
pub mod listener;
pub mod transform;
pub mod view;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::{GestureConfig, PanningMode};
pub use engine::{GestureEngine, GestureMode};
pub use error::GestureError;
pub use event::{ClickKind, PointerAction, NO_POSITION};
pub use kinetic::KineticMotion;
pub use listener::{ClickListener, InteractionListener, ListenerBroker};
pub use view::{MapView, PlanarView};

/// Current version of the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
