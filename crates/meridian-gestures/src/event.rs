//! Pointer actions and click kinds.

use crate::error::GestureError;
use glam::Vec2;

/// Sentinel for a pointer position that is not applicable to an action.
pub const NO_POSITION: Vec2 = Vec2::new(-1.0, -1.0);

/// Raw pointer action reported by the platform touch layer.
///
/// Wire codes `0..=5` match [`PointerAction::from_code`] for bridges that
/// forward actions as integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PointerAction {
    /// First pointer touched down.
    PrimaryDown = 0,
    /// Second pointer touched down.
    SecondaryDown = 1,
    /// One or both pointers moved.
    Move = 2,
    /// The platform cancelled the touch sequence.
    Cancel = 3,
    /// First pointer lifted.
    PrimaryUp = 4,
    /// Second pointer lifted.
    SecondaryUp = 5,
}

impl PointerAction {
    /// Decode a wire code from a platform bridge.
    pub fn from_code(code: u8) -> Result<Self, GestureError> {
        match code {
            0 => Ok(Self::PrimaryDown),
            1 => Ok(Self::SecondaryDown),
            2 => Ok(Self::Move),
            3 => Ok(Self::Cancel),
            4 => Ok(Self::PrimaryUp),
            5 => Ok(Self::SecondaryUp),
            other => Err(GestureError::UnknownAction(other)),
        }
    }

    /// Wire code of this action.
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Click category reported to a click listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickKind {
    /// One quick tap.
    Single,
    /// A press held past the long-press timeout.
    Long,
    /// Two quick taps at the same spot.
    Double,
    /// A quick two-finger tap.
    Dual,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_codes_round_trip() {
        for code in 0..=5 {
            let action = PointerAction::from_code(code).unwrap();
            assert_eq!(action.code(), code);
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert_eq!(
            PointerAction::from_code(6),
            Err(GestureError::UnknownAction(6))
        );
    }
}
