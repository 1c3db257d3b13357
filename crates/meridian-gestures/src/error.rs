//! Error types for the gesture engine.

use thiserror::Error;

/// Errors that can occur while feeding platform input to the engine.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureError {
    /// A platform bridge passed an action code outside the wire protocol.
    #[error("unknown pointer action code: {0}")]
    UnknownAction(u8),
}
