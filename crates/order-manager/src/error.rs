//! Order Manager errors
//!
//! These never escape a callback; they explain why a submission was skipped.

use tandem_core::{Position, Side};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Position limit reached for {side:?}: position={position}, limit={limit}")]
    PositionLimitReached {
        side: Side,
        position: Position,
        limit: Position,
    },

    #[error("Exposure limit reached for {side:?}: worst case={worst_case}, limit={limit}")]
    ExposureLimitReached {
        side: Side,
        worst_case: Position,
        limit: Position,
    },

    #[error("Message budget exhausted: {sent} messages in the current window")]
    Throttled { sent: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
