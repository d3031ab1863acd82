//! Tandem Core Domain
//!
//! Pure domain types for the Tandem pair-trading client.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod instruments;
pub mod limits;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{Lifespan, Side};
pub use instruments::Instrument;
pub use limits::TradingLimits;
pub use values::{OrderId, Position, Price, Timestamp, Volume, NO_ORDER};
