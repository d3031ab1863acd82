//! Tandem Ports
//!
//! Port definitions (traits) for the Tandem pair-trading client.
//! These define the boundaries between domain logic and infrastructure.

mod clock;

pub use clock::Clock;
