//! The two instruments traded as a pair
//!
//! - Future: the derivative, used only for hedging
//! - ETF: the tracked exchange-traded instrument, where resting orders live

mod instrument;

pub use instrument::Instrument;
