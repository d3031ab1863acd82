//! Tandem Strategy
//!
//! Decision core of the pair trader:
//! - Order book store holding the latest snapshot per leg
//! - Depth aggregation into running volume-at-price maps
//! - Signal engine producing inventory-adjusted targets and arbitrage tests
//! - The `PairArbitrageTrader` wiring them to the order manager
//!
//! ## Architecture
//!
//! ```text
//! Gateway In ──► book update ──► BookStore ──┐
//!                            └─► DepthAccumulator
//!                                            │
//!                                            ▼
//!                                     ┌──────────────┐
//!                                     │ SignalEngine │ targets + eligibility
//!                                     └──────┬───────┘
//!                                            ▼
//!                                     ┌──────────────┐
//!                                     │ OrderManager │ cancel stale, submit
//!                                     └──────┬───────┘
//!                                            │ Commands
//!                                            ▼
//! Gateway Out ◄──── insert / cancel / hedge ─┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tandem_strategy::{EligibilityPolicy, PairArbitrageTrader, Strategy};
//!
//! let mut trader = PairArbitrageTrader::new(limits, EligibilityPolicy::default(), throttle);
//! for command in trader.on_event(&event) {
//!     sink.send(&command).await?;
//! }
//! ```

pub mod depth;
pub mod orderbook;
pub mod signal;
pub mod strategy;
pub mod trader;

// Re-export main types
pub use depth::{DepthAccumulator, DepthProfile, volume_weighted_average};
pub use orderbook::{BookStore, InstrumentBook};
pub use signal::{Eligibility, EligibilityPolicy, QuoteTargets, SignalEngine};
pub use strategy::Strategy;
pub use trader::PairArbitrageTrader;
