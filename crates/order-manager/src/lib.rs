//! Tandem Order Manager
//!
//! Sits between the signal engine and the gateway, responsible for:
//! - **Quote Slots**: at most one resting bid and one resting ask, with
//!   explicit Idle/Resting transitions
//! - **Order Registry**: every order id still believed live, by side, used to
//!   classify fill/status/error callbacks
//! - **Limit Gate**: pre-trade position and exposure checks
//! - **Message Throttle**: outbound insert/cancel budget per second
//! - **Position & Hedging**: signed inventory and the offsetting hedge issued
//!   on every fill
//!
//! ## Architecture
//!
//! ```text
//! Signal Engine ──► targets ──► ┌──────────────────────────────────┐
//!                               │          Order Manager           │
//!                               │  cancel stale ─► Resting → Idle  │
//!                               │  limit gate + throttle           │
//!                               │  submit       ─► Idle → Resting  │
//!                               └───────────────┬──────────────────┘
//!                                               │ Insert / Cancel
//! Gateway Out ◄─────────────────────────────────┘
//!
//! Gateway In ──► Fill ──► registry side ──► Position Controller ──► Hedge
//!            ──► Status / Error ──► registry + slot release
//! ```

pub mod error;
pub mod ids;
pub mod manager;
pub mod position;
pub mod registry;
pub mod risk;
pub mod slots;
pub mod throttle;

// Re-export main types
pub use error::{Error, Result};
pub use ids::OrderIdGenerator;
pub use manager::OrderManager;
pub use position::{PositionController, SessionStats};
pub use registry::{OrderRegistry, RestingOrder};
pub use risk::PositionGate;
pub use slots::{QuoteSlot, SlotTransition};
pub use throttle::MessageThrottle;
