//! Tandem Runner
//!
//! Puts a trader on an exchange session:
//!
//! - **Config**: JSON configuration with defaults and validation
//! - **Session**: single-task actor feeding events to the strategy and
//!   forwarding its commands
//! - **Replay**: wiring for a recorded JSON-lines feed
//!
//! ## Architecture
//!
//! ```text
//!  recorded feed ──► feed task ──► EventPublisher
//!                                       │ channel
//!                                       ▼
//!                          ┌─────────────────────────┐
//!                          │      TraderSession      │
//!                          │  PairArbitrageTrader    │
//!                          └────────────┬────────────┘
//!                                       │ Command
//!                                       ▼
//!                                  CommandSink (stdout / channel)
//! ```

pub mod config;
pub mod error;
pub mod replay;
pub mod session;

// Re-export main types
pub use config::{ConfigError, TraderConfig};
pub use error::{Result, RunnerError};
pub use replay::{build_trader, spawn_feed};
pub use session::{SessionReport, TraderSession};
