//! Tandem Clock Infrastructure
//!
//! Time sources behind the [`Clock`] port:
//!
//! - [`SystemClock`]: wall-clock time for live sessions
//! - [`ManualClock`]: frozen time that only moves when told to, for tests
//!   and recorded-feed replays
//!
//! ## Usage
//!
//! ```ignore
//! use tandem_clock::{Clock, ManualClock};
//! use chrono::Duration;
//!
//! let clock = ManualClock::starting_now();
//! let t0 = clock.now();
//! clock.advance(Duration::milliseconds(250));
//! assert_eq!(clock.now() - t0, Duration::milliseconds(250));
//! ```

mod manual;
mod system;

pub use manual::ManualClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use tandem_ports::Clock;
