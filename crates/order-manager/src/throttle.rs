//! Outbound message budget
//!
//! The venue caps how many insert/cancel messages a client may send per
//! second. Timestamps of recent messages are kept in a sliding window read
//! from the injected clock.

use crate::error::{Error, Result};
use chrono::Duration;
use std::collections::VecDeque;
use std::sync::Arc;
use tandem_core::Timestamp;
use tandem_ports::Clock;

pub struct MessageThrottle {
    clock: Arc<dyn Clock>,
    window: Duration,
    max_messages: usize,
    sent: VecDeque<Timestamp>,
}

impl MessageThrottle {
    /// Budget of `max_messages` per one-second window
    pub fn per_second(clock: Arc<dyn Clock>, max_messages: usize) -> Self {
        Self::new(clock, Duration::seconds(1), max_messages)
    }

    pub fn new(clock: Arc<dyn Clock>, window: Duration, max_messages: usize) -> Self {
        Self {
            clock,
            window,
            max_messages,
            sent: VecDeque::new(),
        }
    }

    fn prune(&mut self, now: Timestamp) {
        while let Some(oldest) = self.sent.front() {
            if now - *oldest >= self.window {
                self.sent.pop_front();
            } else {
                break;
            }
        }
    }

    /// Check whether one more message fits in the current window
    pub fn check(&mut self) -> Result<()> {
        let now = self.clock.now();
        self.prune(now);
        if self.sent.len() >= self.max_messages {
            return Err(Error::Throttled {
                sent: self.sent.len(),
            });
        }
        Ok(())
    }

    /// Count a message that was sent, whether or not it was checked first
    pub fn record(&mut self) {
        let now = self.clock.now();
        self.prune(now);
        self.sent.push_back(now);
    }

    /// Messages counted in the current window
    pub fn in_window(&mut self) -> usize {
        let now = self.clock.now();
        self.prune(now);
        self.sent.len()
    }
}
