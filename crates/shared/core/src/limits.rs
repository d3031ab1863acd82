//! Fixed trading constants for a session
//!
//! Built once from configuration and never mutated afterwards.

use crate::values::{Position, Price, Volume};
use serde::{Deserialize, Serialize};

/// Lot, limit and tick constants shared by every component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingLimits {
    /// Quantity of every resting order
    pub lot_size: Volume,
    /// Symmetric bound on the absolute net position
    pub position_limit: Position,
    /// Tick size in cents
    pub tick_size: Price,
    /// Lowest bid the venue accepts
    pub minimum_bid: Price,
    /// Highest ask the venue accepts
    pub maximum_ask: Price,
}

impl Default for TradingLimits {
    fn default() -> Self {
        Self {
            lot_size: 10,
            position_limit: 100,
            tick_size: 100,
            minimum_bid: 1,
            maximum_ask: 2_147_483_647,
        }
    }
}

impl TradingLimits {
    /// Lowest bid rounded up onto the tick grid. A sell at this price always crosses.
    pub fn min_bid_nearest_tick(&self) -> Price {
        (self.minimum_bid + self.tick_size) / self.tick_size * self.tick_size
    }

    /// Highest ask rounded down onto the tick grid. A buy at this price always crosses.
    pub fn max_ask_nearest_tick(&self) -> Price {
        self.maximum_ask / self.tick_size * self.tick_size
    }

    /// Price shift applied to both quotes for the given inventory.
    ///
    /// Whole lots only; the division truncates toward zero.
    pub fn inventory_adjustment(&self, position: Position) -> i64 {
        -(position / self.lot_size as i64) * self.tick_size as i64
    }
}
