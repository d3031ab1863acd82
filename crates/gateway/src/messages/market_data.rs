//! Market data message types

use serde::{Deserialize, Serialize};
use tandem_core::{Instrument, Price, Volume};

/// Order book level (price + volume)
///
/// The feed pads missing levels with zero price and zero volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookLevel {
    pub price: Price,
    pub volume: Volume,
}

impl BookLevel {
    /// Create a new book level
    pub fn new(price: Price, volume: Volume) -> Self {
        Self { price, volume }
    }

    /// Check if this level is feed padding rather than a real price
    pub fn is_padding(&self) -> bool {
        self.price == 0
    }
}

/// Top-N snapshot for one instrument
///
/// Used for both order book updates and trade ticks; asks ascend and bids
/// descend by construction of the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSnapshot {
    pub instrument: Instrument,
    pub sequence: u64,
    pub asks: Vec<BookLevel>,
    pub bids: Vec<BookLevel>,
}

impl BookSnapshot {
    /// Create a new snapshot
    pub fn new(
        instrument: Instrument,
        sequence: u64,
        asks: Vec<BookLevel>,
        bids: Vec<BookLevel>,
    ) -> Self {
        Self {
            instrument,
            sequence,
            asks,
            bids,
        }
    }

    /// Build a snapshot from the parallel price/volume arrays the feed delivers
    pub fn from_arrays(
        instrument: Instrument,
        sequence: u64,
        ask_prices: &[Price],
        ask_volumes: &[Volume],
        bid_prices: &[Price],
        bid_volumes: &[Volume],
    ) -> Self {
        let zip = |prices: &[Price], volumes: &[Volume]| {
            prices
                .iter()
                .zip(volumes)
                .map(|(p, v)| BookLevel::new(*p, *v))
                .collect()
        };
        Self::new(
            instrument,
            sequence,
            zip(ask_prices, ask_volumes),
            zip(bid_prices, bid_volumes),
        )
    }

    /// Ask levels carrying a real price
    pub fn live_asks(&self) -> impl Iterator<Item = &BookLevel> + '_ {
        self.asks.iter().filter(|l| !l.is_padding())
    }

    /// Bid levels carrying a real price
    pub fn live_bids(&self) -> impl Iterator<Item = &BookLevel> + '_ {
        self.bids.iter().filter(|l| !l.is_padding())
    }
}
