//! Order Book Store
//!
//! Latest top-N snapshot per instrument. Each update replaces the stored
//! snapshot outright; the feed already delivers the full visible depth, so
//! there are no deltas to merge.

use log::warn;
use tandem_core::{Instrument, Price};
use tandem_gateway::{BookLevel, BookSnapshot};

/// Most recent snapshot for a single instrument
#[derive(Debug, Clone, Default)]
pub struct InstrumentBook {
    /// Ask levels (ascending by price, padding removed)
    asks: Vec<BookLevel>,
    /// Bid levels (descending by price, padding removed)
    bids: Vec<BookLevel>,
    /// Sequence number of the stored snapshot
    sequence: u64,
    /// Snapshots applied so far
    updates: u64,
}

impl InstrumentBook {
    /// Replace the stored snapshot
    pub fn apply(&mut self, snapshot: &BookSnapshot) {
        self.asks = snapshot.live_asks().copied().collect();
        self.bids = snapshot.live_bids().copied().collect();
        self.sequence = snapshot.sequence;
        self.updates += 1;
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Check if at least one snapshot has been applied
    pub fn is_observed(&self) -> bool {
        self.updates > 0
    }

    /// Top ask level price
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.first().map(|l| l.price)
    }

    /// Top bid level price
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.first().map(|l| l.price)
    }

    /// Lowest ask over every level, not just the top one
    pub fn min_ask_across_levels(&self) -> Option<Price> {
        self.asks.iter().map(|l| l.price).min()
    }

    /// Highest bid over every level, not just the top one
    pub fn max_bid_across_levels(&self) -> Option<Price> {
        self.bids.iter().map(|l| l.price).max()
    }

    pub fn asks(&self) -> &[BookLevel] {
        &self.asks
    }

    pub fn bids(&self) -> &[BookLevel] {
        &self.bids
    }
}

/// Books for both legs of the pair
#[derive(Debug, Clone, Default)]
pub struct BookStore {
    books: [InstrumentBook; 2],
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a snapshot unconditionally.
    ///
    /// A sequence lower than the stored one is still applied, only logged.
    pub fn update(&mut self, snapshot: &BookSnapshot) {
        let book = &mut self.books[snapshot.instrument.index()];
        if book.is_observed() && snapshot.sequence < book.sequence() {
            warn!(
                "[{}] Out of order snapshot: sequence {} after {}",
                snapshot.instrument,
                snapshot.sequence,
                book.sequence()
            );
        }
        book.apply(snapshot);
    }

    pub fn book(&self, instrument: Instrument) -> &InstrumentBook {
        &self.books[instrument.index()]
    }

    /// Check if both legs have been seen at least once
    pub fn both_observed(&self) -> bool {
        self.books.iter().all(InstrumentBook::is_observed)
    }

    pub fn best_ask(&self, instrument: Instrument) -> Option<Price> {
        self.book(instrument).best_ask()
    }

    pub fn best_bid(&self, instrument: Instrument) -> Option<Price> {
        self.book(instrument).best_bid()
    }

    pub fn min_ask_across_levels(&self, instrument: Instrument) -> Option<Price> {
        self.book(instrument).min_ask_across_levels()
    }

    pub fn max_bid_across_levels(&self, instrument: Instrument) -> Option<Price> {
        self.book(instrument).max_bid_across_levels()
    }

    pub fn sequence(&self, instrument: Instrument) -> u64 {
        self.book(instrument).sequence()
    }
}
