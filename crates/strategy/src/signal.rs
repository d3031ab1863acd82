//! Signal Engine
//!
//! Turns book state and inventory into quote targets for the tracked
//! instrument, and decides per side whether the pair is priced for an
//! arbitrage:
//!
//! - buy tracked / sell hedge when `minAsk(tracked) < maxBid(hedge)`
//! - sell tracked / buy hedge when `minAsk(hedge) < maxBid(tracked)`
//!
//! The weighted variant runs the same comparisons on accumulated depth
//! averages. Which tests must pass is an [`EligibilityPolicy`].

use crate::depth::DepthAccumulator;
use crate::orderbook::BookStore;
use log::debug;
use serde::{Deserialize, Serialize};
use tandem_core::{Instrument, Position, Price, Side, TradingLimits};

/// Which arbitrage tests gate a submission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityPolicy {
    /// Raw extremes across the visible levels only
    RawOnly,
    /// Raw extremes and accumulated depth averages must both agree
    #[default]
    RawAndWeighted,
}

/// Snapshots per instrument before the weighted test participates
const WEIGHTED_WARMUP: u64 = 2;

/// Inventory-adjusted prices for the tracked instrument
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuoteTargets {
    pub bid: Option<Price>,
    pub ask: Option<Price>,
    /// Shift applied to both sides, in cents
    pub adjustment: i64,
}

impl QuoteTargets {
    pub fn for_side(&self, side: Side) -> Option<Price> {
        match side {
            Side::Buy => self.bid,
            Side::Sell => self.ask,
        }
    }
}

/// Per-side outcome of the arbitrage tests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Eligibility {
    pub buy: bool,
    pub sell: bool,
}

impl Eligibility {
    pub fn for_side(&self, side: Side) -> bool {
        match side {
            Side::Buy => self.buy,
            Side::Sell => self.sell,
        }
    }

    fn and(self, other: Eligibility) -> Eligibility {
        Eligibility {
            buy: self.buy && other.buy,
            sell: self.sell && other.sell,
        }
    }
}

/// `a < b` with both prices present
fn below(a: Option<Price>, b: Option<Price>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a < b)
}

/// Shift a price; a result at or below zero is no price at all
fn shifted(price: Price, adjustment: i64) -> Option<Price> {
    let value = price as i64 + adjustment;
    (value > 0).then_some(value as Price)
}

pub struct SignalEngine {
    limits: TradingLimits,
    policy: EligibilityPolicy,
}

impl SignalEngine {
    pub fn new(limits: TradingLimits, policy: EligibilityPolicy) -> Self {
        Self { limits, policy }
    }

    pub fn policy(&self) -> EligibilityPolicy {
        self.policy
    }

    /// Quote targets off the tracked instrument's extremes, shifted for inventory
    pub fn targets(&self, books: &BookStore, position: Position) -> QuoteTargets {
        let adjustment = self.limits.inventory_adjustment(position);
        let tracked = Instrument::TRACKED;
        QuoteTargets {
            bid: books
                .max_bid_across_levels(tracked)
                .and_then(|p| shifted(p, adjustment)),
            ask: books
                .min_ask_across_levels(tracked)
                .and_then(|p| shifted(p, adjustment)),
            adjustment,
        }
    }

    /// Arbitrage test on raw extremes across visible levels
    pub fn raw_eligibility(&self, books: &BookStore) -> Eligibility {
        let (tracked, hedge) = (Instrument::TRACKED, Instrument::HEDGE);
        Eligibility {
            buy: below(
                books.min_ask_across_levels(tracked),
                books.max_bid_across_levels(hedge),
            ),
            sell: below(
                books.min_ask_across_levels(hedge),
                books.max_bid_across_levels(tracked),
            ),
        }
    }

    /// Arbitrage test on accumulated depth averages.
    ///
    /// Passes both sides until each instrument has been folded twice.
    pub fn weighted_eligibility(&self, depth: &DepthAccumulator) -> Eligibility {
        let (tracked, hedge) = (Instrument::TRACKED, Instrument::HEDGE);
        let warmed_up = Instrument::ALL
            .iter()
            .all(|i| depth.observations(*i) >= WEIGHTED_WARMUP);
        if !warmed_up {
            return Eligibility {
                buy: true,
                sell: true,
            };
        }
        Eligibility {
            buy: below(depth.ask_average(tracked), depth.bid_average(hedge)),
            sell: below(depth.ask_average(hedge), depth.bid_average(tracked)),
        }
    }

    /// Combined test under the configured policy
    pub fn eligibility(&self, books: &BookStore, depth: &DepthAccumulator) -> Eligibility {
        let raw = self.raw_eligibility(books);
        let combined = match self.policy {
            EligibilityPolicy::RawOnly => raw,
            EligibilityPolicy::RawAndWeighted => raw.and(self.weighted_eligibility(depth)),
        };
        debug!(
            "Eligibility {:?}: raw={:?} combined={:?}",
            self.policy, raw, combined
        );
        combined
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tandem_gateway::{BookLevel, BookSnapshot};

    fn book(instrument: Instrument, ask: Price, bid: Price) -> BookSnapshot {
        BookSnapshot::new(
            instrument,
            1,
            vec![BookLevel::new(ask, 10), BookLevel::new(ask + 100, 10)],
            vec![BookLevel::new(bid, 10), BookLevel::new(bid - 100, 10)],
        )
    }

    fn store(etf: (Price, Price), future: (Price, Price)) -> BookStore {
        let mut books = BookStore::new();
        books.update(&book(Instrument::Etf, etf.0, etf.1));
        books.update(&book(Instrument::Future, future.0, future.1));
        books
    }

    fn engine(policy: EligibilityPolicy) -> SignalEngine {
        SignalEngine::new(TradingLimits::default(), policy)
    }

    #[test]
    fn test_targets_follow_inventory() {
        let books = store((10000, 9900), (10200, 10100));
        let engine = engine(EligibilityPolicy::RawOnly);

        let flat = engine.targets(&books, 0);
        assert_eq!(flat.bid, Some(9900));
        assert_eq!(flat.ask, Some(10000));
        assert_eq!(flat.adjustment, 0);

        // Two whole lots long: quotes move down two ticks
        let long = engine.targets(&books, 25);
        assert_eq!(long.adjustment, -200);
        assert_eq!(long.for_side(Side::Buy), Some(9700));
        assert_eq!(long.for_side(Side::Sell), Some(9800));

        // Partial lots truncate toward zero
        let short = engine.targets(&books, -19);
        assert_eq!(short.adjustment, 100);
        assert_eq!(short.bid, Some(10000));
    }

    #[test]
    fn test_targets_absent_without_levels() {
        let mut books = BookStore::new();
        books.update(&BookSnapshot::new(Instrument::Etf, 1, vec![], vec![]));
        let targets = engine(EligibilityPolicy::RawOnly).targets(&books, 0);
        assert_eq!(targets.bid, None);
        assert_eq!(targets.ask, None);
    }

    #[test]
    fn test_raw_eligibility() {
        let engine = engine(EligibilityPolicy::RawOnly);

        // Tracked ask 10000 < hedge bid 10100: buy side open
        let buy = engine.raw_eligibility(&store((10000, 9900), (10200, 10100)));
        assert_eq!(buy, Eligibility { buy: true, sell: false });

        // Hedge ask 9800 < tracked bid 9900: sell side open
        let sell = engine.raw_eligibility(&store((10000, 9900), (9800, 9700)));
        assert_eq!(sell, Eligibility { buy: false, sell: true });

        // Equal prices are not an arbitrage
        let none = engine.raw_eligibility(&store((10000, 9900), (10100, 10000)));
        assert!(!none.buy && !none.sell);
    }

    #[test]
    fn test_weighted_vacuous_until_warm() {
        let engine = engine(EligibilityPolicy::RawAndWeighted);
        let mut depth = DepthAccumulator::new();
        // Would fail if it participated
        depth.fold(Instrument::Etf, &[BookLevel::new(20000, 1)], &[BookLevel::new(100, 1)]);
        depth.fold(Instrument::Etf, &[BookLevel::new(20000, 1)], &[BookLevel::new(100, 1)]);
        depth.fold(Instrument::Future, &[BookLevel::new(20000, 1)], &[BookLevel::new(100, 1)]);

        assert_eq!(
            engine.weighted_eligibility(&depth),
            Eligibility { buy: true, sell: true }
        );

        depth.fold(Instrument::Future, &[BookLevel::new(20000, 1)], &[BookLevel::new(100, 1)]);
        assert_eq!(engine.weighted_eligibility(&depth), Eligibility::default());
    }

    #[test]
    fn test_weighted_fails_on_missing_average() {
        let engine = engine(EligibilityPolicy::RawAndWeighted);
        let mut depth = DepthAccumulator::new();
        for _ in 0..2 {
            depth.fold(Instrument::Etf, &[BookLevel::new(10000, 5)], &[]);
            depth.fold(Instrument::Future, &[BookLevel::new(10200, 5)], &[BookLevel::new(10100, 5)]);
        }

        // Tracked bids never seen: sell test has nothing to compare
        let eligibility = engine.weighted_eligibility(&depth);
        assert!(eligibility.buy);
        assert!(!eligibility.sell);
    }

    #[test]
    fn test_policy_combines_as_conjunction() {
        let books = store((10000, 9900), (10200, 10100));
        let mut depth = DepthAccumulator::new();
        for _ in 0..2 {
            // Averages say the buy side is closed
            depth.fold(Instrument::Etf, &[BookLevel::new(10500, 5)], &[BookLevel::new(9900, 5)]);
            depth.fold(Instrument::Future, &[BookLevel::new(10200, 5)], &[BookLevel::new(10100, 5)]);
        }

        let raw_only = engine(EligibilityPolicy::RawOnly).eligibility(&books, &depth);
        assert!(raw_only.buy);

        let both = engine(EligibilityPolicy::RawAndWeighted).eligibility(&books, &depth);
        assert!(!both.buy);
    }

    #[test]
    fn test_policy_serde() {
        let policy: EligibilityPolicy = serde_json::from_str("\"raw_only\"").unwrap();
        assert_eq!(policy, EligibilityPolicy::RawOnly);
        assert_eq!(
            serde_json::to_string(&EligibilityPolicy::default()).unwrap(),
            "\"raw_and_weighted\""
        );
    }
}
