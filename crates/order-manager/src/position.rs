//! Position Tracking and Hedging
//!
//! Holds the signed net position in the tracked instrument. A fill on one of
//! our resting orders is the only thing that moves it, and every such fill
//! is answered with exactly one offsetting hedge on the paired instrument at
//! a price that always crosses.
//!
//! Hedge fills are counted for the session statistics but never fed back into
//! the position.

use log::info;
use std::collections::HashMap;
use tandem_core::{OrderId, Position, Side, TradingLimits, Volume};
use tandem_gateway::{HedgeFilled, HedgeOrder, OrderFilled, OrderStatus};

/// Informational counters for a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Fills on resting orders
    pub fill_count: u64,
    pub bought_volume: Volume,
    pub sold_volume: Volume,
    /// Hedge orders sent
    pub hedge_count: u64,
    /// Volume reported filled on hedge orders
    pub hedged_volume: Volume,
    /// Sum of the latest fees reported for each order
    pub total_fees: i64,
}

pub struct PositionController {
    limits: TradingLimits,
    position: Position,
    stats: SessionStats,
    /// Latest cumulative fees per order still live
    fees: HashMap<OrderId, i64>,
}

impl PositionController {
    pub fn new(limits: TradingLimits) -> Self {
        Self {
            limits,
            position: 0,
            stats: SessionStats::default(),
            fees: HashMap::new(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Apply a fill on a resting order placed on `side` and build the hedge.
    ///
    /// A filled bid leaves us long, so the hedge sells at the lowest bid the
    /// venue accepts; a filled ask is hedged by buying at the highest ask.
    pub fn on_fill(&mut self, side: Side, fill: &OrderFilled, hedge_id: OrderId) -> HedgeOrder {
        let volume = fill.volume;
        let (hedge_side, hedge_price) = match side {
            Side::Buy => {
                self.position += volume as Position;
                self.stats.bought_volume += volume;
                (Side::Sell, self.limits.min_bid_nearest_tick())
            }
            Side::Sell => {
                self.position -= volume as Position;
                self.stats.sold_volume += volume;
                (Side::Buy, self.limits.max_ask_nearest_tick())
            }
        };
        self.stats.fill_count += 1;
        self.stats.hedge_count += 1;

        info!(
            "Fill on {} order {}: {} @ {}, position now {}",
            side.as_str(),
            fill.client_order_id,
            volume,
            fill.price,
            self.position
        );

        HedgeOrder {
            client_order_id: hedge_id,
            side: hedge_side,
            price: hedge_price,
            volume,
        }
    }

    pub fn on_hedge_filled(&mut self, fill: &HedgeFilled) {
        self.stats.hedged_volume += fill.volume;
        info!(
            "Hedge {} filled: {} @ avg {}",
            fill.client_order_id, fill.volume, fill.average_price
        );
    }

    /// Record the cumulative fees the venue reported for an order.
    ///
    /// The per-order entry is dropped once the order is terminal.
    pub fn record_fees(&mut self, status: &OrderStatus) {
        let order_id = status.client_order_id;
        let previous = if status.is_terminal() {
            self.fees.remove(&order_id)
        } else {
            self.fees.insert(order_id, status.fees)
        };
        self.stats.total_fees += status.fees - previous.unwrap_or(0);
    }
}
