//! Pair Arbitrage Trader
//!
//! Session-scoped controller owning every piece of mutable state: both books,
//! the depth maps, the order slots and the position. Built once per session
//! and never re-initialised.
//!
//! On each book update:
//! 1. store the snapshot and fold its depth
//! 2. once both legs have been seen, compute targets and eligibility
//! 3. cancel stale quotes, then try to submit on each idle side
//!
//! Fills on resting orders move the position and are hedged immediately on
//! the other leg.

use crate::depth::DepthAccumulator;
use crate::orderbook::BookStore;
use crate::signal::{EligibilityPolicy, SignalEngine};
use crate::strategy::Strategy;
use log::{debug, info, warn};
use tandem_core::{Position, Side, TradingLimits};
use tandem_gateway::{
    BookSnapshot, Command, HedgeFilled, OrderError, OrderFilled, OrderStatus,
};
use tandem_order_manager::{
    MessageThrottle, OrderManager, PositionController, SessionStats, SlotTransition,
};

pub struct PairArbitrageTrader {
    books: BookStore,
    depth: DepthAccumulator,
    signal: SignalEngine,
    orders: OrderManager,
    positions: PositionController,
    disconnected: bool,
    /// Slot transitions of the latest book update, in order
    transitions: Vec<SlotTransition>,
}

impl PairArbitrageTrader {
    pub fn new(limits: TradingLimits, policy: EligibilityPolicy, throttle: MessageThrottle) -> Self {
        Self {
            books: BookStore::new(),
            depth: DepthAccumulator::new(),
            signal: SignalEngine::new(limits, policy),
            orders: OrderManager::new(limits, throttle),
            positions: PositionController::new(limits),
            disconnected: false,
            transitions: Vec::new(),
        }
    }

    pub fn position(&self) -> Position {
        self.positions.position()
    }

    pub fn stats(&self) -> &SessionStats {
        self.positions.stats()
    }

    pub fn books(&self) -> &BookStore {
        &self.books
    }

    pub fn depth(&self) -> &DepthAccumulator {
        &self.depth
    }

    pub fn orders(&self) -> &OrderManager {
        &self.orders
    }

    pub fn is_disconnected(&self) -> bool {
        self.disconnected
    }

    /// Slot transitions made by the most recent book update
    pub fn last_transitions(&self) -> &[SlotTransition] {
        &self.transitions
    }

    fn reconcile(&mut self) -> Vec<Command> {
        let position = self.positions.position();
        let targets = self.signal.targets(&self.books, position);
        let eligibility = self.signal.eligibility(&self.books, &self.depth);
        debug!(
            "Targets bid={:?} ask={:?} adj={} position={}",
            targets.bid, targets.ask, targets.adjustment, position
        );

        for side in [Side::Buy, Side::Sell] {
            let cancelled = self.orders.cancel_if_stale(side, targets.for_side(side));
            self.transitions.extend(cancelled);
        }
        if !self.disconnected {
            for side in [Side::Buy, Side::Sell] {
                let submitted = self.orders.try_submit(
                    side,
                    targets.for_side(side),
                    eligibility.for_side(side),
                    position,
                );
                self.transitions.extend(submitted);
            }
        }

        for transition in &self.transitions {
            match transition {
                SlotTransition::Cancelled {
                    order_id,
                    live_price,
                    target,
                    ..
                } => info!(
                    "Cancel {} order {} @ {} (target now {})",
                    transition.side().as_str(),
                    order_id,
                    live_price,
                    target
                ),
                SlotTransition::Submitted { order, .. } => info!(
                    "Insert {} order {}: {} @ {}",
                    order.side.as_str(),
                    order.client_order_id,
                    order.volume,
                    order.price
                ),
                SlotTransition::Released { .. } => {}
            }
        }

        self.transitions.iter().filter_map(SlotTransition::command).collect()
    }
}

impl Strategy for PairArbitrageTrader {
    fn name(&self) -> &str {
        "PairArbitrageTrader"
    }

    fn on_order_book(&mut self, snapshot: &BookSnapshot) -> Vec<Command> {
        self.transitions.clear();
        self.books.update(snapshot);
        self.depth
            .fold(snapshot.instrument, &snapshot.asks, &snapshot.bids);

        if !self.books.both_observed() {
            debug!(
                "[{}] Waiting for {} book before quoting",
                snapshot.instrument,
                snapshot.instrument.paired()
            );
            return Vec::new();
        }
        self.reconcile()
    }

    fn on_trade_ticks(&mut self, ticks: &BookSnapshot) -> Vec<Command> {
        debug!(
            "[{}] Trade ticks seq={} levels={}",
            ticks.instrument,
            ticks.sequence,
            ticks.live_asks().count() + ticks.live_bids().count()
        );
        Vec::new()
    }

    fn on_order_filled(&mut self, fill: &OrderFilled) -> Vec<Command> {
        let Some(side) = self.orders.on_fill(fill.client_order_id, fill.volume) else {
            debug!("Fill for unknown order {}", fill.client_order_id);
            return Vec::new();
        };

        let hedge_id = self.orders.next_order_id();
        let hedge = self.positions.on_fill(side, fill, hedge_id);
        self.orders.record_hedge();
        info!(
            "Hedge {} order {}: {} @ {}",
            hedge.side.as_str(),
            hedge.client_order_id,
            hedge.volume,
            hedge.price
        );
        vec![Command::Hedge(hedge)]
    }

    fn on_order_status(&mut self, status: &OrderStatus) -> Vec<Command> {
        if self.orders.is_known(status.client_order_id) {
            self.positions.record_fees(status);
        }
        if let Some(released) = self.orders.on_status(status) {
            debug!("Slot released: {:?}", released);
        }
        Vec::new()
    }

    fn on_error(&mut self, error: &OrderError) -> Vec<Command> {
        warn!(
            "Error for order {}: {}",
            error.client_order_id, error.message
        );
        if error.is_order_specific() && self.orders.is_known(error.client_order_id) {
            // Rejected order is gone; free its slot as if it reported zero remaining
            self.orders
                .on_status(&OrderStatus::terminal(error.client_order_id));
        }
        Vec::new()
    }

    fn on_hedge_filled(&mut self, fill: &HedgeFilled) -> Vec<Command> {
        self.positions.on_hedge_filled(fill);
        Vec::new()
    }

    fn on_disconnect(&mut self) -> Vec<Command> {
        warn!(
            "Disconnected from exchange; position={} stats={:?}",
            self.positions.position(),
            self.positions.stats()
        );
        self.disconnected = true;
        Vec::new()
    }

    fn on_shutdown(&mut self) -> Vec<Command> {
        // Resting orders are immediate-or-cancel; nothing left to pull
        info!(
            "Shutting down; position={} stats={:?}",
            self.positions.position(),
            self.positions.stats()
        );
        Vec::new()
    }
}
