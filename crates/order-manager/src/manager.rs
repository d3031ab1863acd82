//! Order Manager
//!
//! Owns the bid and ask slots together with the registry, id generator,
//! limit gate and message throttle. Reconciling a side against a fresh
//! target price is two explicit steps, each reported as a transition:
//!
//! 1. [`OrderManager::cancel_if_stale`]: Resting → Idle when the target moved
//! 2. [`OrderManager::try_submit`]: Idle → Resting when every gate passes
//!
//! The slot is freed as soon as the cancel is sent; the cancelled order stays
//! in the registry until the venue confirms it gone.

use crate::ids::OrderIdGenerator;
use crate::registry::{OrderRegistry, RestingOrder};
use crate::risk::PositionGate;
use crate::slots::{QuoteSlot, SlotTransition};
use crate::throttle::MessageThrottle;
use log::debug;
use tandem_core::{Lifespan, OrderId, Position, Price, Side, TradingLimits, Volume};
use tandem_gateway::OrderStatus;

pub struct OrderManager {
    bid: QuoteSlot,
    ask: QuoteSlot,
    registry: OrderRegistry,
    ids: OrderIdGenerator,
    gate: PositionGate,
    throttle: MessageThrottle,
    lifespan: Lifespan,
}

impl OrderManager {
    pub fn new(limits: TradingLimits, throttle: MessageThrottle) -> Self {
        Self {
            bid: QuoteSlot::Idle,
            ask: QuoteSlot::Idle,
            registry: OrderRegistry::new(),
            ids: OrderIdGenerator::new(),
            gate: PositionGate::new(limits),
            throttle,
            lifespan: Lifespan::ImmediateOrCancel,
        }
    }

    pub fn slot(&self, side: Side) -> QuoteSlot {
        match side {
            Side::Buy => self.bid,
            Side::Sell => self.ask,
        }
    }

    fn slot_mut(&mut self, side: Side) -> &mut QuoteSlot {
        match side {
            Side::Buy => &mut self.bid,
            Side::Sell => &mut self.ask,
        }
    }

    pub fn registry(&self) -> &OrderRegistry {
        &self.registry
    }

    /// Id for an order placed outside the slots (hedges)
    pub fn next_order_id(&mut self) -> OrderId {
        self.ids.next_id()
    }

    /// Count a hedge against the message budget. Hedges are never held back.
    pub fn record_hedge(&mut self) {
        self.throttle.record();
    }

    /// Messages counted against the budget in the current window
    pub fn messages_in_window(&mut self) -> usize {
        self.throttle.in_window()
    }

    /// Resting → Idle if the target moved away from the live price.
    ///
    /// An absent target never cancels: no price means no action this tick.
    pub fn cancel_if_stale(&mut self, side: Side, target: Option<Price>) -> Option<SlotTransition> {
        let QuoteSlot::Resting { order_id, price } = self.slot(side) else {
            return None;
        };
        let target = target?;
        if target == price {
            return None;
        }

        self.throttle.record();
        *self.slot_mut(side) = QuoteSlot::Idle;
        Some(SlotTransition::Cancelled {
            side,
            order_id,
            live_price: price,
            target,
        })
    }

    /// Idle → Resting if the slot is free, a target exists, the pair is
    /// eligible, the limit gate passes and the message budget allows it.
    pub fn try_submit(
        &mut self,
        side: Side,
        target: Option<Price>,
        eligible: bool,
        position: Position,
    ) -> Option<SlotTransition> {
        if !self.slot(side).is_idle() || !eligible {
            return None;
        }
        let price = target?;

        let pending = self.registry.pending_volume(side);
        let volume: Volume = match self.gate.order_volume(side, position, pending) {
            Ok(volume) => volume,
            Err(e) => {
                debug!("Not quoting {}: {}", side.as_str(), e);
                return None;
            }
        };
        if let Err(e) = self.throttle.check() {
            debug!("Not quoting {}: {}", side.as_str(), e);
            return None;
        }

        let order_id = self.ids.next_id();
        let order = RestingOrder::new(order_id, side, price, volume, self.lifespan);
        self.registry.insert(order.clone());
        self.throttle.record();
        *self.slot_mut(side) = QuoteSlot::Resting { order_id, price };

        Some(SlotTransition::Submitted { side, order })
    }

    /// Side of a known order after a fill; `None` for unknown ids
    pub fn on_fill(&mut self, order_id: OrderId, volume: Volume) -> Option<Side> {
        let side = self.registry.side_of(order_id)?;
        self.registry.apply_fill(order_id, volume);
        Some(side)
    }

    /// Apply a status report. Zero remaining volume frees the slot holding
    /// the order (if any) and forgets the order, whatever the reason.
    pub fn on_status(&mut self, status: &OrderStatus) -> Option<SlotTransition> {
        let order_id = status.client_order_id;
        if !status.is_terminal() {
            self.registry.apply_status(order_id, status.remaining_volume);
            return None;
        }

        self.registry.remove(order_id);
        for side in [Side::Buy, Side::Sell] {
            if self.slot(side).order_id() == Some(order_id) {
                *self.slot_mut(side) = QuoteSlot::Idle;
                return Some(SlotTransition::Released { side, order_id });
            }
        }
        None
    }

    /// Check if an id belongs to a resting order we still track
    pub fn is_known(&self, order_id: OrderId) -> bool {
        self.registry.contains(order_id)
    }
}
