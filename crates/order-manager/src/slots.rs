//! Quote Slots
//!
//! One slot per side. A slot is either Idle or Resting on exactly one order.
//! Every change of slot state is reported as a [`SlotTransition`] so callers
//! (and tests) can audit the sequence, in particular a cancel followed by a
//! fresh submission within one book update.

use crate::registry::RestingOrder;
use tandem_core::{OrderId, Price, Side};
use tandem_gateway::{CancelOrder, Command, InsertOrder};

/// State of one side's quote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuoteSlot {
    /// No outstanding order on this side
    #[default]
    Idle,
    /// Order submitted; awaiting fill or removal
    Resting { order_id: OrderId, price: Price },
}

impl QuoteSlot {
    pub fn is_idle(&self) -> bool {
        matches!(self, QuoteSlot::Idle)
    }

    /// Id of the resting order, if any
    pub fn order_id(&self) -> Option<OrderId> {
        match self {
            QuoteSlot::Idle => None,
            QuoteSlot::Resting { order_id, .. } => Some(*order_id),
        }
    }

    /// Live price of the resting order, if any
    pub fn price(&self) -> Option<Price> {
        match self {
            QuoteSlot::Idle => None,
            QuoteSlot::Resting { price, .. } => Some(*price),
        }
    }
}

/// An audited change of slot state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotTransition {
    /// Resting → Idle: target moved away from the live price, cancel sent
    Cancelled {
        side: Side,
        order_id: OrderId,
        live_price: Price,
        target: Price,
    },
    /// Idle → Resting: new order sent
    Submitted { side: Side, order: RestingOrder },
    /// Resting → Idle: venue reported the order gone (filled, cancelled, expired or rejected)
    Released { side: Side, order_id: OrderId },
}

impl SlotTransition {
    pub fn side(&self) -> Side {
        match self {
            Self::Cancelled { side, .. } | Self::Submitted { side, .. } | Self::Released { side, .. } => {
                *side
            }
        }
    }

    /// Outbound command this transition requires, if any
    pub fn command(&self) -> Option<Command> {
        match self {
            Self::Cancelled { order_id, .. } => Some(Command::Cancel(CancelOrder {
                client_order_id: *order_id,
            })),
            Self::Submitted { order, .. } => Some(Command::Insert(InsertOrder {
                client_order_id: order.client_order_id,
                side: order.side,
                price: order.price,
                volume: order.volume,
                lifespan: order.lifespan,
            })),
            Self::Released { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tandem_core::Lifespan;

    #[test]
    fn test_slot_accessors() {
        let idle = QuoteSlot::Idle;
        assert!(idle.is_idle());
        assert_eq!(idle.order_id(), None);
        assert_eq!(idle.price(), None);

        let resting = QuoteSlot::Resting {
            order_id: 4,
            price: 10100,
        };
        assert!(!resting.is_idle());
        assert_eq!(resting.order_id(), Some(4));
        assert_eq!(resting.price(), Some(10100));
    }

    #[test]
    fn test_transition_commands() {
        let cancel = SlotTransition::Cancelled {
            side: Side::Buy,
            order_id: 3,
            live_price: 10000,
            target: 10100,
        };
        assert_eq!(
            cancel.command(),
            Some(Command::Cancel(CancelOrder { client_order_id: 3 }))
        );

        let submit = SlotTransition::Submitted {
            side: Side::Sell,
            order: RestingOrder::new(4, Side::Sell, 10200, 10, Lifespan::ImmediateOrCancel),
        };
        match submit.command() {
            Some(Command::Insert(insert)) => {
                assert_eq!(insert.client_order_id, 4);
                assert_eq!(insert.side, Side::Sell);
                assert_eq!(insert.lifespan, Lifespan::ImmediateOrCancel);
            }
            other => panic!("Expected insert, got {:?}", other),
        }

        let released = SlotTransition::Released {
            side: Side::Sell,
            order_id: 4,
        };
        assert_eq!(released.command(), None);
        assert_eq!(released.side(), Side::Sell);
    }
}
