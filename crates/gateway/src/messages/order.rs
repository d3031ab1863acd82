//! Order message types

use serde::{Deserialize, Serialize};
use tandem_core::{Lifespan, NO_ORDER, OrderId, Price, Side, Volume};

/// Insert a resting order on the tracked instrument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertOrder {
    pub client_order_id: OrderId,
    pub side: Side,
    pub price: Price,
    pub volume: Volume,
    pub lifespan: Lifespan,
}

/// Cancel a previously inserted order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelOrder {
    pub client_order_id: OrderId,
}

/// Offsetting order on the hedge instrument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HedgeOrder {
    pub client_order_id: OrderId,
    pub side: Side,
    pub price: Price,
    pub volume: Volume,
}

/// One of our resting orders traded (partially or fully)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFilled {
    pub client_order_id: OrderId,
    pub price: Price,
    pub volume: Volume,
}

/// Status change of one of our resting orders
///
/// Remaining volume zero means the order is gone, whether filled, cancelled
/// or expired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStatus {
    pub client_order_id: OrderId,
    pub fill_volume: Volume,
    pub remaining_volume: Volume,
    /// Total fees for the order; negative for maker rebates
    pub fees: i64,
}

impl OrderStatus {
    /// Synthesised status for an order the venue rejected
    pub fn terminal(client_order_id: OrderId) -> Self {
        Self {
            client_order_id,
            fill_volume: 0,
            remaining_volume: 0,
            fees: 0,
        }
    }

    /// Check if the order is terminal (no more updates expected)
    pub fn is_terminal(&self) -> bool {
        self.remaining_volume == 0
    }
}

/// Error reported by the venue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderError {
    /// Zero when the error does not pertain to an order
    pub client_order_id: OrderId,
    pub message: String,
}

impl OrderError {
    pub fn new(client_order_id: OrderId, message: impl Into<String>) -> Self {
        Self {
            client_order_id,
            message: message.into(),
        }
    }

    /// Check if the error pertains to a particular order
    pub fn is_order_specific(&self) -> bool {
        self.client_order_id != NO_ORDER
    }
}

/// One of our hedge orders traded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HedgeFilled {
    pub client_order_id: OrderId,
    /// Average price, which may be better than the hedge limit
    pub average_price: Price,
    pub volume: Volume,
}
