//! Inbound events and outbound commands

use crate::messages::market_data::BookSnapshot;
use crate::messages::order::{
    CancelOrder, HedgeFilled, HedgeOrder, InsertOrder, OrderError, OrderFilled, OrderStatus,
};
use serde::{Deserialize, Serialize};
use tandem_core::OrderId;

/// Callback delivered by the exchange session, in feed order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExchangeEvent {
    OrderBook(BookSnapshot),
    /// Informational only; same shape as a book update
    TradeTicks(BookSnapshot),
    OrderFilled(OrderFilled),
    OrderStatus(OrderStatus),
    Error(OrderError),
    HedgeFilled(HedgeFilled),
    Disconnected,
}

impl ExchangeEvent {
    /// Short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Self::OrderBook(_) => "order_book",
            Self::TradeTicks(_) => "trade_ticks",
            Self::OrderFilled(_) => "order_filled",
            Self::OrderStatus(_) => "order_status",
            Self::Error(_) => "error",
            Self::HedgeFilled(_) => "hedge_filled",
            Self::Disconnected => "disconnected",
        }
    }
}

/// Command sent to the exchange; fire-and-forget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    Insert(InsertOrder),
    Cancel(CancelOrder),
    Hedge(HedgeOrder),
}

impl Command {
    pub fn client_order_id(&self) -> OrderId {
        match self {
            Self::Insert(o) => o.client_order_id,
            Self::Cancel(c) => c.client_order_id,
            Self::Hedge(h) => h.client_order_id,
        }
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, Self::Insert(_))
    }

    pub fn is_cancel(&self) -> bool {
        matches!(self, Self::Cancel(_))
    }

    pub fn is_hedge(&self) -> bool {
        matches!(self, Self::Hedge(_))
    }
}
