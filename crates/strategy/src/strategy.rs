//! Strategy Trait
//!
//! One callback per inbound event kind. Each callback runs to completion and
//! returns the commands to send, in order. Nothing here awaits: the runner
//! owns the strategy exclusively and forwards the commands itself.

use tandem_gateway::{
    BookSnapshot, Command, ExchangeEvent, HedgeFilled, OrderError, OrderFilled, OrderStatus,
};

/// Strategy trait - implement this for a trading strategy
pub trait Strategy: Send {
    /// Strategy name for logging
    fn name(&self) -> &str;

    /// Called on every order book snapshot
    fn on_order_book(&mut self, snapshot: &BookSnapshot) -> Vec<Command>;

    /// Called on trade ticks (optional)
    fn on_trade_ticks(&mut self, _ticks: &BookSnapshot) -> Vec<Command> {
        Vec::new()
    }

    /// Called when one of our resting orders trades
    fn on_order_filled(&mut self, fill: &OrderFilled) -> Vec<Command>;

    /// Called when one of our resting orders changes status
    fn on_order_status(&mut self, status: &OrderStatus) -> Vec<Command>;

    /// Called when the venue reports an error
    fn on_error(&mut self, error: &OrderError) -> Vec<Command>;

    /// Called when a hedge order trades (optional)
    fn on_hedge_filled(&mut self, _fill: &HedgeFilled) -> Vec<Command> {
        Vec::new()
    }

    /// Called when the session to the venue is lost (optional)
    fn on_disconnect(&mut self) -> Vec<Command> {
        Vec::new()
    }

    /// Called once when the session ends (optional)
    fn on_shutdown(&mut self) -> Vec<Command> {
        Vec::new()
    }

    /// Dispatch an event to its callback
    fn on_event(&mut self, event: &ExchangeEvent) -> Vec<Command> {
        match event {
            ExchangeEvent::OrderBook(snapshot) => self.on_order_book(snapshot),
            ExchangeEvent::TradeTicks(ticks) => self.on_trade_ticks(ticks),
            ExchangeEvent::OrderFilled(fill) => self.on_order_filled(fill),
            ExchangeEvent::OrderStatus(status) => self.on_order_status(status),
            ExchangeEvent::Error(error) => self.on_error(error),
            ExchangeEvent::HedgeFilled(fill) => self.on_hedge_filled(fill),
            ExchangeEvent::Disconnected => self.on_disconnect(),
        }
    }
}
