//! Message shapes exchanged with the session layer
//!
//! These mirror the callbacks and commands of the exchange protocol after
//! parsing; they carry no wire framing.

pub mod event;
pub mod market_data;
pub mod order;

pub use event::{Command, ExchangeEvent};
pub use market_data::{BookLevel, BookSnapshot};
pub use order::{CancelOrder, HedgeFilled, HedgeOrder, InsertOrder, OrderError, OrderFilled, OrderStatus};
