//! Tandem Gateway
//!
//! Boundary between the decision core and the exchange session. Provides:
//! - Shapes of the inbound callbacks (book updates, trade ticks, fills,
//!   order status, errors, hedge fills, disconnect)
//! - Shapes of the outbound commands (insert, cancel, hedge)
//! - Transport traits with a tokio channel implementation
//! - A JSON-lines adapter for recorded feeds
//!
//! ## Architecture
//!
//! ```text
//! Exchange session (parsed messages)
//!         │ ExchangeEvent
//!    ┌────▼──────┐
//!    │EventSource│  channel / JSON-lines replay
//!    └────┬──────┘
//!         │
//!    ┌────▼────┐
//!    │  Core   │
//!    └────┬────┘
//!         │ Command
//!    ┌────▼──────┐
//!    │CommandSink│  channel / JSON-lines writer
//!    └───────────┘
//! ```

pub mod adapters;
pub mod error;
pub mod messages;
pub mod transport;

// Re-export commonly used types
pub use error::TransportError;
pub use messages::{
    event::{Command, ExchangeEvent},
    market_data::{BookLevel, BookSnapshot},
    order::{CancelOrder, HedgeFilled, HedgeOrder, InsertOrder, OrderError, OrderFilled, OrderStatus},
};
pub use transport::{
    CommandSink, EventSource,
    channel::{ChannelCommandSink, ChannelEventSource, CommandReceiver, EventPublisher},
};
