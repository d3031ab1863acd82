//! Transport abstraction layer
//!
//! The core consumes events from an [`EventSource`] and hands commands to a
//! [`CommandSink`]. Tokio channels back both in single-process mode; the
//! JSON-lines adapter backs them for recorded feeds.

pub mod channel;

use crate::error::TransportError;
use crate::messages::{Command, ExchangeEvent};
use async_trait::async_trait;

/// Source of exchange callbacks, delivered in feed order
#[async_trait]
pub trait EventSource: Send {
    /// Wait for the next event; `None` once the feed is exhausted
    async fn next_event(&mut self) -> Result<Option<ExchangeEvent>, TransportError>;
}

/// Destination for outbound commands
#[async_trait]
pub trait CommandSink: Send {
    /// Send a command without waiting for acknowledgement
    async fn send(&mut self, command: &Command) -> Result<(), TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Ensure traits are object-safe
    fn _assert_source_object_safe(_: &mut dyn EventSource) {}
    fn _assert_sink_object_safe(_: &mut dyn CommandSink) {}
}
