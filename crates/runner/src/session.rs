//! Trader Session - runs one strategy against one exchange session
//!
//! A single task owns the strategy. Events are taken from the source one at
//! a time, each callback runs to completion, and its commands are forwarded
//! to the sink in emission order before the next event is read. Nothing else
//! touches the strategy, so no locking is involved.

use crate::error::Result;
use log::{debug, info, warn};
use tandem_gateway::{Command, CommandSink, EventSource, TransportError};
use tandem_strategy::Strategy;
use uuid::Uuid;

/// Counters and final state of a finished session
#[derive(Debug)]
pub struct SessionReport<S> {
    pub session_id: Uuid,
    pub events_processed: u64,
    pub commands_sent: u64,
    /// The strategy as it stood when the session ended
    pub strategy: S,
}

/// Actor owning a strategy for the life of a session
pub struct TraderSession<S, E, C> {
    session_id: Uuid,
    strategy: S,
    events: E,
    commands: C,
    events_processed: u64,
    commands_sent: u64,
}

impl<S, E, C> TraderSession<S, E, C>
where
    S: Strategy,
    E: EventSource,
    C: CommandSink,
{
    pub fn new(strategy: S, events: E, commands: C) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            strategy,
            events,
            commands,
            events_processed: 0,
            commands_sent: 0,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Forward commands in order.
    ///
    /// Returns `false` once the sink has closed.
    async fn forward(&mut self, commands: Vec<Command>) -> Result<bool> {
        for command in commands {
            match self.commands.send(&command).await {
                Ok(()) => self.commands_sent += 1,
                Err(TransportError::ChannelClosed) => {
                    warn!("[{}] Command sink closed", self.session_id);
                    return Ok(false);
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(true)
    }

    /// Run until the event source is exhausted or the command sink closes
    pub async fn run(mut self) -> Result<SessionReport<S>> {
        info!(
            "[{}] Session started with {}",
            self.session_id,
            self.strategy.name()
        );

        while let Some(event) = self.events.next_event().await? {
            self.events_processed += 1;
            debug!("[{}] Event: {}", self.session_id, event.kind());

            let commands = self.strategy.on_event(&event);
            if !self.forward(commands).await? {
                break;
            }
        }

        let commands = self.strategy.on_shutdown();
        self.forward(commands).await?;

        info!(
            "[{}] Session stopped: {} events, {} commands",
            self.session_id, self.events_processed, self.commands_sent
        );

        Ok(SessionReport {
            session_id: self.session_id,
            events_processed: self.events_processed,
            commands_sent: self.commands_sent,
            strategy: self.strategy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tandem_gateway::{
        BookSnapshot, CancelOrder, ChannelCommandSink, ChannelEventSource, ExchangeEvent,
        OrderError, OrderFilled, OrderStatus,
    };

    /// Emits one cancel per book update and nothing else
    struct Echo;

    impl Strategy for Echo {
        fn name(&self) -> &str {
            "Echo"
        }

        fn on_order_book(&mut self, snapshot: &BookSnapshot) -> Vec<Command> {
            vec![Command::Cancel(CancelOrder {
                client_order_id: snapshot.sequence,
            })]
        }

        fn on_order_filled(&mut self, _fill: &OrderFilled) -> Vec<Command> {
            Vec::new()
        }

        fn on_order_status(&mut self, _status: &OrderStatus) -> Vec<Command> {
            Vec::new()
        }

        fn on_error(&mut self, _error: &OrderError) -> Vec<Command> {
            Vec::new()
        }
    }

    fn book(sequence: u64) -> ExchangeEvent {
        ExchangeEvent::OrderBook(BookSnapshot::new(
            tandem_core::Instrument::Etf,
            sequence,
            vec![],
            vec![],
        ))
    }

    #[tokio::test]
    async fn test_forwards_commands_in_order() {
        let (publisher, source) = ChannelEventSource::pair(8);
        let (sink, mut receiver) = ChannelCommandSink::pair(8);

        for sequence in 1..=3 {
            publisher.publish(book(sequence)).await.unwrap();
        }
        drop(publisher);

        let report = TraderSession::new(Echo, source, sink).run().await.unwrap();
        assert_eq!(report.events_processed, 3);
        assert_eq!(report.commands_sent, 3);

        let ids: Vec<_> = receiver.drain().iter().map(Command::client_order_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_closed_sink_ends_session() {
        let (publisher, source) = ChannelEventSource::pair(8);
        let (sink, receiver) = ChannelCommandSink::pair(8);
        drop(receiver);

        publisher.publish(book(1)).await.unwrap();
        publisher.publish(book(2)).await.unwrap();

        // Publisher still open: only the closed sink can end the run
        let report = TraderSession::new(Echo, source, sink).run().await.unwrap();
        assert_eq!(report.events_processed, 1);
        assert_eq!(report.commands_sent, 0);
    }
}
