//! Tokio channel-based transport for single-process mode
//!
//! Uses bounded mpsc channels: one producer side for the exchange session,
//! one consumer side owned by the trading session. Messages are passed
//! directly with no serialization.

use crate::error::TransportError;
use crate::messages::{Command, ExchangeEvent};
use crate::transport::{CommandSink, EventSource};
use async_trait::async_trait;
use tokio::sync::mpsc;

/// Producer side of the event channel (held by the exchange session)
#[derive(Clone)]
pub struct EventPublisher {
    tx: mpsc::Sender<ExchangeEvent>,
}

impl EventPublisher {
    /// Publish an event; fails once the trading session has gone away
    pub async fn publish(&self, event: ExchangeEvent) -> Result<(), TransportError> {
        self.tx
            .send(event)
            .await
            .map_err(|_| TransportError::ChannelClosed)
    }
}

/// Consumer side of the event channel
pub struct ChannelEventSource {
    rx: mpsc::Receiver<ExchangeEvent>,
}

impl ChannelEventSource {
    /// Create a publisher/source pair with the given capacity
    pub fn pair(capacity: usize) -> (EventPublisher, Self) {
        let (tx, rx) = mpsc::channel(capacity);
        (EventPublisher { tx }, Self { rx })
    }
}

#[async_trait]
impl EventSource for ChannelEventSource {
    async fn next_event(&mut self) -> Result<Option<ExchangeEvent>, TransportError> {
        // All publishers dropped means the feed is over
        Ok(self.rx.recv().await)
    }
}

/// Command sink backed by an mpsc sender
pub struct ChannelCommandSink {
    tx: mpsc::Sender<Command>,
}

impl ChannelCommandSink {
    /// Create a sink/receiver pair with the given capacity
    pub fn pair(capacity: usize) -> (Self, CommandReceiver) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, CommandReceiver { rx })
    }
}

#[async_trait]
impl CommandSink for ChannelCommandSink {
    async fn send(&mut self, command: &Command) -> Result<(), TransportError> {
        self.tx
            .send(command.clone())
            .await
            .map_err(|_| TransportError::ChannelClosed)
    }
}

/// Receiving side of the command channel (held by the exchange session)
pub struct CommandReceiver {
    rx: mpsc::Receiver<Command>,
}

impl CommandReceiver {
    /// Wait for the next command
    pub async fn recv(&mut self) -> Option<Command> {
        self.rx.recv().await
    }

    /// Take a command if one is ready
    pub fn try_recv(&mut self) -> Option<Command> {
        self.rx.try_recv().ok()
    }

    /// Take every command currently queued
    pub fn drain(&mut self) -> Vec<Command> {
        let mut commands = Vec::new();
        while let Some(command) = self.try_recv() {
            commands.push(command);
        }
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::CancelOrder;

    #[tokio::test]
    async fn test_events_arrive_in_order() {
        let (publisher, mut source) = ChannelEventSource::pair(10);

        publisher.publish(ExchangeEvent::Disconnected).await.unwrap();
        publisher
            .publish(ExchangeEvent::Error(crate::messages::OrderError::new(0, "x")))
            .await
            .unwrap();
        drop(publisher);

        assert_eq!(
            source.next_event().await.unwrap(),
            Some(ExchangeEvent::Disconnected)
        );
        assert!(matches!(
            source.next_event().await.unwrap(),
            Some(ExchangeEvent::Error(_))
        ));
        assert_eq!(source.next_event().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_command_sink_round_trip() {
        let (mut sink, mut receiver) = ChannelCommandSink::pair(10);
        let cancel = Command::Cancel(CancelOrder { client_order_id: 4 });

        sink.send(&cancel).await.unwrap();

        assert_eq!(receiver.drain(), vec![cancel]);
        assert!(receiver.try_recv().is_none());
    }

    #[tokio::test]
    async fn test_send_after_receiver_dropped() {
        let (mut sink, receiver) = ChannelCommandSink::pair(1);
        drop(receiver);

        let result = sink
            .send(&Command::Cancel(CancelOrder { client_order_id: 1 }))
            .await;
        assert!(matches!(result, Err(TransportError::ChannelClosed)));
    }
}
