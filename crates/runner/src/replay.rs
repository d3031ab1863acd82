//! Wiring for a session driven by a recorded feed
//!
//! The feed is read on its own task and pushed through the channel
//! transport, so the trader session sees the same interface it would see
//! behind a live exchange connection.

use crate::config::TraderConfig;
use crate::error::{Result, RunnerError};
use log::{debug, info, warn};
use std::sync::Arc;
use tandem_gateway::{EventPublisher, EventSource, TransportError};
use tandem_order_manager::MessageThrottle;
use tandem_ports::Clock;
use tandem_strategy::PairArbitrageTrader;
use tokio::task::JoinHandle;

/// Build the trader described by a configuration
pub fn build_trader(config: &TraderConfig, clock: Arc<dyn Clock>) -> PairArbitrageTrader {
    debug!(
        "Message budget {}/s timed by {}",
        config.max_messages_per_second,
        clock.name()
    );
    PairArbitrageTrader::new(
        config.limits(),
        config.eligibility,
        MessageThrottle::per_second(clock, config.max_messages_per_second),
    )
}

/// Pump every event from `feed` into `publisher` on a new task.
///
/// The task resolves to the number of events published. It stops early,
/// without error, if the session has gone away.
pub fn spawn_feed<E>(mut feed: E, publisher: EventPublisher) -> JoinHandle<Result<u64>>
where
    E: EventSource + 'static,
{
    tokio::spawn(async move {
        let mut published = 0u64;
        while let Some(event) = feed.next_event().await? {
            match publisher.publish(event).await {
                Ok(()) => published += 1,
                Err(TransportError::ChannelClosed) => {
                    warn!("Session closed before the feed was exhausted");
                    break;
                }
                Err(e) => return Err(RunnerError::from(e)),
            }
        }
        info!("Feed finished after {} events", published);
        Ok(published)
    })
}
