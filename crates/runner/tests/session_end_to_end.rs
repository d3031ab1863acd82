//! End-to-end test: recorded feed → trader session → command channel
//!
//! Tests the complete flow:
//! 1. Book updates on both legs produce a bid on the tracked instrument
//! 2. The venue fills the bid and the session emits a hedge
//! 3. A terminal status frees the slot
//! 4. After a disconnect no new orders go out

use std::sync::Arc;
use tandem_clock::ManualClock;
use tandem_core::Side;
use tandem_gateway::adapters::JsonLinesFeed;
use tandem_gateway::{ChannelCommandSink, ChannelEventSource, Command};
use tandem_runner::{TraderConfig, TraderSession, build_trader, spawn_feed};

const RECORDING: &str = r#"# future leg first, tracked leg second
{"type":"order_book","instrument":"future","sequence":1,"asks":[{"price":10200,"volume":20},{"price":0,"volume":0}],"bids":[{"price":10100,"volume":20},{"price":0,"volume":0}]}
{"type":"order_book","instrument":"etf","sequence":1,"asks":[{"price":10000,"volume":15}],"bids":[{"price":9900,"volume":15}]}
{"type":"trade_ticks","instrument":"etf","sequence":1,"asks":[{"price":10000,"volume":5}],"bids":[]}
{"type":"order_filled","client_order_id":1,"price":9900,"volume":10}
{"type":"order_status","client_order_id":1,"fill_volume":10,"remaining_volume":0,"fees":-2}
{"type":"hedge_filled","client_order_id":2,"average_price":10100,"volume":10}
{"type":"disconnected"}
{"type":"order_book","instrument":"etf","sequence":2,"asks":[{"price":10000,"volume":15}],"bids":[{"price":9900,"volume":15}]}
"#;

#[tokio::test]
async fn test_replay_session_end_to_end() {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = TraderConfig::from_json(r#"{"eligibility":"raw_and_weighted"}"#).unwrap();
    let trader = build_trader(&config, Arc::new(ManualClock::starting_now()));

    let feed = JsonLinesFeed::new(RECORDING.as_bytes());
    let (publisher, events) = ChannelEventSource::pair(config.channel_capacity);
    let (sink, mut commands) = ChannelCommandSink::pair(config.channel_capacity);

    let feed_task = spawn_feed(feed, publisher);
    let report = TraderSession::new(trader, events, sink).run().await.unwrap();
    assert_eq!(feed_task.await.unwrap().unwrap(), 8);

    let sent = commands.drain();
    assert_eq!(report.events_processed, 8);
    assert_eq!(report.commands_sent, sent.len() as u64);
    assert_eq!(sent.len(), 2);

    match &sent[0] {
        Command::Insert(order) => {
            assert_eq!(order.client_order_id, 1);
            assert_eq!(order.side, Side::Buy);
            assert_eq!(order.price, 9900);
            assert_eq!(order.volume, 10);
        }
        other => panic!("Expected insert, got {:?}", other),
    }
    match &sent[1] {
        Command::Hedge(hedge) => {
            assert_eq!(hedge.client_order_id, 2);
            assert_eq!(hedge.side, Side::Sell);
            assert_eq!(hedge.price, 100);
            assert_eq!(hedge.volume, 10);
        }
        other => panic!("Expected hedge, got {:?}", other),
    }

    let trader = report.strategy;
    assert_eq!(trader.position(), 10);
    assert!(trader.is_disconnected());
    assert!(trader.orders().slot(Side::Buy).is_idle());

    let stats = trader.stats();
    assert_eq!(stats.fill_count, 1);
    assert_eq!(stats.hedged_volume, 10);
    assert_eq!(stats.total_fees, -2);
}

#[tokio::test]
async fn test_commands_serialize_as_json_lines() {
    let config = TraderConfig::default();
    let trader = build_trader(&config, Arc::new(ManualClock::starting_now()));

    let feed = JsonLinesFeed::new(RECORDING.as_bytes());
    let (publisher, events) = ChannelEventSource::pair(16);
    let (sink, mut commands) = ChannelCommandSink::pair(16);
    let _feed_task = spawn_feed(feed, publisher);
    TraderSession::new(trader, events, sink).run().await.unwrap();

    for command in commands.drain() {
        let line = serde_json::to_string(&command).unwrap();
        let parsed: Command = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed, command);
        assert!(line.starts_with(r#"{"type":""#));
    }
}
