//! JSON-lines adapter for recorded sessions
//!
//! One event per line, tagged by `type`:
//!
//! ```text
//! {"type":"order_book","instrument":"etf","sequence":1,"asks":[...],"bids":[...]}
//! {"type":"order_filled","client_order_id":1,"price":10000,"volume":10}
//! ```
//!
//! Blank lines and lines starting with `#` are ignored. Malformed lines are
//! logged and skipped so one bad record does not end a replay.

use crate::error::TransportError;
use crate::messages::{Command, ExchangeEvent};
use crate::transport::{CommandSink, EventSource};
use async_trait::async_trait;
use log::warn;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Lines};

/// Event source reading a recorded feed
pub struct JsonLinesFeed<R> {
    lines: Lines<R>,
    line_no: usize,
    skipped: usize,
}

impl JsonLinesFeed<BufReader<File>> {
    /// Open a recorded feed file
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, TransportError> {
        let file = File::open(path.as_ref()).await.map_err(|e| {
            TransportError::Io(format!("{}: {}", path.as_ref().display(), e))
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: AsyncBufRead + Unpin + Send> JsonLinesFeed<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            skipped: 0,
        }
    }

    /// Number of malformed lines skipped so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> EventSource for JsonLinesFeed<R> {
    async fn next_event(&mut self) -> Result<Option<ExchangeEvent>, TransportError> {
        while let Some(line) = self.lines.next_line().await? {
            self.line_no += 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            match serde_json::from_str(trimmed) {
                Ok(event) => return Ok(Some(event)),
                Err(e) => {
                    warn!("Skipping malformed feed line {}: {}", self.line_no, e);
                    self.skipped += 1;
                }
            }
        }
        Ok(None)
    }
}

/// Command sink writing one JSON object per line
pub struct JsonLinesSink<W> {
    writer: W,
}

impl<W: AsyncWrite + Unpin + Send> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[async_trait]
impl<W: AsyncWrite + Unpin + Send> CommandSink for JsonLinesSink<W> {
    async fn send(&mut self, command: &Command) -> Result<(), TransportError> {
        let mut line = serde_json::to_string(command)?;
        line.push('\n');
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{CancelOrder, HedgeOrder};
    use tandem_core::Side;

    #[tokio::test]
    async fn test_feed_skips_comments_and_bad_lines() {
        let recording: &[u8] = br#"# recorded session
{"type":"disconnected"}

{"type":"order_status","client_order_id":2,"fill_volume":0,"remaining_volume":0,"fees":0}
not json
{"type":"hedge_filled","client_order_id":3,"average_price":10100,"volume":10}
"#;
        let mut feed = JsonLinesFeed::new(recording);

        assert_eq!(
            feed.next_event().await.unwrap(),
            Some(ExchangeEvent::Disconnected)
        );
        assert!(matches!(
            feed.next_event().await.unwrap(),
            Some(ExchangeEvent::OrderStatus(s)) if s.client_order_id == 2
        ));
        assert!(matches!(
            feed.next_event().await.unwrap(),
            Some(ExchangeEvent::HedgeFilled(_))
        ));
        assert_eq!(feed.next_event().await.unwrap(), None);
        assert_eq!(feed.skipped(), 1);
    }

    #[tokio::test]
    async fn test_sink_writes_one_line_per_command() {
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.send(&Command::Cancel(CancelOrder { client_order_id: 7 }))
            .await
            .unwrap();
        sink.send(&Command::Hedge(HedgeOrder {
            client_order_id: 8,
            side: Side::Sell,
            price: 100,
            volume: 10,
        }))
        .await
        .unwrap();

        let written = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 2);

        let parsed: Command = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(parsed.client_order_id(), 8);
        assert!(parsed.is_hedge());
    }
}
