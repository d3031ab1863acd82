use tandem_core::Timestamp;

/// Source of the current time
///
/// Everything time-dependent in the trader (the outbound message window)
/// reads time through this port so replays and tests can control it.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;

    /// Short label used in log lines
    fn name(&self) -> &str {
        "Clock"
    }
}
