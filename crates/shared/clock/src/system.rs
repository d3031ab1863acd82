use chrono::Utc;
use tandem_core::Timestamp;
use tandem_ports::Clock;

/// Wall-clock time, used by live sessions and the replay binary
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        SystemClock
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_never_runs_backwards_behind_port() {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
        let first = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = clock.now();

        assert!(second >= first);
        assert_eq!(clock.name(), "SystemClock");
    }
}
