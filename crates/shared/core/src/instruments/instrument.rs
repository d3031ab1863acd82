use serde::{Deserialize, Serialize};
use std::fmt;

/// One leg of the traded pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Instrument {
    /// Derivative instrument (hedge leg)
    Future,
    /// Tracked exchange-traded instrument (quoting leg)
    Etf,
}

impl Instrument {
    /// Both legs in feed-tag order
    pub const ALL: [Instrument; 2] = [Instrument::Future, Instrument::Etf];

    /// The instrument resting orders are placed on
    pub const TRACKED: Instrument = Instrument::Etf;

    /// The instrument hedge orders are placed on
    pub const HEDGE: Instrument = Instrument::Future;

    /// The other leg of the pair
    pub fn paired(&self) -> Self {
        match self {
            Instrument::Future => Instrument::Etf,
            Instrument::Etf => Instrument::Future,
        }
    }

    /// Position of this instrument in per-instrument arrays
    pub fn index(&self) -> usize {
        match self {
            Instrument::Future => 0,
            Instrument::Etf => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Instrument::Future => "future",
            Instrument::Etf => "etf",
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
