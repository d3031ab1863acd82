use serde::{Deserialize, Serialize};

/// How long an inserted order stays eligible to trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifespan {
    /// Immediate or Cancel: trade against resting liquidity on arrival, the venue removes the rest
    ImmediateOrCancel,
}
