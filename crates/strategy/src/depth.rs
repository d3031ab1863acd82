//! Depth Aggregator
//!
//! Folds every snapshot's level volumes into a running price → volume map per
//! instrument and side. The maps are never cleared, so they describe volume
//! at price since the session's first observation and their weighted average
//! moves slowly compared to the top of book.

use std::collections::BTreeMap;
use tandem_core::{Instrument, Price, Volume};
use tandem_gateway::BookLevel;

/// Accumulated volume at price for one instrument
#[derive(Debug, Clone, Default)]
pub struct DepthProfile {
    asks: BTreeMap<Price, Volume>,
    bids: BTreeMap<Price, Volume>,
    observations: u64,
}

impl DepthProfile {
    fn fold(&mut self, asks: &[BookLevel], bids: &[BookLevel]) {
        merge(&mut self.asks, asks);
        merge(&mut self.bids, bids);
        self.observations += 1;
    }

    pub fn asks(&self) -> &BTreeMap<Price, Volume> {
        &self.asks
    }

    pub fn bids(&self) -> &BTreeMap<Price, Volume> {
        &self.bids
    }

    /// Snapshots folded so far
    pub fn observations(&self) -> u64 {
        self.observations
    }
}

fn merge(levels: &mut BTreeMap<Price, Volume>, snapshot: &[BookLevel]) {
    for level in snapshot.iter().filter(|l| !l.is_padding()) {
        *levels.entry(level.price).or_insert(0) += level.volume;
    }
}

/// `Σ(price·volume) / Σ(volume)` with truncating division.
///
/// Returns `None` for an empty map or one whose total volume is zero.
pub fn volume_weighted_average(levels: &BTreeMap<Price, Volume>) -> Option<Price> {
    let (notional, volume) = levels
        .iter()
        .fold((0u128, 0u128), |(notional, volume), (price, qty)| {
            (
                notional + *price as u128 * *qty as u128,
                volume + *qty as u128,
            )
        });
    if volume == 0 {
        return None;
    }
    Price::try_from(notional / volume).ok()
}

/// Depth profiles for both legs of the pair
#[derive(Debug, Clone, Default)]
pub struct DepthAccumulator {
    profiles: [DepthProfile; 2],
}

impl DepthAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a snapshot's levels into the instrument's running maps
    pub fn fold(&mut self, instrument: Instrument, asks: &[BookLevel], bids: &[BookLevel]) {
        self.profiles[instrument.index()].fold(asks, bids);
    }

    pub fn profile(&self, instrument: Instrument) -> &DepthProfile {
        &self.profiles[instrument.index()]
    }

    pub fn observations(&self, instrument: Instrument) -> u64 {
        self.profile(instrument).observations()
    }

    /// Volume-weighted average of accumulated ask depth
    pub fn ask_average(&self, instrument: Instrument) -> Option<Price> {
        volume_weighted_average(self.profile(instrument).asks())
    }

    /// Volume-weighted average of accumulated bid depth
    pub fn bid_average(&self, instrument: Instrument) -> Option<Price> {
        volume_weighted_average(self.profile(instrument).bids())
    }
}
