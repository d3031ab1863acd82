//! Pre-trade limit gate
//!
//! A bid is only sent while the position is below the long limit, an ask
//! while it is above the short limit. On top of that, the volume of orders
//! still live on the same side (including cancelled ones not yet confirmed)
//! counts toward the limit, and the order is sized so that even if every one
//! of them fills the position stays within bounds.

use crate::error::{Error, Result};
use tandem_core::{Position, Side, TradingLimits, Volume};

#[derive(Debug, Clone)]
pub struct PositionGate {
    limits: TradingLimits,
}

impl PositionGate {
    pub fn new(limits: TradingLimits) -> Self {
        Self { limits }
    }

    /// Volume allowed for a new order on `side`, or why none is
    pub fn order_volume(&self, side: Side, position: Position, pending: Volume) -> Result<Volume> {
        let limit = self.limits.position_limit;
        let pending = pending as Position;

        // Room left in the direction of the order
        let (headroom, worst_case) = match side {
            Side::Buy => {
                if position >= limit {
                    return Err(Error::PositionLimitReached {
                        side,
                        position,
                        limit,
                    });
                }
                let worst_case = position + pending;
                (limit - worst_case, worst_case)
            }
            Side::Sell => {
                if position <= -limit {
                    return Err(Error::PositionLimitReached {
                        side,
                        position,
                        limit: -limit,
                    });
                }
                let worst_case = position - pending;
                (worst_case + limit, worst_case)
            }
        };

        if headroom <= 0 {
            return Err(Error::ExposureLimitReached {
                side,
                worst_case,
                limit: side.sign() * limit,
            });
        }

        Ok(self.limits.lot_size.min(headroom as Volume))
    }
}
