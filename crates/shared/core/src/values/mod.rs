use chrono::{DateTime, Utc};

/// Price in currency minor units (cents). Absence is `Option<Price>`, never zero.
pub type Price = u64;

/// Quantity in lots
pub type Volume = u64;

/// Signed net quantity held (positive = long, negative = short)
pub type Position = i64;

/// Client order identifier
pub type OrderId = u64;

/// Reserved id: an error that does not pertain to any order
pub const NO_ORDER: OrderId = 0;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;
