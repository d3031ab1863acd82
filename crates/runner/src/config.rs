//! Configuration loading for a trader session
//!
//! A single JSON object; every field is optional and falls back to the
//! venue's standard constants:
//!
//! ```json
//! {
//!     "lot_size": 10,
//!     "position_limit": 100,
//!     "tick_size": 100,
//!     "eligibility": "raw_and_weighted",
//!     "max_messages_per_second": 50
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tandem_core::{Position, Price, TradingLimits, Volume};
use tandem_strategy::EligibilityPolicy;
use thiserror::Error;

/// Root configuration for a trader session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraderConfig {
    /// Quantity of every resting order
    pub lot_size: Volume,
    /// Symmetric bound on the absolute position
    pub position_limit: Position,
    /// Tick size in cents
    pub tick_size: Price,
    /// Venue minimum permissible bid
    pub minimum_bid: Price,
    /// Venue maximum permissible ask
    pub maximum_ask: Price,
    /// Which arbitrage tests gate a submission
    pub eligibility: EligibilityPolicy,
    /// Outbound insert/cancel budget
    pub max_messages_per_second: usize,
    /// Capacity of the in-process event and command channels
    pub channel_capacity: usize,
}

impl Default for TraderConfig {
    fn default() -> Self {
        let limits = TradingLimits::default();
        Self {
            lot_size: limits.lot_size,
            position_limit: limits.position_limit,
            tick_size: limits.tick_size,
            minimum_bid: limits.minimum_bid,
            maximum_ask: limits.maximum_ask,
            eligibility: EligibilityPolicy::default(),
            max_messages_per_second: 50,
            channel_capacity: 1024,
        }
    }
}

impl TraderConfig {
    /// Load and validate configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lot_size == 0 {
            return Err(ConfigError::Invalid("lot_size must be positive".into()));
        }
        if self.tick_size == 0 {
            return Err(ConfigError::Invalid("tick_size must be positive".into()));
        }
        if self.position_limit <= 0 {
            return Err(ConfigError::Invalid("position_limit must be positive".into()));
        }
        if self.lot_size as Position > self.position_limit {
            return Err(ConfigError::Invalid(format!(
                "lot_size {} exceeds position_limit {}",
                self.lot_size, self.position_limit
            )));
        }
        if self.minimum_bid >= self.maximum_ask {
            return Err(ConfigError::Invalid(format!(
                "minimum_bid {} must be below maximum_ask {}",
                self.minimum_bid, self.maximum_ask
            )));
        }
        if self.max_messages_per_second == 0 {
            return Err(ConfigError::Invalid(
                "max_messages_per_second must be positive".into(),
            ));
        }
        if self.channel_capacity == 0 {
            return Err(ConfigError::Invalid("channel_capacity must be positive".into()));
        }
        Ok(())
    }

    /// Session constants handed to the decision core
    pub fn limits(&self) -> TradingLimits {
        TradingLimits {
            lot_size: self.lot_size,
            position_limit: self.position_limit,
            tick_size: self.tick_size,
            minimum_bid: self.minimum_bid,
            maximum_ask: self.maximum_ask,
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config = TraderConfig::from_json("{}").unwrap();
        assert_eq!(config, TraderConfig::default());
        assert_eq!(config.limits(), TradingLimits::default());
        assert_eq!(config.eligibility, EligibilityPolicy::RawAndWeighted);
    }

    #[test]
    fn test_parse_overrides() {
        let json = r#"{
            "lot_size": 5,
            "position_limit": 50,
            "eligibility": "raw_only",
            "max_messages_per_second": 20
        }"#;
        let config = TraderConfig::from_json(json).unwrap();

        assert_eq!(config.lot_size, 5);
        assert_eq!(config.position_limit, 50);
        assert_eq!(config.tick_size, 100);
        assert_eq!(config.eligibility, EligibilityPolicy::RawOnly);
        assert_eq!(config.max_messages_per_second, 20);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let cases = [
            r#"{"lot_size": 0}"#,
            r#"{"tick_size": 0}"#,
            r#"{"position_limit": 0}"#,
            r#"{"lot_size": 20, "position_limit": 10}"#,
            r#"{"minimum_bid": 500, "maximum_ask": 500}"#,
            r#"{"max_messages_per_second": 0}"#,
            r#"{"channel_capacity": 0}"#,
        ];
        for json in cases {
            assert!(
                matches!(TraderConfig::from_json(json), Err(ConfigError::Invalid(_))),
                "{} should be rejected",
                json
            );
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            TraderConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            TraderConfig::from_json(r#"{"eligibility": "either"}"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            TraderConfig::from_file("/nonexistent/tandem.json"),
            Err(ConfigError::Io { .. })
        ));
    }
}
