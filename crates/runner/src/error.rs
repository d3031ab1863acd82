//! Runner errors

use crate::config::ConfigError;
use tandem_gateway::TransportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Transport failed: {0}")]
    Transport(#[from] TransportError),
}

pub type Result<T> = std::result::Result<T, RunnerError>;
