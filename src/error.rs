// error.rs - Failures at the crate boundary
//
// Nothing inside the simulation is fatal. These only come from parsing
// host-supplied configuration, message banks and phase names.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GardenError {
    #[error("invalid garden config: {0}")]
    InvalidConfig(#[source] serde_json::Error),

    #[error("invalid message bank: {0}")]
    InvalidMessageBank(#[source] serde_json::Error),

    #[error("unknown phase '{0}' (expected welcome, exploring or results)")]
    UnknownPhase(String),
}

pub type Result<T> = std::result::Result<T, GardenError>;
