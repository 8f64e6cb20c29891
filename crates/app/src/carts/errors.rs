//! Cart persistence errors.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartStoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("bad cart snapshot: {0}")]
    Serde(#[from] serde_json::Error),
}
