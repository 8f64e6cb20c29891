//! Profiles service errors.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ProfilesServiceError {
    #[error("storage error")]
    Store(#[from] StoreError),
}
