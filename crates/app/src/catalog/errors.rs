//! Catalog service errors.

use thiserror::Error;

use crate::{catalog::records::ProductRowError, store::StoreError};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("product not found")]
    NotFound,

    #[error("malformed product row")]
    InvalidRecord(#[source] ProductRowError),

    #[error("storage error")]
    Store(#[from] StoreError),
}
