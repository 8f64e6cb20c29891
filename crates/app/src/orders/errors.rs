//! Orders service errors.

use thiserror::Error;

use crate::{orders::records::OrderRowError, store::StoreError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderValidationError {
    #[error("missing required field {0:?}")]
    MissingField(&'static str),

    #[error("order must contain at least one item")]
    EmptyItems,
}

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] OrderValidationError),

    #[error("malformed order row")]
    InvalidRecord(#[source] OrderRowError),

    #[error("storage error")]
    Store(#[from] StoreError),
}
