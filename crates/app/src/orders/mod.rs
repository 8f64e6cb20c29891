//! Orders

pub mod errors;
pub mod models;
mod records;
pub mod service;

pub use errors::{OrderValidationError, OrdersServiceError};
pub use records::OrderRowError;
pub use service::*;
