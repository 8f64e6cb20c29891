//! Checkout errors.

use thiserror::Error;

use crate::{files::FileStorageError, orders::errors::OrdersServiceError};

/// Largest accepted proof-of-payment upload.
pub const MAX_RECEIPT_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReceiptValidationError {
    #[error("receipt must be an image, got {0:?}")]
    NotAnImage(String),

    #[error("receipt is {0} bytes, larger than the {MAX_RECEIPT_BYTES} byte limit")]
    TooLarge(usize),
}

/// A step gate failed; the flow stays on the current step.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutFlowError {
    #[error("choose a payment method to continue")]
    NoPaymentMethod,

    #[error("unknown payment channel {0:?}")]
    UnknownChannel(String),

    #[error("missing required field {0:?}")]
    MissingBillingField(&'static str),

    #[error("upload your payment receipt to continue")]
    MissingReceipt,

    #[error("your bag is empty")]
    EmptyBag,

    #[error(transparent)]
    Receipt(#[from] ReceiptValidationError),
}

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error(transparent)]
    Flow(#[from] CheckoutFlowError),

    #[error("failed to record order")]
    Orders(#[source] OrdersServiceError),

    #[error("failed to store receipt")]
    Storage(#[source] FileStorageError),
}
