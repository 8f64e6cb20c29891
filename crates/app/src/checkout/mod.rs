//! Checkout

pub mod channels;
pub mod errors;
pub mod fees;
pub mod flow;
pub mod submit;

pub use channels::PaymentChannel;
pub use errors::{CheckoutError, CheckoutFlowError, ReceiptValidationError};
pub use flow::{BillingDetails, CheckoutFlow, CheckoutStep, CheckoutSummary};
pub use submit::{CheckoutSubmitter, SubmissionOutcome};
