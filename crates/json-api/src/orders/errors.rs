//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use tindera_app::{checkout::CheckoutError, orders::OrdersServiceError};

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::Validation(source) => {
            StatusError::bad_request().brief(source.to_string())
        }
        OrdersServiceError::InvalidRecord(source) => {
            error!("order row cannot be decoded: {source}");

            StatusError::internal_server_error()
        }
        OrdersServiceError::Store(source) => {
            error!("failed to reach the order ledger: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn checkout_into_status_error(error: CheckoutError) -> StatusError {
    match error {
        CheckoutError::Flow(source) => StatusError::bad_request().brief(source.to_string()),
        CheckoutError::Orders(source) => into_status_error(source),
        CheckoutError::Storage(source) => {
            error!("receipt storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
