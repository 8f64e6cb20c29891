//! Admin Errors

use salvo::http::StatusError;
use tracing::error;

use tindera_app::notifications::NotificationError;

pub(crate) fn notification_into_status_error(error: NotificationError) -> StatusError {
    match error {
        NotificationError::NoRecipient => {
            StatusError::bad_request().brief("Order has no customer email")
        }
        NotificationError::Relay(source) => {
            error!("mail relay failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
