//! Profile Errors

use salvo::http::StatusError;
use tracing::error;

use tindera_app::profiles::ProfilesServiceError;

pub(crate) fn into_status_error(error: ProfilesServiceError) -> StatusError {
    match error {
        ProfilesServiceError::Store(source) => {
            error!("failed to reach the user store: {source}");

            StatusError::internal_server_error()
        }
    }
}
