//! Send Thank-You Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    admin::{errors::notification_into_status_error, handlers::send_invoice::EmailSentResponse},
    extensions::*,
    orders::errors::into_status_error,
    state::State,
};

/// Send Thank-You Handler
///
/// Mails the thank-you letter to the customer.
#[endpoint(
    tags("admin"),
    summary = "Send Thank-You",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Thank-you sent"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Order has no customer email"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<EmailSentResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let order = state
        .app
        .orders
        .get_order(id.into_inner())
        .await
        .map_err(into_status_error)?;

    state
        .app
        .notifier
        .thank_you(&order)
        .await
        .map_err(notification_into_status_error)?;

    Ok(Json(EmailSentResponse {
        status: "sent".to_string(),
    }))
}
