//! Send Invoice Handler

use std::sync::Arc;

use salvo::{oapi::{ToSchema, extract::PathParam}, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    admin::errors::notification_into_status_error,
    extensions::*,
    orders::errors::into_status_error,
    state::State,
};

/// Email Sent Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct EmailSentResponse {
    pub status: String,
}

/// Send Invoice Handler
///
/// Renders an invoice from the order's current snapshot and mails it to the
/// customer.
#[endpoint(
    tags("admin"),
    summary = "Send Invoice",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Invoice sent"),
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
        .invoice(&order)
        .await
        .map_err(notification_into_status_error)?;

    Ok(Json(EmailSentResponse {
        status: "sent".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use tindera_app::notifications::NotificationError;

    use crate::test_helpers::{TestApp, make_order};

    use super::*;

    fn make_service(app: TestApp) -> Service {
        app.authed_service(Router::with_path("admin/orders/{id}/send-invoice").post(handler))
    }

    #[tokio::test]
    async fn invoice_is_sent_from_the_current_snapshot() -> TestResult {
        let order = make_order(Uuid::now_v7());
        let order_id = order.id;

        let mut app = TestApp::default();

        app.orders
            .expect_get_order()
            .once()
            .withf(move |id| *id == order_id)
            .return_once(move |_| Ok(order));

        app.notifier
            .expect_invoice()
            .once()
            .withf(move |order| order.id == order_id)
            .returning(|_| Ok(()));

        let mut res = TestClient::post(format!(
            "http://example.com/admin/orders/{order_id}/send-invoice"
        ))
        .send(&make_service(app))
        .await;

        let body: EmailSentResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.status, "sent");

        Ok(())
    }

    #[tokio::test]
    async fn order_without_an_email_returns_400() -> TestResult {
        let mut order = make_order(Uuid::now_v7());
        order.email = None;
        let order_id = order.id;

        let mut app = TestApp::default();

        app.orders
            .expect_get_order()
            .once()
            .return_once(move |_| Ok(order));

        app.notifier
            .expect_invoice()
            .once()
            .returning(|_| Err(NotificationError::NoRecipient));

        let res = TestClient::post(format!(
            "http://example.com/admin/orders/{order_id}/send-invoice"
        ))
        .send(&make_service(app))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
