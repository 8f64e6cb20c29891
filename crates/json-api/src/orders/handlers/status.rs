//! Order Status Handler
//!
//! Customer-facing tracking: the caller must present the order id AND the
//! email it was placed with.

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{PathParam, QueryParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, models::OrderItemResponse},
    state::State,
};

/// Order Status Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderStatusResponse {
    pub order_id: Uuid,
    pub status: String,
    pub date: String,

    /// Total in centavos, shipping included
    pub total_amount: u64,

    pub items: Vec<OrderItemResponse>,
}

/// Order Status Handler
#[endpoint(
    tags("orders"),
    summary = "Track Order",
    responses(
        (status_code = StatusCode::OK, description = "Order found"),
        (status_code = StatusCode::NOT_FOUND, description = "No order with this id and email"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    email: QueryParam<String, true>,
    depot: &mut Depot,
) -> Result<Json<OrderStatusResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let order = state
        .app
        .orders
        .get_order_for_customer(id.into_inner(), &email.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(OrderStatusResponse {
        order_id: order.id,
        status: order.status.to_string(),
        date: order.date.to_string(),
        total_amount: order.total_amount,
        items: order.items.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use tindera_app::orders::OrdersServiceError;

    use crate::test_helpers::{TestApp, make_order};

    use super::*;

    fn make_service(app: TestApp) -> Service {
        app.service(Router::with_path("orders/{id}/status").get(handler))
    }

    #[tokio::test]
    async fn matching_id_and_email_return_the_status() -> TestResult {
        let order = make_order(Uuid::now_v7());
        let order_id = order.id;

        let mut app = TestApp::default();

        app.orders
            .expect_get_order_for_customer()
            .once()
            .withf(move |id, email| *id == order_id && email == "maria@example.com")
            .return_once(move |_, _| Ok(order));

        let mut res = TestClient::get(format!(
            "http://example.com/orders/{order_id}/status?email=maria@example.com"
        ))
        .send(&make_service(app))
        .await;

        let body: OrderStatusResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.order_id, order_id);
        assert_eq!(body.status, "Pending");
        assert_eq!(body.total_amount, 175_00);

        Ok(())
    }

    #[tokio::test]
    async fn mismatched_email_returns_404() -> TestResult {
        let order_id = Uuid::now_v7();

        let mut app = TestApp::default();

        app.orders
            .expect_get_order_for_customer()
            .once()
            .withf(move |id, email| *id == order_id && email == "other@example.com")
            .return_once(|_, _| Err(OrdersServiceError::NotFound));

        let res = TestClient::get(format!(
            "http://example.com/orders/{order_id}/status?email=other@example.com"
        ))
        .send(&make_service(app))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn missing_email_returns_400() -> TestResult {
        let mut app = TestApp::default();

        app.orders.expect_get_order_for_customer().never();

        let res = TestClient::get(format!(
            "http://example.com/orders/{}/status",
            Uuid::now_v7()
        ))
        .send(&make_service(app))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
