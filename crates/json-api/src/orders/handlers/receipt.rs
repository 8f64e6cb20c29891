//! Receipt Upload Handler
//!
//! Completes (or resumes) the checkout saga: stores the proof-of-payment
//! image, links it to the order, and flips the order to Paid.

use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use salvo::{
    oapi::{ToSchema, extract::{JsonBody, PathParam}},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tindera_app::files::ReceiptUpload;

use crate::{extensions::*, orders::errors::checkout_into_status_error, state::State};

/// Receipt Upload Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReceiptUploadRequest {
    pub filename: String,

    /// MIME type; must be an image
    pub content_type: String,

    /// Base64-encoded image bytes
    pub data: String,
}

/// Receipt Attached Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReceiptAttachedResponse {
    pub order_id: Uuid,
    pub status: String,
    pub receipt_url: String,
}

/// Receipt Upload Handler
#[endpoint(
    tags("orders"),
    summary = "Upload Receipt",
    responses(
        (status_code = StatusCode::OK, description = "Receipt linked, order marked Paid"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    json: JsonBody<ReceiptUploadRequest>,
    depot: &mut Depot,
) -> Result<Json<ReceiptAttachedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let bytes = BASE64
        .decode(request.data.as_bytes())
        .or_400("receipt data is not valid base64")?;

    let order = state
        .app
        .checkout
        .resume_receipt(
            id.into_inner(),
            ReceiptUpload {
                filename: request.filename,
                content_type: request.content_type,
                bytes,
            },
        )
        .await
        .map_err(checkout_into_status_error)?;

    Ok(Json(ReceiptAttachedResponse {
        order_id: order.id,
        status: order.status.to_string(),
        receipt_url: order.receipt_url.unwrap_or_default(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use tindera_app::{
        files::StoredReceipt,
        orders::{OrdersServiceError, models::OrderStatus},
    };

    use crate::test_helpers::{TestApp, make_order};

    use super::*;

    fn make_service(app: TestApp) -> Service {
        app.service(Router::with_path("orders/{id}/receipt").post(handler))
    }

    fn request_body() -> serde_json::Value {
        json!({
            "filename": "transfer.png",
            "contentType": "image/png",
            "data": BASE64.encode(b"png bytes"),
        })
    }

    #[tokio::test]
    async fn upload_links_the_receipt_and_marks_paid() -> TestResult {
        let pending = make_order(Uuid::now_v7());
        let order_id = pending.id;

        let mut paid = make_order(order_id);
        paid.status = OrderStatus::Paid;
        paid.receipt_url = Some("https://files.example.com/proof.png".to_string());

        let mut app = TestApp::default();

        app.orders
            .expect_get_order()
            .once()
            .withf(move |id| *id == order_id)
            .return_once(move |_| Ok(pending));

        app.receipts.expect_upload().once().returning(|upload| {
            assert_eq!(upload.content_type, "image/png");

            Ok(StoredReceipt {
                file_id: "f-1".to_string(),
                url: "https://files.example.com/proof.png".to_string(),
            })
        });

        app.orders
            .expect_attach_receipt()
            .once()
            .withf(move |id, url| {
                *id == order_id && url == "https://files.example.com/proof.png"
            })
            .return_once(move |_, _| Ok(paid));

        app.notifier.expect_admin_new_order().returning(|_| Ok(()));
        app.notifier
            .expect_order_confirmation()
            .returning(|_| Ok(()));

        let mut res = TestClient::post(format!("http://example.com/orders/{order_id}/receipt"))
            .json(&request_body())
            .send(&make_service(app))
            .await;

        let body: ReceiptAttachedResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.status, "Paid");
        assert_eq!(body.receipt_url, "https://files.example.com/proof.png");

        Ok(())
    }

    #[tokio::test]
    async fn unknown_order_returns_404() -> TestResult {
        let mut app = TestApp::default();

        app.orders
            .expect_get_order()
            .once()
            .return_once(|_| Err(OrdersServiceError::NotFound));
        app.receipts.expect_upload().never();

        let res = TestClient::post(format!(
            "http://example.com/orders/{}/receipt",
            Uuid::now_v7()
        ))
        .json(&request_body())
        .send(&make_service(app))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn non_image_upload_returns_400() -> TestResult {
        let mut app = TestApp::default();

        app.receipts.expect_upload().never();

        let mut body = request_body();
        body["contentType"] = json!("application/pdf");

        let res = TestClient::post(format!(
            "http://example.com/orders/{}/receipt",
            Uuid::now_v7()
        ))
        .json(&body)
        .send(&make_service(app))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn bad_base64_returns_400() -> TestResult {
        let mut app = TestApp::default();

        app.receipts.expect_upload().never();

        let mut body = request_body();
        body["data"] = json!("%%% not base64 %%%");

        let res = TestClient::post(format!(
            "http://example.com/orders/{}/receipt",
            Uuid::now_v7()
        ))
        .json(&body)
        .send(&make_service(app))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
