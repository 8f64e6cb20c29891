//! Update Order Status Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::{JsonBody, PathParam}},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tindera_app::orders::models::OrderStatus;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, models::OrderResponse},
    state::State,
};

/// Update Status Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateStatusRequest {
    /// One of Pending, Paid, Processing, Shipped, Delivered, Cancelled
    pub status: String,
}

/// Update Order Status Handler
///
/// Overwrites the status cell. Any status can follow any status; the
/// back office is trusted to correct mistakes by hand.
#[endpoint(
    tags("admin"),
    summary = "Update Order Status",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Status updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    json: JsonBody<UpdateStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let status = json
        .into_inner()
        .status
        .parse::<OrderStatus>()
        .or_400("unknown order status")?;

    let order = state
        .app
        .orders
        .update_status(id.into_inner(), status)
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}
