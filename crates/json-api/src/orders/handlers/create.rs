//! Create Order Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tindera_app::orders::models::{NewOrder, OrderItem};

use crate::{extensions::*, orders::errors::into_status_error, state::State};

/// Order line item payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderItemRequest {
    pub id: String,
    pub name: String,

    /// Unit price in centavos
    pub price: u64,

    pub quantity: u32,
}

/// Create Order Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateOrderRequest {
    pub name: String,

    #[serde(default)]
    pub email: Option<String>,

    pub address: String,

    pub contact_number: String,

    pub payment_method: String,

    /// Total in centavos, shipping included
    pub amount: u64,

    pub items: Vec<OrderItemRequest>,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(request: CreateOrderRequest) -> Self {
        NewOrder {
            customer_name: request.name,
            email: request.email,
            contact_number: request.contact_number,
            address: request.address,
            payment_method: request.payment_method,
            items: request
                .items
                .into_iter()
                .map(|item| OrderItem {
                    id: item.id,
                    name: item.name,
                    price: item.price,
                    quantity: item.quantity,
                })
                .collect(),
            total_amount: request.amount,
        }
    }
}

/// Order Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderCreatedResponse {
    /// Created order id
    pub order_id: Uuid,
}

/// Create Order Handler
#[endpoint(
    tags("orders"),
    summary = "Create Order",
    responses(
        (status_code = StatusCode::CREATED, description = "Order created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let order_id = state
        .app
        .orders
        .create_order(json.into_inner().into())
        .await
        .map_err(into_status_error)?
        .id;

    res.add_header(LOCATION, format!("/orders/{order_id}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(OrderCreatedResponse { order_id }))
}
