//! Order Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tindera_app::orders::models::{Order, OrderItem};

/// A line item as stored on the order.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderItemResponse {
    pub id: String,
    pub name: String,

    /// Unit price in centavos
    pub price: u64,

    pub quantity: u32,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
            quantity: item.quantity,
        }
    }
}

/// Order Model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderResponse {
    pub order_id: Uuid,

    pub date: String,

    pub customer_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    pub contact_number: String,

    pub address: String,

    pub payment_method: String,

    pub items: Vec<OrderItemResponse>,

    /// Total in centavos, shipping included
    pub total_amount: u64,

    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_url: Option<String>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            order_id: order.id,
            date: order.date.to_string(),
            customer_name: order.customer_name,
            email: order.email,
            contact_number: order.contact_number,
            address: order.address,
            payment_method: order.payment_method,
            items: order.items.into_iter().map(Into::into).collect(),
            total_amount: order.total_amount,
            status: order.status.to_string(),
            receipt_url: order.receipt_url,
        }
    }
}
