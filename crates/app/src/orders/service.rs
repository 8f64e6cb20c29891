//! Orders service.
//!
//! The order ledger is the single authority for order status and totals.
//! The backing sheet has no transactions; concurrent writes to the same
//! order are last-write-wins by design.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::warn;
use uuid::Uuid;

use crate::{
    orders::{
        errors::{OrderValidationError, OrdersServiceError},
        models::{NewOrder, Order, OrderStatus},
        records,
    },
    store::{SheetStore, row},
};

pub(crate) const ORDERS_SHEET: &str = "Orders";

#[derive(Clone)]
pub struct SheetOrdersService {
    store: Arc<dyn SheetStore>,
}

impl SheetOrdersService {
    #[must_use]
    pub fn new(store: Arc<dyn SheetStore>) -> Self {
        Self { store }
    }

    async fn find_order(&self, id: Uuid) -> Result<Order, OrdersServiceError> {
        let row = self
            .store
            .find_row(ORDERS_SHEET, records::ORDER_ID, &id.to_string())
            .await?
            .ok_or(OrdersServiceError::NotFound)?;

        records::order_from_row(&row).map_err(OrdersServiceError::InvalidRecord)
    }
}

#[async_trait]
impl OrdersService for SheetOrdersService {
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError> {
        validate(&order)?;

        let order = Order {
            id: Uuid::now_v7(),
            date: Timestamp::now(),
            customer_name: order.customer_name,
            email: order.email,
            contact_number: order.contact_number,
            address: order.address,
            payment_method: order.payment_method,
            items: order.items,
            total_amount: order.total_amount,
            status: OrderStatus::Pending,
            receipt_url: None,
        };

        self.store
            .append_row(ORDERS_SHEET, records::order_to_row(&order))
            .await?;

        Ok(order)
    }

    async fn get_order(&self, id: Uuid) -> Result<Order, OrdersServiceError> {
        self.find_order(id).await
    }

    async fn get_order_for_customer(
        &self,
        id: Uuid,
        email: &str,
    ) -> Result<Order, OrdersServiceError> {
        let order = self.find_order(id).await?;

        // A mismatched email is indistinguishable from an unknown order; the
        // caller learns nothing about rows it cannot see.
        let matches = order
            .email
            .as_deref()
            .is_some_and(|stored| stored.eq_ignore_ascii_case(email));

        if !matches {
            return Err(OrdersServiceError::NotFound);
        }

        Ok(order)
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError> {
        let order = self.find_order(id).await?;

        if !order.status.expected_transitions().contains(&status) && order.status != status {
            warn!(
                "order {id}: status overwrite {} -> {status} is outside the documented progression",
                order.status
            );
        }

        let matched = self
            .store
            .update_row(
                ORDERS_SHEET,
                records::ORDER_ID,
                &id.to_string(),
                row(&[(records::STATUS, status.as_str())]),
            )
            .await?;

        if !matched {
            return Err(OrdersServiceError::NotFound);
        }

        Ok(Order { status, ..order })
    }

    async fn attach_receipt(
        &self,
        id: Uuid,
        receipt_url: &str,
    ) -> Result<Order, OrdersServiceError> {
        let order = self.find_order(id).await?;

        // Receipt upload always means "payment recorded", whatever the row
        // said before.
        let matched = self
            .store
            .update_row(
                ORDERS_SHEET,
                records::ORDER_ID,
                &id.to_string(),
                row(&[
                    (records::RECEIPT_URL, receipt_url),
                    (records::STATUS, OrderStatus::Paid.as_str()),
                ]),
            )
            .await?;

        if !matched {
            return Err(OrdersServiceError::NotFound);
        }

        Ok(Order {
            status: OrderStatus::Paid,
            receipt_url: Some(receipt_url.to_string()),
            ..order
        })
    }

    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError> {
        let rows = self.store.read_rows(ORDERS_SHEET).await?;

        let mut orders = decode_rows(&rows);

        orders.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(orders)
    }

    async fn list_orders_for_email(&self, email: &str) -> Result<Vec<Order>, OrdersServiceError> {
        let mut orders = self.list_orders().await?;

        orders.retain(|order| {
            order
                .email
                .as_deref()
                .is_some_and(|stored| stored.eq_ignore_ascii_case(email))
        });

        Ok(orders)
    }
}

fn decode_rows(rows: &[crate::store::Row]) -> Vec<Order> {
    rows.iter()
        .filter_map(|row| match records::order_from_row(row) {
            Ok(order) => Some(order),
            Err(error) => {
                warn!("skipping malformed order row: {error}");
                None
            }
        })
        .collect()
}

fn validate(order: &NewOrder) -> Result<(), OrderValidationError> {
    let require = |cell: &str, field: &'static str| {
        if cell.trim().is_empty() {
            Err(OrderValidationError::MissingField(field))
        } else {
            Ok(())
        }
    };

    require(&order.customer_name, "name")?;
    require(&order.contact_number, "contactNumber")?;
    require(&order.address, "address")?;
    require(&order.payment_method, "paymentMethod")?;

    if order.items.is_empty() {
        return Err(OrderValidationError::EmptyItems);
    }

    Ok(())
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Validate and append a new order with status Pending.
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError>;

    /// Retrieve a single order (back-office view, no email check).
    async fn get_order(&self, id: Uuid) -> Result<Order, OrdersServiceError>;

    /// Customer-facing lookup; the email must match the stored order
    /// case-insensitively or the order is reported as not found.
    async fn get_order_for_customer(
        &self,
        id: Uuid,
        email: &str,
    ) -> Result<Order, OrdersServiceError>;

    /// Overwrite the status cell. Transitions are not validated; off-table
    /// overwrites are logged.
    async fn update_status(
        &self,
        id: Uuid,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError>;

    /// Record the proof-of-payment link and force status to Paid.
    async fn attach_receipt(
        &self,
        id: Uuid,
        receipt_url: &str,
    ) -> Result<Order, OrdersServiceError>;

    /// Every order, most recent first.
    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError>;

    /// A customer's orders, most recent first.
    async fn list_orders_for_email(&self, email: &str)
    -> Result<Vec<Order>, OrdersServiceError>;
}
