//! Order row encoding and decoding.

use jiff::Timestamp;
use thiserror::Error;
use uuid::Uuid;

use crate::{
    money::{self, MoneyParseError},
    orders::models::{Order, OrderItem, OrderStatus, UnknownStatus},
    store::Row,
};

pub(crate) const ORDER_ID: &str = "orderId";
const DATE: &str = "date";
const CUSTOMER_NAME: &str = "customerName";
const EMAIL: &str = "email";
const CONTACT_NUMBER: &str = "contactNumber";
const ADDRESS: &str = "address";
const PAYMENT_METHOD: &str = "paymentMethod";
const TOTAL_AMOUNT: &str = "totalAmount";
const ITEMS: &str = "items";
pub(crate) const STATUS: &str = "status";
pub(crate) const RECEIPT_URL: &str = "receiptUrl";

#[derive(Debug, Error)]
pub enum OrderRowError {
    #[error("missing required column {0:?}")]
    MissingColumn(&'static str),

    #[error("bad order id")]
    BadId(#[source] uuid::Error),

    #[error("bad order date {0:?}")]
    BadDate(String),

    #[error("bad total amount")]
    BadAmount(#[source] MoneyParseError),

    #[error("bad line item list")]
    BadItems(#[source] serde_json::Error),

    #[error(transparent)]
    BadStatus(#[from] UnknownStatus),
}

pub(crate) fn order_to_row(order: &Order) -> Row {
    let mut row = Row::default();

    row.insert(ORDER_ID.to_string(), order.id.to_string());
    row.insert(DATE.to_string(), order.date.to_string());
    row.insert(CUSTOMER_NAME.to_string(), order.customer_name.clone());
    row.insert(
        EMAIL.to_string(),
        order.email.clone().unwrap_or_default(),
    );
    row.insert(CONTACT_NUMBER.to_string(), order.contact_number.clone());
    row.insert(ADDRESS.to_string(), order.address.clone());
    row.insert(PAYMENT_METHOD.to_string(), order.payment_method.clone());
    row.insert(
        TOTAL_AMOUNT.to_string(),
        money::format_amount(order.total_amount),
    );
    row.insert(ITEMS.to_string(), encode_items(&order.items));
    row.insert(STATUS.to_string(), order.status.to_string());
    row.insert(
        RECEIPT_URL.to_string(),
        order.receipt_url.clone().unwrap_or_default(),
    );

    row
}

pub(crate) fn order_from_row(row: &Row) -> Result<Order, OrderRowError> {
    let id = required(row, ORDER_ID)?
        .parse::<Uuid>()
        .map_err(OrderRowError::BadId)?;

    let date_cell = required(row, DATE)?;
    let date: Timestamp = date_cell
        .parse()
        .map_err(|_parse| OrderRowError::BadDate(date_cell.to_string()))?;

    let total_amount =
        money::parse_amount(required(row, TOTAL_AMOUNT)?).map_err(OrderRowError::BadAmount)?;

    let items: Vec<OrderItem> = match non_empty(row, ITEMS) {
        Some(cell) => serde_json::from_str(cell).map_err(OrderRowError::BadItems)?,
        None => Vec::new(),
    };

    let status: OrderStatus = required(row, STATUS)?.parse()?;

    Ok(Order {
        id,
        date,
        customer_name: required(row, CUSTOMER_NAME)?.to_string(),
        email: non_empty(row, EMAIL).map(str::to_string),
        contact_number: cell_or_default(row, CONTACT_NUMBER),
        address: cell_or_default(row, ADDRESS),
        payment_method: cell_or_default(row, PAYMENT_METHOD),
        items,
        total_amount,
        status,
        receipt_url: non_empty(row, RECEIPT_URL).map(str::to_string),
    })
}

fn encode_items(items: &[OrderItem]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_err| "[]".to_string())
}

fn required<'r>(row: &'r Row, column: &'static str) -> Result<&'r str, OrderRowError> {
    non_empty(row, column).ok_or(OrderRowError::MissingColumn(column))
}

fn non_empty<'r>(row: &'r Row, column: &str) -> Option<&'r str> {
    row.get(column)
        .map(String::as_str)
        .filter(|cell| !cell.is_empty())
}

fn cell_or_default(row: &Row, column: &str) -> String {
    non_empty(row, column).unwrap_or_default().to_string()
}
