//! Cart Models

use serde::{Deserialize, Serialize};

use crate::catalog::models::Product;

/// One line of the bag: a product snapshot plus a quantity.
///
/// The price is the effective price at the moment the product was added; it
/// is never re-fetched from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    pub price: u64,
    pub quantity: u32,
}

impl CartItem {
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.effective_price(),
            quantity: 1,
        }
    }

    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.price * u64::from(self.quantity)
    }
}
