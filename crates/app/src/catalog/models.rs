//! Catalog Models

use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Badge shown on a product card, e.g. a sale or new-arrival tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<u8>,
}

/// Product Model
///
/// Immutable from the storefront's perspective; rows are maintained by the
/// external catalog tooling.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: u64,
    pub discounted_price: Option<u64>,
    pub image: String,
    pub gallery: Vec<String>,
    pub category: String,
    pub product_type: String,
    pub active: bool,
    pub rating: u8,
    pub description: Option<String>,
    pub badges: Vec<Badge>,
    pub color: Option<String>,
    pub stock: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Product {
    /// Gone from the storefront when deactivated or out of stock.
    #[must_use]
    pub fn sold_out(&self) -> bool {
        !self.active || self.stock == 0
    }

    /// The price charged when the product is added to a bag.
    #[must_use]
    pub fn effective_price(&self) -> u64 {
        self.discounted_price.unwrap_or(self.price)
    }
}

/// Listing options for the product grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub sort: ProductSort,
}

/// Sort order for the product grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProductSort {
    /// Sheet order, as curated.
    #[default]
    Featured,
    Newest,
    PriceAsc,
    PriceDesc,
    BestSelling,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown sort {0:?}")]
pub struct UnknownSort(String);

impl FromStr for ProductSort {
    type Err = UnknownSort;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "featured" => Ok(Self::Featured),
            "newest" => Ok(Self::Newest),
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            "best-selling" => Ok(Self::BestSelling),
            other => Err(UnknownSort(other.to_string())),
        }
    }
}
