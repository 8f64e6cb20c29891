//! Product Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use tindera_app::catalog::models::{Badge, Product};

/// Product badge as rendered on a card.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BadgeResponse {
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<u8>,
}

impl From<Badge> for BadgeResponse {
    fn from(badge: Badge) -> Self {
        Self {
            kind: badge.kind,
            label: badge.label,
            discount_percent: badge.discount_percent,
        }
    }
}

/// Product Model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// The product identifier from the catalog sheet
    pub id: String,

    pub name: String,

    /// Price in centavos
    pub price: u64,

    /// Discounted price in centavos, when on sale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounted_price: Option<u64>,

    pub image: String,

    pub images: Vec<String>,

    pub category: String,

    pub product_type: String,

    pub rating: u8,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub badges: Vec<BadgeResponse>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    pub stock: u32,

    /// Derived: inactive or out of stock
    pub sold_out: bool,

    pub created_at: String,

    pub updated_at: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let sold_out = product.sold_out();

        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            discounted_price: product.discounted_price,
            image: product.image,
            images: product.gallery,
            category: product.category,
            product_type: product.product_type,
            rating: product.rating,
            description: product.description,
            badges: product.badges.into_iter().map(Into::into).collect(),
            color: product.color,
            stock: product.stock,
            sold_out,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}
