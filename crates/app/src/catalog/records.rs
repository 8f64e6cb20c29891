//! Product row decoding.
//!
//! Every cell of the products sheet is a string; the coercions (decimal
//! amounts, integer stock/rating, TRUE/FALSE flags, pipe-delimited galleries,
//! JSON badge lists) are applied here.

use jiff::Timestamp;
use thiserror::Error;

use crate::{
    catalog::models::{Badge, Product},
    money::{self, MoneyParseError},
    store::Row,
};

pub(crate) const ID: &str = "id";
pub(crate) const NAME: &str = "name";
const PRICE: &str = "price";
const DISCOUNTED_PRICE: &str = "discountedPrice";
const IMAGE: &str = "image";
const IMAGES: &str = "images";
const CATEGORY: &str = "category";
const PRODUCT_TYPE: &str = "productType";
const ACTIVE: &str = "active";
const RATING: &str = "rating";
const DESCRIPTION: &str = "description";
const BADGES: &str = "badges";
const COLOR: &str = "color";
const STOCK: &str = "stock";
const CREATED_AT: &str = "createdAt";
const UPDATED_AT: &str = "updatedAt";

#[derive(Debug, Error)]
pub enum ProductRowError {
    #[error("missing required column {0:?}")]
    MissingColumn(&'static str),

    #[error("bad amount in column {column:?}")]
    BadAmount {
        column: &'static str,
        #[source]
        source: MoneyParseError,
    },

    #[error("bad badge list")]
    BadBadges(#[source] serde_json::Error),
}

pub(crate) fn product_from_row(row: &Row) -> Result<Product, ProductRowError> {
    let id = required(row, ID)?;
    let name = required(row, NAME)?;

    let price = money::parse_amount(required(row, PRICE)?).map_err(|source| {
        ProductRowError::BadAmount {
            column: PRICE,
            source,
        }
    })?;

    let discounted_price = match non_empty(row, DISCOUNTED_PRICE) {
        Some(cell) => Some(money::parse_amount(cell).map_err(|source| {
            ProductRowError::BadAmount {
                column: DISCOUNTED_PRICE,
                source,
            }
        })?),
        None => None,
    };

    let badges = match non_empty(row, BADGES) {
        Some(cell) => serde_json::from_str::<Vec<Badge>>(cell)
            .map_err(ProductRowError::BadBadges)?,
        None => Vec::new(),
    };

    Ok(Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        discounted_price,
        image: cell_or_default(row, IMAGE),
        gallery: non_empty(row, IMAGES)
            .map(|cell| cell.split('|').map(str::to_string).collect())
            .unwrap_or_default(),
        category: cell_or_default(row, CATEGORY),
        product_type: cell_or_default(row, PRODUCT_TYPE),
        // A row without the flag is live.
        active: non_empty(row, ACTIVE).is_none_or(parse_flag),
        rating: non_empty(row, RATING)
            .and_then(|cell| cell.parse().ok())
            .unwrap_or(0),
        description: non_empty(row, DESCRIPTION).map(str::to_string),
        badges,
        color: non_empty(row, COLOR).map(str::to_string),
        stock: non_empty(row, STOCK)
            .and_then(|cell| cell.parse().ok())
            .unwrap_or(0),
        created_at: parse_timestamp(row, CREATED_AT),
        updated_at: parse_timestamp(row, UPDATED_AT),
    })
}

fn required<'r>(row: &'r Row, column: &'static str) -> Result<&'r str, ProductRowError> {
    non_empty(row, column).ok_or(ProductRowError::MissingColumn(column))
}

fn non_empty<'r>(row: &'r Row, column: &str) -> Option<&'r str> {
    row.get(column).map(String::as_str).filter(|cell| !cell.is_empty())
}

fn cell_or_default(row: &Row, column: &str) -> String {
    non_empty(row, column).unwrap_or_default().to_string()
}

fn parse_flag(cell: &str) -> bool {
    cell.eq_ignore_ascii_case("true")
}

fn parse_timestamp(row: &Row, column: &str) -> Timestamp {
    non_empty(row, column)
        .and_then(|cell| cell.parse().ok())
        .unwrap_or(Timestamp::UNIX_EPOCH)
}

#[cfg(test)]
mod tests {
    use crate::store::row;

    use super::*;

    fn full_row() -> Row {
        row(&[
            (ID, "p-1"),
            (NAME, "Bucket Hat"),
            (PRICE, "499.00"),
            (DISCOUNTED_PRICE, "399.00"),
            (IMAGE, "/images/hat.png"),
            (IMAGES, "/images/hat.png|/images/hat-side.png"),
            (CATEGORY, "hats"),
            (PRODUCT_TYPE, "accessory"),
            (ACTIVE, "TRUE"),
            (RATING, "4"),
            (DESCRIPTION, "Reversible bucket hat"),
            (
                BADGES,
                r#"[{"type":"sale","label":"20% off","discount_percent":20}]"#,
            ),
            (COLOR, "navy"),
            (STOCK, "12"),
            (CREATED_AT, "2026-01-04T08:00:00Z"),
            (UPDATED_AT, "2026-02-10T08:00:00Z"),
        ])
    }

    #[test]
    fn decodes_a_full_row() {
        let product = product_from_row(&full_row()).expect("row should decode");

        assert_eq!(product.id, "p-1");
        assert_eq!(product.price, 499_00);
        assert_eq!(product.discounted_price, Some(399_00));
        assert_eq!(product.effective_price(), 399_00);
        assert_eq!(product.gallery.len(), 2);
        assert_eq!(product.badges[0].discount_percent, Some(20));
        assert!(product.active);
        assert!(!product.sold_out());
    }

    #[test]
    fn inactive_or_out_of_stock_is_sold_out() {
        let mut cells = full_row();
        cells.insert(ACTIVE.to_string(), "FALSE".to_string());

        let product = product_from_row(&cells).expect("row should decode");
        assert!(product.sold_out());

        let mut cells = full_row();
        cells.insert(STOCK.to_string(), "0".to_string());

        let product = product_from_row(&cells).expect("row should decode");
        assert!(product.sold_out());
    }

    #[test]
    fn missing_optional_columns_take_defaults() {
        let cells = row(&[(ID, "p-2"), (NAME, "Tote"), (PRICE, "250.00")]);

        let product = product_from_row(&cells).expect("row should decode");

        assert_eq!(product.discounted_price, None);
        assert_eq!(product.effective_price(), 250_00);
        assert!(product.gallery.is_empty());
        assert!(product.badges.is_empty());
        assert!(product.active, "missing flag means live");
        assert_eq!(product.stock, 0);
        assert!(product.sold_out(), "zero stock is sold out");
    }

    #[test]
    fn missing_required_columns_are_rejected() {
        let cells = row(&[(NAME, "Tote"), (PRICE, "250.00")]);

        assert!(matches!(
            product_from_row(&cells),
            Err(ProductRowError::MissingColumn(ID))
        ));
    }

    #[test]
    fn bad_price_is_rejected() {
        let cells = row(&[(ID, "p-3"), (NAME, "Cap"), (PRICE, "soon")]);

        assert!(matches!(
            product_from_row(&cells),
            Err(ProductRowError::BadAmount { column: "price", .. })
        ));
    }

    #[test]
    fn bad_badge_json_is_rejected() {
        let mut cells = full_row();
        cells.insert(BADGES.to_string(), "not json".to_string());

        assert!(matches!(
            product_from_row(&cells),
            Err(ProductRowError::BadBadges(_))
        ));
    }
}
