//! Catalog service.

use std::cmp::Reverse;
use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::warn;

use crate::{
    catalog::{
        errors::CatalogError,
        models::{Product, ProductQuery, ProductSort},
        records,
    },
    store::SheetStore,
};

pub(crate) const PRODUCTS_SHEET: &str = "Products";

#[derive(Clone)]
pub struct SheetCatalogService {
    store: Arc<dyn SheetStore>,
}

impl SheetCatalogService {
    #[must_use]
    pub fn new(store: Arc<dyn SheetStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CatalogService for SheetCatalogService {
    async fn list_products(&self, query: ProductQuery) -> Result<Vec<Product>, CatalogError> {
        let rows = self.store.read_rows(PRODUCTS_SHEET).await?;

        // Malformed rows are the catalog tooling's problem; skip them so one
        // bad row cannot take the whole grid down.
        let mut products: Vec<Product> = rows
            .iter()
            .filter_map(|row| match records::product_from_row(row) {
                Ok(product) => Some(product),
                Err(error) => {
                    warn!("skipping malformed product row: {error}");
                    None
                }
            })
            .collect();

        if let Some(category) = &query.category {
            products.retain(|product| product.category.eq_ignore_ascii_case(category));
        }

        sort_products(&mut products, query.sort);

        Ok(products)
    }

    async fn get_product(&self, id: &str) -> Result<Product, CatalogError> {
        let row = self
            .store
            .find_row(PRODUCTS_SHEET, records::ID, id)
            .await?
            .ok_or(CatalogError::NotFound)?;

        records::product_from_row(&row).map_err(CatalogError::InvalidRecord)
    }
}

fn sort_products(products: &mut [Product], sort: ProductSort) {
    match sort {
        // Sheet order is the curated order.
        ProductSort::Featured => {}
        ProductSort::Newest => products.sort_by_key(|product| Reverse(product.created_at)),
        ProductSort::PriceAsc => products.sort_by_key(Product::effective_price),
        ProductSort::PriceDesc => {
            products.sort_by_key(|product| Reverse(product.effective_price()));
        }
        ProductSort::BestSelling => products.sort_by_key(|product| Reverse(product.rating)),
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// All products, filtered and sorted for the grid.
    async fn list_products(&self, query: ProductQuery) -> Result<Vec<Product>, CatalogError>;

    /// Retrieve a single product.
    async fn get_product(&self, id: &str) -> Result<Product, CatalogError>;
}
