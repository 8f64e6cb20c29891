//! Row-oriented storage abstraction over the spreadsheet service.
//!
//! The backing service exposes sheets of header-keyed string cells with no
//! query language and no transactions. Lookups beyond exact key matches
//! (e.g. case-insensitive email scans) are the caller's job.

mod http;
mod memory;

pub use http::{HttpSheetStore, SheetStoreConfig};
pub use memory::MemorySheetStore;

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// A single sheet row, keyed by header name. All cell values are strings.
pub type Row = FxHashMap<String, String>;

/// Build a [`Row`] from `(header, value)` pairs.
#[must_use]
pub fn row(cells: &[(&str, &str)]) -> Row {
    cells
        .iter()
        .map(|(header, value)| ((*header).to_string(), (*value).to_string()))
        .collect()
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response from sheet service: {0}")]
    UnexpectedResponse(String),
}

/// Row-store contract. A sheet that has never been written reads as empty;
/// appending creates it.
#[async_trait]
pub trait SheetStore: Send + Sync {
    /// Read every row of a sheet in row order.
    async fn read_rows(&self, sheet: &str) -> Result<Vec<Row>, StoreError>;

    /// Append a row to the end of a sheet.
    async fn append_row(&self, sheet: &str, row: Row) -> Result<(), StoreError>;

    /// First row whose `key_column` cell equals `key` exactly.
    async fn find_row(
        &self,
        sheet: &str,
        key_column: &str,
        key: &str,
    ) -> Result<Option<Row>, StoreError>;

    /// Overwrite cells of the first row whose `key_column` cell equals `key`.
    /// Returns `false` when no row matched.
    async fn update_row(
        &self,
        sheet: &str,
        key_column: &str,
        key: &str,
        updates: Row,
    ) -> Result<bool, StoreError>;
}
