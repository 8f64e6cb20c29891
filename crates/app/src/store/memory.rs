//! In-memory sheet store.
//!
//! Backs service-level tests and local development with the same observable
//! semantics as the remote sheet service: ordered rows, first-match updates,
//! last-write-wins.

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;

use crate::store::{Row, SheetStore, StoreError};

#[derive(Debug, Default)]
pub struct MemorySheetStore {
    sheets: RwLock<FxHashMap<String, Vec<Row>>>,
}

impl MemorySheetStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a sheet with rows, replacing any existing content.
    pub async fn seed(&self, sheet: &str, rows: Vec<Row>) {
        self.sheets.write().await.insert(sheet.to_string(), rows);
    }

    /// Number of rows currently held by a sheet.
    pub async fn row_count(&self, sheet: &str) -> usize {
        self.sheets
            .read()
            .await
            .get(sheet)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl SheetStore for MemorySheetStore {
    async fn read_rows(&self, sheet: &str) -> Result<Vec<Row>, StoreError> {
        Ok(self
            .sheets
            .read()
            .await
            .get(sheet)
            .cloned()
            .unwrap_or_default())
    }

    async fn append_row(&self, sheet: &str, row: Row) -> Result<(), StoreError> {
        self.sheets
            .write()
            .await
            .entry(sheet.to_string())
            .or_default()
            .push(row);

        Ok(())
    }

    async fn find_row(
        &self,
        sheet: &str,
        key_column: &str,
        key: &str,
    ) -> Result<Option<Row>, StoreError> {
        Ok(self
            .sheets
            .read()
            .await
            .get(sheet)
            .and_then(|rows| {
                rows.iter()
                    .find(|row| row.get(key_column).is_some_and(|cell| cell == key))
            })
            .cloned())
    }

    async fn update_row(
        &self,
        sheet: &str,
        key_column: &str,
        key: &str,
        updates: Row,
    ) -> Result<bool, StoreError> {
        let mut sheets = self.sheets.write().await;

        let Some(rows) = sheets.get_mut(sheet) else {
            return Ok(false);
        };

        let Some(row) = rows
            .iter_mut()
            .find(|row| row.get(key_column).is_some_and(|cell| cell == key))
        else {
            return Ok(false);
        };

        row.extend(updates);

        Ok(true)
    }
}
