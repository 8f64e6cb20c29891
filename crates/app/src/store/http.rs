//! HTTP client for the hosted sheet service.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::store::{Row, SheetStore, StoreError};

/// Configuration for connecting to the sheet service.
#[derive(Debug, Clone)]
pub struct SheetStoreConfig {
    /// Service address, e.g. `"https://sheets.example.com"`.
    pub base_url: String,

    /// Spreadsheet identifier holding the shop's sheets.
    pub spreadsheet_id: String,

    /// Bearer token for the service account.
    pub token: String,
}

/// Row-store client over the sheet service's REST surface.
///
/// The service has no query language; `find_row` and `update_row` read the
/// sheet and scan client-side, addressing the matched row by its index.
#[derive(Debug, Clone)]
pub struct HttpSheetStore {
    config: SheetStoreConfig,
    http: Client,
}

impl HttpSheetStore {
    #[must_use]
    pub fn new(config: SheetStoreConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn rows_url(&self, sheet: &str) -> String {
        format!(
            "{}/spreadsheets/{}/sheets/{sheet}/rows",
            self.config.base_url, self.config.spreadsheet_id
        )
    }

    async fn read_indexed(&self, sheet: &str) -> Result<Vec<IndexedRow>, StoreError> {
        let response = self
            .http
            .get(self.rows_url(sheet))
            .bearer_auth(&self.config.token)
            .send()
            .await?;

        // A sheet that has never been written reads as empty.
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(StoreError::UnexpectedResponse(format!(
                "read of sheet {sheet:?} failed with status {status}: {text}"
            )));
        }

        let parsed: RowsResponse = response.json().await?;

        Ok(parsed.rows)
    }

    fn find_indexed<'a>(
        rows: &'a [IndexedRow],
        key_column: &str,
        key: &str,
    ) -> Option<&'a IndexedRow> {
        rows.iter()
            .find(|row| row.cells.get(key_column).is_some_and(|cell| cell == key))
    }
}

#[async_trait]
impl SheetStore for HttpSheetStore {
    async fn read_rows(&self, sheet: &str) -> Result<Vec<Row>, StoreError> {
        let rows = self.read_indexed(sheet).await?;

        Ok(rows.into_iter().map(|row| row.cells).collect())
    }

    async fn append_row(&self, sheet: &str, row: Row) -> Result<(), StoreError> {
        let response = self
            .http
            .post(self.rows_url(sheet))
            .bearer_auth(&self.config.token)
            .json(&CellsBody { cells: row })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(StoreError::UnexpectedResponse(format!(
                "append to sheet {sheet:?} failed with status {status}: {text}"
            )));
        }

        Ok(())
    }

    async fn find_row(
        &self,
        sheet: &str,
        key_column: &str,
        key: &str,
    ) -> Result<Option<Row>, StoreError> {
        let rows = self.read_indexed(sheet).await?;

        Ok(Self::find_indexed(&rows, key_column, key).map(|row| row.cells.clone()))
    }

    async fn update_row(
        &self,
        sheet: &str,
        key_column: &str,
        key: &str,
        updates: Row,
    ) -> Result<bool, StoreError> {
        let rows = self.read_indexed(sheet).await?;

        let Some(matched) = Self::find_indexed(&rows, key_column, key) else {
            return Ok(false);
        };

        let url = format!("{}/{}", self.rows_url(sheet), matched.index);

        let response = self
            .http
            .patch(url)
            .bearer_auth(&self.config.token)
            .json(&CellsBody { cells: updates })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(StoreError::UnexpectedResponse(format!(
                "update of sheet {sheet:?} row {} failed with status {status}: {text}",
                matched.index
            )));
        }

        Ok(true)
    }
}

#[derive(Debug, Deserialize)]
struct RowsResponse {
    rows: Vec<IndexedRow>,
}

#[derive(Debug, Deserialize)]
struct IndexedRow {
    index: u32,
    cells: Row,
}

#[derive(Debug, Serialize)]
struct CellsBody {
    cells: Row,
}
