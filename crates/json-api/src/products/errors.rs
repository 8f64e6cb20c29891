//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use tindera_app::catalog::CatalogError;

pub(crate) fn into_status_error(error: CatalogError) -> StatusError {
    match error {
        CatalogError::NotFound => StatusError::not_found().brief("Product not found"),
        CatalogError::InvalidRecord(source) => {
            error!("product row cannot be decoded: {source}");

            StatusError::internal_server_error()
        }
        CatalogError::Store(source) => {
            error!("failed to read the catalog: {source}");

            StatusError::internal_server_error()
        }
    }
}
