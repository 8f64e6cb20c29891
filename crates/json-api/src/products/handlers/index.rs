//! List Products Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use tindera_app::catalog::models::{ProductQuery, ProductSort};

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductResponse},
    state::State,
};

/// List Products Handler
///
/// Returns the product grid, optionally filtered and sorted.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(
    category: QueryParam<String, false>,
    sort: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let sort = sort
        .into_inner()
        .map(|value| value.parse::<ProductSort>())
        .transpose()
        .or_400("could not parse \"sort\" query parameter")?
        .unwrap_or_default();

    let products = state
        .app
        .catalog
        .list_products(ProductQuery {
            category: category.into_inner(),
            sort,
        })
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
