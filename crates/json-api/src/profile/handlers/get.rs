//! Get Profile Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    profile::{errors::into_status_error, models::ProfileResponse},
    state::State,
};

/// Get Profile Handler
///
/// The authenticated user's stored details and mirrored bag; an empty
/// default when the user has no row yet.
#[endpoint(
    tags("profile"),
    summary = "Get Profile",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProfileResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?.clone();

    let profile = state
        .app
        .profiles
        .get_profile(&identity.user_id)
        .await
        .map_err(into_status_error)?;

    Ok(Json(profile.into()))
}
