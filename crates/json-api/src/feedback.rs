//! Feedback Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use tindera_app::feedback::FeedbackError;

use crate::{extensions::*, state::State};

/// Feedback Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FeedbackRequest {
    pub message: String,

    #[serde(default)]
    pub email: Option<String>,
}

/// Feedback Accepted Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FeedbackAcceptedResponse {
    pub status: String,
}

/// Feedback Handler
///
/// Appends a free-form message to the feedback log.
#[endpoint(
    tags("feedback"),
    summary = "Submit Feedback",
    responses(
        (status_code = StatusCode::CREATED, description = "Feedback recorded"),
        (status_code = StatusCode::BAD_REQUEST, description = "Empty message"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<FeedbackRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<FeedbackAcceptedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    state
        .app
        .feedback
        .submit(&request.message, request.email.as_deref())
        .await
        .map_err(|err| match err {
            FeedbackError::EmptyMessage => StatusError::bad_request().brief(err.to_string()),
            FeedbackError::Store(source) => {
                error!("failed to record feedback: {source}");

                StatusError::internal_server_error()
            }
        })?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(FeedbackAcceptedResponse {
        status: "received".to_string(),
    }))
}
