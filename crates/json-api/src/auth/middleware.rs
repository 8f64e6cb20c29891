//! Auth middleware.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::error;

use tindera_app::auth::AuthError;

use crate::{extensions::*, state::State};

/// Resolve the bearer token to an identity and stash it in the depot.
#[salvo::handler]
pub(crate) async fn authenticate(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = extract_bearer_token(req) else {
        res.render(StatusError::unauthorized().brief("Missing or invalid Authorization header"));

        return;
    };

    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => state,
        Err(_error) => {
            res.render(StatusError::internal_server_error());

            return;
        }
    };

    let identity = match state.app.identity.authenticate_bearer(token).await {
        Ok(identity) => identity,
        Err(AuthError::Unauthenticated) => {
            res.render(StatusError::unauthorized().brief("Unknown or expired session"));

            return;
        }
        Err(AuthError::Http(source)) => {
            error!("failed to reach identity provider: {source}");

            res.render(StatusError::internal_server_error());

            return;
        }
        Err(AuthError::UnexpectedResponse(detail)) => {
            error!("identity provider misbehaved: {detail}");

            res.render(StatusError::internal_server_error());

            return;
        }
    };

    depot.insert_identity(identity);

    ctrl.call_next(req, depot, res).await;
}

/// Allow-list gate; runs after [`authenticate`].
#[salvo::handler]
pub(crate) async fn require_admin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Ok(state) = depot.obtain::<Arc<State>>() else {
        res.render(StatusError::internal_server_error());

        return;
    };

    let identity = match depot.identity_or_401() {
        Ok(identity) => identity.clone(),
        Err(status) => {
            res.render(status);

            return;
        }
    };

    if !state.app.admin_gate.is_admin(&identity) {
        res.render(StatusError::forbidden().brief("Admin access required"));

        return;
    }

    ctrl.call_next(req, depot, res).await;
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next()?;
    let token = parts.next()?.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
