//! Update Profile Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    extensions::*,
    profile::{
        errors::into_status_error,
        models::{ProfileResponse, UpdateProfileRequest},
    },
    state::State,
};

/// Update Profile Handler
///
/// Patches the stored details and/or replaces the mirrored bag, then returns
/// the updated profile.
#[endpoint(
    tags("profile"),
    summary = "Update Profile",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    json: JsonBody<UpdateProfileRequest>,
    depot: &mut Depot,
) -> Result<Json<ProfileResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?.clone();

    state
        .app
        .profiles
        .upsert_profile(&identity.user_id, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    let profile = state
        .app
        .profiles
        .get_profile(&identity.user_id)
        .await
        .map_err(into_status_error)?;

    Ok(Json(profile.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use tindera_app::{carts::models::CartItem, profiles::models::UserProfile};

    use crate::test_helpers::TestApp;

    use super::*;

    fn make_service(app: TestApp) -> Service {
        app.authed_service(Router::with_path("profile").put(handler))
    }

    #[tokio::test]
    async fn patch_forwards_only_the_provided_fields() -> TestResult {
        let mut app = TestApp::default();

        app.profiles
            .expect_upsert_profile()
            .once()
            .withf(|user_id, update| {
                user_id == "user-test"
                    && update.address.as_deref() == Some("456 Mabini St")
                    && update.full_name.is_none()
                    && update.cart_items.is_none()
            })
            .returning(|_, _| Ok(()));

        app.profiles
            .expect_get_profile()
            .once()
            .return_once(|user_id| {
                let mut profile = UserProfile::empty(user_id);
                profile.address = "456 Mabini St".to_string();

                Ok(profile)
            });

        let mut res = TestClient::put("http://example.com/profile")
            .json(&json!({ "address": "456 Mabini St" }))
            .send(&make_service(app))
            .await;

        let body: ProfileResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.address, "456 Mabini St");

        Ok(())
    }

    #[tokio::test]
    async fn provided_cart_replaces_the_mirror() -> TestResult {
        let mut app = TestApp::default();

        app.profiles
            .expect_upsert_profile()
            .once()
            .withf(|_user_id, update| {
                update.cart_items.as_deref().is_some_and(|items| {
                    items
                        == [CartItem {
                            product_id: "p-1".to_string(),
                            name: "Enamel Pin".to_string(),
                            price: 100_00,
                            quantity: 2,
                        }]
                })
            })
            .returning(|_, _| Ok(()));

        app.profiles
            .expect_get_profile()
            .once()
            .return_once(|user_id| Ok(UserProfile::empty(user_id)));

        let res = TestClient::put("http://example.com/profile")
            .json(&json!({
                "cartItems": [
                    { "productId": "p-1", "name": "Enamel Pin", "price": 100_00, "quantity": 2 }
                ]
            }))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
