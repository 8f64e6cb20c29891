//! Profile Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use tindera_app::{
    carts::models::CartItem,
    profiles::models::{ProfileUpdate, UserProfile},
};

/// One bag line mirrored into the profile.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartItemPayload {
    pub product_id: String,
    pub name: String,

    /// Unit price in centavos at the time of adding
    pub price: u64,

    pub quantity: u32,
}

impl From<CartItem> for CartItemPayload {
    fn from(item: CartItem) -> Self {
        Self {
            product_id: item.product_id,
            name: item.name,
            price: item.price,
            quantity: item.quantity,
        }
    }
}

impl From<CartItemPayload> for CartItem {
    fn from(payload: CartItemPayload) -> Self {
        Self {
            product_id: payload.product_id,
            name: payload.name,
            price: payload.price,
            quantity: payload.quantity,
        }
    }
}

/// Profile Model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProfileResponse {
    pub full_name: String,
    pub address: String,
    pub contact_number: String,
    pub cart_items: Vec<CartItemPayload>,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            full_name: profile.full_name,
            address: profile.address,
            contact_number: profile.contact_number,
            cart_items: profile.cart_items.into_iter().map(Into::into).collect(),
        }
    }
}

/// Update Profile Request; absent fields are left untouched.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateProfileRequest {
    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub contact_number: Option<String>,

    /// A provided list replaces the mirrored bag wholesale.
    #[serde(default)]
    pub cart_items: Option<Vec<CartItemPayload>>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(request: UpdateProfileRequest) -> Self {
        Self {
            full_name: request.full_name,
            address: request.address,
            contact_number: request.contact_number,
            cart_items: request
                .cart_items
                .map(|items| items.into_iter().map(Into::into).collect()),
        }
    }
}
