//! Profile Models

use serde::{Deserialize, Serialize};

use crate::carts::models::CartItem;

/// Per-user record used to pre-fill checkout forms and restore the bag
/// across devices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub full_name: String,
    pub address: String,
    pub contact_number: String,
    pub cart_items: Vec<CartItem>,
}

impl UserProfile {
    /// The record handed out when the user has no row yet.
    #[must_use]
    pub fn empty(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            full_name: String::new(),
            address: String::new(),
            contact_number: String::new(),
            cart_items: Vec::new(),
        }
    }
}

/// Partial profile update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub address: Option<String>,
    pub contact_number: Option<String>,
    pub cart_items: Option<Vec<CartItem>>,
}
