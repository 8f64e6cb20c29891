//! Profiles service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::warn;

use crate::{
    carts::models::CartItem,
    profiles::{
        errors::ProfilesServiceError,
        models::{ProfileUpdate, UserProfile},
    },
    store::{Row, SheetStore, row},
};

pub(crate) const USERS_SHEET: &str = "Users";

const USER_ID: &str = "userId";
const FULL_NAME: &str = "fullName";
const ADDRESS: &str = "address";
const CONTACT_NUMBER: &str = "contactNumber";
const CART_ITEMS: &str = "cartItems";

#[derive(Clone)]
pub struct SheetProfilesService {
    store: Arc<dyn SheetStore>,
}

impl SheetProfilesService {
    #[must_use]
    pub fn new(store: Arc<dyn SheetStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProfilesService for SheetProfilesService {
    async fn get_profile(&self, user_id: &str) -> Result<UserProfile, ProfilesServiceError> {
        let Some(row) = self.store.find_row(USERS_SHEET, USER_ID, user_id).await? else {
            return Ok(UserProfile::empty(user_id));
        };

        Ok(profile_from_row(user_id, &row))
    }

    async fn upsert_profile(
        &self,
        user_id: &str,
        update: ProfileUpdate,
    ) -> Result<(), ProfilesServiceError> {
        let mut cells = Row::default();

        if let Some(full_name) = update.full_name {
            cells.insert(FULL_NAME.to_string(), full_name);
        }

        if let Some(address) = update.address {
            cells.insert(ADDRESS.to_string(), address);
        }

        if let Some(contact_number) = update.contact_number {
            cells.insert(CONTACT_NUMBER.to_string(), contact_number);
        }

        if let Some(cart_items) = update.cart_items {
            cells.insert(CART_ITEMS.to_string(), encode_cart(&cart_items));
        }

        let matched = self
            .store
            .update_row(USERS_SHEET, USER_ID, user_id, cells.clone())
            .await?;

        if !matched {
            let mut fresh = row(&[(USER_ID, user_id)]);
            fresh.extend(cells);

            self.store.append_row(USERS_SHEET, fresh).await?;
        }

        Ok(())
    }
}

fn profile_from_row(user_id: &str, cells: &Row) -> UserProfile {
    let cell = |column: &str| cells.get(column).cloned().unwrap_or_default();

    // The mirror is best-effort; a mangled cart cell degrades to an empty bag
    // rather than blocking the profile.
    let cart_items = match cells.get(CART_ITEMS).filter(|cell| !cell.is_empty()) {
        Some(cell) => serde_json::from_str(cell).unwrap_or_else(|error| {
            warn!("discarding unreadable cart mirror for {user_id}: {error}");
            Vec::new()
        }),
        None => Vec::new(),
    };

    UserProfile {
        user_id: user_id.to_string(),
        full_name: cell(FULL_NAME),
        address: cell(ADDRESS),
        contact_number: cell(CONTACT_NUMBER),
        cart_items,
    }
}

fn encode_cart(items: &[CartItem]) -> String {
    serde_json::to_string(items).unwrap_or_else(|error| {
        warn!("failed to encode cart mirror: {error}");
        "[]".to_string()
    })
}

#[automock]
#[async_trait]
pub trait ProfilesService: Send + Sync {
    /// The stored profile, or an empty default when the user has no row.
    async fn get_profile(&self, user_id: &str) -> Result<UserProfile, ProfilesServiceError>;

    /// Patch the profile, creating the row on first write. `None` fields are
    /// untouched; a provided cart replaces the mirror wholesale.
    async fn upsert_profile(
        &self,
        user_id: &str,
        update: ProfileUpdate,
    ) -> Result<(), ProfilesServiceError>;
}
