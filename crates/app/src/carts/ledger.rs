//! Cart ledger.
//!
//! Holds the in-progress selection for a not-yet-submitted order. The
//! in-memory state is authoritative; every mutation write-throughs a snapshot
//! to the configured backends, and an authenticated profile's remote copy
//! takes precedence on restore.

use tracing::warn;

use crate::{
    carts::{models::CartItem, persistence::CartPersistence},
    catalog::models::Product,
    profiles::{ProfilesService, models::ProfileUpdate},
};

/// Result of [`CartLedger::add_item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// The product was already in the bag; the ledger is unchanged.
    AlreadyInBag,
}

#[derive(Debug)]
pub struct CartLedger {
    items: Vec<CartItem>,
    persistence: CartPersistence,
}

impl CartLedger {
    #[must_use]
    pub fn new(persistence: CartPersistence) -> Self {
        Self {
            items: Vec::new(),
            persistence,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Recomputed on every read.
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Owned copy of the current items, for profile mirroring and checkout.
    #[must_use]
    pub fn snapshot(&self) -> Vec<CartItem> {
        self.items.clone()
    }

    /// Add a product with quantity 1. Adding a product that is already in the
    /// bag is a no-op reported as [`AddOutcome::AlreadyInBag`].
    pub async fn add_item(&mut self, product: &Product) -> AddOutcome {
        if self.items.iter().any(|item| item.product_id == product.id) {
            return AddOutcome::AlreadyInBag;
        }

        self.items.push(CartItem::from_product(product));
        self.persistence.save(&self.items).await;

        AddOutcome::Added
    }

    /// Remove an entry; silent when the product is not in the bag.
    pub async fn remove_item(&mut self, product_id: &str) {
        let before = self.items.len();

        self.items.retain(|item| item.product_id != product_id);

        if self.items.len() != before {
            self.persistence.save(&self.items).await;
        }
    }

    /// Replace an entry's quantity verbatim. Clamping to >= 1 is the UI's
    /// job; the ledger does not reject zero.
    pub async fn update_quantity(&mut self, product_id: &str, quantity: u32) {
        let mut changed = false;

        for item in &mut self.items {
            if item.product_id == product_id {
                item.quantity = quantity;
                changed = true;
            }
        }

        if changed {
            self.persistence.save(&self.items).await;
        }
    }

    /// Empty the bag, e.g. after a submitted order.
    pub async fn clear(&mut self) {
        self.items.clear();
        self.persistence.save(&self.items).await;
    }

    /// Restore the bag after a restart. A non-empty remote profile copy wins
    /// over the local backends; otherwise the first non-empty local backend
    /// is used.
    pub async fn restore(&mut self, remote: Option<Vec<CartItem>>) {
        self.items = match remote {
            Some(items) if !items.is_empty() => items,
            _local => self.persistence.load().await,
        };
    }

    /// Overwrite the remote profile copy with the current bag. Last write
    /// wins; there is no merge. Failures are logged and swallowed.
    pub async fn sync_to_profile(&self, profiles: &dyn ProfilesService, user_id: &str) {
        let update = ProfileUpdate {
            cart_items: Some(self.snapshot()),
            ..ProfileUpdate::default()
        };

        if let Err(error) = profiles.upsert_profile(user_id, update).await {
            warn!("failed to mirror cart to profile: {error}");
        }
    }
}
