//! Cart persistence adapters.
//!
//! The in-memory ledger is authoritative for the session; adapters only make
//! it survive restarts. Writes go through to every backend and failures are
//! logged and swallowed. Loads take the first non-empty backend in priority
//! order.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::warn;

use crate::carts::{errors::CartStoreError, models::CartItem};

#[async_trait]
pub trait CartStore: Send + Sync {
    /// Backend label used in failure logs.
    fn label(&self) -> &'static str;

    async fn load(&self) -> Result<Vec<CartItem>, CartStoreError>;

    async fn save(&self, items: &[CartItem]) -> Result<(), CartStoreError>;
}

/// Priority-ordered set of cart backends.
pub struct CartPersistence {
    stores: Vec<Box<dyn CartStore>>,
}

impl std::fmt::Debug for CartPersistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartPersistence")
            .field("stores", &self.stores.len())
            .finish()
    }
}

impl CartPersistence {
    /// Highest-priority backend first.
    #[must_use]
    pub fn new(stores: Vec<Box<dyn CartStore>>) -> Self {
        Self { stores }
    }

    /// Write-through to every backend.
    pub async fn save(&self, items: &[CartItem]) {
        for store in &self.stores {
            if let Err(error) = store.save(items).await {
                warn!("failed to persist cart to {}: {error}", store.label());
            }
        }
    }

    /// First backend that loads a non-empty cart, in priority order.
    pub async fn load(&self) -> Vec<CartItem> {
        for store in &self.stores {
            match store.load().await {
                Ok(items) if !items.is_empty() => return items,
                Ok(_empty) => {}
                Err(error) => {
                    warn!("failed to load cart from {}: {error}", store.label());
                }
            }
        }

        Vec::new()
    }
}

/// Session-scoped backend.
#[derive(Debug, Default)]
pub struct MemoryCartStore {
    items: RwLock<Vec<CartItem>>,
}

impl MemoryCartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartStore for MemoryCartStore {
    fn label(&self) -> &'static str {
        "memory"
    }

    async fn load(&self) -> Result<Vec<CartItem>, CartStoreError> {
        Ok(self.items.read().await.clone())
    }

    async fn save(&self, items: &[CartItem]) -> Result<(), CartStoreError> {
        *self.items.write().await = items.to_vec();

        Ok(())
    }
}

/// Durable backend: a JSON snapshot on disk.
#[derive(Debug, Clone)]
pub struct FileCartStore {
    path: PathBuf,
}

impl FileCartStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl CartStore for FileCartStore {
    fn label(&self) -> &'static str {
        "file"
    }

    async fn load(&self) -> Result<Vec<CartItem>, CartStoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            // No snapshot yet is an empty cart, not a failure.
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => return Err(error.into()),
        };

        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn save(&self, items: &[CartItem]) -> Result<(), CartStoreError> {
        let bytes = serde_json::to_vec(items)?;

        tokio::fs::write(&self.path, bytes).await?;

        Ok(())
    }
}
