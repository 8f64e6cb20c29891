//! Carts

pub mod errors;
pub mod ledger;
pub mod models;
pub mod persistence;

pub use errors::CartStoreError;
pub use ledger::{AddOutcome, CartLedger};
pub use persistence::{CartPersistence, CartStore, FileCartStore, MemoryCartStore};
