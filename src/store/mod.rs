//! Store interface. The query layer reads through this trait only, so any
//! backing (file snapshot, database view, test fake) can be injected.

mod memory;

pub use memory::{Dataset, MemoryStore};

use crate::core::{Transaction, Wallet};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read dataset {path}: {source}")]
    Io { path: PathBuf, #[source] source: std::io::Error },

    #[error("failed to parse dataset {path}: {source}")]
    Json { path: PathBuf, #[source] source: serde_json::Error },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Read-only access to already-loaded wallets and transactions. Every method
/// returns records in a stable order and never triggers loading. Full
/// collections are shared, not copied; callers clone only what they keep.
pub trait WalletStore: Send + Sync {
    fn wallets(&self) -> StoreResult<Arc<[Wallet]>>;

    /// Wallets registered under `address`. Matching rules belong to the store.
    fn wallets_by_address(&self, address: &str) -> StoreResult<Vec<Wallet>>;

    fn transactions(&self) -> StoreResult<Arc<[Transaction]>>;
}
