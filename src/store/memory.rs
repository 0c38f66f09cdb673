//! MemoryStore - snapshot of a JSON dataset held in memory

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

use super::{StoreError, StoreResult, WalletStore};
use crate::core::address::same_address;
use crate::core::{Transaction, Wallet};

/// On-disk dataset layout. Both collections are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub wallets: Vec<Wallet>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Dataset {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> { serde_json::from_str(raw) }
}

#[derive(Debug, Clone)]
pub struct MemoryStore {
    wallets: Arc<[Wallet]>,
    transactions: Arc<[Transaction]>,
}

impl Default for MemoryStore {
    fn default() -> Self { Self::new(Vec::new(), Vec::new()) }
}

impl MemoryStore {
    pub fn new(wallets: Vec<Wallet>, transactions: Vec<Transaction>) -> Self {
        Self { wallets: wallets.into(), transactions: transactions.into() }
    }

    pub fn from_dataset(dataset: Dataset) -> Self { Self::new(dataset.wallets, dataset.transactions) }

    /// Load a dataset file. The file is read once; later edits are not seen.
    pub fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|source| StoreError::Io { path: path.to_path_buf(), source })?;
        let dataset = Dataset::from_json(&raw)
            .map_err(|source| StoreError::Json { path: path.to_path_buf(), source })?;
        tracing::debug!(
            path = %path.display(),
            wallets = dataset.wallets.len(),
            transactions = dataset.transactions.len(),
            "dataset loaded"
        );
        Ok(Self::from_dataset(dataset))
    }

    pub fn wallet_count(&self) -> usize { self.wallets.len() }
    pub fn transaction_count(&self) -> usize { self.transactions.len() }
}

impl WalletStore for MemoryStore {
    fn wallets(&self) -> StoreResult<Arc<[Wallet]>> { Ok(Arc::clone(&self.wallets)) }

    // Case-insensitive, so 0xABC.. and 0xabc.. name the same wallet.
    fn wallets_by_address(&self, address: &str) -> StoreResult<Vec<Wallet>> {
        Ok(self.wallets.iter().filter(|w| same_address(&w.address, address)).cloned().collect())
    }

    fn transactions(&self) -> StoreResult<Arc<[Transaction]>> { Ok(Arc::clone(&self.transactions)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: &str = "0xAbC0000000000000000000000000000000000001";

    #[test]
    fn lookup_by_address_ignores_case_and_keeps_order() {
        let store = MemoryStore::new(
            vec![Wallet::new(A, 1), Wallet::new("0x0000000000000000000000000000000000000002", 1), Wallet::new(A, 137)],
            vec![],
        );
        let found = store.wallets_by_address(&A.to_lowercase()).unwrap();
        assert_eq!(found.len(), 2);
        assert!(found[0].on_chain("1"));
        assert!(found[1].on_chain("137"));
        assert!(store.wallets_by_address("0x0000000000000000000000000000000000000003").unwrap().is_empty());
    }

    #[test]
    fn dataset_collections_default_to_empty() {
        let store = MemoryStore::from_dataset(Dataset::from_json(r#"{"wallets": []}"#).unwrap());
        assert_eq!(store.wallet_count(), 0);
        assert_eq!(store.transaction_count(), 0);
    }

    #[test]
    fn full_collections_are_shared_not_copied() {
        let store = MemoryStore::new(vec![Wallet::new(A, 1)], vec![]);
        let first = store.wallets().unwrap();
        let second = store.wallets().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
