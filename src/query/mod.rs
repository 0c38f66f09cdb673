//! Query handlers over an injected store.
//!
//! | Query | Method | Filters |
//! |-------|--------|---------|
//! | wallets | `list_wallets(address, chain_id)` | store address lookup, chain |
//! | transactions | `list_transactions_by_wallet(address, chain_id, limit)` | participant, chain, limit |

mod limit;
mod transactions;
mod wallets;

pub use limit::{effective_limit, parse_limit, MAX_TRANSACTIONS};

use crate::store::WalletStore;
use std::sync::Arc;

/// Stateless query layer. Cloning shares the store.
#[derive(Clone)]
pub struct WalletQueries {
    store: Arc<dyn WalletStore>,
}

impl WalletQueries {
    pub fn new(store: Arc<dyn WalletStore>) -> Self { Self { store } }

    pub fn from_store<S: WalletStore + 'static>(store: S) -> Self { Self::new(Arc::new(store)) }
}

/// Treat empty query values as absent.
pub(crate) fn present(value: Option<&str>) -> Option<&str> { value.filter(|v| !v.is_empty()) }
