//! wallet-api: read-only HTTP views over wallets and their transactions.
//!
//! # Architecture
//!
//! ```text
//! HTTP request
//!   │
//!   ├── server (axum router, JSON envelopes)
//!   │     ├── GET /health
//!   │     └── /api/wallets
//!   │           ├── GET /                        → list_wallets
//!   │           └── GET /:address/transactions   → list_transactions_by_wallet
//!   │
//!   ├── query (WalletQueries: validate, look up, filter, cap)
//!   │
//!   └── store (WalletStore trait, injected)
//!         └── MemoryStore (JSON dataset loaded once)
//! ```
//!
//! # Queries
//!
//! | Query | Filters | Failures |
//! |-------|---------|----------|
//! | `list_wallets` | address (store lookup), chain id | none |
//! | `list_transactions_by_wallet` | participant (case-insensitive), chain id, limit ≤ 100 | invalid address, unknown wallet |
//!
//! Chain ids compare by string form, so `1` and `"1"` are the same chain.
//!
//! # Features
//!
//! - `native` (default) - axum server, tokio runtime, log subscriber, CLI
//!
//! # Usage
//!
//! ```ignore
//! use wallet_api::{create_router, MemoryStore, WalletQueries};
//!
//! let queries = WalletQueries::from_store(MemoryStore::load("data/wallets.json")?);
//! let router = create_router(queries);
//! axum::serve(listener, router).await?;
//! ```

// =============================================================================
// Shared modules (no runtime needed)
// =============================================================================
pub mod config;
pub mod core;
pub mod error;
pub mod query;
pub mod store;

// =============================================================================
// Native-only modules (server, tokio)
// =============================================================================
#[cfg(feature = "native")]
pub mod logging;
#[cfg(feature = "native")]
pub mod runtime;
#[cfg(feature = "native")]
pub mod server;

// =============================================================================
// Re-exports
// =============================================================================
pub use config::{ConfigError, LogFormat, ServerConfig};
pub use crate::core::{is_valid_address, ChainId, Transaction, Wallet};
pub use error::{QueryError, QueryResult};
pub use query::{WalletQueries, MAX_TRANSACTIONS};
pub use store::{Dataset, MemoryStore, StoreError, StoreResult, WalletStore};

#[cfg(feature = "native")]
pub use runtime::shutdown_signal;
#[cfg(feature = "native")]
pub use server::{create_router, create_router_with_name, wallet_routes, AppState};
