//! Path constants for the HTTP surface
//!
//! Centralized registry for route paths.

/// Wallet routes (relative to the wallet router)
pub mod wallets {
    pub const LIST: &str = "/";
    pub const TRANSACTIONS: &str = "/:address/transactions";

    /// Prefix the wallet router is nested under by `create_router`
    pub const MOUNT: &str = "/api/wallets";
}

/// Service routes
pub mod service {
    pub const HEALTH: &str = "/health";
}
