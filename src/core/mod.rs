//! Shared types: address shape, records, route paths.

pub mod address;
pub mod model;
pub mod paths;

pub use address::is_valid_address;
pub use model::{ChainId, Transaction, Wallet};
