//! Query failures. The first two are client errors; anything the store
//! raises is unexpected and surfaces as a generic server error.

use crate::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Invalid Ethereum address")]
    InvalidAddress { address: String },

    #[error("Wallet not found")]
    WalletNotFound { address: String },

    #[error("unexpected store failure: {0}")]
    Store(#[from] StoreError),
}

impl QueryError {
    /// Address echoed back to the client, if the failure concerns one.
    pub fn address(&self) -> Option<&str> {
        match self {
            QueryError::InvalidAddress { address } | QueryError::WalletNotFound { address } => Some(address.as_str()),
            QueryError::Store(_) => None,
        }
    }
}

pub type QueryResult<T> = Result<T, QueryError>;
