use super::{effective_limit, parse_limit, present, WalletQueries};
use crate::core::{is_valid_address, Transaction};
use crate::error::{QueryError, QueryResult};

impl WalletQueries {
    /// Transactions sent or received by `address`, oldest-first as stored.
    ///
    /// Fails with `InvalidAddress` when the address is malformed and with
    /// `WalletNotFound` when the store has no wallet under it. Matching on
    /// `from`/`to` ignores case; `chain_id` narrows to one chain since the same
    /// address can exist on several. At most `MAX_TRANSACTIONS` are returned.
    pub fn list_transactions_by_wallet(
        &self,
        address: &str,
        chain_id: Option<&str>,
        limit: Option<&str>,
    ) -> QueryResult<Vec<Transaction>> {
        if !is_valid_address(address) {
            return Err(QueryError::InvalidAddress { address: address.to_string() });
        }
        if self.store.wallets_by_address(address)?.is_empty() {
            return Err(QueryError::WalletNotFound { address: address.to_string() });
        }

        let chain_id = present(chain_id);
        let all = self.store.transactions()?;
        let matches: Vec<&Transaction> = all
            .iter()
            .filter(|t| t.involves(address) && chain_id.map_or(true, |c| t.on_chain(c)))
            .collect();

        let matched = matches.len();
        let take = effective_limit(present(limit).and_then(parse_limit), matched);
        let txs: Vec<Transaction> = matches.into_iter().take(take).cloned().collect();
        tracing::debug!(address, ?chain_id, ?limit, matched, returned = txs.len(), "list transactions");
        Ok(txs)
    }
}
