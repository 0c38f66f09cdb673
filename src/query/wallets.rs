use super::{present, WalletQueries};
use crate::core::Wallet;
use crate::error::QueryResult;

impl WalletQueries {
    /// Wallets, optionally narrowed by address (store lookup, passed through
    /// untouched) and then by chain id. Never fails on an unmatched filter.
    pub fn list_wallets(&self, address: Option<&str>, chain_id: Option<&str>) -> QueryResult<Vec<Wallet>> {
        let chain_id = present(chain_id);
        let on_chain = |w: &Wallet| chain_id.map_or(true, |c| w.on_chain(c));
        let wallets: Vec<Wallet> = match present(address) {
            Some(address) => {
                let mut found = self.store.wallets_by_address(address)?;
                found.retain(|w| on_chain(w));
                found
            }
            None => self.store.wallets()?.iter().filter(|w| on_chain(*w)).cloned().collect(),
        };
        tracing::debug!(?address, ?chain_id, count = wallets.len(), "list wallets");
        Ok(wallets)
    }
}
