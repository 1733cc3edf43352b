use chain_btc::explorer::{AddressStats, EsploraTransaction};
use chain_btc::history::summarize_history;

use crate::types::WalletOverview;

/// Combine explorer address stats and history into a display overview.
///
/// An empty address (derivation unavailable) yields a zero balance and no
/// transactions regardless of the explorer data passed in.
pub fn wallet_overview(
    address: &str,
    stats: &AddressStats,
    txs: &[EsploraTransaction],
    now: u64,
) -> WalletOverview {
    if address.is_empty() {
        log::warn!("no address available, skipping balance and history");
        return WalletOverview {
            address: String::new(),
            balance_sat: 0,
            balance: 0.0,
            transactions: Vec::new(),
        };
    }

    if !stats.address.is_empty() && stats.address != address {
        log::warn!(
            "explorer stats are for {}, expected {address}",
            stats.address
        );
    }

    WalletOverview {
        address: address.to_string(),
        balance_sat: stats.balance_sat(),
        balance: stats.balance_btc(),
        transactions: summarize_history(txs, address, now),
    }
}
