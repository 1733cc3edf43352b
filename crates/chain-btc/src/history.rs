use serde::{Deserialize, Serialize};

use crate::amount::{checked_sum_sat, sats_to_btc};
use crate::explorer::EsploraTransaction;

/// Whether a transaction moved value towards or away from an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxDirection {
    Received,
    Sent,
}

impl TxDirection {
    /// Strictly positive net value is `Received`; zero and negative are `Sent`.
    ///
    /// A transaction that never touches the address nets to zero and is
    /// therefore reported as `Sent`.
    pub fn from_net_sat(net_sat: i64) -> Self {
        if net_sat > 0 {
            TxDirection::Received
        } else {
            TxDirection::Sent
        }
    }
}

impl std::fmt::Display for TxDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TxDirection::Received => write!(f, "received"),
            TxDirection::Sent => write!(f, "sent"),
        }
    }
}

/// Net satoshis a transaction contributes to `address`: outputs paying the
/// address minus the previous outputs it spends.
///
/// Values beyond the bitcoin supply cap are logged and yield zero.
pub fn net_amount_sat(tx: &EsploraTransaction, address: &str) -> i64 {
    let received = checked_sum_sat(
        tx.vout
            .iter()
            .filter(|out| out.pays_to(address))
            .map(|out| out.value),
    );

    let spent = checked_sum_sat(
        tx.vin
            .iter()
            .filter_map(|input| input.prevout.as_ref())
            .filter(|prev| prev.pays_to(address))
            .map(|prev| prev.value),
    );

    match (received, spent) {
        (Some(received), Some(spent)) => received - spent,
        _ => {
            log::warn!("transaction {} has out-of-range output values", tx.txid);
            0
        }
    }
}

/// Net value of `tx` for `address`, in whole bitcoin.
pub fn compute_net_amount(tx: &EsploraTransaction, address: &str) -> f64 {
    sats_to_btc(net_amount_sat(tx, address))
}

/// Display-ready view of one transaction from the perspective of an address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TxSummary {
    pub txid: String,
    /// Net amount in BTC; negative when the address paid out.
    pub amount: f64,
    pub amount_sat: i64,
    pub direction: TxDirection,
    pub confirmed: bool,
    pub block_height: Option<u64>,
    /// Block time in Unix seconds, or the observation time while unconfirmed.
    pub timestamp: u64,
}

impl TxSummary {
    /// Number of confirmations given the current chain tip.
    ///
    /// Zero for unconfirmed transactions, when the tip is unknown, or when the
    /// tip is behind the transaction's block.
    pub fn confirmations(&self, tip_height: Option<u64>) -> u64 {
        match (self.confirmed, self.block_height, tip_height) {
            (true, Some(height), Some(tip)) if tip >= height => tip - height + 1,
            _ => 0,
        }
    }
}

/// Summarize a transaction for `address`. `now` (Unix seconds) stands in for
/// the timestamp when the explorer reports no block time.
pub fn summarize_transaction(tx: &EsploraTransaction, address: &str, now: u64) -> TxSummary {
    let amount_sat = net_amount_sat(tx, address);

    let timestamp = match tx.status.block_time {
        Some(time) => time,
        None => {
            if tx.status.confirmed {
                log::warn!("confirmed transaction {} has no block time", tx.txid);
            }
            now
        }
    };

    TxSummary {
        txid: tx.txid.clone(),
        amount: sats_to_btc(amount_sat),
        amount_sat,
        direction: TxDirection::from_net_sat(amount_sat),
        confirmed: tx.status.confirmed,
        block_height: tx.status.block_height.filter(|_| tx.status.confirmed),
        timestamp,
    }
}

/// Summarize an explorer history page, preserving its order.
pub fn summarize_history(txs: &[EsploraTransaction], address: &str, now: u64) -> Vec<TxSummary> {
    log::debug!("summarizing {} transactions for {address}", txs.len());
    txs.iter()
        .map(|tx| summarize_transaction(tx, address, now))
        .collect()
}
