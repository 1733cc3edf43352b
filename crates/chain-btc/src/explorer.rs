//! Esplora-compatible explorer response shapes.
//!
//! Only the fields the wallet reads are modelled; unknown fields are ignored
//! during deserialization.

use serde::{Deserialize, Serialize};

use crate::amount::{checked_sum_sat, sats_to_btc};

/// Transaction from `/address/{address}/txs` or `/tx/{txid}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EsploraTransaction {
    pub txid: String,
    #[serde(default)]
    pub vin: Vec<EsploraInput>,
    #[serde(default)]
    pub vout: Vec<EsploraOutput>,
    pub status: EsploraStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EsploraInput {
    /// Absent for coinbase inputs.
    #[serde(default)]
    pub prevout: Option<EsploraOutput>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EsploraOutput {
    /// Absent for outputs without a standard address (e.g. OP_RETURN).
    #[serde(default)]
    pub scriptpubkey_address: Option<String>,
    /// Value in satoshis.
    pub value: u64,
}

impl EsploraOutput {
    pub fn pays_to(&self, address: &str) -> bool {
        self.scriptpubkey_address.as_deref() == Some(address)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EsploraStatus {
    pub confirmed: bool,
    #[serde(default)]
    pub block_height: Option<u64>,
    #[serde(default)]
    pub block_time: Option<u64>,
}

/// Funding/spending totals from `/address/{address}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxoStats {
    #[serde(default)]
    pub funded_txo_count: u64,
    #[serde(default)]
    pub funded_txo_sum: u64,
    #[serde(default)]
    pub spent_txo_count: u64,
    #[serde(default)]
    pub spent_txo_sum: u64,
    #[serde(default)]
    pub tx_count: u64,
}

impl TxoStats {
    /// Funded minus spent. `None` when either sum is beyond the supply cap.
    fn net_sat(&self) -> Option<i64> {
        let funded = checked_sum_sat([self.funded_txo_sum])?;
        let spent = checked_sum_sat([self.spent_txo_sum])?;
        Some(funded - spent)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressStats {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub chain_stats: TxoStats,
    #[serde(default)]
    pub mempool_stats: TxoStats,
}

impl AddressStats {
    /// Confirmed plus unconfirmed balance in satoshis.
    ///
    /// Out-of-range explorer sums are logged and read as a zero balance.
    pub fn balance_sat(&self) -> i64 {
        match (self.chain_stats.net_sat(), self.mempool_stats.net_sat()) {
            (Some(chain), Some(mempool)) => chain + mempool,
            _ => self.out_of_range(),
        }
    }

    /// Confirmed balance only, in satoshis.
    pub fn confirmed_balance_sat(&self) -> i64 {
        self.chain_stats
            .net_sat()
            .unwrap_or_else(|| self.out_of_range())
    }

    fn out_of_range(&self) -> i64 {
        log::warn!("explorer stats for {} are out of range", self.address);
        0
    }

    pub fn balance_btc(&self) -> f64 {
        sats_to_btc(self.balance_sat())
    }

    pub fn tx_count(&self) -> u64 {
        self.chain_stats.tx_count + self.mempool_stats.tx_count
    }
}

/// Unspent output from `/address/{address}/utxo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EsploraUtxo {
    pub txid: String,
    pub vout: u32,
    pub value: u64,
    #[serde(default)]
    pub status: EsploraStatus,
}

/// Sum of the given UTXO values, in satoshis.
pub fn utxo_total_sat(utxos: &[EsploraUtxo]) -> u64 {
    utxos.iter().fold(0u64, |total, u| total.saturating_add(u.value))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TX_JSON: &str = r#"{
        "txid": "ab01",
        "version": 2,
        "locktime": 0,
        "vin": [
            {"txid": "ff00", "vout": 0, "prevout": {"scriptpubkey": "0014", "scriptpubkey_address": "tb1qsender", "value": 70000}, "is_coinbase": false},
            {"txid": "0000", "vout": 4294967295, "prevout": null, "is_coinbase": true}
        ],
        "vout": [
            {"scriptpubkey_address": "tb1qrecipient", "value": 50000},
            {"scriptpubkey_type": "op_return", "value": 0}
        ],
        "status": {"confirmed": true, "block_height": 120, "block_hash": "00ff", "block_time": 1700000000}
    }"#;

    #[test]
    fn deserializes_transaction_ignoring_extra_fields() {
        let tx: EsploraTransaction = serde_json::from_str(TX_JSON).unwrap();
        assert_eq!(tx.txid, "ab01");
        assert_eq!(tx.vin.len(), 2);
        assert!(tx.vin[1].prevout.is_none());
        assert_eq!(tx.vout[1].scriptpubkey_address, None);
        assert_eq!(tx.status.block_height, Some(120));
        assert_eq!(tx.status.block_time, Some(1_700_000_000));
    }

    #[test]
    fn pays_to_matches_exact_address() {
        let tx: EsploraTransaction = serde_json::from_str(TX_JSON).unwrap();
        assert!(tx.vout[0].pays_to("tb1qrecipient"));
        assert!(!tx.vout[0].pays_to("tb1qother"));
        assert!(!tx.vout[1].pays_to(""));
    }

    #[test]
    fn deserializes_unconfirmed_status() {
        let status: EsploraStatus = serde_json::from_str(r#"{"confirmed": false}"#).unwrap();
        assert!(!status.confirmed);
        assert_eq!(status.block_height, None);
    }

    #[test]
    fn balance_subtracts_spent_outputs() {
        let stats: AddressStats = serde_json::from_str(
            r#"{
                "address": "tb1qx",
                "chain_stats": {"funded_txo_count": 2, "funded_txo_sum": 150000, "spent_txo_count": 1, "spent_txo_sum": 100000, "tx_count": 3},
                "mempool_stats": {"funded_txo_count": 1, "funded_txo_sum": 25000, "spent_txo_count": 0, "spent_txo_sum": 0, "tx_count": 1}
            }"#,
        )
        .unwrap();
        assert_eq!(stats.confirmed_balance_sat(), 50_000);
        assert_eq!(stats.balance_sat(), 75_000);
        assert_eq!(stats.balance_btc(), 0.00075);
        assert_eq!(stats.tx_count(), 4);
    }

    #[test]
    fn empty_stats_have_zero_balance() {
        let stats = AddressStats::default();
        assert_eq!(stats.balance_sat(), 0);
        assert_eq!(stats.balance_btc(), 0.0);
    }

    #[test]
    fn out_of_range_sums_read_as_zero() {
        let stats = AddressStats {
            address: "tb1qx".into(),
            chain_stats: TxoStats {
                funded_txo_sum: u64::MAX,
                ..Default::default()
            },
            mempool_stats: TxoStats {
                funded_txo_sum: 5_000,
                ..Default::default()
            },
        };
        assert_eq!(stats.balance_sat(), 0);
        assert_eq!(stats.confirmed_balance_sat(), 0);

        let stats = AddressStats {
            mempool_stats: TxoStats {
                spent_txo_sum: i64::MAX as u64 + 1,
                ..Default::default()
            },
            ..AddressStats::default()
        };
        assert_eq!(stats.balance_sat(), 0);
    }

    #[test]
    fn utxo_total() {
        let utxos: Vec<EsploraUtxo> = serde_json::from_str(
            r#"[
                {"txid": "aa", "vout": 0, "value": 1000, "status": {"confirmed": true, "block_height": 5}},
                {"txid": "bb", "vout": 1, "value": 2500, "status": {"confirmed": false}}
            ]"#,
        )
        .unwrap();
        assert_eq!(utxo_total_sat(&utxos), 3500);
        assert!(!utxos[1].status.confirmed);
    }
}
