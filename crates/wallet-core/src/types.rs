use chain_btc::history::TxSummary;
use serde::{Deserialize, Serialize};

/// Wallet key material as persisted by the demo front-end.
///
/// Serialized with camelCase field names so records written by the browser
/// build (`walletId`, `publicKey`, ...) load unchanged.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletMaterial {
    pub wallet_id: String,
    pub address: String,
    /// Compressed secp256k1 public key, hex.
    pub public_key: String,
    /// Raw 32-byte private key, hex. Demo only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    /// Recovery phrase, or the fixed placeholder for random keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mnemonic: Option<String>,
}

impl WalletMaterial {
    pub fn has_private_key(&self) -> bool {
        self.private_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

impl std::fmt::Debug for WalletMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletMaterial")
            .field("wallet_id", &self.wallet_id)
            .field("address", &self.address)
            .field("public_key", &self.public_key)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("mnemonic", &self.mnemonic.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Result of exporting a wallet's private key.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedPrivateKey {
    pub private_key: String,
    pub wif: String,
    pub warnings: Vec<String>,
}

impl std::fmt::Debug for ExportedPrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportedPrivateKey")
            .field("private_key", &"<redacted>")
            .field("wif", &"<redacted>")
            .field("warnings", &self.warnings)
            .finish()
    }
}

/// Balance and history for one address, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletOverview {
    pub address: String,
    /// Confirmed plus mempool balance, in satoshis.
    pub balance_sat: i64,
    /// Same balance in BTC.
    pub balance: f64,
    pub transactions: Vec<TxSummary>,
}
