//! Wallet configuration from environment variables.
//!
//! Selects the Bitcoin network, explorer endpoint, key generation strategy and
//! the directory used by the file-backed wallet store. Defaults to testnet4.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use chain_btc::network::{BtcNetwork, NetworkParameters};

use crate::error::WalletError;

/// Default directory for [`crate::store::FileWalletStore`].
pub const DEFAULT_STORE_DIR: &str = "./wallets";

/// How new wallet keys are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeySourceKind {
    /// Fresh secp256k1 key from the OS RNG with a placeholder recovery phrase.
    #[default]
    Random,
    /// 24-word BIP-39 phrase with the key at the BIP-84 path.
    Mnemonic,
}

impl FromStr for KeySourceKind {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" => Ok(KeySourceKind::Random),
            "mnemonic" | "bip39" => Ok(KeySourceKind::Mnemonic),
            other => Err(WalletError::Config(format!("unknown key source '{other}'"))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletConfig {
    pub network: BtcNetwork,
    /// Esplora-compatible API base URL.
    pub explorer_api_url: String,
    pub key_source: KeySourceKind,
    pub store_dir: PathBuf,
}

impl WalletConfig {
    /// Load configuration from environment variables.
    ///
    /// - `WALLET_NETWORK`: `testnet4` (default), `testnet`, `signet` or `mainnet`
    /// - `EXPLORER_API_URL`: explorer API base, defaults per network
    /// - `WALLET_KEY_SOURCE`: `random` (default) or `mnemonic`
    /// - `WALLET_STORE_DIR`: file store directory, defaults to `./wallets`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup. Unknown values
    /// are logged and replaced by their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let network = match lookup("WALLET_NETWORK") {
            Some(value) => value.parse::<BtcNetwork>().unwrap_or_else(|e| {
                log::warn!("{e}, defaulting to {}", BtcNetwork::default());
                BtcNetwork::default()
            }),
            None => BtcNetwork::default(),
        };
        log::info!("Using {network} network");

        let explorer_api_url = lookup("EXPLORER_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| network.default_explorer_api().to_string());
        log::info!("Explorer API: {explorer_api_url}");

        let key_source = match lookup("WALLET_KEY_SOURCE") {
            Some(value) => value.parse::<KeySourceKind>().unwrap_or_else(|e| {
                log::warn!("{e}, defaulting to random keys");
                KeySourceKind::default()
            }),
            None => KeySourceKind::default(),
        };

        let store_dir = lookup("WALLET_STORE_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_DIR));

        Self {
            network,
            explorer_api_url,
            key_source,
            store_dir,
        }
    }

    pub fn params(&self) -> &'static NetworkParameters {
        self.network.params()
    }

    /// Explorer API endpoint for address stats, decoded as `AddressStats`.
    ///
    /// The endpoint builders are handed to the caller's HTTP client; this
    /// crate performs no network I/O.
    pub fn address_stats_endpoint(&self, address: &str) -> String {
        format!("{}/address/{address}", self.explorer_api_url)
    }

    /// Explorer API endpoint for address history, decoded as
    /// `Vec<EsploraTransaction>`.
    pub fn address_txs_endpoint(&self, address: &str) -> String {
        format!("{}/address/{address}/txs", self.explorer_api_url)
    }

    /// Explorer API endpoint for unspent outputs, decoded as `Vec<EsploraUtxo>`.
    pub fn address_utxo_endpoint(&self, address: &str) -> String {
        format!("{}/address/{address}/utxo", self.explorer_api_url)
    }

    /// Link to a transaction on the network's web explorer.
    pub fn explorer_tx_url(&self, txid: &str) -> String {
        format!("{}/tx/{txid}", self.network.explorer_web_url())
    }

    /// Link to an address on the network's web explorer.
    pub fn explorer_address_url(&self, address: &str) -> String {
        format!("{}/address/{address}", self.network.explorer_web_url())
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        let network = BtcNetwork::default();
        Self {
            network,
            explorer_api_url: network.default_explorer_api().to_string(),
            key_source: KeySourceKind::default(),
            store_dir: PathBuf::from(DEFAULT_STORE_DIR),
        }
    }
}
