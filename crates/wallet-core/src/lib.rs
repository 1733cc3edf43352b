pub mod config;
pub mod error;
pub mod export;
pub mod hd_derivation;
pub mod key_source;
pub mod mnemonic;
pub mod overview;
pub mod send;
pub mod store;
pub mod types;

use std::time::{SystemTime, UNIX_EPOCH};

use chain_btc::address::derive_address;
use chain_btc::network::BtcNetwork;

use config::WalletConfig;
use error::WalletError;
use key_source::KeySource;
use store::WalletStore;
use types::{ExportedPrivateKey, WalletMaterial};

pub use overview::wallet_overview;
pub use send::{send_bitcoin, MockBroadcaster, SendRequest};

// ─── Wallet lifecycle ────────────────────────────────────────────────

/// New wallet id: `wallet_<unix millis>_<9 base36 chars>`.
pub fn new_wallet_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!(
        "wallet_{millis}_{}",
        crypto_utils::random::random_base36(9)
    )
}

/// Current Unix time in seconds.
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Create a wallet with the configured key source and persist it.
pub fn create_wallet(
    store: &dyn WalletStore,
    config: &WalletConfig,
) -> Result<WalletMaterial, WalletError> {
    let source = key_source::key_source_for(config.key_source);
    create_wallet_with(store, source.as_ref(), config.network)
}

/// Create a wallet with an explicit key source and persist it.
pub fn create_wallet_with(
    store: &dyn WalletStore,
    source: &dyn KeySource,
    network: BtcNetwork,
) -> Result<WalletMaterial, WalletError> {
    let key = source.generate(network)?;
    let public_key = key.public_key_hex();

    let address = derive_address(&public_key, network.params());
    if address.is_empty() {
        return Err(WalletError::DerivationFailed(
            "could not derive an address for the new key".into(),
        ));
    }

    let material = WalletMaterial {
        wallet_id: new_wallet_id(),
        address,
        public_key,
        private_key: Some(key.private_key.to_hex()),
        mnemonic: Some(key.mnemonic.clone()),
    };

    store.put(&material.wallet_id, &material)?;
    log::info!(
        "created {:?} wallet {} on {network}",
        source.kind(),
        material.wallet_id
    );

    Ok(material)
}

/// Load a stored wallet, failing if it does not exist.
pub fn load_wallet(store: &dyn WalletStore, wallet_id: &str) -> Result<WalletMaterial, WalletError> {
    store
        .get(wallet_id)?
        .ok_or_else(|| WalletError::WalletNotFound(wallet_id.to_string()))
}

/// Whether a wallet is stored. Storage errors are logged and read as absent.
pub fn wallet_exists(store: &dyn WalletStore, wallet_id: &str) -> bool {
    match store.contains(wallet_id) {
        Ok(exists) => exists,
        Err(e) => {
            log::warn!("error checking wallet {wallet_id}: {e}");
            false
        }
    }
}

// ─── Key export ──────────────────────────────────────────────────────

/// Load a stored wallet and export its private key for the given network.
pub fn export_wallet_key(
    store: &dyn WalletStore,
    wallet_id: &str,
    network: BtcNetwork,
) -> Result<ExportedPrivateKey, WalletError> {
    let material = load_wallet(store, wallet_id)?;
    export::export_private_key(&material, network.params())
}
