use chain_btc::network::NetworkParameters;
use chain_btc::wif::encode_wif;
use crypto_utils::SecretKeyBytes;

use crate::error::WalletError;
use crate::types::{ExportedPrivateKey, WalletMaterial};

/// Warnings shown alongside every exported key.
pub const EXPORT_WARNINGS: [&str; 7] = [
    "SECURITY WARNING: You are about to export your private key!",
    "Private keys give full control over your Bitcoin wallet",
    "Never share your private key with anyone",
    "Store it securely offline (hardware wallet, paper wallet)",
    "Never enter it on untrusted websites",
    "This is a DEMO function - not for production use",
    "In production, keys stay inside the wallet-infrastructure provider",
];

/// Export a wallet's private key as hex and WIF.
///
/// Fails when the record carries no private key or the stored key is not
/// 32 bytes of hex.
pub fn export_private_key(
    material: &WalletMaterial,
    params: &NetworkParameters,
) -> Result<ExportedPrivateKey, WalletError> {
    let private_key_hex = material
        .private_key
        .as_deref()
        .filter(|k| !k.is_empty())
        .ok_or_else(|| WalletError::KeyExportFailed("private key not available".into()))?;

    let key = SecretKeyBytes::from_hex(private_key_hex)
        .map_err(|e| WalletError::KeyExportFailed(e.to_string()))?;

    let wif = encode_wif(key.as_bytes(), params)
        .map_err(|e| WalletError::KeyExportFailed(e.to_string()))?;

    log::warn!("private key exported for wallet {}", material.wallet_id);

    Ok(ExportedPrivateKey {
        private_key: key.to_hex(),
        wif,
        warnings: EXPORT_WARNINGS.iter().map(|w| w.to_string()).collect(),
    })
}
