use bip32::{DerivationPath, XPrv};
use chain_btc::network::BtcNetwork;
use k256::ecdsa::SigningKey;
use zeroize::Zeroize;

use crate::error::WalletError;

/// BIP-84 path for native SegWit P2WPKH: m/84'/coin_type'/account'/0/index
///
/// Coin type is 0 on mainnet and 1 on every test network.
pub fn bip84_path(network: BtcNetwork, account: u32, index: u32) -> String {
    format!("m/84'/{}'/{}'/0/{}", network.coin_type(), account, index)
}

/// Derive a secp256k1 key from a BIP-39 seed at the BIP-84 receive path.
pub fn derive_bip84_key(
    seed: &[u8],
    network: BtcNetwork,
    account: u32,
    index: u32,
) -> Result<DerivedKey, WalletError> {
    let path_str = bip84_path(network, account, index);

    let path: DerivationPath = path_str
        .parse()
        .map_err(|e: bip32::Error| WalletError::DerivationFailed(e.to_string()))?;

    let xprv = XPrv::derive_from_path(seed, &path)
        .map_err(|e| WalletError::DerivationFailed(e.to_string()))?;

    let mut private_key_bytes: [u8; 32] = xprv.to_bytes().into();
    let signing_key = SigningKey::from_bytes(&private_key_bytes.into())
        .map_err(|e| WalletError::DerivationFailed(e.to_string()));

    let derived = signing_key.and_then(|signing_key| {
        let public_key_compressed: [u8; 33] = signing_key
            .verifying_key()
            .to_sec1_bytes()
            .as_ref()
            .try_into()
            .map_err(|_| WalletError::DerivationFailed("Invalid public key length".into()))?;

        Ok(DerivedKey {
            private_key: private_key_bytes,
            public_key_compressed,
            derivation_path: path_str,
        })
    });

    private_key_bytes.zeroize();
    derived
}

/// Derived secp256k1 key
pub struct DerivedKey {
    pub private_key: [u8; 32],
    pub public_key_compressed: [u8; 33],
    pub derivation_path: String,
}

impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.private_key.zeroize();
    }
}
