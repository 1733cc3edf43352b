//! Key generation strategies for new wallets.
//!
//! Exactly one strategy is active per process, chosen by
//! [`WalletConfig::key_source`](crate::config::WalletConfig).

use chain_btc::network::BtcNetwork;
use crypto_utils::random::random_bytes_fixed;
use crypto_utils::SecretKeyBytes;
use k256::ecdsa::SigningKey;
use zeroize::Zeroize;

use crate::config::KeySourceKind;
use crate::error::WalletError;
use crate::hd_derivation;
use crate::mnemonic;

/// Recovery phrase stored for keys that have no real mnemonic behind them.
pub const PLACEHOLDER_MNEMONIC: &str = "demo-mnemonic-not-for-production-use";

/// Rejection sampling bound; a random 32-byte string is out of range with
/// probability ~2^-128.
const MAX_KEY_ATTEMPTS: usize = 8;

/// Freshly generated wallet key.
pub struct GeneratedKey {
    pub private_key: SecretKeyBytes,
    pub public_key: [u8; 33],
    pub mnemonic: String,
}

impl GeneratedKey {
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key)
    }
}

/// Produces key material for a new wallet.
pub trait KeySource: Send + Sync {
    fn kind(&self) -> KeySourceKind;

    fn generate(&self, network: BtcNetwork) -> Result<GeneratedKey, WalletError>;
}

/// Random secp256k1 key from the OS RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomKeySource;

impl KeySource for RandomKeySource {
    fn kind(&self) -> KeySourceKind {
        KeySourceKind::Random
    }

    fn generate(&self, _network: BtcNetwork) -> Result<GeneratedKey, WalletError> {
        for _ in 0..MAX_KEY_ATTEMPTS {
            let mut candidate: [u8; 32] = random_bytes_fixed();
            let key = SigningKey::from_bytes(&candidate.into())
                .ok()
                .map(|signing_key| compressed_public_key(&signing_key))
                .transpose()?
                .map(|public_key| GeneratedKey {
                    private_key: SecretKeyBytes::new(candidate),
                    public_key,
                    mnemonic: PLACEHOLDER_MNEMONIC.to_string(),
                });
            candidate.zeroize();

            if let Some(key) = key {
                return Ok(key);
            }
        }

        Err(WalletError::DerivationFailed(
            "failed to sample a valid secp256k1 scalar".into(),
        ))
    }
}

/// BIP-39 phrase with the key at `m/84'/coin'/account'/0/0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MnemonicKeySource {
    pub account: u32,
}

impl KeySource for MnemonicKeySource {
    fn kind(&self) -> KeySourceKind {
        KeySourceKind::Mnemonic
    }

    fn generate(&self, network: BtcNetwork) -> Result<GeneratedKey, WalletError> {
        let phrase = mnemonic::generate_mnemonic()?;
        let mut seed = mnemonic::mnemonic_to_seed(&phrase, "")?;
        let derived = hd_derivation::derive_bip84_key(&seed, network, self.account, 0);
        seed.zeroize();
        let derived = derived?;

        Ok(GeneratedKey {
            private_key: SecretKeyBytes::new(derived.private_key),
            public_key: derived.public_key_compressed,
            mnemonic: phrase,
        })
    }
}

/// Strategy for the configured key source.
pub fn key_source_for(kind: KeySourceKind) -> Box<dyn KeySource> {
    match kind {
        KeySourceKind::Random => Box::new(RandomKeySource),
        KeySourceKind::Mnemonic => Box::new(MnemonicKeySource::default()),
    }
}

fn compressed_public_key(signing_key: &SigningKey) -> Result<[u8; 33], WalletError> {
    signing_key
        .verifying_key()
        .to_encoded_point(true)
        .as_bytes()
        .try_into()
        .map_err(|_| WalletError::DerivationFailed("Invalid public key length".into()))
}
