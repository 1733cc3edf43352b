use bech32::{segwit, Hrp};
use bitcoin::CompressedPublicKey;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use crate::error::BtcError;
use crate::network::NetworkParameters;

/// Compute Hash160 (RIPEMD-160(SHA-256(data))), the P2WPKH witness program.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let sha = Sha256::digest(data);
    Ripemd160::digest(sha).into()
}

/// Derive a P2WPKH (native SegWit bech32) address from a compressed public key.
///
/// The key must be a valid 33-byte compressed secp256k1 point. The address is
/// HASH160(pubkey) encoded as a witness v0 program under the network's bech32
/// human-readable part: `tb1q...` on testnet4, `bc1q...` on mainnet.
pub fn pubkey_to_p2wpkh_address(
    pubkey_bytes: &[u8],
    params: &NetworkParameters,
) -> Result<String, BtcError> {
    // secp256k1 would also accept a 65-byte point and re-compress it.
    if pubkey_bytes.len() != 33 {
        return Err(BtcError::InvalidPublicKey(format!(
            "expected 33-byte compressed key, got {} bytes",
            pubkey_bytes.len()
        )));
    }

    let compressed_pk = CompressedPublicKey::from_slice(pubkey_bytes).map_err(|e| {
        BtcError::InvalidPublicKey(format!("failed to parse compressed public key: {e}"))
    })?;

    let program = hash160(&compressed_pk.to_bytes());

    let hrp = Hrp::parse(params.bech32_hrp)
        .map_err(|e| BtcError::InvalidNetwork(format!("bad bech32 prefix: {e}")))?;

    segwit::encode_v0(hrp, &program)
        .map_err(|e| BtcError::InvalidAddress(format!("bech32 encoding failed: {e}")))
}

/// Derive the display address for a hex-encoded public key.
///
/// Never fails: any decoding or derivation error is logged and the empty
/// string is returned. Callers treat an empty address as "unavailable".
pub fn derive_address(public_key_hex: &str, params: &NetworkParameters) -> String {
    let derived = hex::decode(public_key_hex.trim())
        .map_err(|e| BtcError::InvalidPublicKey(format!("invalid hex: {e}")))
        .and_then(|bytes| pubkey_to_p2wpkh_address(&bytes, params));

    match derived {
        Ok(address) => address,
        Err(e) => {
            log::warn!("address derivation failed: {e}");
            String::new()
        }
    }
}

/// Validate a Bitcoin address string against a network parameter set.
///
/// Accepts segwit (bech32/bech32m) addresses and Base58Check P2PKH/P2SH
/// addresses. Returns `Ok(false)` when the address is well-formed but belongs
/// to a different network, and an error when it cannot be parsed at all.
pub fn validate_address(address: &str, params: &NetworkParameters) -> Result<bool, BtcError> {
    if let Ok((hrp, _version, _program)) = segwit::decode(address) {
        return Ok(hrp.to_lowercase() == params.bech32_hrp);
    }

    let payload = bs58::decode(address)
        .with_check(None)
        .into_vec()
        .map_err(|e| BtcError::InvalidAddress(format!("failed to parse address: {e}")))?;

    // version byte + 20-byte hash
    if payload.len() != 21 {
        return Err(BtcError::InvalidAddress(format!(
            "expected 21 payload bytes, got {}",
            payload.len()
        )));
    }

    Ok(payload[0] == params.pub_key_hash || payload[0] == params.script_hash)
}
