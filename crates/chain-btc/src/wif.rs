use zeroize::Zeroize;

use crate::error::BtcError;
use crate::network::NetworkParameters;

/// Suffix byte marking a WIF key whose public key is compressed.
const COMPRESSED_FLAG: u8 = 0x01;

/// A decoded Wallet Import Format key.
#[derive(Debug, Clone)]
pub struct DecodedWif {
    pub version: u8,
    pub private_key: [u8; 32],
    pub compressed: bool,
}

impl Drop for DecodedWif {
    fn drop(&mut self) {
        self.private_key.zeroize();
    }
}

/// Encode a raw 32-byte private key as compressed-form WIF.
///
/// Layout before Base58Check: `version || key || 0x01`, followed by the first
/// four bytes of SHA256d over that payload. The key is not range-checked
/// against the curve order; only its length is.
pub fn encode_wif(private_key: &[u8], params: &NetworkParameters) -> Result<String, BtcError> {
    if private_key.len() != 32 {
        return Err(BtcError::InvalidPrivateKey(format!(
            "expected 32 bytes, got {}",
            private_key.len()
        )));
    }

    let mut payload = Vec::with_capacity(34);
    payload.push(params.wif);
    payload.extend_from_slice(private_key);
    payload.push(COMPRESSED_FLAG);

    let wif = bs58::encode(&payload).with_check().into_string();
    payload.zeroize();
    Ok(wif)
}

/// Decode a WIF string, verifying its checksum and layout.
pub fn decode_wif(wif: &str) -> Result<DecodedWif, BtcError> {
    let mut payload = bs58::decode(wif.trim())
        .with_check(None)
        .into_vec()
        .map_err(|e| BtcError::InvalidWif(format!("base58check decode failed: {e}")))?;

    let compressed = match payload.len() {
        33 => false,
        34 if payload[33] == COMPRESSED_FLAG => true,
        34 => {
            let flag = payload[33];
            payload.zeroize();
            return Err(BtcError::InvalidWif(format!(
                "unexpected compression flag {flag:#04x}"
            )));
        }
        n => {
            payload.zeroize();
            return Err(BtcError::InvalidWif(format!(
                "expected 33 or 34 payload bytes, got {n}"
            )));
        }
    };

    let mut private_key = [0u8; 32];
    private_key.copy_from_slice(&payload[1..33]);
    let version = payload[0];
    payload.zeroize();

    Ok(DecodedWif {
        version,
        private_key,
        compressed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{MAINNET, TESTNET4};
    use bitcoin::secp256k1::SecretKey;
    use sha2::{Digest, Sha256};

    /// Base58Check decoding written out by hand, independent of `decode_wif`.
    fn manual_base58check(s: &str) -> Vec<u8> {
        let raw = bs58::decode(s).into_vec().unwrap();
        let (payload, checksum) = raw.split_at(raw.len() - 4);
        let digest = Sha256::digest(Sha256::digest(payload));
        assert_eq!(checksum, &digest[..4], "checksum mismatch");
        payload.to_vec()
    }

    #[test]
    fn all_zero_key_testnet_is_stable_and_decodable() {
        let key = [0u8; 32];
        let first = encode_wif(&key, &TESTNET4).unwrap();
        let second = encode_wif(&key, &TESTNET4).unwrap();
        assert_eq!(first, second);

        let payload = manual_base58check(&first);
        assert_eq!(payload.len(), 34);
        assert_eq!(payload[0], 0xef);
        assert_eq!(&payload[1..33], &key);
        assert_eq!(payload[33], 0x01);
    }

    #[test]
    fn mainnet_known_vector_private_key_one() {
        let mut key = [0u8; 32];
        key[31] = 1;
        let wif = encode_wif(&key, &MAINNET).unwrap();
        assert_eq!(wif, "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn");
    }

    #[test]
    fn testnet_matches_bitcoin_crate() {
        let key = [0x42u8; 32];
        let ours = encode_wif(&key, &TESTNET4).unwrap();

        let sk = SecretKey::from_slice(&key).unwrap();
        let reference = bitcoin::PrivateKey::new(sk, bitcoin::NetworkKind::Test).to_wif();
        assert_eq!(ours, reference);
        assert!(ours.starts_with('c'));
    }

    #[test]
    fn wrong_length_key_is_rejected() {
        assert!(encode_wif(&[0u8; 31], &TESTNET4).is_err());
        assert!(encode_wif(&[0u8; 33], &TESTNET4).is_err());
        assert!(encode_wif(&[], &TESTNET4).is_err());
    }

    #[test]
    fn decode_recovers_key_and_version() {
        let key = [0x5au8; 32];
        let wif = encode_wif(&key, &TESTNET4).unwrap();
        let decoded = decode_wif(&wif).unwrap();
        assert_eq!(decoded.version, 0xef);
        assert_eq!(decoded.private_key, key);
        assert!(decoded.compressed);
    }

    #[test]
    fn decode_uncompressed_mainnet_wif() {
        // Private key 1, uncompressed form.
        let decoded = decode_wif("5HpHagT65TZzG1PH3CSu63k8DbpvD8s5ip4nEB3kEsreAnchuDf").unwrap();
        assert_eq!(decoded.version, 0x80);
        assert!(!decoded.compressed);
        assert_eq!(decoded.private_key[31], 1);
    }

    #[test]
    fn decode_rejects_corrupted_checksum() {
        let mut wif = encode_wif(&[0x5au8; 32], &TESTNET4).unwrap();
        let last = wif.pop().unwrap();
        wif.push(if last == 'a' { 'b' } else { 'a' });
        assert!(decode_wif(&wif).is_err());
    }

    #[test]
    fn decode_rejects_non_wif_payload() {
        // Valid Base58Check, but a 21-byte address payload.
        assert!(decode_wif("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa").is_err());
    }
}
