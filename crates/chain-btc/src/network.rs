use std::str::FromStr;

use crate::error::BtcError;

/// Constant parameter set describing how keys and addresses are encoded on a
/// Bitcoin network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkParameters {
    /// Prefix prepended to messages before signing.
    pub message_prefix: &'static str,
    /// Human-readable part of bech32 (segwit) addresses.
    pub bech32_hrp: &'static str,
    /// BIP-32 extended public key version bytes.
    pub bip32_public: u32,
    /// BIP-32 extended private key version bytes.
    pub bip32_private: u32,
    /// Version byte of legacy P2PKH addresses.
    pub pub_key_hash: u8,
    /// Version byte of P2SH addresses.
    pub script_hash: u8,
    /// Version byte of Wallet Import Format keys.
    pub wif: u8,
}

/// Bitcoin mainnet.
pub const MAINNET: NetworkParameters = NetworkParameters {
    message_prefix: "\x18Bitcoin Signed Message:\n",
    bech32_hrp: "bc",
    bip32_public: 0x0488_b21e,
    bip32_private: 0x0488_ade4,
    pub_key_hash: 0x00,
    script_hash: 0x05,
    wif: 0x80,
};

/// Bitcoin testnet4. Testnet3 and signet share the same encodings.
pub const TESTNET4: NetworkParameters = NetworkParameters {
    message_prefix: "\x18Bitcoin Signed Message:\n",
    bech32_hrp: "tb",
    bip32_public: 0x0435_87cf,
    bip32_private: 0x0435_8394,
    pub_key_hash: 0x6f,
    script_hash: 0xc4,
    wif: 0xef,
};

/// Default explorer API endpoint for Bitcoin mainnet.
pub const MAINNET_EXPLORER_API: &str = "https://mempool.space/api";

/// Default explorer API endpoint for Bitcoin testnet3.
pub const TESTNET_EXPLORER_API: &str = "https://blockstream.info/testnet/api";

/// Default explorer API endpoint for Bitcoin testnet4.
pub const TESTNET4_EXPLORER_API: &str = "https://mempool.space/testnet4/api";

/// Default explorer API endpoint for Bitcoin signet.
pub const SIGNET_EXPLORER_API: &str = "https://mempool.space/signet/api";

/// Supported Bitcoin networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BtcNetwork {
    Mainnet,
    Testnet,
    #[default]
    Testnet4,
    Signet,
}

impl BtcNetwork {
    /// Encoding parameters for this network.
    pub fn params(self) -> &'static NetworkParameters {
        match self {
            BtcNetwork::Mainnet => &MAINNET,
            BtcNetwork::Testnet | BtcNetwork::Testnet4 | BtcNetwork::Signet => &TESTNET4,
        }
    }

    /// BIP-44 coin type: 0 on mainnet, 1 on every test network.
    pub fn coin_type(self) -> u32 {
        match self {
            BtcNetwork::Mainnet => 0,
            _ => 1,
        }
    }

    /// Return the default explorer API endpoint for this network.
    pub fn default_explorer_api(self) -> &'static str {
        match self {
            BtcNetwork::Mainnet => MAINNET_EXPLORER_API,
            BtcNetwork::Testnet => TESTNET_EXPLORER_API,
            BtcNetwork::Testnet4 => TESTNET4_EXPLORER_API,
            BtcNetwork::Signet => SIGNET_EXPLORER_API,
        }
    }

    /// Return the human-facing explorer site for this network.
    pub fn explorer_web_url(self) -> &'static str {
        match self {
            BtcNetwork::Mainnet => "https://mempool.space",
            BtcNetwork::Testnet => "https://mempool.space/testnet",
            BtcNetwork::Testnet4 => "https://mempool.space/testnet4",
            BtcNetwork::Signet => "https://mempool.space/signet",
        }
    }

    pub fn is_testnet(self) -> bool {
        !matches!(self, BtcNetwork::Mainnet)
    }
}

impl std::fmt::Display for BtcNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BtcNetwork::Mainnet => write!(f, "mainnet"),
            BtcNetwork::Testnet => write!(f, "testnet"),
            BtcNetwork::Testnet4 => write!(f, "testnet4"),
            BtcNetwork::Signet => write!(f, "signet"),
        }
    }
}

impl FromStr for BtcNetwork {
    type Err = BtcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mainnet" | "bitcoin" => Ok(BtcNetwork::Mainnet),
            "testnet" | "testnet3" => Ok(BtcNetwork::Testnet),
            "testnet4" => Ok(BtcNetwork::Testnet4),
            "signet" => Ok(BtcNetwork::Signet),
            other => Err(BtcError::InvalidNetwork(format!("unknown network '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testnet4_constants() {
        let p = BtcNetwork::Testnet4.params();
        assert_eq!(p.message_prefix, "\x18Bitcoin Signed Message:\n");
        assert_eq!(p.bech32_hrp, "tb");
        assert_eq!(p.bip32_public, 0x043587cf);
        assert_eq!(p.bip32_private, 0x04358394);
        assert_eq!(p.pub_key_hash, 0x6f);
        assert_eq!(p.script_hash, 0xc4);
        assert_eq!(p.wif, 0xef);
    }

    #[test]
    fn mainnet_constants() {
        let p = BtcNetwork::Mainnet.params();
        assert_eq!(p.bech32_hrp, "bc");
        assert_eq!(p.wif, 0x80);
        assert_eq!(p.pub_key_hash, 0x00);
    }

    #[test]
    fn test_networks_share_parameters() {
        assert_eq!(BtcNetwork::Testnet.params(), &TESTNET4);
        assert_eq!(BtcNetwork::Signet.params(), &TESTNET4);
    }

    #[test]
    fn default_is_testnet4() {
        assert_eq!(BtcNetwork::default(), BtcNetwork::Testnet4);
    }

    #[test]
    fn coin_types() {
        assert_eq!(BtcNetwork::Mainnet.coin_type(), 0);
        assert_eq!(BtcNetwork::Testnet4.coin_type(), 1);
        assert_eq!(BtcNetwork::Signet.coin_type(), 1);
    }

    #[test]
    fn explorer_urls_are_nonempty() {
        for net in [
            BtcNetwork::Mainnet,
            BtcNetwork::Testnet,
            BtcNetwork::Testnet4,
            BtcNetwork::Signet,
        ] {
            assert!(net.default_explorer_api().starts_with("https://"));
            assert!(net.explorer_web_url().starts_with("https://"));
        }
    }

    #[test]
    fn display_and_parse_agree() {
        for net in [
            BtcNetwork::Mainnet,
            BtcNetwork::Testnet,
            BtcNetwork::Testnet4,
            BtcNetwork::Signet,
        ] {
            assert_eq!(net.to_string().parse::<BtcNetwork>().unwrap(), net);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("TestNet4".parse::<BtcNetwork>().unwrap(), BtcNetwork::Testnet4);
    }

    #[test]
    fn parse_unknown_network_fails() {
        let err = "regtest".parse::<BtcNetwork>().unwrap_err();
        assert!(err.to_string().contains("regtest"));
    }
}
