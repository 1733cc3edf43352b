use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("Wallet not found: {0}")]
    WalletNotFound(String),

    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),

    #[error("Failed to export private key: {0}")]
    KeyExportFailed(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Insufficient balance: requested {requested_sat} sat, available {available_sat} sat")]
    InsufficientBalance { requested_sat: u64, available_sat: u64 },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Broadcast failed: {0}")]
    Broadcast(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<crypto_utils::CryptoError> for WalletError {
    fn from(e: crypto_utils::CryptoError) -> Self {
        WalletError::DerivationFailed(e.to_string())
    }
}

impl From<chain_btc::error::BtcError> for WalletError {
    fn from(e: chain_btc::error::BtcError) -> Self {
        use chain_btc::error::BtcError;
        match e {
            BtcError::InvalidAddress(msg) => WalletError::InvalidAddress(msg),
            BtcError::InvalidAmount(msg) => WalletError::InvalidAmount(msg),
            BtcError::InvalidNetwork(msg) => WalletError::Config(msg),
            other => WalletError::DerivationFailed(format!("BTC: {other}")),
        }
    }
}

impl From<std::io::Error> for WalletError {
    fn from(e: std::io::Error) -> Self {
        WalletError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(e: serde_json::Error) -> Self {
        WalletError::Storage(format!("malformed wallet record: {e}"))
    }
}
