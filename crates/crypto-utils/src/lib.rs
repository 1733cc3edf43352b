//! # crypto-utils
//!
//! Secure randomness and zeroizing key buffers for the demo wallet.

pub mod error;
pub mod random;
pub mod zeroizing;

pub use error::CryptoError;
pub use zeroizing::{SecretKeyBytes, ZeroizingBytes};
