//! Bitcoin utilities for the testnet demo wallet.
//!
//! Provides network parameter sets, P2WPKH address derivation, WIF key
//! encoding, and net-amount accounting over Esplora explorer transactions.

pub mod address;
pub mod amount;
pub mod error;
pub mod explorer;
pub mod history;
pub mod network;
pub mod wif;

pub use address::derive_address;
pub use history::compute_net_amount;
pub use network::{BtcNetwork, NetworkParameters, TESTNET4};
pub use wif::encode_wif;
