//! Mocked send flow: validates a payment request against the wallet balance
//! and hands it to a [`Broadcaster`]. No transaction is built or signed.

use chain_btc::address::validate_address;
use chain_btc::amount::{format_btc, parse_btc_amount};
use chain_btc::network::NetworkParameters;

use crate::error::WalletError;

/// Satoshis held back from "send max" to leave room for the fee.
pub const FEE_RESERVE_SAT: u64 = 10_000;

/// Transaction id reported by [`MockBroadcaster`].
pub const MOCK_TXID: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

/// A payment as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRequest {
    pub from_address: String,
    pub recipient: String,
    /// Decimal BTC amount, e.g. `"0.0015"`.
    pub amount: String,
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSend {
    pub from_address: String,
    pub recipient: String,
    pub amount_sat: u64,
}

/// Check a request against the network and the available balance.
pub fn validate_send(
    request: &SendRequest,
    balance_sat: i64,
    params: &NetworkParameters,
) -> Result<ValidatedSend, WalletError> {
    let recipient = request.recipient.trim();
    if recipient.is_empty() {
        return Err(WalletError::InvalidAddress(
            "please enter a recipient address".into(),
        ));
    }
    if !validate_address(recipient, params)? {
        return Err(WalletError::InvalidAddress(format!(
            "{recipient} is not a {} address",
            params.bech32_hrp
        )));
    }

    let amount_sat = parse_btc_amount(&request.amount)?;
    if amount_sat == 0 {
        return Err(WalletError::InvalidAmount(
            "amount must be greater than zero".into(),
        ));
    }

    let available_sat = balance_sat.max(0) as u64;
    if amount_sat > available_sat {
        return Err(WalletError::InsufficientBalance {
            requested_sat: amount_sat,
            available_sat,
        });
    }

    Ok(ValidatedSend {
        from_address: request.from_address.clone(),
        recipient: recipient.to_string(),
        amount_sat,
    })
}

/// Largest amount offered by "send max": balance minus the fee reserve.
pub fn max_sendable_sat(balance_sat: i64) -> u64 {
    (balance_sat.max(0) as u64).saturating_sub(FEE_RESERVE_SAT)
}

/// Submits a validated payment and returns its transaction id.
pub trait Broadcaster {
    fn broadcast(&self, send: &ValidatedSend) -> Result<String, WalletError>;
}

/// Broadcaster that only logs the payment and returns [`MOCK_TXID`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MockBroadcaster;

impl Broadcaster for MockBroadcaster {
    fn broadcast(&self, send: &ValidatedSend) -> Result<String, WalletError> {
        log::info!(
            "mock broadcast: {} BTC from {} to {}",
            format_btc(send.amount_sat as i64),
            send.from_address,
            send.recipient
        );
        Ok(MOCK_TXID.to_string())
    }
}

/// Validate and broadcast a payment.
pub fn send_bitcoin(
    request: &SendRequest,
    balance_sat: i64,
    params: &NetworkParameters,
    broadcaster: &dyn Broadcaster,
) -> Result<String, WalletError> {
    let validated = validate_send(request, balance_sat, params)?;
    broadcaster.broadcast(&validated)
}
