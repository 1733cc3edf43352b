use bitcoin::{Amount, Denomination};

use crate::error::BtcError;

/// Satoshis per whole bitcoin.
pub const SATS_PER_BTC: i64 = 100_000_000;

/// Total bitcoin supply cap in satoshis. No real output or sum exceeds it.
pub const MAX_MONEY_SAT: u64 = 21_000_000 * SATS_PER_BTC as u64;

/// Sum satoshi values reported by an explorer. `None` if any value or the
/// running total exceeds [`MAX_MONEY_SAT`].
pub fn checked_sum_sat(values: impl IntoIterator<Item = u64>) -> Option<i64> {
    values.into_iter().try_fold(0i64, |total, value| {
        if value > MAX_MONEY_SAT {
            return None;
        }
        total
            .checked_add(value as i64)
            .filter(|sum| *sum as u64 <= MAX_MONEY_SAT)
    })
}

/// Convert a signed satoshi value into whole bitcoin.
pub fn sats_to_btc(sat: i64) -> f64 {
    sat as f64 / SATS_PER_BTC as f64
}

/// Parse a user-entered decimal BTC amount (e.g. `"0.0015"`) into satoshis.
///
/// Rejects negative values and more than eight decimal places.
pub fn parse_btc_amount(input: &str) -> Result<u64, BtcError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(BtcError::InvalidAmount("amount is empty".into()));
    }

    Amount::from_str_in(trimmed, Denomination::Bitcoin)
        .map(Amount::to_sat)
        .map_err(|e| BtcError::InvalidAmount(format!("'{trimmed}': {e}")))
}

/// Render a satoshi value as BTC with exactly eight decimals.
pub fn format_btc(sat: i64) -> String {
    let sign = if sat < 0 { "-" } else { "" };
    let abs = sat.unsigned_abs();
    let per = SATS_PER_BTC as u64;
    format!("{sign}{}.{:08}", abs / per, abs % per)
}
