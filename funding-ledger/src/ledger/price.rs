use price_feed::{PriceData, PriceFeedClient};
use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{panic_with_error, Env, I256};

use crate::{constants::USD_DECIMALS, errors::FundingLedgerError, storage};

// 10^76 is the largest power of ten an I256 holds
const MAX_I256_POW10: u32 = 76;

/// Load the latest answer from the ledger's price feed
///
/// ### Panics
/// If the feed can't be invoked or reports a non-positive price
pub fn load_price(e: &Env) -> PriceData {
    let feed_client = PriceFeedClient::new(e, &storage::get_price_feed(e));
    match feed_client.try_latest_answer() {
        Ok(Ok(answer)) if answer.price > 0 => answer,
        _ => panic_with_error!(e, FundingLedgerError::PriceFeedUnavailable),
    }
}

/// Convert an amount of native tokens to its USD value, expressed in `USD_DECIMALS`
///
/// ### Arguments
/// * `amount` - The amount of native tokens in the token's smallest unit
///
/// ### Panics
/// If the price feed is unavailable or the value does not fit in an i128
pub fn to_usd(e: &Env, amount: i128) -> i128 {
    let price = load_price(e);
    let token_decimals = storage::get_token_decimals(e);
    match convert_to_usd(e, amount, &price, token_decimals) {
        Some(usd) => usd,
        None => panic_with_error!(e, FundingLedgerError::Overflow),
    }
}

/// Compute `floor(amount * price * 10^USD_DECIMALS / 10^(token_decimals + price.decimals))`
/// for a non-negative `amount`
///
/// A single floor division is performed, so the result is within one smallest USD unit
/// of the exact value. Products that exceed an i128 are carried in an I256. Returns None
/// if the result does not fit in an i128.
fn convert_to_usd(e: &Env, amount: i128, price: &PriceData, token_decimals: u32) -> Option<i128> {
    let value_decimals = token_decimals.checked_add(price.decimals)?;
    if value_decimals < USD_DECIMALS {
        // the unscaled product is no larger than the result
        let scalar = 10i128.checked_pow(USD_DECIMALS - value_decimals)?;
        return amount.checked_mul(price.price)?.checked_mul(scalar);
    }

    let exponent = value_decimals - USD_DECIMALS;
    if let Some(usd) = 10i128
        .checked_pow(exponent)
        .and_then(|denominator| amount.fixed_mul_floor(price.price, denominator))
    {
        return Some(usd);
    }
    if exponent > MAX_I256_POW10 {
        // the product of two i128s is below 10^77
        return Some(0);
    }
    let denominator = I256::from_i128(e, 10).pow(exponent);
    I256::from_i128(e, amount)
        .mul(&I256::from_i128(e, price.price))
        .div(&denominator)
        .to_i128()
}
