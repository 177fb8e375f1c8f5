//! Price feed reads and native-to-USD conversion.
//!
//! Any contract exposing `decimals`, `version` and `latest_round_data` is
//! accepted as a feed. Answers are rescaled to 18 decimals and multiplied
//! against native amounts in 256-bit host integers, so realistic amounts
//! never overflow mid-computation; only a final value that does not fit an
//! `i128` is rejected.

use soroban_sdk::{contractclient, Address, Env, I256};

use crate::errors::Error;
use crate::types::{PriceSnapshot, PRICE_DECIMALS, PRICE_PRECISION};

#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeedInterface {
    fn decimals(env: Env) -> u32;
    fn version(env: Env) -> u32;
    /// `(round_id, answer, started_at, updated_at, answered_in_round)`
    fn latest_round_data(env: Env) -> (u128, i128, u64, u64, u128);
}

/// Reads the latest round. A feed whose round carries neither a start nor
/// an update time has never published and yields `StalePrice`.
pub fn get_price(env: &Env, feed: &Address) -> Result<PriceSnapshot, Error> {
    let client = PriceFeedClient::new(env, feed);
    let (_round_id, answer, started_at, updated_at, _answered_in_round) =
        client.latest_round_data();

    if started_at == 0 && updated_at == 0 {
        return Err(Error::StalePrice);
    }

    Ok(PriceSnapshot {
        answer,
        decimals: client.decimals(),
    })
}

pub fn get_version(env: &Env, feed: &Address) -> u32 {
    PriceFeedClient::new(env, feed).version()
}

/// Rescales a raw answer with `decimals` digits of precision to 18 digits.
pub fn normalize_price(answer: i128, decimals: u32) -> Result<i128, Error> {
    if decimals <= PRICE_DECIMALS {
        let scale = 10i128
            .checked_pow(PRICE_DECIMALS - decimals)
            .ok_or(Error::ArithmeticOverflow)?;
        answer.checked_mul(scale).ok_or(Error::ArithmeticOverflow)
    } else {
        let scale = 10i128
            .checked_pow(decimals - PRICE_DECIMALS)
            .ok_or(Error::ArithmeticOverflow)?;
        Ok(answer / scale)
    }
}

/// `amount * normalized_price / 1e18`, in 18-decimal USD.
pub fn to_usd(env: &Env, amount: i128, price: &PriceSnapshot) -> Result<i128, Error> {
    let normalized = normalize_price(price.answer, price.decimals)?;

    let product = I256::from_i128(env, amount).mul(&I256::from_i128(env, normalized));
    product
        .div(&I256::from_i128(env, PRICE_PRECISION))
        .to_i128()
        .ok_or(Error::ArithmeticOverflow)
}

pub fn get_conversion_rate(env: &Env, amount: i128, feed: &Address) -> Result<i128, Error> {
    let price = get_price(env, feed)?;
    to_usd(env, amount, &price)
}
