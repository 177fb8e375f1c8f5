use soroban_sdk::{contracttype, Address};

/// Fixed-point scale shared by native amounts, normalized prices and USD values.
pub const PRICE_PRECISION: i128 = 1_000_000_000_000_000_000;
pub const PRICE_DECIMALS: u32 = 18;

/// Smallest accepted deposit, in 18-decimal USD (5 USD).
pub const MINIMUM_USD: i128 = 5 * PRICE_PRECISION;

// TTL bumps, in ledgers (~5s each)
const DAY_IN_LEDGERS: u32 = 17_280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub const LEDGER_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const LEDGER_LIFETIME_THRESHOLD: u32 = LEDGER_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct FundMeConfig {
    pub owner: Address,
    pub price_feed: Address,
    pub native_token: Address,
}

/// Latest feed answer together with its decimal precision. Never stored.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PriceSnapshot {
    pub answer: i128,
    pub decimals: u32,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    AmountFunded(Address),
    Funder(u32),
    FunderCount,
}
