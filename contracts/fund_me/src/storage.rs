use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::types::{
    DataKey, FundMeConfig, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, LEDGER_BUMP_AMOUNT,
    LEDGER_LIFETIME_THRESHOLD,
};

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<FundMeConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &FundMeConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn get_amount_funded(env: &Env, funder: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::AmountFunded(funder.clone()))
        .unwrap_or(0)
}

pub fn set_amount_funded(env: &Env, funder: &Address, amount: i128) {
    let key = DataKey::AmountFunded(funder.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_LIFETIME_THRESHOLD, LEDGER_BUMP_AMOUNT);
}

pub fn reset_amount_funded(env: &Env, funder: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::AmountFunded(funder.clone()));
}

pub fn get_funder_count(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::FunderCount)
        .unwrap_or(0)
}

fn set_funder_count(env: &Env, count: u32) {
    env.storage().persistent().set(&DataKey::FunderCount, &count);
    env.storage().persistent().extend_ttl(
        &DataKey::FunderCount,
        LEDGER_LIFETIME_THRESHOLD,
        LEDGER_BUMP_AMOUNT,
    );
}

pub fn get_funder(env: &Env, index: u32) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Funder(index))
}

/// Appends to the registry without deduplicating repeat funders.
pub fn push_funder(env: &Env, funder: &Address) {
    let index = get_funder_count(env);
    let key = DataKey::Funder(index);
    env.storage().persistent().set(&key, funder);
    env.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_LIFETIME_THRESHOLD, LEDGER_BUMP_AMOUNT);
    set_funder_count(env, index + 1);
}

pub fn clear_funders(env: &Env, count: u32) {
    for index in 0..count {
        env.storage().persistent().remove(&DataKey::Funder(index));
    }
    set_funder_count(env, 0);
}
