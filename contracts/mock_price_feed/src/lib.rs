#![no_std]

//! Mock aggregator exposing the round-data surface FundMe reads from, plus
//! setters so tests and local networks can drive the price.

use soroban_sdk::{
    contract, contracterror, contractimpl, contractmeta, contracttype, symbol_short, Env, String,
};

#[cfg(test)]
mod test;

pub const VERSION: u32 = 0;
const DESCRIPTION: &str = "MockV3Aggregator";

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    RoundNotFound = 3,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Round {
    pub answer: i128,
    pub started_at: u64,
    pub updated_at: u64,
}

#[contracttype]
pub enum DataKey {
    Decimals,
    LatestRound,
    Round(u128),
}

contractmeta!(
    key = "Description",
    val = "Mock round-data price feed for local testing"
);

#[contract]
pub struct MockV3Aggregator;

fn get_decimals(env: &Env) -> Result<u32, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Decimals)
        .ok_or(Error::NotInitialized)
}

fn get_latest_round_id(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get(&DataKey::LatestRound)
        .unwrap_or(0)
}

fn read_round(env: &Env, round_id: u128) -> Result<Round, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Round(round_id))
        .ok_or(Error::RoundNotFound)
}

fn write_round(env: &Env, round_id: u128, round: &Round) {
    env.storage().instance().set(&DataKey::LatestRound, &round_id);
    env.storage()
        .persistent()
        .set(&DataKey::Round(round_id), round);
    env.events().publish(
        (symbol_short!("FEED"), symbol_short!("answer")),
        (round_id, round.answer, round.updated_at),
    );
}

fn as_round_data(round_id: u128, round: &Round) -> (u128, i128, u64, u64, u128) {
    (
        round_id,
        round.answer,
        round.started_at,
        round.updated_at,
        round_id,
    )
}

#[contractimpl]
impl MockV3Aggregator {
    pub fn initialize(env: Env, decimals: u32, initial_answer: i128) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Decimals) {
            return Err(Error::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::Decimals, &decimals);
        Self::update_answer(env, initial_answer)
    }

    /// Opens a new round stamped with the current ledger time.
    pub fn update_answer(env: Env, answer: i128) -> Result<(), Error> {
        get_decimals(&env)?;
        let now = env.ledger().timestamp();
        let round_id = get_latest_round_id(&env) + 1;
        write_round(
            &env,
            round_id,
            &Round {
                answer,
                started_at: now,
                updated_at: now,
            },
        );
        Ok(())
    }

    /// Overwrites `round_id` and makes it the latest round. Zero timestamps
    /// simulate a feed that has never published.
    pub fn update_round_data(
        env: Env,
        round_id: u128,
        answer: i128,
        timestamp: u64,
        started_at: u64,
    ) -> Result<(), Error> {
        get_decimals(&env)?;
        write_round(
            &env,
            round_id,
            &Round {
                answer,
                started_at,
                updated_at: timestamp,
            },
        );
        Ok(())
    }

    pub fn decimals(env: Env) -> Result<u32, Error> {
        get_decimals(&env)
    }

    pub fn version(_env: Env) -> u32 {
        VERSION
    }

    pub fn description(env: Env) -> String {
        String::from_str(&env, DESCRIPTION)
    }

    pub fn latest_round_data(env: Env) -> Result<(u128, i128, u64, u64, u128), Error> {
        let round_id = get_latest_round_id(&env);
        let round = read_round(&env, round_id)?;
        Ok(as_round_data(round_id, &round))
    }

    pub fn get_round_data(env: Env, round_id: u128) -> Result<(u128, i128, u64, u64, u128), Error> {
        let round = read_round(&env, round_id)?;
        Ok(as_round_data(round_id, &round))
    }

    pub fn latest_answer(env: Env) -> Result<i128, Error> {
        Ok(read_round(&env, get_latest_round_id(&env))?.answer)
    }

    pub fn latest_timestamp(env: Env) -> Result<u64, Error> {
        Ok(read_round(&env, get_latest_round_id(&env))?.updated_at)
    }

    pub fn latest_round(env: Env) -> u128 {
        get_latest_round_id(&env)
    }
}
