use soroban_sdk::{contract, contractimpl, contractmeta, token, Address, Env};

use crate::errors::Error;
use crate::events::{self, WithdrawStrategy};
use crate::price_converter;
use crate::storage;
use crate::types::{FundMeConfig, MINIMUM_USD};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Crowdfunding ledger with a USD-priced minimum deposit"
);

#[contract]
pub struct FundMeContract;

fn require_owner(env: &Env, caller: &Address) -> Result<FundMeConfig, Error> {
    let config = storage::get_config(env)?;
    if &config.owner != caller {
        return Err(Error::NotOwner);
    }
    Ok(config)
}

fn transfer_native(
    env: &Env,
    native_token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    let token_client = token::Client::new(env, native_token);
    match token_client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}

/// Sends the whole held balance to the owner. Bookkeeping must already be
/// reset; a rejected transfer fails the invocation and reverts it.
fn sweep_to_owner(
    env: &Env,
    config: &FundMeConfig,
    funders_cleared: u32,
    strategy: WithdrawStrategy,
) -> Result<i128, Error> {
    let contract_address = env.current_contract_address();
    let held = token::Client::new(env, &config.native_token).balance(&contract_address);

    if held > 0 {
        transfer_native(
            env,
            &config.native_token,
            &contract_address,
            &config.owner,
            held,
        )?;
    }

    storage::extend_instance_ttl(env);
    events::emit_withdrawn(env, &config.owner, held, funders_cleared, strategy);
    Ok(held)
}

#[contractimpl]
impl FundMeContract {
    /// Binds the owner, the price feed and the native token. The owner can
    /// never change afterwards.
    pub fn initialize(
        env: Env,
        owner: Address,
        price_feed: Address,
        native_token: Address,
    ) -> Result<(), Error> {
        if storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }

        owner.require_auth();

        let config = FundMeConfig {
            owner: owner.clone(),
            price_feed: price_feed.clone(),
            native_token: native_token.clone(),
        };
        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);

        events::emit_initialized(&env, &owner, &price_feed, &native_token);
        Ok(())
    }

    /// Deposits `amount` of the native token. The USD value at the latest
    /// feed price must reach `MINIMUM_USD`; the check runs before anything
    /// is moved or recorded.
    pub fn fund(env: Env, funder: Address, amount: i128) -> Result<(), Error> {
        funder.require_auth();

        let config = storage::get_config(&env)?;
        let price = price_converter::get_price(&env, &config.price_feed)?;
        let usd_value = price_converter::to_usd(&env, amount, &price)?;
        if usd_value < MINIMUM_USD {
            return Err(Error::InsufficientFunds);
        }

        let total_funded = storage::get_amount_funded(&env, &funder)
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;

        transfer_native(
            &env,
            &config.native_token,
            &funder,
            &env.current_contract_address(),
            amount,
        )?;

        storage::set_amount_funded(&env, &funder, total_funded);
        storage::push_funder(&env, &funder);
        storage::extend_instance_ttl(&env);

        events::emit_funded(&env, &funder, amount, usd_value, total_funded);
        Ok(())
    }

    /// Owner-only sweep. Zeroes every registered funder's balance, empties
    /// the registry, then transfers the held balance to the owner.
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, Error> {
        caller.require_auth();
        let config = require_owner(&env, &caller)?;

        let mut index = 0;
        while index < storage::get_funder_count(&env) {
            if let Some(funder) = storage::get_funder(&env, index) {
                storage::reset_amount_funded(&env, &funder);
            }
            index += 1;
        }

        let funders_cleared = storage::get_funder_count(&env);
        storage::clear_funders(&env, funders_cleared);

        sweep_to_owner(&env, &config, funders_cleared, WithdrawStrategy::Standard)
    }

    /// Same outcome as `withdraw`, with the registry length loaded once.
    pub fn cheaper_withdraw(env: Env, caller: Address) -> Result<i128, Error> {
        caller.require_auth();
        let config = require_owner(&env, &caller)?;

        let funders_count = storage::get_funder_count(&env);
        for index in 0..funders_count {
            if let Some(funder) = storage::get_funder(&env, index) {
                storage::reset_amount_funded(&env, &funder);
            }
        }
        storage::clear_funders(&env, funders_count);

        sweep_to_owner(&env, &config, funders_count, WithdrawStrategy::Cached)
    }

    // View functions
    pub fn get_address_to_amount_funded(env: Env, funder: Address) -> i128 {
        storage::get_amount_funded(&env, &funder)
    }

    pub fn get_funder(env: Env, index: u32) -> Result<Address, Error> {
        if index >= storage::get_funder_count(&env) {
            return Err(Error::IndexOutOfRange);
        }
        storage::get_funder(&env, index).ok_or(Error::IndexOutOfRange)
    }

    pub fn get_funders_count(env: Env) -> u32 {
        storage::get_funder_count(&env)
    }

    pub fn get_owner(env: Env) -> Result<Address, Error> {
        Ok(storage::get_config(&env)?.owner)
    }

    pub fn get_price_feed(env: Env) -> Result<Address, Error> {
        Ok(storage::get_config(&env)?.price_feed)
    }

    pub fn get_native_token(env: Env) -> Result<Address, Error> {
        Ok(storage::get_config(&env)?.native_token)
    }

    pub fn get_config(env: Env) -> Result<FundMeConfig, Error> {
        storage::get_config(&env)
    }

    pub fn get_version(env: Env) -> Result<u32, Error> {
        let config = storage::get_config(&env)?;
        Ok(price_converter::get_version(&env, &config.price_feed))
    }

    /// USD value (18 decimals) of `amount` at the latest feed price.
    pub fn get_conversion_rate(env: Env, amount: i128) -> Result<i128, Error> {
        let config = storage::get_config(&env)?;
        price_converter::get_conversion_rate(&env, amount, &config.price_feed)
    }

    pub fn get_balance(env: Env) -> Result<i128, Error> {
        let config = storage::get_config(&env)?;
        Ok(token::Client::new(&env, &config.native_token).balance(&env.current_contract_address()))
    }

    pub fn minimum_usd(_env: Env) -> i128 {
        MINIMUM_USD
    }
}
