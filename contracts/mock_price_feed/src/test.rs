#![allow(clippy::unwrap_used)]

use crate::{Error, MockV3Aggregator, MockV3AggregatorClient, VERSION};
use soroban_sdk::testutils::Ledger;
use soroban_sdk::{Env, String};

fn setup(env: &Env, decimals: u32, answer: i128) -> MockV3AggregatorClient<'_> {
    let contract_id = env.register_contract(None, MockV3Aggregator);
    let client = MockV3AggregatorClient::new(env, &contract_id);
    client.initialize(&decimals, &answer);
    client
}

#[test]
fn test_initialize_publishes_first_round() {
    let env = Env::default();
    env.ledger().with_mut(|l| l.timestamp = 1_700_000_000);

    let feed = setup(&env, 8, 2_000_0000_0000);

    assert_eq!(feed.decimals(), 8);
    assert_eq!(feed.version(), VERSION);
    assert_eq!(feed.latest_round(), 1);
    assert_eq!(
        feed.latest_round_data(),
        (1u128, 2_000_0000_0000i128, 1_700_000_000u64, 1_700_000_000u64, 1u128)
    );
    assert_eq!(feed.description(), String::from_str(&env, "MockV3Aggregator"));
}

#[test]
fn test_initialize_twice_fails() {
    let env = Env::default();
    let feed = setup(&env, 8, 1);

    let result = feed.try_initialize(&18, &5);
    assert_eq!(result, Err(Ok(Error::AlreadyInitialized)));
    assert_eq!(feed.decimals(), 8);
}

#[test]
fn test_update_answer_opens_new_round() {
    let env = Env::default();
    env.ledger().with_mut(|l| l.timestamp = 100);
    let feed = setup(&env, 8, 1_000);

    env.ledger().with_mut(|l| l.timestamp = 250);
    feed.update_answer(&1_500);

    assert_eq!(feed.latest_round(), 2);
    assert_eq!(feed.latest_answer(), 1_500);
    assert_eq!(feed.latest_timestamp(), 250);

    // earlier rounds stay readable
    assert_eq!(feed.get_round_data(&1), (1u128, 1_000i128, 100u64, 100u64, 1u128));
}

#[test]
fn test_update_round_data_overrides_latest() {
    let env = Env::default();
    env.ledger().with_mut(|l| l.timestamp = 100);
    let feed = setup(&env, 8, 1_000);

    feed.update_round_data(&7, &42, &0, &0);

    assert_eq!(feed.latest_round(), 7);
    assert_eq!(feed.latest_round_data(), (7u128, 42i128, 0u64, 0u64, 7u128));
}

#[test]
fn test_unknown_round_is_an_error() {
    let env = Env::default();
    let feed = setup(&env, 8, 1_000);

    assert_eq!(feed.try_get_round_data(&99), Err(Ok(Error::RoundNotFound)));
}

#[test]
fn test_uninitialized_feed_rejects_reads_and_updates() {
    let env = Env::default();
    let contract_id = env.register_contract(None, MockV3Aggregator);
    let feed = MockV3AggregatorClient::new(&env, &contract_id);

    assert_eq!(feed.try_decimals(), Err(Ok(Error::NotInitialized)));
    assert_eq!(feed.try_update_answer(&1), Err(Ok(Error::NotInitialized)));
    assert_eq!(feed.try_latest_round_data(), Err(Ok(Error::RoundNotFound)));
}
