use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

pub const FUNDME_TOPIC: Symbol = symbol_short!("FUNDME");

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum WithdrawStrategy {
    /// Registry length re-read from storage on every iteration.
    Standard,
    /// Registry length read once before the loop.
    Cached,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct FundedEvent {
    pub funder: Address,
    pub amount: i128,
    pub usd_value: i128,
    pub total_funded: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct WithdrawnEvent {
    pub owner: Address,
    pub amount: i128,
    pub funders_cleared: u32,
    pub strategy: WithdrawStrategy,
}

pub fn emit_initialized(env: &Env, owner: &Address, price_feed: &Address, native_token: &Address) {
    env.events().publish(
        (FUNDME_TOPIC, symbol_short!("init")),
        (owner.clone(), price_feed.clone(), native_token.clone()),
    );
}

pub fn emit_funded(env: &Env, funder: &Address, amount: i128, usd_value: i128, total_funded: i128) {
    let event = FundedEvent {
        funder: funder.clone(),
        amount,
        usd_value,
        total_funded,
    };
    env.events()
        .publish((FUNDME_TOPIC, symbol_short!("funded")), event);
}

pub fn emit_withdrawn(
    env: &Env,
    owner: &Address,
    amount: i128,
    funders_cleared: u32,
    strategy: WithdrawStrategy,
) {
    let event = WithdrawnEvent {
        owner: owner.clone(),
        amount,
        funders_cleared,
        strategy,
    };
    env.events()
        .publish((FUNDME_TOPIC, symbol_short!("withdrawn")), event);
}
