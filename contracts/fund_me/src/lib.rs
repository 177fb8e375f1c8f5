#![no_std]

//! # FundMe
//!
//! A crowdfunding ledger that accepts deposits of the native token when
//! their USD value, priced through an external feed, reaches a fixed
//! minimum. A single owner, fixed at initialization, can sweep the whole
//! balance and reset the bookkeeping.
//!
//! ## Layout
//! - `contract`: the public contract entry points
//! - `price_converter`: price feed reads and USD conversion
//! - `storage`: typed accessors over instance and persistent storage
//! - `events`: published ledger events

pub mod contract;
mod errors;
mod events;
pub mod price_converter;
mod storage;
mod types;


pub use contract::{FundMeContract, FundMeContractClient};
pub use errors::Error;
pub use events::{FundedEvent, WithdrawStrategy, WithdrawnEvent};
pub use price_converter::{PriceFeedClient, PriceFeedInterface};
pub use types::{FundMeConfig, PriceSnapshot, MINIMUM_USD, PRICE_PRECISION};
