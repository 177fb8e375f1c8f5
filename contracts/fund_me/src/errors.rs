use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Deposit is worth less than `MINIMUM_USD` at the current price.
    InsufficientFunds = 3,
    NotOwner = 4,
    IndexOutOfRange = 5,
    /// The feed has never published a round.
    StalePrice = 6,
    ArithmeticOverflow = 7,
    TransferFailed = 8,
}
