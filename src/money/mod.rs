pub mod coins;
pub mod denomination;
pub mod price;

pub use coins::{Coins, CsvField};
pub use denomination::{Contribution, Denomination};
pub use price::Price;

pub const SHILLINGS_PER_POUND: i64 = 20;
pub const PENCE_PER_SHILLING: i64 = 12;
pub const PENCE_PER_POUND: i64 = SHILLINGS_PER_POUND * PENCE_PER_SHILLING;

/// Errors reading coin counts from text input.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoinsError {
    #[error("unknown denomination: {0}")]
    UnknownDenomination(String),
    #[error("invalid count for {denomination}: {value}")]
    InvalidCount {
        denomination: Denomination,
        value: String,
    },
    #[error("expected name=count, got: {0}")]
    MalformedEntry(String),
}
