//! Pounds, shillings and pence.
//!
//! A [`Price`] holds an amount of pre-decimal British currency. Build one from
//! its parts with [`Price::new`], or tally a purse of historical [`Coins`]
//! into a normalized price with [`Price::from_coins`].

pub mod money;

// Flat public surface for the domain types.
pub use money::{
    coins, Coins, CoinsError, Contribution, CsvField, Denomination, Price, PENCE_PER_POUND,
    PENCE_PER_SHILLING, SHILLINGS_PER_POUND,
};
