use super::{
    Coins, Contribution, Denomination, PENCE_PER_POUND, PENCE_PER_SHILLING, SHILLINGS_PER_POUND,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

const FARTHINGS_PER_PENNY: i128 = 4;
const FARTHING: Decimal = Decimal::from_parts(25, 0, 0, false, 2);
const DASH: &str = "\u{2013}";

/// A price in £sd currency.
///
/// £1 (pound)     = 20/– (shillings)
/// 1/– (shilling) = 12d. (pence)
///
/// [`Price::new`] stores whatever it is given. [`Price::from_coins`] produces
/// values with `0 <= shillings < 20`, `0 <= pence < 12` and pence a multiple
/// of a farthing. [`Price::normalize`] gives the same ranges for non-negative
/// input but leaves the fractional pence it was given alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Price {
    /// Number of whole pounds
    pounds: i64,
    /// Number of whole shillings
    shillings: i64,
    /// Number of pence, possibly fractional
    #[schemars(with = "String")]
    pence: Decimal,
}

impl Price {
    pub const ZERO: Price = Price {
        pounds: 0,
        shillings: 0,
        pence: Decimal::ZERO,
    };

    /// Create a new [`Price`] in pounds, shillings and pence, as given.
    pub fn new(pounds: i64, shillings: i64, pence: Decimal) -> Self {
        Price {
            pounds,
            shillings,
            pence,
        }
    }

    /// Tally a purse of coins into a normalized price.
    ///
    /// Every contribution is summed before carrying. Halfpennies and farthings
    /// are counted in farthings: whole pence from them join the carry, the
    /// leftover fraction is added back once the carry is done.
    ///
    /// # Panics
    ///
    /// If the tallied pounds (or uncarried negative shillings or pence) do not
    /// fit in an `i64`. See [`Price::checked_from_coins`].
    pub fn from_coins(coins: &Coins) -> Self {
        Self::checked_from_coins(coins)
            .unwrap_or_else(|| panic!("price out of range for purse: {:?}", coins))
    }

    /// Like [`Price::from_coins`], returning `None` when the price does not fit.
    ///
    /// Counts are summed in `i128`, so any `i64` counts tally without
    /// intermediate overflow.
    pub fn checked_from_coins(coins: &Coins) -> Option<Self> {
        let (mut pounds, mut shillings, mut pence, mut farthings) = (0i128, 0i128, 0i128, 0i128);

        for denomination in Denomination::ALL {
            let count = i128::from(coins.count(denomination));
            match denomination.contribution() {
                Contribution::Whole {
                    pounds: p,
                    shillings: s,
                    pence: d,
                } => {
                    pounds += i128::from(p) * count;
                    shillings += i128::from(s) * count;
                    pence += i128::from(d) * count;
                }
                Contribution::Farthings(f) => farthings += i128::from(f) * count,
            }
        }

        let whole = farthings.div_euclid(FARTHINGS_PER_PENNY);
        let remainder =
            Decimal::from_i128_with_scale(farthings.rem_euclid(FARTHINGS_PER_PENNY) * 25, 2);
        log::debug!(
            "Tally {}/{}/{} with {} farthings ({} whole pence, {} remainder)",
            pounds,
            shillings,
            pence,
            farthings,
            whole,
            remainder
        );

        carry(pounds, shillings, pence + whole, remainder)
    }

    /// Carry excess pence into shillings and shillings into pounds.
    ///
    /// The fractional part of the pence is set aside during the carry and
    /// added back afterwards, so `total_pence` is unchanged. The fraction is
    /// kept as it is: a hand-built 0.1d. stays 0.1d.
    ///
    /// # Panics
    ///
    /// If the carried pounds do not fit in an `i64`. See
    /// [`Price::checked_normalize`].
    pub fn normalize(self) -> Self {
        self.checked_normalize()
            .unwrap_or_else(|| panic!("price out of range for normalization: {:?}", self))
    }

    /// Like [`Price::normalize`], returning `None` when the result does not fit.
    pub fn checked_normalize(self) -> Option<Self> {
        let whole = self.pence.floor();
        let remainder = self.pence - whole;
        carry(
            i128::from(self.pounds),
            i128::from(self.shillings),
            whole.to_i128()?,
            remainder,
        )
    }

    /// Number of whole pounds
    pub fn pounds(&self) -> i64 {
        self.pounds
    }

    /// Number of whole shillings
    pub fn shillings(&self) -> i64 {
        self.shillings
    }

    /// Number of pence
    pub fn pence(&self) -> Decimal {
        self.pence
    }

    /// Total number of whole shillings represented by this price
    pub fn total_shillings(&self) -> i128 {
        i128::from(self.pounds) * i128::from(SHILLINGS_PER_POUND) + i128::from(self.shillings)
    }

    /// Total number of pence represented by this price
    pub fn total_pence(&self) -> Decimal {
        Decimal::from(self.pounds) * Decimal::from(PENCE_PER_POUND)
            + Decimal::from(self.shillings) * Decimal::from(PENCE_PER_SHILLING)
            + self.pence
    }

    /// Shillings in `[0, 20)`, pence in `[0, 12)` and a whole number of farthings
    pub fn is_normalized(&self) -> bool {
        (0..SHILLINGS_PER_POUND).contains(&self.shillings)
            && self.pence >= Decimal::ZERO
            && self.pence < Decimal::from(PENCE_PER_SHILLING)
            && (self.pence % FARTHING).is_zero()
    }

    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    fn write_shillings_and_pence(&self, f: &mut fmt::Formatter<'_>, pence: Decimal) -> fmt::Result {
        if self.shillings > 0 {
            write!(f, "/{}", self.shillings)?;
        } else {
            write!(f, "/{}", DASH)?;
        }
        if pence > Decimal::ZERO {
            write!(f, "/{}", pence)
        } else {
            write!(f, "/{}", DASH)
        }
    }
}

/// Carry thresholds are inclusive: 12d. is 1/–, 20/– is £1. Totals below a
/// threshold, negative ones included, are left alone.
fn carry(
    mut pounds: i128,
    mut shillings: i128,
    mut pence: i128,
    remainder: Decimal,
) -> Option<Price> {
    let pence_per_shilling = i128::from(PENCE_PER_SHILLING);
    let shillings_per_pound = i128::from(SHILLINGS_PER_POUND);
    if pence >= pence_per_shilling {
        shillings += pence / pence_per_shilling;
        pence %= pence_per_shilling;
    }
    if shillings >= shillings_per_pound {
        pounds += shillings / shillings_per_pound;
        shillings %= shillings_per_pound;
    }
    log::debug!(
        "Carried to {}/{}/{} + {}",
        pounds,
        shillings,
        pence,
        remainder
    );
    let pence = Decimal::try_from_i128_with_scale(pence, 0).ok()? + remainder;
    Some(Price::new(
        i64::try_from(pounds).ok()?,
        i64::try_from(shillings).ok()?,
        pence,
    ))
}

impl From<Coins> for Price {
    fn from(coins: Coins) -> Self {
        Price::from_coins(&coins)
    }
}

impl fmt::Display for Price {
    /// £1/5/6, £1, /5/–, 6d.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let has_shillings = self.shillings > 0;
        let has_pence = self.pence > Decimal::ZERO;
        let pence = self.pence.normalize();

        if self.pounds > 0 {
            write!(f, "\u{00A3}{}", self.pounds)?;
            if has_shillings || has_pence {
                self.write_shillings_and_pence(f, pence)?;
            }
            Ok(())
        } else if has_shillings {
            self.write_shillings_and_pence(f, pence)
        } else {
            write!(f, "{}d.", pence)
        }
    }
}
