use super::{CoinsError, Price, PENCE_PER_POUND, PENCE_PER_SHILLING};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Historical coins that can be tallied into a [`Price`]
///
/// ```text
/// 1 guinea       = £1/1/–
/// 1 sovereign    = £1       (not in common circulation at time of decimalisation)
/// 1/2 sovereign  = 10/–     (not in common circulation at time of decimalisation)
/// 1 crown        = 5/–      (not in common circulation at time of decimalisation)
/// 1/2 crown      = 2/6
/// 1 florin       = 2/–
/// 1 sixpence     = 6d.
/// 1 threepence   = 3d.
/// 1 halfpenny    = 1/2 d.
/// 1 farthing     = 1/4 d.
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Denomination {
    Guinea,
    /// A pound counted as a unit of account rather than a coin
    Pound,
    Sovereign,
    HalfSovereign,
    Crown,
    HalfCrown,
    Florin,
    Shilling,
    Sixpence,
    Threepence,
    Penny,
    Halfpenny,
    Farthing,
}

/// What a single coin adds to a running tally.
///
/// Coins worth less than a penny are counted in farthings so the fractional
/// part can be kept apart from whole pence until the carry is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contribution {
    Whole {
        pounds: i64,
        shillings: i64,
        pence: i64,
    },
    Farthings(i64),
}

impl Denomination {
    /// Every denomination, largest first.
    pub const ALL: [Denomination; 13] = [
        Denomination::Guinea,
        Denomination::Pound,
        Denomination::Sovereign,
        Denomination::HalfSovereign,
        Denomination::Crown,
        Denomination::HalfCrown,
        Denomination::Florin,
        Denomination::Shilling,
        Denomination::Sixpence,
        Denomination::Threepence,
        Denomination::Penny,
        Denomination::Halfpenny,
        Denomination::Farthing,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Denomination::Guinea => "guinea",
            Denomination::Pound => "pound",
            Denomination::Sovereign => "sovereign",
            Denomination::HalfSovereign => "half-sovereign",
            Denomination::Crown => "crown",
            Denomination::HalfCrown => "half-crown",
            Denomination::Florin => "florin",
            Denomination::Shilling => "shilling",
            Denomination::Sixpence => "sixpence",
            Denomination::Threepence => "threepence",
            Denomination::Penny => "penny",
            Denomination::Halfpenny => "halfpenny",
            Denomination::Farthing => "farthing",
        }
    }

    pub fn contribution(self) -> Contribution {
        let whole = |pounds, shillings, pence| Contribution::Whole {
            pounds,
            shillings,
            pence,
        };
        match self {
            Denomination::Guinea => whole(1, 1, 0),
            Denomination::Pound | Denomination::Sovereign => whole(1, 0, 0),
            Denomination::HalfSovereign => whole(0, 10, 0),
            Denomination::Crown => whole(0, 5, 0),
            Denomination::HalfCrown => whole(0, 2, 6),
            Denomination::Florin => whole(0, 2, 0),
            Denomination::Shilling => whole(0, 1, 0),
            Denomination::Sixpence => whole(0, 0, 6),
            Denomination::Threepence => whole(0, 0, 3),
            Denomination::Penny => whole(0, 0, 1),
            Denomination::Halfpenny => Contribution::Farthings(2),
            Denomination::Farthing => Contribution::Farthings(1),
        }
    }

    /// Worth of one coin in pence, e.g. 252 for a guinea
    pub fn pence_value(self) -> Decimal {
        match self.contribution() {
            Contribution::Whole {
                pounds,
                shillings,
                pence,
            } => Decimal::from(pounds * PENCE_PER_POUND + shillings * PENCE_PER_SHILLING + pence),
            Contribution::Farthings(farthings) => Decimal::new(farthings * 25, 2),
        }
    }

    /// The normalized price of a single coin
    pub fn as_price(self) -> Price {
        Price::from_coins(&super::Coins::new().with(self, 1))
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Denomination {
    type Err = CoinsError;

    /// Accepts the kebab-case name, plurals and a few period spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace(['_', ' '], "-");
        let denomination = match key.as_str() {
            "guinea" | "guineas" => Denomination::Guinea,
            "pound" | "pounds" | "l" => Denomination::Pound,
            "sovereign" | "sovereigns" | "sovreign" | "sovreigns" => Denomination::Sovereign,
            "half-sovereign" | "half-sovereigns" | "halfsovereign" | "halfsovereigns"
            | "half-sovreign" | "half-sovreigns" | "halfsovreign" | "halfsovreigns" => {
                Denomination::HalfSovereign
            }
            "crown" | "crowns" => Denomination::Crown,
            "half-crown" | "half-crowns" | "halfcrown" | "halfcrowns" => Denomination::HalfCrown,
            "florin" | "florins" => Denomination::Florin,
            "shilling" | "shillings" | "s" => Denomination::Shilling,
            "sixpence" | "sixpences" => Denomination::Sixpence,
            "threepence" | "threepences" => Denomination::Threepence,
            "penny" | "pennies" | "pence" | "d" => Denomination::Penny,
            "halfpenny" | "halfpennies" | "half-penny" | "half-pennies" => Denomination::Halfpenny,
            "farthing" | "farthings" => Denomination::Farthing,
            _ => return Err(CoinsError::UnknownDenomination(s.trim().to_string())),
        };
        Ok(denomination)
    }
}
