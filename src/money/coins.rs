use super::{CoinsError, Denomination};
use lsd_derive::CsvSchema;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Column description generated by `#[derive(CsvSchema)]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvField {
    pub name: &'static str,
    pub required: bool,
    pub description: &'static str,
}

/// A purse of coins: how many of each denomination, absent meaning none.
///
/// Build one with struct update syntax, e.g.
/// `Coins { guineas: Some(2), ..Default::default() }`, or with [`Coins::with`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, CsvSchema,
)]
#[serde(deny_unknown_fields)]
pub struct Coins {
    /// Guineas, £1/1/– each
    #[serde(default)]
    pub guineas: Option<i64>,
    /// Whole pounds, £1 each
    #[serde(default)]
    pub pounds: Option<i64>,
    /// Sovereigns, £1 each
    #[serde(default)]
    pub sovereigns: Option<i64>,
    /// Half sovereigns, 10/– each
    #[serde(default)]
    pub half_sovereigns: Option<i64>,
    /// Crowns, 5/– each
    #[serde(default)]
    pub crowns: Option<i64>,
    /// Half crowns, 2/6 each
    #[serde(default)]
    pub half_crowns: Option<i64>,
    /// Florins, 2/– each
    #[serde(default)]
    pub florins: Option<i64>,
    /// Shillings, 1/– each
    #[serde(default)]
    pub shillings: Option<i64>,
    /// Sixpences, 6d. each
    #[serde(default)]
    pub sixpences: Option<i64>,
    /// Threepenny bits, 3d. each
    #[serde(default)]
    pub threepences: Option<i64>,
    /// Pennies, 1d. each
    #[serde(default)]
    pub pennies: Option<i64>,
    /// Halfpennies, 1/2 d. each
    #[serde(default)]
    pub halfpennies: Option<i64>,
    /// Farthings, 1/4 d. each
    #[serde(default)]
    pub farthings: Option<i64>,
}

impl Coins {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the count for one denomination, replacing any previous count.
    pub fn with(mut self, denomination: Denomination, count: i64) -> Self {
        *self.slot_mut(denomination) = Some(count);
        self
    }

    /// Adds to the count for one denomination.
    ///
    /// # Panics
    ///
    /// If the count overflows an `i64`. See [`Coins::checked_merge`].
    pub fn add(&mut self, denomination: Denomination, count: i64) {
        let slot = self.slot_mut(denomination);
        let Some(total) = slot.unwrap_or(0).checked_add(count) else {
            panic!("{} count overflows adding {}", denomination, count);
        };
        *slot = Some(total);
    }

    /// Combine two purses, `None` if any count overflows.
    pub fn checked_merge(&self, other: &Coins) -> Option<Coins> {
        let mut merged = *self;
        for denomination in Denomination::ALL {
            if let Some(count) = other.slot(denomination) {
                let slot = merged.slot_mut(denomination);
                *slot = Some(slot.unwrap_or(0).checked_add(count)?);
            }
        }
        Some(merged)
    }

    /// Count for a denomination, zero when absent
    pub fn count(&self, denomination: Denomination) -> i64 {
        self.slot(denomination).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        Denomination::ALL.iter().all(|d| self.slot(*d).is_none())
    }

    /// Exact value of the purse in pence.
    pub fn total_pence(&self) -> Decimal {
        Denomination::ALL
            .iter()
            .map(|d| d.pence_value() * Decimal::from(self.count(*d)))
            .sum()
    }

    /// Parse a single `name=count` entry, e.g. `half-crown=3`.
    pub fn parse_entry(entry: &str) -> Result<(Denomination, i64), CoinsError> {
        let (name, count) = entry
            .split_once('=')
            .ok_or_else(|| CoinsError::MalformedEntry(entry.to_string()))?;
        let denomination: Denomination = name.parse()?;
        let count = count
            .trim()
            .parse::<i64>()
            .map_err(|_| CoinsError::InvalidCount {
                denomination,
                value: count.trim().to_string(),
            })?;
        Ok((denomination, count))
    }

    fn slot(&self, denomination: Denomination) -> Option<i64> {
        match denomination {
            Denomination::Guinea => self.guineas,
            Denomination::Pound => self.pounds,
            Denomination::Sovereign => self.sovereigns,
            Denomination::HalfSovereign => self.half_sovereigns,
            Denomination::Crown => self.crowns,
            Denomination::HalfCrown => self.half_crowns,
            Denomination::Florin => self.florins,
            Denomination::Shilling => self.shillings,
            Denomination::Sixpence => self.sixpences,
            Denomination::Threepence => self.threepences,
            Denomination::Penny => self.pennies,
            Denomination::Halfpenny => self.halfpennies,
            Denomination::Farthing => self.farthings,
        }
    }

    fn slot_mut(&mut self, denomination: Denomination) -> &mut Option<i64> {
        match denomination {
            Denomination::Guinea => &mut self.guineas,
            Denomination::Pound => &mut self.pounds,
            Denomination::Sovereign => &mut self.sovereigns,
            Denomination::HalfSovereign => &mut self.half_sovereigns,
            Denomination::Crown => &mut self.crowns,
            Denomination::HalfCrown => &mut self.half_crowns,
            Denomination::Florin => &mut self.florins,
            Denomination::Shilling => &mut self.shillings,
            Denomination::Sixpence => &mut self.sixpences,
            Denomination::Threepence => &mut self.threepences,
            Denomination::Penny => &mut self.pennies,
            Denomination::Halfpenny => &mut self.halfpennies,
            Denomination::Farthing => &mut self.farthings,
        }
    }
}

impl FromIterator<(Denomination, i64)> for Coins {
    fn from_iter<I: IntoIterator<Item = (Denomination, i64)>>(iter: I) -> Self {
        let mut coins = Coins::new();
        for (denomination, count) in iter {
            coins.add(denomination, count);
        }
        coins
    }
}

/// JSON input is either a single purse or an array of purses
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CoinsInput {
    One(Coins),
    Many(Vec<Coins>),
}

/// Read purses from JSON
pub fn read_json<R: Read>(reader: R) -> Result<Vec<Coins>, serde_json::Error> {
    let input: CoinsInput = serde_json::from_reader(reader)?;
    Ok(match input {
        CoinsInput::One(coins) => vec![coins],
        CoinsInput::Many(purses) => purses,
    })
}

/// Read purses from CSV, one per row
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Coins>, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let purses = rdr.deserialize::<Coins>().collect::<Result<Vec<_>, _>>()?;
    log::info!("Read {} csv records", purses.len());
    Ok(purses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn absent_counts_are_zero() {
        let coins = Coins::new();
        assert!(coins.is_empty());
        for denomination in Denomination::ALL {
            assert_eq!(coins.count(denomination), 0);
        }
        assert_eq!(coins.total_pence(), dec!(0));
    }

    #[test]
    fn with_replaces_and_add_accumulates() {
        let mut coins = Coins::new()
            .with(Denomination::Florin, 3)
            .with(Denomination::Florin, 1);
        assert_eq!(coins.florins, Some(1));

        coins.add(Denomination::Florin, 2);
        coins.add(Denomination::Farthing, 5);
        assert_eq!(coins.count(Denomination::Florin), 3);
        assert_eq!(coins.count(Denomination::Farthing), 5);
    }

    #[test]
    fn collect_sums_repeated_denominations() {
        let coins: Coins = [
            (Denomination::Penny, 4),
            (Denomination::Halfpenny, 1),
            (Denomination::Penny, 2),
        ]
        .into_iter()
        .collect();
        assert_eq!(coins.pennies, Some(6));
        assert_eq!(coins.halfpennies, Some(1));
        assert_eq!(coins.total_pence(), dec!(6.5));
    }

    #[test]
    fn checked_merge_combines_purses() {
        let left = Coins {
            florins: Some(2),
            farthings: Some(1),
            ..Default::default()
        };
        let right = Coins {
            florins: Some(3),
            pennies: Some(4),
            ..Default::default()
        };
        let merged = left.checked_merge(&right).unwrap();
        assert_eq!(merged.florins, Some(5));
        assert_eq!(merged.pennies, Some(4));
        assert_eq!(merged.farthings, Some(1));
        assert_eq!(merged.guineas, None);

        let full = Coins::new().with(Denomination::Guinea, i64::MAX);
        assert_eq!(full.checked_merge(&Coins::new().with(Denomination::Guinea, 1)), None);
    }

    #[test]
    fn total_pence_sums_coin_values() {
        let coins = Coins {
            guineas: Some(1),
            half_crowns: Some(2),
            farthings: Some(3),
            ..Default::default()
        };
        assert_eq!(coins.total_pence(), dec!(312.75));
    }

    #[test]
    fn parse_entry() {
        assert_eq!(
            Coins::parse_entry("half-crown=3"),
            Ok((Denomination::HalfCrown, 3))
        );
        assert_eq!(
            Coins::parse_entry(" pennies = 16 "),
            Ok((Denomination::Penny, 16))
        );
        assert_eq!(
            Coins::parse_entry("florins"),
            Err(CoinsError::MalformedEntry("florins".to_string()))
        );
        assert_eq!(
            Coins::parse_entry("florin=two"),
            Err(CoinsError::InvalidCount {
                denomination: Denomination::Florin,
                value: "two".to_string(),
            })
        );
        assert_eq!(
            Coins::parse_entry("groat=1"),
            Err(CoinsError::UnknownDenomination("groat".to_string()))
        );
    }

    #[test]
    fn parse_json_single_and_many() {
        let one = read_json(r#"{ "guineas": 1, "farthings": 2 }"#.as_bytes()).unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].guineas, Some(1));
        assert_eq!(one[0].farthings, Some(2));
        assert_eq!(one[0].pennies, None);

        let many = read_json(r#"[{ "shillings": 20 }, {}]"#.as_bytes()).unwrap();
        assert_eq!(many.len(), 2);
        assert_eq!(many[0].shillings, Some(20));
        assert!(many[1].is_empty());
    }

    #[test]
    fn parse_json_rejects_unknown_denomination() {
        assert!(read_json(r#"{ "groats": 1 }"#.as_bytes()).is_err());
    }

    #[test]
    fn parse_csv_rows() {
        let csv_data = "shillings,pennies,halfpennies,farthings\n10,16,5,5\n,12,,\n";
        let purses = read_csv(csv_data.as_bytes()).unwrap();
        assert_eq!(purses.len(), 2);
        assert_eq!(purses[0].shillings, Some(10));
        assert_eq!(purses[0].farthings, Some(5));
        assert_eq!(purses[1].shillings, None);
        assert_eq!(purses[1].pennies, Some(12));
    }

    #[test]
    fn csv_schema_lists_every_denomination() {
        let header = Coins::csv_header();
        assert_eq!(header.len(), Denomination::ALL.len());
        assert_eq!(header[0], "guineas");
        assert_eq!(header[12], "farthings");

        let schema = Coins::csv_schema();
        assert!(schema.iter().all(|field| !field.required));
        assert_eq!(schema[5].description, "Half crowns, 2/6 each");
    }
}
