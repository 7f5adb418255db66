//! Tally command - normalize purses of coins into prices

use super::{read_purses, PriceSummary};
use clap::Args;
use lsd::{Coins, Price};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct TallyCommand {
    /// Coin count as name=count, e.g. half-crown=3 (repeatable)
    #[arg(short, long = "coin", value_name = "NAME=COUNT")]
    coins: Vec<String>,

    /// CSV or JSON file of purses, one per row or array element ("-" for stdin)
    #[arg(short, long, conflicts_with = "coins")]
    file: Option<PathBuf>,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct TallyOutput {
    purses: Vec<PriceSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total: Option<PriceSummary>,
}

impl TallyCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let purses = match &self.file {
            Some(path) => read_purses(path)?,
            None => vec![self.purse_from_args()?],
        };
        if purses.is_empty() {
            anyhow::bail!("No purses found in input");
        }

        let prices = purses
            .iter()
            .map(tally)
            .collect::<anyhow::Result<Vec<_>>>()?;
        let total = if prices.len() > 1 {
            let mut combined = Coins::new();
            for purse in &purses {
                combined = combined
                    .checked_merge(purse)
                    .ok_or_else(|| anyhow::anyhow!("Coin counts overflow when combined"))?;
            }
            Some(tally(&combined)?)
        } else {
            None
        };
        log::info!("Tallied {} purse(s)", prices.len());

        if self.json {
            let output = TallyOutput {
                purses: prices.iter().map(PriceSummary::from).collect(),
                total: total.as_ref().map(PriceSummary::from),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            for price in &prices {
                println!("{}", price);
            }
            if let Some(total) = total {
                println!("Total: {}", total);
            }
        }
        Ok(())
    }

    fn purse_from_args(&self) -> anyhow::Result<Coins> {
        let entries = self
            .coins
            .iter()
            .map(|entry| Coins::parse_entry(entry))
            .collect::<Result<Vec<_>, _>>()?;
        entries
            .into_iter()
            .try_fold(Coins::new(), |purse, (denomination, count)| {
                purse.checked_merge(&Coins::new().with(denomination, count))
            })
            .ok_or_else(|| anyhow::anyhow!("Coin counts overflow when combined"))
    }
}

fn tally(purse: &Coins) -> anyhow::Result<Price> {
    Price::checked_from_coins(purse)
        .ok_or_else(|| anyhow::anyhow!("Price out of range for purse: {:?}", purse))
}
