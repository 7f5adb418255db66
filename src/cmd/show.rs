//! Show command - render a price given in pounds, shillings and pence

use super::PriceSummary;
use clap::Args;
use lsd::Price;
use rust_decimal::Decimal;

#[derive(Args, Debug)]
pub struct ShowCommand {
    /// Whole pounds
    #[arg(allow_negative_numbers = true)]
    pounds: i64,

    /// Whole shillings
    #[arg(allow_negative_numbers = true)]
    shillings: i64,

    /// Pence, in quarters for farthings (e.g. 7.75)
    #[arg(allow_negative_numbers = true)]
    pence: Decimal,

    /// Carry excess pence and shillings before rendering
    #[arg(short, long)]
    normalize: bool,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

impl ShowCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let mut price = Price::new(self.pounds, self.shillings, self.pence);
        if self.normalize {
            price = price
                .checked_normalize()
                .ok_or_else(|| anyhow::anyhow!("Price out of range after carrying: {:?}", price))?;
        }

        if self.json {
            let summary = PriceSummary::from(&price);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            println!("{}", price);
            println!("Total shillings: {}", price.total_shillings());
            println!("Total pence: {}", price.total_pence().normalize());
        }
        Ok(())
    }
}
