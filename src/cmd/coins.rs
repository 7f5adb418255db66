//! Coins command - the denominations and what they are worth

use clap::Args;
use lsd::Denomination;
use std::io;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct CoinsCommand {
    /// Output as CSV instead of formatted table
    #[arg(long)]
    csv: bool,
}

/// Row for the denominations table output
#[derive(Debug, Clone, Tabled, serde::Serialize)]
pub struct CoinRow {
    #[tabled(rename = "Coin")]
    pub name: String,

    #[tabled(rename = "Value")]
    pub value: String,

    #[tabled(rename = "Pence")]
    pub pence: String,
}

impl From<Denomination> for CoinRow {
    fn from(denomination: Denomination) -> Self {
        CoinRow {
            name: denomination.name().to_string(),
            value: denomination.as_price().to_string(),
            pence: denomination.pence_value().normalize().to_string(),
        }
    }
}

impl CoinsCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let rows: Vec<CoinRow> = Denomination::ALL.into_iter().map(CoinRow::from).collect();
        if self.csv {
            self.write_csv(&rows)
        } else {
            self.print_table(&rows);
            Ok(())
        }
    }

    fn print_table(&self, rows: &[CoinRow]) {
        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
    }

    fn write_csv(&self, rows: &[CoinRow]) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_writer(io::stdout());
        for row in rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
