pub mod coins;
pub mod schema;
pub mod show;
pub mod tally;

use lsd::{coins as purses, Coins, Price};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Read purses from a JSON or CSV file (or stdin with "-")
pub fn read_purses(path: &Path) -> anyhow::Result<Vec<Coins>> {
    if path.as_os_str() == "-" {
        read_from_stdin()
    } else {
        read_from_file(path)
    }
}

fn read_from_file(path: &Path) -> anyhow::Result<Vec<Coins>> {
    let reader = BufReader::new(File::open(path)?);
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        Ok(purses::read_json(reader)?)
    } else {
        Ok(purses::read_csv(reader)?)
    }
}

fn read_from_stdin() -> anyhow::Result<Vec<Coins>> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    let first = buffer.iter().find(|b| !b.is_ascii_whitespace());
    match first {
        None => anyhow::bail!("No input received. Provide a file or pipe data to stdin."),
        Some(b'{') | Some(b'[') => Ok(purses::read_json(io::Cursor::new(buffer))?),
        Some(_) => Ok(purses::read_csv(io::Cursor::new(buffer))?),
    }
}

/// A price with its derived totals, for JSON output
#[derive(Debug, Serialize)]
pub struct PriceSummary {
    pub display: String,
    pub pounds: i64,
    pub shillings: i64,
    pub pence: String,
    pub total_shillings: i128,
    pub total_pence: String,
}

impl From<&Price> for PriceSummary {
    fn from(price: &Price) -> Self {
        PriceSummary {
            display: price.to_display_string(),
            pounds: price.pounds(),
            shillings: price.shillings(),
            pence: price.pence().normalize().to_string(),
            total_shillings: price.total_shillings(),
            total_pence: price.total_pence().normalize().to_string(),
        }
    }
}
