use clap::{Parser, Subcommand};

mod cmd;

/// Pounds, shillings and pence
#[derive(Parser, Debug)]
#[command(name = "lsd", version, author, about)]
struct Opts {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Tally coins into a normalized price
    Tally(cmd::tally::TallyCommand),
    /// Render a price given in pounds, shillings and pence
    Show(cmd::show::ShowCommand),
    /// List the coin denominations and their values
    Coins(cmd::coins::CoinsCommand),
    /// Print the expected input formats
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts = Opts::parse();
    match opts.command {
        Command::Tally(tally) => tally.exec(),
        Command::Show(show) => show.exec(),
        Command::Coins(coins) => coins.exec(),
        Command::Schema(schema) => schema.exec(),
    }
}
