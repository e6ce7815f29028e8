use split_engine::error::Error;
use split_engine::run::run;
use split_engine::split::{parse::parse_decimal_or_zero, Amount, SplitStrategy};

use clap::Parser;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Split a bill between participants read from a CSV file.
///
/// The CSV needs the `id,name,included,input` columns. The result is
/// written to stdout, with an extra `owed` column.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Total amount of the bill. Anything that isn't a number counts as 0.
    #[arg(short, long, value_parser = parse_total)]
    total: Amount,

    /// How to split: equal, exact (or adjustments), percentage, shares.
    #[arg(short, long, default_value = "equal")]
    strategy: SplitStrategy,

    /// Participants CSV, `-` to read from stdin.
    #[arg(default_value = "participants.csv")]
    input: PathBuf,
}

// Same leniency as the expense screen: a total that doesn't parse is 0, and
// splitting 0 means nobody owes anything.
fn parse_total(raw: &str) -> Result<Amount, Error> {
    Ok(parse_decimal_or_zero(raw))
}

fn open(path: &Path) -> Result<Box<dyn Read>, Error> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(io::stdin()));
    }

    Ok(Box::new(File::open(path)?))
}

fn main() {
    // Logs go to stderr, stdout only ever holds the CSV.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = open(&cli.input)
        .and_then(|input| run(input, io::stdout().lock(), cli.total, cli.strategy));

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
