// src/bin/instrument_cli.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use instrument_key_api::dataset::InstrumentTable;

#[derive(Parser)]
#[command(name = "instrument-cli")]
#[command(about = "NSE instrument dataset lookup CLI", long_about = None)]
struct Cli {
    /// Path to the instrument dataset file
    #[arg(long, default_value = "data/NSE.json")]
    dataset: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up instruments by trading symbol
    Lookup {
        trading_symbol: String,
        #[arg(short, long, default_value = "NSE_EQ")]
        segment: String,
        #[arg(short, long, default_value = "EQ")]
        instrument_type: String,
    },
    /// Print the number of records in the dataset
    Count,
}

fn main() {
    let cli = Cli::parse();

    let table = match InstrumentTable::load(&cli.dataset) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("❌ Failed to load dataset {}: {}", cli.dataset.display(), e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Lookup { trading_symbol, segment, instrument_type } => {
            let matches = table.find(&trading_symbol, &segment, &instrument_type);
            if matches.is_empty() {
                eprintln!("No instrument found for {}", trading_symbol);
                std::process::exit(1);
            }
            match serde_json::to_string_pretty(&matches) {
                Ok(output) => println!("{}", output),
                Err(e) => {
                    eprintln!("❌ Failed to render matches: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Count => {
            println!("{}", table.len());
        }
    }
}
