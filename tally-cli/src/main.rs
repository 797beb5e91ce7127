//! tally - small data utilities
//! Command-line interface for number conversion, statistics, word counts,
//! sales totals and the hotel booking store

mod commands;
mod config;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::*;
use commands::booking::{
    customer_command, hotel_command, reservation_command, CustomerAction, HotelAction,
    ReservationAction,
};
use commands::reports::{
    convert_command, sales_command, stats_command, words_command, ConvertOptions,
};
use std::path::PathBuf;
use tally_radix::Radix;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "tally")]
#[command(author = "Tally Contributors")]
#[command(version)]
#[command(about = "tally - number conversion, statistics, word counts, sales totals and bookings", long_about = None)]
struct Cli {
    /// Directory for results files
    #[arg(long, global = true, value_name = "DIR", default_value = ".", env = "TALLY_RESULTS_DIR")]
    results_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct StoreArgs {
    /// Directory holding the booking JSON files
    #[arg(long, global = true, value_name = "DIR", default_value = "data", env = "TALLY_DATA_DIR")]
    data_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert integers (one per line) to binary and hexadecimal
    Convert {
        /// Input file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Two's-complement width for negative binary output, in bits
        #[arg(long, value_name = "BITS", default_value_t = Radix::Binary.default_width(), env = "TALLY_BINARY_WIDTH")]
        binary_width: usize,

        /// Two's-complement width for negative hex output, in digits
        #[arg(long, value_name = "DIGITS", default_value_t = Radix::Hexadecimal.default_width(), env = "TALLY_HEX_WIDTH")]
        hex_width: usize,

        /// Fail on negatives that do not fit the width instead of widening
        #[arg(long)]
        strict: bool,
    },

    /// Count, mean, median, mode, standard deviation and variance of a column of numbers
    Stats {
        /// Input file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Count word occurrences in a text file
    Words {
        /// Input file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Total the cost of a sales ledger against a price catalogue
    Sales {
        /// Price catalogue (JSON)
        #[arg(value_name = "CATALOGUE")]
        catalogue: PathBuf,

        /// Sales records (JSON)
        #[arg(value_name = "SALES")]
        sales: PathBuf,
    },

    /// Manage customers
    Customer {
        #[command(flatten)]
        store: StoreArgs,

        #[command(subcommand)]
        action: CustomerAction,
    },

    /// Manage hotels
    Hotel {
        #[command(flatten)]
        store: StoreArgs,

        #[command(subcommand)]
        action: HotelAction,
    },

    /// Manage reservations
    Reservation {
        #[command(flatten)]
        store: StoreArgs,

        #[command(subcommand)]
        action: ReservationAction,
    },
}

fn main() {
    config::ensure_loaded();

    // Initialize tracing; stdout is reserved for reports
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config::DEFAULT_LOG_FILTER.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let results_dir = cli.results_dir;

    match cli.command {
        Commands::Convert {
            file,
            binary_width,
            hex_width,
            strict,
        } => {
            let options = ConvertOptions {
                binary_width,
                hex_width,
                strict,
            };
            convert_command(&file, options, &results_dir)
        }

        Commands::Stats { file } => stats_command(&file, &results_dir),

        Commands::Words { file } => words_command(&file),

        Commands::Sales { catalogue, sales } => sales_command(&catalogue, &sales, &results_dir),

        Commands::Customer { store, action } => customer_command(action, &store.data_dir),

        Commands::Hotel { store, action } => hotel_command(action, &store.data_dir),

        Commands::Reservation { store, action } => reservation_command(action, &store.data_dir),
    }
}
