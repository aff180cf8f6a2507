//! QBank CLI - account records in your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{fmt, new, show};

/// QBank - inspect and build account transfer JSON
#[derive(Parser)]
#[command(name = "qb", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an account and print its transfer JSON
    New {
        /// Account ID
        #[arg(long)]
        id: i32,
        /// Account number
        #[arg(long, default_value = "")]
        number: String,
        /// Account holder name
        #[arg(long, default_value = "")]
        holder: String,
        /// Balance as a decimal (e.g. 250.75)
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        balance: String,
    },

    /// Show accounts from a JSON file (or stdin)
    Show {
        /// Path to JSON file, reads stdin if omitted
        file: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Re-encode account JSON, filling in missing fields
    Fmt {
        /// Path to JSON file, reads stdin if omitted
        file: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr, filtered by QBANK_LOG (default: warn)
fn init_tracing() {
    let filter = EnvFilter::try_from_env("QBANK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::New { id, number, holder, balance } => new::run(id, number, holder, &balance),
        Commands::Show { file, json } => show::run(file.as_deref(), json),
        Commands::Fmt { file } => fmt::run(file.as_deref()),
    }
}
