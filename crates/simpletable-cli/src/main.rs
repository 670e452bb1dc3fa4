//! simpletable CLI - delimiter-separated text to wiki tables.
//!
//! Provides commands for:
//! - `convert`: Convert one table body into table markup
//! - `expand`: Expand every table tag in a document
//! - `separators`: List the registered separator keys

mod commands;
mod error;
mod input;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConvertArgs, ExpandArgs};
use output::Output;

/// simpletable - turn pasted spreadsheet text into wiki tables.
#[derive(Parser)]
#[command(name = "simpletable", version, about)]
struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a table body into table markup.
    Convert(ConvertArgs),
    /// Expand every table tag in a document.
    Expand(ExpandArgs),
    /// List registered separators.
    Separators,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Convert(args) => args.execute(),
        Commands::Expand(args) => args.execute(),
        Commands::Separators => commands::separators::execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
