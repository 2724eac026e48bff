//! keyparity CLI
//!
//! Command-line interface for keyparity

use clap::{Parser, Subcommand};
use keyparity_core::logging_facility::{self, Profile};

mod commands;
mod report;

#[derive(Debug, Parser)]
#[command(name = "keyparity")]
#[command(about = "keyparity - Find keys missing between structured documents", long_about = None)]
struct Cli {
    /// Emit debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare documents and report missing keys
    Check(commands::check::CheckArgs),
    /// Print the leaf paths of one document
    Paths(commands::paths::PathsArgs),
}

fn main() {
    let cli = Cli::parse();

    let profile = if cli.log_json {
        Profile::Production
    } else if cli.verbose {
        Profile::Development
    } else {
        Profile::Quiet
    };
    logging_facility::init(profile);

    let result = match cli.command {
        Commands::Check(args) => commands::check::execute(args),
        Commands::Paths(args) => commands::paths::execute(args),
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
