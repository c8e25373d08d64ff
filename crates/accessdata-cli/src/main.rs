//! accessdata CLI
//!
//! Run-once entry point: open the store, run the seed-and-report demos,
//! exit non-zero on the first error.

use clap::{Parser, Subcommand};

mod commands;

use commands::run::{LogFormat, RunArgs, Target};

#[derive(Debug, Parser)]
#[command(name = "accessdata-cli")]
#[command(about = "Seed and query the customer and team/game demo stores", long_about = None)]
struct Cli {
    #[command(flatten)]
    run: RunArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Seed customers and report the customer lookups
    Customers,
    /// Seed teams and games and report the games played by each team
    Games,
    /// Run both demos (default)
    All,
}

impl From<Commands> for Target {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Customers => Target::Customers,
            Commands::Games => Target::Games,
            Commands::All => Target::All,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    accessdata_core::logging_facility::init(match cli.run.log_format {
        LogFormat::Pretty => accessdata_core::logging_facility::Profile::Development,
        LogFormat::Json => accessdata_core::logging_facility::Profile::Production,
    });

    let target = cli.command.map(Target::from).unwrap_or(Target::All);

    if let Err(e) = commands::run::execute(&cli.run, target) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
