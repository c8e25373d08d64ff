//! Demo runner command
//!
//! Usage: accessdata-cli [--db <PATH>] [--log-format pretty|json] [--json] [customers|games|all]

use std::path::PathBuf;

use accessdata_engine::{run_customer_demo, run_game_demo, CustomerReport, GameReport};
use accessdata_store::{db, SqliteRepo};
use clap::{Args, ValueEnum};
use rusqlite::Connection;
use serde::Serialize;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// One JSON object per event
    Json,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// SQLite database file kept across runs (parent directory is created).
    /// Without it every run starts from an empty in-memory database.
    #[arg(long, env = "ACCESSDATA_DB", global = true)]
    pub db: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, global = true)]
    pub log_format: LogFormat,

    /// Print the collected reports as JSON on stdout
    #[arg(long, global = true)]
    pub json: bool,
}

/// Which demo(s) to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Customers,
    Games,
    All,
}

#[derive(Debug, Serialize)]
struct RunOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    customers: Option<CustomerReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    games: Option<GameReport>,
}

fn open_connection(args: &RunArgs) -> accessdata_store::Result<Connection> {
    match &args.db {
        Some(path) => db::open_store(path),
        None => db::open_store_in_memory(),
    }
}

/// Execute the selected demos against the configured store
pub fn execute(args: &RunArgs, target: Target) -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_connection(args)?;
    let mut repo = SqliteRepo::new(&conn);

    let customers = match target {
        Target::Customers | Target::All => Some(run_customer_demo(&mut repo)?),
        Target::Games => None,
    };
    let games = match target {
        Target::Games | Target::All => Some(run_game_demo(&mut repo)?),
        Target::Customers => None,
    };

    if args.json {
        let output = RunOutput { customers, games };
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(())
}
