//! accessdata engine - seed-and-report runners
//!
//! Each runner seeds a fixed data set through the repository contracts,
//! reads it back with the canned queries and logs every result line.
//! Runners are generic over the contracts, so they work on SQLite and on
//! the in-memory backend alike.

pub mod runners;

pub use runners::customers::{run_customer_demo, CustomerReport, SEED_CUSTOMERS};
pub use runners::games::{run_game_demo, GameReport, PlayedGames, SEED_GAMES, SEED_TEAMS};
