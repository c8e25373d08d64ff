//! Repository layer persisting domain models to SQLite
//!
//! `SqliteRepo` implements `Repository<Customer>`, `Repository<Team>` and
//! `Repository<Game>` plus the per-entity query traits.

mod customers;
mod games;
pub mod sqlite_repo;
mod teams;

pub use sqlite_repo::SqliteRepo;
