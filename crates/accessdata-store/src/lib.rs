//! accessdata store - SQLite persistence
//!
//! Provides:
//! - Connection helpers (`db`)
//! - Embedded, checksummed schema migrations
//! - `SqliteRepo`, implementing every repository contract from
//!   `accessdata-core` on top of a borrowed `rusqlite::Connection`

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use repo::SqliteRepo;
