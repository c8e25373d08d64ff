//! SQLite repository handle

use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, Params};

/// SQLite repository for customers, teams and games
///
/// Borrows a connection that has been configured and migrated (see
/// `db::open_store`). Every call runs as its own statement; there is no
/// multi-statement transaction across calls.
pub struct SqliteRepo<'c> {
    pub(crate) conn: &'c Connection,
}

impl<'c> SqliteRepo<'c> {
    /// Wrap a migrated connection
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    /// Run an INSERT and return the generated rowid
    pub(crate) fn insert<P: Params>(&self, sql: &str, params: P) -> Result<i64> {
        self.conn.execute(sql, params).map_err(from_rusqlite)?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Run a `SELECT COUNT(*)` style query
    pub(crate) fn count_rows(&self, sql: &str) -> Result<u64> {
        let n: i64 = self
            .conn
            .query_row(sql, [], |row| row.get(0))
            .map_err(from_rusqlite)?;
        Ok(n.max(0) as u64)
    }

    /// Run a query and map every row
    pub(crate) fn query_all<T, P, F>(&self, sql: &str, params: P, map: F) -> Result<Vec<T>>
    where
        P: Params,
        F: FnMut(&rusqlite::Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt = self.conn.prepare_cached(sql).map_err(from_rusqlite)?;
        let rows = stmt
            .query_map(params, map)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(rows)
    }
}
