use accessdata_core::repository::ensure_unsaved;
use accessdata_core::{Repository, Team, TeamId, TeamRepository};
use rusqlite::OptionalExtension;

use super::sqlite_repo::SqliteRepo;
use crate::errors::{from_rusqlite, Result};

fn map_team(row: &rusqlite::Row<'_>) -> rusqlite::Result<Team> {
    Ok(Team::with_id(TeamId::new(row.get(0)?), row.get(1)?))
}

impl SqliteRepo<'_> {
    /// Check whether a team row exists
    pub(crate) fn team_exists(&self, id: TeamId) -> Result<bool> {
        self.conn
            .query_row("SELECT 1 FROM teams WHERE id = ?1", [id.get()], |_| Ok(()))
            .optional()
            .map(|row| row.is_some())
            .map_err(from_rusqlite)
    }
}

impl Repository<Team> for SqliteRepo<'_> {
    fn save(&mut self, team: Team) -> Result<Team> {
        ensure_unsaved(&team)?;
        let id = self.insert("INSERT INTO teams (name) VALUES (?1)", [&team.name])?;
        tracing::debug!(entity = "Team", entity_id = id, "inserted");
        Ok(Team::with_id(TeamId::new(id), team.name))
    }

    fn find_all(&self) -> Result<Vec<Team>> {
        self.query_all("SELECT id, name FROM teams ORDER BY id", [], map_team)
    }

    fn find_by_id(&self, id: TeamId) -> Result<Option<Team>> {
        self.conn
            .query_row(
                "SELECT id, name FROM teams WHERE id = ?1",
                [id.get()],
                map_team,
            )
            .optional()
            .map_err(from_rusqlite)
    }

    fn count(&self) -> Result<u64> {
        self.count_rows("SELECT COUNT(*) FROM teams")
    }
}

impl TeamRepository for SqliteRepo<'_> {}
