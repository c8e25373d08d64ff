use accessdata_core::repository::ensure_unsaved;
use accessdata_core::{DataError, Game, GameId, GameRepository, Repository, Team, TeamId};
use rusqlite::OptionalExtension;

use super::sqlite_repo::SqliteRepo;
use crate::errors::{from_rusqlite, Result};

/// Games joined with both teams; column order matches `map_game`
const SELECT_GAME: &str = "SELECT g.id, t1.id, t1.name, t2.id, t2.name
     FROM games g
     JOIN teams t1 ON t1.id = g.team1_id
     JOIN teams t2 ON t2.id = g.team2_id";

fn map_game(row: &rusqlite::Row<'_>) -> rusqlite::Result<Game> {
    Ok(Game::with_id(
        GameId::new(row.get(0)?),
        Team::with_id(TeamId::new(row.get(1)?), row.get(2)?),
        Team::with_id(TeamId::new(row.get(3)?), row.get(4)?),
    ))
}

impl SqliteRepo<'_> {
    /// Resolve a game side to the id of a stored team
    fn resolve_team(&self, side: &'static str, team: &Team) -> Result<TeamId> {
        let id = team.id.ok_or_else(|| DataError::UnsavedTeam {
            side,
            team_name: team.name.clone(),
        })?;

        if !self.team_exists(id)? {
            return Err(DataError::UnknownTeam {
                side,
                team_id: id.get(),
            }
            .into());
        }
        Ok(id)
    }
}

impl Repository<Game> for SqliteRepo<'_> {
    fn save(&mut self, game: Game) -> Result<Game> {
        ensure_unsaved(&game)?;
        let team1_id = self.resolve_team("team1", &game.team1)?;
        let team2_id = self.resolve_team("team2", &game.team2)?;

        let id = self.insert(
            "INSERT INTO games (team1_id, team2_id) VALUES (?1, ?2)",
            [team1_id.get(), team2_id.get()],
        )?;
        tracing::debug!(entity = "Game", entity_id = id, "inserted");

        // Hydrate from the stored team rows, not the caller's copies
        Repository::<Game>::get_by_id(&*self, GameId::new(id))
    }

    fn find_all(&self) -> Result<Vec<Game>> {
        self.query_all(&format!("{} ORDER BY g.id", SELECT_GAME), [], map_game)
    }

    fn find_by_id(&self, id: GameId) -> Result<Option<Game>> {
        self.conn
            .query_row(
                &format!("{} WHERE g.id = ?1", SELECT_GAME),
                [id.get()],
                map_game,
            )
            .optional()
            .map_err(from_rusqlite)
    }

    fn count(&self) -> Result<u64> {
        self.count_rows("SELECT COUNT(*) FROM games")
    }
}

impl GameRepository for SqliteRepo<'_> {
    fn find_played_games(&self, team_name: &str) -> Result<Vec<Game>> {
        // One row per game: the OR is evaluated per joined row, and each game
        // joins to exactly one team1 row and one team2 row.
        self.query_all(
            &format!(
                "{} WHERE t1.name = ?1 OR t2.name = ?1 ORDER BY g.id",
                SELECT_GAME
            ),
            [team_name],
            map_game,
        )
    }
}
