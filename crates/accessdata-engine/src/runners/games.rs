//! Team/game seed-and-report runner

use std::time::Instant;

use accessdata_core::{log_op_end, log_op_error, log_op_start};
use accessdata_core::{Game, GameRepository, Repository, Result, Team, TeamRepository};
use serde::Serialize;

use super::report::ReportLog;

/// Team names saved by the game runner, in insertion order
pub const SEED_TEAMS: [&str; 4] = ["first", "second", "third", "fourth"];

/// Games saved by the game runner, as indexes into `SEED_TEAMS`
pub const SEED_GAMES: [(usize, usize); 2] = [(0, 1), (0, 2)];

/// Games found for one team name
#[derive(Debug, Clone, Serialize)]
pub struct PlayedGames {
    pub team_name: String,
    pub games: Vec<Game>,
}

/// Everything the game runner saved, read and logged
#[derive(Debug, Clone, Serialize)]
pub struct GameReport {
    pub teams: Vec<Team>,
    pub games: Vec<Game>,
    /// One entry per seeded team, in `SEED_TEAMS` order
    pub played: Vec<PlayedGames>,
    pub lines: Vec<String>,
}

impl GameReport {
    /// Games found for `team_name`, if the runner queried it
    pub fn played_by(&self, team_name: &str) -> Option<&[Game]> {
        self.played
            .iter()
            .find(|p| p.team_name == team_name)
            .map(|p| p.games.as_slice())
    }
}

/// Seed teams and games, then log the games played by every team
///
/// ## Errors
///
/// - `ReferentialIntegrity` if a game side cannot be resolved
/// - `Persistence` on storage failure
pub fn run_game_demo<R>(repo: &mut R) -> Result<GameReport>
where
    R: TeamRepository + GameRepository,
{
    log_op_start!("game_demo");
    let start = Instant::now();

    let report = game_demo_impl(repo).map_err(|e| {
        log_op_error!(
            "game_demo",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "game_demo",
        duration_ms = start.elapsed().as_millis() as u64,
        row_count = report.games.len() as u64
    );
    Ok(report)
}

fn game_demo_impl<R>(repo: &mut R) -> Result<GameReport>
where
    R: TeamRepository + GameRepository,
{
    // Both contracts share `Repository`'s method names; qualify the calls.
    let teams = Repository::<Team>::save_all(&mut *repo, SEED_TEAMS.map(Team::new))?;

    let games = Repository::<Game>::save_all(
        &mut *repo,
        SEED_GAMES
            .iter()
            .map(|(a, b)| Game::new(teams[*a].clone(), teams[*b].clone())),
    )?;

    let mut log = ReportLog::default();
    let mut played = Vec::with_capacity(teams.len());
    for team in &teams {
        log.line(format!("Games played by team =  {}", team.name));
        let found = repo.find_played_games(&team.name)?;
        log.entries(&found);
        played.push(PlayedGames {
            team_name: team.name.clone(),
            games: found,
        });
    }
    log.line("");

    Ok(GameReport {
        teams,
        games,
        played,
        lines: log.into_lines(),
    })
}
