use serde::{Deserialize, Serialize};

use super::ids::GameId;
use super::team::Team;

/// Game - a match between two teams
///
/// Both sides are many-to-one references to persisted teams. Storage keeps
/// only the team ids; reads hydrate the full `Team` values back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Game {
    pub id: Option<GameId>,

    pub team1: Team,

    pub team2: Team,
}

impl Game {
    pub fn new(team1: Team, team2: Team) -> Self {
        Self {
            id: None,
            team1,
            team2,
        }
    }

    pub fn with_id(id: GameId, team1: Team, team2: Team) -> Self {
        Self {
            id: Some(id),
            team1,
            team2,
        }
    }

    /// True when either side carries the given team name (exact, case-sensitive)
    pub fn involves(&self, team_name: &str) -> bool {
        self.team1.name == team_name || self.team2.name == team_name
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game{{team1={}, team2={}}}", self.team1, self.team2)
    }
}
