use std::collections::BTreeMap;

use crate::errors::{DataError, Result};
use crate::model::{Customer, CustomerId, Game, GameId, Team, TeamId};
use crate::repository::{
    ensure_unsaved, CustomerRepository, GameRepository, Repository, TeamRepository,
};

/// Game row as stored: foreign keys only, hydrated on read
#[derive(Debug, Clone, Copy)]
struct GameRow {
    team1_id: TeamId,
    team2_id: TeamId,
}

/// In-memory store for customers, teams and games
///
/// BTreeMap-backed so iteration is ascending by id, matching the SQLite
/// backend. Not thread-safe; designed for single-threaded use and tests.
/// Ids start at 1 and are never reused.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    customers: BTreeMap<CustomerId, Customer>,
    teams: BTreeMap<TeamId, Team>,
    games: BTreeMap<GameId, GameRow>,
    last_customer_id: i64,
    last_team_id: i64,
    last_game_id: i64,
}

fn next_id(last: &mut i64, entity: &'static str) -> Result<i64> {
    *last = last
        .checked_add(1)
        .ok_or(DataError::IdentityExhausted { entity })?;
    Ok(*last)
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a game side to a stored team id
    fn resolve_team(&self, side: &'static str, team: &Team) -> Result<TeamId> {
        let id = team.id.ok_or_else(|| DataError::UnsavedTeam {
            side,
            team_name: team.name.clone(),
        })?;
        if !self.teams.contains_key(&id) {
            return Err(DataError::UnknownTeam {
                side,
                team_id: id.get(),
            }
            .into());
        }
        Ok(id)
    }

    fn hydrate_game(&self, id: GameId, row: GameRow) -> Game {
        // Rows are only inserted after both teams are resolved and teams are
        // never removed, so the lookups always succeed.
        let team1 = self.teams[&row.team1_id].clone();
        let team2 = self.teams[&row.team2_id].clone();
        Game::with_id(id, team1, team2)
    }
}

impl Repository<Customer> for MemoryStore {
    fn save(&mut self, customer: Customer) -> Result<Customer> {
        ensure_unsaved(&customer)?;
        let id = CustomerId::new(next_id(&mut self.last_customer_id, "Customer")?);
        let saved = Customer::with_id(id, customer.first_name, customer.last_name);
        self.customers.insert(id, saved.clone());
        tracing::debug!(entity = "Customer", entity_id = id.get(), "inserted");
        Ok(saved)
    }

    fn find_all(&self) -> Result<Vec<Customer>> {
        Ok(self.customers.values().cloned().collect())
    }

    fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>> {
        Ok(self.customers.get(&id).cloned())
    }

    fn count(&self) -> Result<u64> {
        Ok(self.customers.len() as u64)
    }
}

impl CustomerRepository for MemoryStore {
    fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Customer>> {
        Ok(self
            .customers
            .values()
            .filter(|c| c.last_name == last_name)
            .cloned()
            .collect())
    }
}

impl Repository<Team> for MemoryStore {
    fn save(&mut self, team: Team) -> Result<Team> {
        ensure_unsaved(&team)?;
        let id = TeamId::new(next_id(&mut self.last_team_id, "Team")?);
        let saved = Team::with_id(id, team.name);
        self.teams.insert(id, saved.clone());
        tracing::debug!(entity = "Team", entity_id = id.get(), "inserted");
        Ok(saved)
    }

    fn find_all(&self) -> Result<Vec<Team>> {
        Ok(self.teams.values().cloned().collect())
    }

    fn find_by_id(&self, id: TeamId) -> Result<Option<Team>> {
        Ok(self.teams.get(&id).cloned())
    }

    fn count(&self) -> Result<u64> {
        Ok(self.teams.len() as u64)
    }
}

impl TeamRepository for MemoryStore {}

impl Repository<Game> for MemoryStore {
    fn save(&mut self, game: Game) -> Result<Game> {
        ensure_unsaved(&game)?;
        let row = GameRow {
            team1_id: self.resolve_team("team1", &game.team1)?,
            team2_id: self.resolve_team("team2", &game.team2)?,
        };
        let id = GameId::new(next_id(&mut self.last_game_id, "Game")?);
        self.games.insert(id, row);
        tracing::debug!(entity = "Game", entity_id = id.get(), "inserted");
        Ok(self.hydrate_game(id, row))
    }

    fn find_all(&self) -> Result<Vec<Game>> {
        Ok(self
            .games
            .iter()
            .map(|(id, row)| self.hydrate_game(*id, *row))
            .collect())
    }

    fn find_by_id(&self, id: GameId) -> Result<Option<Game>> {
        Ok(self.games.get(&id).map(|row| self.hydrate_game(id, *row)))
    }

    fn count(&self) -> Result<u64> {
        Ok(self.games.len() as u64)
    }
}

impl GameRepository for MemoryStore {
    fn find_played_games(&self, team_name: &str) -> Result<Vec<Game>> {
        Ok(self
            .games
            .iter()
            .map(|(id, row)| self.hydrate_game(*id, *row))
            .filter(|game| game.involves(team_name))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExErrorKind;

    #[test]
    fn test_save_assigns_sequential_ids() {
        let mut store = MemoryStore::new();

        let jack = store.save(Customer::new("Jack", "Bauer")).unwrap();
        let chloe = store.save(Customer::new("Chloe", "O'Brian")).unwrap();

        assert_eq!(jack.id, Some(CustomerId::new(1)));
        assert_eq!(chloe.id, Some(CustomerId::new(2)));
        assert_eq!(Repository::<Customer>::count(&store).unwrap(), 2);
    }

    #[test]
    fn test_save_rejects_persisted_customer() {
        let mut store = MemoryStore::new();
        let jack = store.save(Customer::new("Jack", "Bauer")).unwrap();

        let err = store.save(jack).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::AlreadyPersisted);
        assert_eq!(Repository::<Customer>::count(&store).unwrap(), 1);
    }

    #[test]
    fn test_find_by_id_absent_is_none() {
        let store = MemoryStore::new();
        let found: Option<Customer> = store.find_by_id(CustomerId::new(1)).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_get_by_id_absent_is_not_found() {
        let store = MemoryStore::new();
        let err = Repository::<Team>::get_by_id(&store, TeamId::new(5)).unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::NotFound);
        assert_eq!(err.entity(), Some("Team"));
    }

    #[test]
    fn test_game_with_unsaved_team_rejected() {
        let mut store = MemoryStore::new();
        let first = store.save(Team::new("first")).unwrap();

        let err = store
            .save(Game::new(first, Team::new("ghost")))
            .unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::ReferentialIntegrity);
        assert_eq!(Repository::<Game>::count(&store).unwrap(), 0);
    }

    #[test]
    fn test_game_with_foreign_team_id_rejected() {
        let mut store = MemoryStore::new();
        let first = store.save(Team::new("first")).unwrap();
        let stranger = Team::with_id(TeamId::new(99), "stranger".into());

        let err = store.save(Game::new(first, stranger)).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::ReferentialIntegrity);
        assert_eq!(err.entity_id(), Some("99"));
    }

    #[test]
    fn test_find_played_games_self_match_counted_once() {
        let mut store = MemoryStore::new();
        let first = store.save(Team::new("first")).unwrap();
        store.save(Game::new(first.clone(), first)).unwrap();

        assert_eq!(store.find_played_games("first").unwrap().len(), 1);
    }
}
