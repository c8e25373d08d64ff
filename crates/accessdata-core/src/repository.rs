//! Repository contracts
//!
//! `Repository<E>` is the CRUD surface shared by every entity; the
//! per-entity traits add the domain queries. A single backend value usually
//! implements all of them, so calls are resolved by argument or result type:
//!
//! ```ignore
//! let saved = repo.save(Customer::new("Jack", "Bauer"))?;
//! let teams: Vec<Team> = repo.find_all()?;
//! let n = Repository::<Game>::count(&repo)?;
//! ```

use crate::errors::{ExError, ExErrorKind, Result};
use crate::model::{Customer, CustomerId, Game, GameId, Team, TeamId};

/// A record type with a storage-assigned surrogate identity
pub trait Entity: Clone + std::fmt::Display {
    type Id: Copy + Eq + std::fmt::Display;

    /// Entity name used in errors and log fields
    const NAME: &'static str;

    /// Storage-assigned id, if persisted
    fn id(&self) -> Option<Self::Id>;
}

impl Entity for Customer {
    type Id = CustomerId;
    const NAME: &'static str = "Customer";

    fn id(&self) -> Option<CustomerId> {
        self.id
    }
}

impl Entity for Team {
    type Id = TeamId;
    const NAME: &'static str = "Team";

    fn id(&self) -> Option<TeamId> {
        self.id
    }
}

impl Entity for Game {
    type Id = GameId;
    const NAME: &'static str = "Game";

    fn id(&self) -> Option<GameId> {
        self.id
    }
}

/// CRUD contract shared by all entity stores
///
/// Saves only insert: an entity that already carries an id is rejected with
/// `AlreadyPersisted`. Reads never mutate storage and return rows in
/// ascending id order.
pub trait Repository<E: Entity> {
    /// Insert a new entity and return it with its generated id
    ///
    /// # Errors
    ///
    /// `AlreadyPersisted` if the entity has an id, `Persistence` on storage failure.
    fn save(&mut self, entity: E) -> Result<E>;

    /// Save each entity in order and return them with their generated ids
    ///
    /// Stops at the first failure; entities saved before it stay saved.
    ///
    /// # Errors
    ///
    /// The first error returned by `save`.
    fn save_all<I>(&mut self, entities: I) -> Result<Vec<E>>
    where
        I: IntoIterator<Item = E>,
        Self: Sized,
    {
        entities.into_iter().map(|e| self.save(e)).collect()
    }

    /// Every persisted entity, ascending by id
    ///
    /// # Errors
    ///
    /// `Persistence` on storage failure.
    fn find_all(&self) -> Result<Vec<E>>;

    /// Exact lookup by id; absence is `Ok(None)`
    ///
    /// # Errors
    ///
    /// `Persistence` on storage failure.
    fn find_by_id(&self, id: E::Id) -> Result<Option<E>>;

    /// Number of persisted entities
    ///
    /// # Errors
    ///
    /// `Persistence` on storage failure.
    fn count(&self) -> Result<u64>;

    /// Lookup by id for callers that treat absence as fatal
    ///
    /// # Errors
    ///
    /// `NotFound` when no row has this id.
    fn get_by_id(&self, id: E::Id) -> Result<E> {
        self.find_by_id(id)?.ok_or_else(|| {
            ExError::new(ExErrorKind::NotFound)
                .with_op("get_by_id")
                .with_entity(E::NAME)
                .with_entity_id(id)
                .with_message(format!("{} not found", E::NAME))
        })
    }
}

/// Customer store with the last-name query
pub trait CustomerRepository: Repository<Customer> {
    /// Customers whose last name equals `last_name` exactly (case-sensitive)
    ///
    /// Empty when nothing matches.
    ///
    /// # Errors
    ///
    /// `Persistence` on storage failure.
    fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Customer>>;
}

/// Team store
pub trait TeamRepository: Repository<Team> {}

/// Game store with the played-games query
pub trait GameRepository: Repository<Game> {
    /// Games where either side's team name equals `team_name`
    ///
    /// Each matching game appears once, including a team playing itself.
    ///
    /// # Errors
    ///
    /// `Persistence` on storage failure.
    fn find_played_games(&self, team_name: &str) -> Result<Vec<Game>>;
}

/// Reject entities that already carry an id
pub fn ensure_unsaved<E: Entity>(entity: &E) -> Result<()> {
    match entity.id() {
        Some(id) => Err(ExError::new(ExErrorKind::AlreadyPersisted)
            .with_op("save")
            .with_entity(E::NAME)
            .with_entity_id(id)
            .with_message("Entity already has a storage-assigned id")),
        None => Ok(()),
    }
}
