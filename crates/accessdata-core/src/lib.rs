//! accessdata core - entities, repository contracts and shared facilities
//!
//! - `Customer`, `Team` and `Game` entities with storage-assigned identities
//! - Repository contracts (`Repository<E>` plus per-entity query traits)
//! - An in-memory repository backend
//! - Structured error facility (`ExError`)
//! - Logging facility (`init`, boundary macros, test capture)

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod repository;

#[doc(hidden)]
pub use accessdata_core_types as core_types;

// Re-export commonly used types
pub use errors::{DataError, ExError, ExErrorKind, Result};
pub use model::{Customer, CustomerId, Game, GameId, Team, TeamId};
pub use ops::MemoryStore;
pub use repository::{CustomerRepository, Entity, GameRepository, Repository, TeamRepository};
