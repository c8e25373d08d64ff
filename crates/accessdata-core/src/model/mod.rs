pub mod customer;
pub mod game;
pub mod ids;
pub mod team;

pub use customer::Customer;
pub use game::Game;
pub use ids::{CustomerId, GameId, TeamId};
pub use team::Team;
