//! Surrogate identities
//!
//! Each entity gets its own newtype so a `TeamId` can never be passed where a
//! `CustomerId` is expected. Values are assigned by storage on first save.

use serde::{Deserialize, Serialize};

macro_rules! surrogate_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw storage identity
            pub fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Raw value as stored in the database
            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

surrogate_id!(
    /// Identity of a persisted `Customer`
    CustomerId
);
surrogate_id!(
    /// Identity of a persisted `Team`
    TeamId
);
surrogate_id!(
    /// Identity of a persisted `Game`
    GameId
);
