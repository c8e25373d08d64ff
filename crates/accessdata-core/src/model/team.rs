use serde::{Deserialize, Serialize};

use super::ids::TeamId;

/// Team - a named side that plays games
///
/// Names are not unique; two teams may share a name and still be distinct rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team {
    pub id: Option<TeamId>,

    pub name: String,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn with_id(id: TeamId, name: String) -> Self {
        Self { id: Some(id), name }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team{{name='{}'}}", self.name)
    }
}
