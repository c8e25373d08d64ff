use thiserror::Error;

/// Result type alias used by every repository contract
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers and tests can match on
/// without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    NotFound,
    /// Entity already carries a storage-assigned id; saves never update
    AlreadyPersisted,
    /// A reference points to an entity that was never persisted
    ReferentialIntegrity,
    ConstraintViolation,

    // Integration/IO
    Io,
    Persistence,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyPersisted => "ERR_ALREADY_PERSISTED",
            ExErrorKind::ReferentialIntegrity => "ERR_REFERENTIAL_INTEGRITY",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Classification fields for programmatic handling plus free-form context
/// for humans reading logs.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity: Option<&'static str>,
    entity_id: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity: None,
            entity_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity type context (e.g. `"Customer"`)
    pub fn with_entity(mut self, entity: &'static str) -> Self {
        self.entity = Some(entity);
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl ToString) -> Self {
        self.entity_id = Some(id.to_string());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity type context, if any
    pub fn entity(&self) -> Option<&'static str> {
        self.entity
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        match (self.entity, &self.entity_id) {
            (Some(entity), Some(id)) => write!(f, " (entity: {}, id: {})", entity, id)?,
            (Some(entity), None) => write!(f, " (entity: {})", entity)?,
            (None, Some(id)) => write!(f, " (id: {})", id)?,
            (None, None) => {}
        }
        if let Some(source) = &self.source {
            write!(f, "; caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain errors raised by the repository backends
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    /// Game side references a team without an id
    #[error("Game {side} references a team that was never saved: {team_name}")]
    UnsavedTeam {
        side: &'static str,
        team_name: String,
    },

    /// Game side references a team id absent from storage
    #[error("Game {side} references unknown team id {team_id}")]
    UnknownTeam { side: &'static str, team_id: i64 },

    /// Storage exhausted the identity space
    #[error("{entity} identity sequence exhausted")]
    IdentityExhausted { entity: &'static str },
}

impl From<DataError> for ExError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::UnsavedTeam { side, team_name } => {
                ExError::new(ExErrorKind::ReferentialIntegrity)
                    .with_op("game_save")
                    .with_entity("Team")
                    .with_message(format!(
                        "{} references unsaved team '{}'",
                        side, team_name
                    ))
            }

            DataError::UnknownTeam { side, team_id } => {
                ExError::new(ExErrorKind::ReferentialIntegrity)
                    .with_op("game_save")
                    .with_entity("Team")
                    .with_entity_id(team_id)
                    .with_message(format!("{} references unknown team", side))
            }

            DataError::IdentityExhausted { entity } => ExError::new(ExErrorKind::Internal)
                .with_entity(entity)
                .with_message("Identity sequence exhausted"),
        }
    }
}
