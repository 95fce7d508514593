//! Error types for the entity model
//!
//! Core errors are typed with `thiserror`. Adapters (storage, config, CLI)
//! wrap them in `anyhow` at the boundary.

use std::fmt;

use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// A value failed its format rule at construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid {field}: {constraint}")]
    InvalidFormat {
        /// Which value type rejected the input (e.g. "name", "date")
        field: &'static str,
        /// The rule the input broke
        constraint: String,
    },
}

impl ValidationError {
    pub(crate) fn invalid(field: &'static str, constraint: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field,
            constraint: constraint.into(),
        }
    }
}

/// Kind of entity an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Contact,
    Event,
    Tag,
    Task,
    Link,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Contact => write!(f, "contact"),
            EntityKind::Event => write!(f, "event"),
            EntityKind::Tag => write!(f, "tag"),
            EntityKind::Task => write!(f, "task"),
            EntityKind::Link => write!(f, "link"),
        }
    }
}

/// Errors raised by the entity store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Malformed value
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Uniqueness violation on add, edit or link
    #[error("Duplicate {kind}: {key}")]
    DuplicateEntity { kind: EntityKind, key: String },

    /// Reference to something the store does not hold
    #[error("No such {kind}: {key}")]
    EntityNotFound { kind: EntityKind, key: String },
}

impl ModelError {
    pub(crate) fn duplicate(kind: EntityKind, key: impl fmt::Display) -> Self {
        ModelError::DuplicateEntity {
            kind,
            key: key.to_string(),
        }
    }

    pub(crate) fn not_found(kind: EntityKind, key: impl fmt::Display) -> Self {
        ModelError::EntityNotFound {
            kind,
            key: key.to_string(),
        }
    }
}

/// User-facing failure of a command
///
/// Carries only the message shown to the operator. The store is left
/// untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CommandError {
    message: String,
}

impl CommandError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ModelError> for CommandError {
    fn from(e: ModelError) -> Self {
        CommandError::new(e.to_string())
    }
}

impl From<ValidationError> for CommandError {
    fn from(e: ValidationError) -> Self {
        CommandError::new(e.to_string())
    }
}
