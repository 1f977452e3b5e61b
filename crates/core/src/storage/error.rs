use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// `NotFound` is the only variant a caller can act on; every other variant is
/// a failure of the record store itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepositoryError {
    /// Shorthand for a missing teacher row.
    pub fn teacher_not_found(id: i64) -> Self {
        RepositoryError::NotFound {
            entity_type: "Teacher",
            id: id.to_string(),
        }
    }

    /// Returns true if no row matched the requested ID.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
