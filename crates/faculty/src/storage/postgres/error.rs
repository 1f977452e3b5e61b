//! PostgreSQL error mapping.

use faculty_core::storage::RepositoryError;

/// Maps a sqlx error to a RepositoryError.
///
/// # Error Mapping
///
/// - Pool and transport failures → `RepositoryError::ConnectionFailed`
/// - Unique violations → `RepositoryError::AlreadyExists`
/// - `RowNotFound` → `RepositoryError::NotFound`
/// - All other errors → `RepositoryError::QueryFailed`
pub fn map_sqlx_error(err: sqlx::Error, entity_type: &'static str, id: impl Into<String>) -> RepositoryError {
    match err {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => RepositoryError::ConnectionFailed(err.to_string()),

        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            RepositoryError::AlreadyExists {
                entity_type,
                id: id.into(),
            }
        }

        sqlx::Error::RowNotFound => RepositoryError::NotFound {
            entity_type,
            id: id.into(),
        },

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}
