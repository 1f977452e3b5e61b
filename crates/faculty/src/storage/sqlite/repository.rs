//! SQLite store implementation.
//!
//! Implements `TeacherStore` from `faculty_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use faculty_core::storage::{RepositoryError, Result, TeacherStore};
use faculty_core::teacher::{NewTeacher, Teacher};

use super::conversions::row_to_teacher;
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based teacher store.
///
/// Every call runs on the connection's background thread, one statement at a time.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Creates a new store with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new store with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl TeacherStore for SqliteStore {
    async fn insert(&self, teacher: &NewTeacher) -> Result<i64> {
        let name = teacher.name.clone();
        let email = teacher.email.clone();

        self.conn
            .call(move |conn| {
                conn.execute(schema::INSERT_TEACHER, rusqlite::params![name, email])
                    .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Teacher"))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_TEACHER_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([id], row_to_teacher) {
                    Ok(teacher) => Ok(Some(teacher)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Teacher", id.to_string()))
    }

    async fn update(&self, teacher: &Teacher) -> Result<()> {
        let id = teacher.id;
        let name = teacher.name.clone();
        let email = teacher.email.clone();

        // Zero affected rows is not an error
        self.conn
            .call(move |conn| {
                conn.execute(schema::UPDATE_TEACHER, rusqlite::params![id, name, email])
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Teacher", id.to_string()))
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                conn.execute(schema::DELETE_TEACHER, [id])
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Teacher", id.to_string()))
    }
}
