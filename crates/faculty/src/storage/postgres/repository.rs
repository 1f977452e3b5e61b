//! PostgreSQL store implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use faculty_core::storage::{RepositoryError, Result, TeacherStore};
use faculty_core::teacher::{NewTeacher, Teacher};

use super::error::map_sqlx_error;

/// PostgreSQL-backed teacher store.
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a new store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects to the database at `url` and creates the schema.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = PgPool::connect(url)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        let store = Self::new(pool);
        store.migrate().await?;
        Ok(store)
    }

    /// Runs database migrations to create required tables.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS teachers (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Teacher", "schema"))?;

        Ok(())
    }
}

#[async_trait]
impl TeacherStore for PostgresStore {
    async fn insert(&self, teacher: &NewTeacher) -> Result<i64> {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO teachers (name, email) VALUES ($1, $2) RETURNING id",
        )
        .bind(&teacher.name)
        .bind(&teacher.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Teacher", "unknown"))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        let row = sqlx::query_as::<_, (i64, String, String)>(
            "SELECT id, name, email FROM teachers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Teacher", id.to_string()))?;

        Ok(row.map(|(id, name, email)| Teacher { id, name, email }))
    }

    async fn update(&self, teacher: &Teacher) -> Result<()> {
        sqlx::query("UPDATE teachers SET name = $2, email = $3 WHERE id = $1")
            .bind(teacher.id)
            .bind(&teacher.name)
            .bind(&teacher.email)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Teacher", teacher.id.to_string()))?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM teachers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Teacher", id.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Skip test if PostgreSQL is not configured.
    async fn get_test_store() -> Option<PostgresStore> {
        let url = std::env::var("DATABASE_URL").ok()?;
        PostgresStore::connect(&url).await.ok()
    }

    fn unique_email() -> String {
        format!("{}@test.faculty", uuid::Uuid::new_v4())
    }

    #[tokio::test]
    async fn test_postgres_insert_and_find() {
        let Some(store) = get_test_store().await else {
            eprintln!("Skipping test: DATABASE_URL not set or unreachable");
            return;
        };

        let email = unique_email();
        let id = store
            .insert(&NewTeacher::new("Ada", email.clone()))
            .await
            .unwrap();

        let found = store.find_by_id(id).await.unwrap();
        assert_eq!(found, Some(Teacher::new(id, "Ada", email)));

        store.delete(id).await.unwrap();
    }

    #[tokio::test]
    async fn test_postgres_update_and_delete() {
        let Some(store) = get_test_store().await else {
            eprintln!("Skipping test: DATABASE_URL not set or unreachable");
            return;
        };

        let id = store
            .insert(&NewTeacher::new("Ada", unique_email()))
            .await
            .unwrap();

        store
            .update(&Teacher::new(id, "Ada L.", "lovelace@x.io"))
            .await
            .unwrap();
        let found = store.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.name, "Ada L.");

        store.delete(id).await.unwrap();
        assert_eq!(store.find_by_id(id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_postgres_missing_rows_are_not_errors() {
        let Some(store) = get_test_store().await else {
            eprintln!("Skipping test: DATABASE_URL not set or unreachable");
            return;
        };

        assert_eq!(store.find_by_id(-1).await.unwrap(), None);
        assert!(store
            .update(&Teacher::new(-1, "Nobody", "no@x.io"))
            .await
            .is_ok());
        assert!(store.delete(-1).await.is_ok());
    }
}
