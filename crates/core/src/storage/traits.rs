use async_trait::async_trait;

use crate::teacher::{NewTeacher, Teacher};

use super::Result;

/// Record store for teachers.
///
/// Implementations are the store of record and must make each call atomic on
/// their own. Updating or deleting an ID with no row is not an error.
#[async_trait]
pub trait TeacherStore: Send + Sync {
    /// Inserts a new row and returns the ID the store assigned to it.
    async fn insert(&self, teacher: &NewTeacher) -> Result<i64>;

    /// Gets a teacher by its ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Teacher>>;

    /// Overwrites the name and email of the row matching `teacher.id`.
    async fn update(&self, teacher: &Teacher) -> Result<()>;

    /// Deletes a row by its ID.
    async fn delete(&self, id: i64) -> Result<()>;
}

/// Repository for teacher operations, as seen by request handlers.
#[async_trait]
pub trait TeacherRepository: Send + Sync {
    /// Creates a new teacher and returns its assigned ID.
    async fn create_teacher(&self, teacher: &NewTeacher) -> Result<i64>;

    /// Gets a teacher by its ID, failing with `NotFound` if there is none.
    async fn get_teacher(&self, id: i64) -> Result<Teacher>;

    /// Updates an existing teacher.
    async fn update_teacher(&self, teacher: &Teacher) -> Result<()>;

    /// Deletes a teacher by its ID.
    async fn delete_teacher(&self, id: i64) -> Result<()>;

    /// Creates teachers one at a time, in order.
    ///
    /// Stops at the first failure and returns it. Teachers created before the
    /// failure stay created; the ones after it are never attempted.
    async fn create_teachers(&self, teachers: &[NewTeacher]) -> Result<Vec<i64>> {
        let mut ids = Vec::with_capacity(teachers.len());
        for teacher in teachers {
            ids.push(self.create_teacher(teacher).await?);
        }
        Ok(ids)
    }
}
