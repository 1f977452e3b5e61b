use serde::Deserialize;

use faculty_core::teacher::{NewTeacher, Teacher};

/// Request payload for creating a new teacher.
#[derive(Debug, Deserialize)]
pub struct CreateTeacher {
    pub name: String,
    pub email: String,
}

impl CreateTeacher {
    /// Converts the create request into a teacher without an ID.
    pub fn into_new_teacher(self) -> NewTeacher {
        NewTeacher::new(self.name, self.email)
    }
}

/// Request payload for updating a teacher.
///
/// Both fields are overwritten; there is no partial update.
#[derive(Debug, Deserialize)]
pub struct UpdateTeacher {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl UpdateTeacher {
    /// Converts the update request into the full teacher to persist.
    pub fn into_teacher(self) -> Teacher {
        Teacher::new(self.id, self.name, self.email)
    }
}
