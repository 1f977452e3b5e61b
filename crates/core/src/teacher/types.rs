use serde::{Deserialize, Serialize};

/// A teacher as stored in the record store.
///
/// The `id` is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl Teacher {
    /// Creates a teacher with a known ID.
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Sets the name for this teacher.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the email for this teacher.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }
}

/// A teacher that has not been inserted yet, so it has no ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTeacher {
    pub name: String,
    pub email: String,
}

impl NewTeacher {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Attaches the store-assigned ID, producing the persisted teacher.
    pub fn with_id(self, id: i64) -> Teacher {
        Teacher {
            id,
            name: self.name,
            email: self.email,
        }
    }
}
