//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite store,
//! pure data with no I/O.

/// SQL statement to create the teachers table.
///
/// IDs are assigned by SQLite on insert.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS teachers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL
);
"#;

pub const INSERT_TEACHER: &str = r#"
INSERT INTO teachers (name, email)
VALUES (?1, ?2)
"#;

pub const SELECT_TEACHER_BY_ID: &str = r#"
SELECT id, name, email
FROM teachers
WHERE id = ?1
"#;

pub const UPDATE_TEACHER: &str = r#"
UPDATE teachers
SET name = ?2, email = ?3
WHERE id = ?1
"#;

pub const DELETE_TEACHER: &str = r#"
DELETE FROM teachers WHERE id = ?1
"#;
