//! SQLite row conversion functions.

use faculty_core::teacher::Teacher;
use rusqlite::Row;

/// Convert a SQLite row to a Teacher.
///
/// Expected columns: id, name, email
pub fn row_to_teacher(row: &Row) -> rusqlite::Result<Teacher> {
    Ok(Teacher {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
    })
}
