mod types;

pub use types::{NewTeacher, Teacher};
