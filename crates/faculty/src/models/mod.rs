mod teacher;

pub use teacher::{CreateTeacher, UpdateTeacher};
