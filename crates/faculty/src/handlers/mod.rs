pub mod error;
pub mod health;
pub mod teachers;

pub use error::AppError;
