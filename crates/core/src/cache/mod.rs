mod error;
mod keys;
mod lookup;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{teacher_key, TEACHER_KEY_PREFIX};
pub use lookup::CacheLookup;
pub use serialization::{deserialize_teacher, serialize_teacher, SerializationError};
pub use traits::Cache;
