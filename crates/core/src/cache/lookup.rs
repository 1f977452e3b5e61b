//! Outcome of reading a typed value out of the cache.
//!
//! A cache read can hit, miss, or fail (connection error, undecodable bytes).
//! Readers that treat the cache as an optimization collapse the last two into
//! "go to the store" with [`CacheLookup::into_hit`].

use super::{CacheError, SerializationError};

/// Result of a typed cache lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLookup<T> {
    /// The key was present and decoded successfully.
    Hit(T),
    /// The key was absent.
    Miss,
    /// The cache could not be read, or the stored bytes could not be decoded.
    Failed(CacheError),
}

impl<T> CacheLookup<T> {
    /// Builds a lookup from a raw `Cache::get` result and a decoder.
    ///
    /// # Examples
    ///
    /// ```
    /// use faculty_core::cache::{deserialize_teacher, CacheError, CacheLookup};
    ///
    /// let miss = CacheLookup::from_raw(Ok(None), deserialize_teacher);
    /// assert_eq!(miss, CacheLookup::Miss);
    ///
    /// let failed = CacheLookup::from_raw(
    ///     Err(CacheError::ConnectionFailed("refused".into())),
    ///     deserialize_teacher,
    /// );
    /// assert!(failed.into_hit().is_none());
    /// ```
    pub fn from_raw<F>(raw: Result<Option<Vec<u8>>, CacheError>, decode: F) -> Self
    where
        F: FnOnce(&[u8]) -> Result<T, SerializationError>,
    {
        match raw {
            Ok(Some(bytes)) => match decode(&bytes) {
                Ok(value) => CacheLookup::Hit(value),
                Err(err) => CacheLookup::Failed(err.into()),
            },
            Ok(None) => CacheLookup::Miss,
            Err(err) => CacheLookup::Failed(err),
        }
    }

    /// Returns the error if the lookup failed.
    pub fn error(&self) -> Option<&CacheError> {
        match self {
            CacheLookup::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Collapses the lookup to a hit or a fall-through.
    ///
    /// `Miss` and `Failed` both yield `None`: a failing cache behaves like an
    /// empty one.
    pub fn into_hit(self) -> Option<T> {
        match self {
            CacheLookup::Hit(value) => Some(value),
            CacheLookup::Miss | CacheLookup::Failed(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{deserialize_teacher, serialize_teacher};
    use crate::teacher::Teacher;

    #[test]
    fn test_hit_decodes_value() {
        let teacher = Teacher::new(7, "Ada", "ada@x.io");
        let bytes = serialize_teacher(&teacher).unwrap();

        let lookup = CacheLookup::from_raw(Ok(Some(bytes)), deserialize_teacher);

        assert_eq!(lookup, CacheLookup::Hit(teacher.clone()));
        assert_eq!(lookup.into_hit(), Some(teacher));
    }

    #[test]
    fn test_absent_key_is_miss() {
        let lookup = CacheLookup::from_raw(Ok(None), deserialize_teacher);

        assert_eq!(lookup, CacheLookup::Miss);
        assert!(lookup.error().is_none());
        assert!(lookup.into_hit().is_none());
    }

    #[test]
    fn test_cache_error_is_failed() {
        let err = CacheError::ConnectionFailed("refused".to_string());

        let lookup = CacheLookup::from_raw(Err(err.clone()), deserialize_teacher);

        assert_eq!(lookup.error(), Some(&err));
        assert!(lookup.into_hit().is_none());
    }

    #[test]
    fn test_undecodable_bytes_are_failed() {
        let lookup = CacheLookup::from_raw(Ok(Some(b"garbage".to_vec())), deserialize_teacher);

        assert!(matches!(lookup, CacheLookup::Failed(CacheError::Serialization(_))));
        assert!(lookup.into_hit().is_none());
    }
}
