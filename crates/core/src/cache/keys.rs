/// Prefix shared by every teacher cache key.
pub const TEACHER_KEY_PREFIX: &str = "teacher:";

/// Returns the cache key for a single teacher.
///
/// Every read and every invalidation goes through this function, so a teacher
/// is always cached under exactly one key.
///
/// # Examples
///
/// ```
/// use faculty_core::cache::teacher_key;
///
/// assert_eq!(teacher_key(7), "teacher:7");
/// ```
pub fn teacher_key(id: i64) -> String {
    format!("{TEACHER_KEY_PREFIX}{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teacher_key_format() {
        assert_eq!(teacher_key(7), "teacher:7");
        assert_eq!(teacher_key(0), "teacher:0");
        assert_eq!(teacher_key(-3), "teacher:-3");
    }

    #[test]
    fn test_teacher_key_is_distinct_per_id() {
        assert_ne!(teacher_key(1), teacher_key(11));
        assert_ne!(teacher_key(12), teacher_key(1));
    }

    #[test]
    fn test_teacher_key_has_prefix() {
        assert!(teacher_key(i64::MAX).starts_with(TEACHER_KEY_PREFIX));
    }
}
