//! Length criterion - checks password minimum length.

const MIN_LENGTH: usize = 8;

/// Checks whether the password has at least 8 characters.
///
/// Counted in characters, not bytes.
pub fn meets_min_length(pwd: &str) -> bool {
    pwd.chars().count() >= MIN_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length_too_short() {
        assert!(!meets_min_length("Short1!"));
    }

    #[test]
    fn test_min_length_exactly_minimum() {
        assert!(meets_min_length("12345678"));
    }

    #[test]
    fn test_min_length_valid() {
        assert!(meets_min_length("LongEnough123!"));
    }

    #[test]
    fn test_min_length_empty() {
        assert!(!meets_min_length(""));
    }

    #[test]
    fn test_min_length_counts_characters_not_bytes() {
        // 8 two-byte characters
        assert!(meets_min_length("éééééééé"));
    }
}
