//! Character class criteria - lowercase, uppercase, digits, symbols.

/// Checks for at least one ASCII lowercase letter (`[a-z]`).
pub fn has_lowercase(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_lowercase())
}

/// Checks for at least one ASCII uppercase letter (`[A-Z]`).
pub fn has_uppercase(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_uppercase())
}

/// Checks for at least one ASCII digit (`[0-9]`).
pub fn has_digit(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_digit())
}

/// Checks for at least one character outside `[A-Za-z0-9]`.
///
/// Non-ASCII characters count as symbols.
pub fn has_symbol(pwd: &str) -> bool {
    pwd.chars().any(|c| !c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_lowercase() {
        assert!(has_lowercase("UPPERa"));
        assert!(!has_lowercase("UPPER123!"));
    }

    #[test]
    fn test_has_uppercase() {
        assert!(has_uppercase("lowerB"));
        assert!(!has_uppercase("lower123!"));
    }

    #[test]
    fn test_has_digit() {
        assert!(has_digit("abc1"));
        assert!(!has_digit("NoNumbers!"));
    }

    #[test]
    fn test_has_symbol() {
        assert!(has_symbol("abc!"));
        assert!(!has_symbol("NoSpecial123"));
    }

    #[test]
    fn test_non_ascii_counts_as_symbol() {
        assert!(has_symbol("pässword"));
        assert!(!has_lowercase("ÄÖÜ"));
        assert!(!has_uppercase("äöü"));
    }

    #[test]
    fn test_empty_password_fails_all() {
        assert!(!has_lowercase(""));
        assert!(!has_uppercase(""));
        assert!(!has_digit(""));
        assert!(!has_symbol(""));
    }
}
