//! Length section - checks password minimum length.

pub const MIN_LENGTH: usize = 12;

pub fn length_message() -> String {
    format!("Password must be at least {} characters", MIN_LENGTH)
}

/// Checks if the trimmed password meets the minimum length, counted in
/// characters. There is no upper bound.
pub fn length_section(trimmed: &str) -> bool {
    trimmed.chars().count() >= MIN_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        assert!(!length_section("Short1!"));
        assert!(!length_section(""));
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert!(length_section("123456789012"));
    }

    #[test]
    fn test_length_section_counts_characters() {
        assert!(length_section(&"é".repeat(MIN_LENGTH)));
        // 12 bytes, 6 characters
        assert!(!length_section(&"é".repeat(6)));
    }

    #[test]
    fn test_length_message() {
        assert_eq!(length_message(), "Password must be at least 12 characters");
    }
}
