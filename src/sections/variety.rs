//! Character variety section - checks for uppercase, lowercase, numbers, symbols.

pub const UPPERCASE_MESSAGE: &str = "Password must contain an uppercase letter";
pub const LOWERCASE_MESSAGE: &str = "Password must contain a lowercase letter";
pub const NUMBER_MESSAGE: &str = "Password must contain a number";
pub const SYMBOL_MESSAGE: &str = "Password must contain a symbol";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterVariety {
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_number: bool,
    pub has_symbol: bool,
}

/// Classifies the characters of the trimmed password.
///
/// Letters and digits are ASCII; anything else (including non-ASCII
/// letters) counts as a symbol.
pub fn character_variety_section(trimmed: &str) -> CharacterVariety {
    CharacterVariety {
        has_uppercase: trimmed.chars().any(|c| c.is_ascii_uppercase()),
        has_lowercase: trimmed.chars().any(|c| c.is_ascii_lowercase()),
        has_number: trimmed.chars().any(|c| c.is_ascii_digit()),
        has_symbol: trimmed.chars().any(|c| !c.is_ascii_alphanumeric()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variety_section_missing_uppercase() {
        let variety = character_variety_section("lowercase123!");
        assert!(!variety.has_uppercase);
        assert!(variety.has_lowercase && variety.has_number && variety.has_symbol);
    }

    #[test]
    fn test_variety_section_missing_lowercase() {
        assert!(!character_variety_section("UPPERCASE123!").has_lowercase);
    }

    #[test]
    fn test_variety_section_missing_numbers() {
        assert!(!character_variety_section("NoNumbers!").has_number);
    }

    #[test]
    fn test_variety_section_missing_symbol() {
        assert!(!character_variety_section("NoSymbol123").has_symbol);
    }

    #[test]
    fn test_variety_section_non_ascii_is_symbol() {
        let variety = character_variety_section("Passwörd");
        assert!(variety.has_symbol);
    }

    #[test]
    fn test_variety_section_all_categories() {
        assert_eq!(
            character_variety_section("HasAll123!@#"),
            CharacterVariety {
                has_uppercase: true,
                has_lowercase: true,
                has_number: true,
                has_symbol: true,
            }
        );
    }

    #[test]
    fn test_variety_section_empty() {
        let variety = character_variety_section("");
        assert!(!variety.has_uppercase && !variety.has_lowercase);
        assert!(!variety.has_number && !variety.has_symbol);
    }
}
