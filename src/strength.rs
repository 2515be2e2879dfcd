//! Presentation mappings for strength scores.

/// Human-readable label for a strength score.
pub fn strength_label(score: u8) -> &'static str {
    match score {
        0 => "Very Weak",
        1 => "Weak",
        2 => "Fair",
        3 => "Good",
        4 => "Strong",
        _ => "Very Strong",
    }
}

/// Color token for a strength score, independent of any UI toolkit.
pub fn strength_color_token(score: u8) -> &'static str {
    match score {
        0 | 1 => "danger",
        2 => "warning",
        3 => "good",
        4 => "strong",
        _ => "strongest",
    }
}
