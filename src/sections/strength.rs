//! Strength section - consults the external strength estimator.

use crate::estimator::StrengthEstimator;
use crate::result::UserIdentityHints;

/// Lowest estimator score accepted.
pub const MIN_SCORE: u8 = 3;

pub const WEAK_MESSAGE: &str = "Password is not strong enough";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthCheck {
    pub score: u8,
    pub strong_enough: bool,
}

/// Scores the trimmed password, feeding the non-empty identity hints to the
/// estimator as user inputs.
pub fn strength_section<E: StrengthEstimator + ?Sized>(
    trimmed: &str,
    hints: Option<&UserIdentityHints>,
    estimator: &E,
) -> StrengthCheck {
    let user_inputs = hints.map(UserIdentityHints::estimator_inputs).unwrap_or_default();
    let score = estimator.estimate(trimmed, &user_inputs);
    StrengthCheck {
        score,
        strong_enough: score >= MIN_SCORE,
    }
}
