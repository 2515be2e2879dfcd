//! Strength estimation seam.

/// Heuristic guessability scorer.
///
/// Implementations must be local and side-effect free. The score is on a
/// 0-4 scale where lower means easier to guess.
pub trait StrengthEstimator: Send + Sync {
    fn estimate(&self, password: &str, user_inputs: &[&str]) -> u8;
}

impl<F> StrengthEstimator for F
where
    F: Fn(&str, &[&str]) -> u8 + Send + Sync,
{
    fn estimate(&self, password: &str, user_inputs: &[&str]) -> u8 {
        self(password, user_inputs)
    }
}

/// Default estimator backed by `zxcvbn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZxcvbnEstimator;

impl StrengthEstimator for ZxcvbnEstimator {
    fn estimate(&self, password: &str, user_inputs: &[&str]) -> u8 {
        if password.is_empty() {
            return 0;
        }
        zxcvbn::zxcvbn(password, user_inputs).score() as u8
    }
}
