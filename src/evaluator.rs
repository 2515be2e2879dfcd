//! Password policy engine - main validation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::denylist::{denylist, CommonPasswordDenylist};
use crate::estimator::{StrengthEstimator, ZxcvbnEstimator};
use crate::result::{PasswordChecks, UserIdentityHints, ValidationResult};
use crate::sections::{
    character_variety_section, common_section, identity_section, length_message, length_section,
    strength_section, whitespace_section, PasswordCandidate, COMMON_MESSAGE, EMAIL_MESSAGE,
    LOWERCASE_MESSAGE, NAME_MESSAGE, NUMBER_MESSAGE, SYMBOL_MESSAGE, UPPERCASE_MESSAGE,
    WEAK_MESSAGE, WHITESPACE_MESSAGE,
};

/// Delay applied by [`validate_password_tx`] before validating.
#[cfg(feature = "async")]
pub const DEBOUNCE_DELAY: std::time::Duration = std::time::Duration::from_millis(300);

/// Evaluates passwords against the fixed policy.
///
/// Holds no mutable state: one engine can serve any number of concurrent
/// callers.
#[derive(Debug, Clone)]
pub struct PasswordPolicyEngine<'d, E = ZxcvbnEstimator> {
    denylist: &'d CommonPasswordDenylist,
    estimator: E,
}

impl PasswordPolicyEngine<'static, ZxcvbnEstimator> {
    /// Engine over the process-wide denylist and the zxcvbn estimator.
    pub fn standard() -> Self {
        Self::new(denylist(), ZxcvbnEstimator)
    }
}

impl<'d, E: StrengthEstimator> PasswordPolicyEngine<'d, E> {
    pub fn new(denylist: &'d CommonPasswordDenylist, estimator: E) -> Self {
        Self {
            denylist,
            estimator,
        }
    }

    /// Validates a password against all nine checks.
    ///
    /// Never fails: empty, blank or arbitrarily long input simply fails the
    /// relevant checks.
    ///
    /// # Arguments
    /// * `password` - The password exactly as typed
    /// * `user_info` - Optional identity hints the password must not contain
    pub fn validate(
        &self,
        password: &SecretString,
        user_info: Option<&UserIdentityHints>,
    ) -> ValidationResult {
        let candidate = PasswordCandidate::new(password.expose_secret());
        let trimmed = candidate.trimmed;

        let no_whitespace = whitespace_section(&candidate);
        let min_length = length_section(trimmed);
        let variety = character_variety_section(trimmed);
        let not_common = common_section(trimmed, self.denylist);
        let identity = identity_section(trimmed, user_info);
        let strength = strength_section(trimmed, user_info, &self.estimator);

        let checks = PasswordChecks {
            no_whitespace,
            min_length,
            has_uppercase: variety.has_uppercase,
            has_lowercase: variety.has_lowercase,
            has_number: variety.has_number,
            has_symbol: variety.has_symbol,
            not_common,
            not_user_info: identity.passed(),
            strong_enough: strength.strong_enough,
        };

        let mut errors = Vec::new();
        let mut reject = |failed: bool, message: &str| {
            if failed {
                errors.push(message.to_string());
            }
        };

        reject(!no_whitespace, WHITESPACE_MESSAGE);
        reject(!min_length, &length_message());
        reject(!variety.has_uppercase, UPPERCASE_MESSAGE);
        reject(!variety.has_lowercase, LOWERCASE_MESSAGE);
        reject(!variety.has_number, NUMBER_MESSAGE);
        reject(!variety.has_symbol, SYMBOL_MESSAGE);
        reject(!not_common, COMMON_MESSAGE);
        reject(!identity.email_ok, EMAIL_MESSAGE);
        reject(!identity.name_ok, NAME_MESSAGE);

        // A low score only gets its own message when nothing else explains it.
        if !strength.strong_enough && errors.is_empty() {
            errors.push(WEAK_MESSAGE.to_string());
        }

        let result = ValidationResult::new(checks, errors, strength.score);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "password validated: valid={} failed_checks={} score={}",
            result.is_valid,
            result.failed_checks().len(),
            result.score
        );

        result
    }
}

/// Validates a password with the process-wide denylist and zxcvbn.
///
/// # Example
///
/// ```rust,ignore
/// let password = SecretString::new("Tr0ub4dor&7Zq!".to_string().into());
/// let hints = UserIdentityHints::new().with_email("john.doe@example.com");
/// let result = validate_password(&password, Some(&hints));
/// ```
pub fn validate_password(
    password: &SecretString,
    user_info: Option<&UserIdentityHints>,
) -> ValidationResult {
    PasswordPolicyEngine::standard().validate(password, user_info)
}

/// Debounced validation that sends the result via channel.
///
/// Waits [`DEBOUNCE_DELAY`] first; if `token` is cancelled meanwhile (a newer
/// keystroke superseded this one) nothing is sent.
#[cfg(feature = "async")]
pub async fn validate_password_tx(
    password: SecretString,
    user_info: Option<UserIdentityHints>,
    token: CancellationToken,
    tx: mpsc::Sender<ValidationResult>,
) {
    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("password validation superseded before start");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE_DELAY) => {}
    }

    let result = validate_password(&password, user_info.as_ref());

    if let Err(e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password validation result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
