//! Validation inputs and outputs.

use crate::strength::{strength_color_token, strength_label};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// User-identifying strings a password must not be derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct UserIdentityHints {
    pub email: Option<String>,
    pub display_name: Option<String>,
}

impl UserIdentityHints {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Part of the email before the first `@`, or the whole email if it
    /// has none. `None` when no email was given or the part is blank.
    pub fn email_local_part(&self) -> Option<&str> {
        let email = self.email.as_deref()?;
        let local = email.split('@').next().unwrap_or(email).trim();
        (!local.is_empty()).then_some(local)
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }

    /// Inputs handed to the strength estimator: the full email and the
    /// display name, skipping absent or empty ones.
    pub fn estimator_inputs(&self) -> Vec<&str> {
        [self.email.as_deref(), self.display_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Outcome of each of the nine policy checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PasswordChecks {
    pub no_whitespace: bool,
    pub min_length: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_number: bool,
    pub has_symbol: bool,
    pub not_common: bool,
    pub not_user_info: bool,
    pub strong_enough: bool,
}

impl PasswordChecks {
    fn named(&self) -> [(&'static str, bool); 9] {
        [
            ("noWhitespace", self.no_whitespace),
            ("minLength", self.min_length),
            ("hasUppercase", self.has_uppercase),
            ("hasLowercase", self.has_lowercase),
            ("hasNumber", self.has_number),
            ("hasSymbol", self.has_symbol),
            ("notCommon", self.not_common),
            ("notUserInfo", self.not_user_info),
            ("strongEnough", self.strong_enough),
        ]
    }

    pub fn all_passed(&self) -> bool {
        self.named().iter().all(|(_, passed)| *passed)
    }

    /// Names of the failed checks, in evaluation order.
    pub fn failed(&self) -> Vec<&'static str> {
        self.named()
            .into_iter()
            .filter(|(_, passed)| !passed)
            .map(|(name, _)| name)
            .collect()
    }
}

/// Result of validating one password.
///
/// `is_valid` is derived from `checks` alone; `errors` only explains it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub checks: PasswordChecks,
    pub score: u8,
}

impl ValidationResult {
    pub(crate) fn new(checks: PasswordChecks, errors: Vec<String>, score: u8) -> Self {
        Self {
            is_valid: checks.all_passed(),
            errors,
            checks,
            score,
        }
    }

    pub fn failed_checks(&self) -> Vec<&'static str> {
        self.checks.failed()
    }

    pub fn strength_label(&self) -> &'static str {
        strength_label(self.score)
    }

    pub fn strength_color_token(&self) -> &'static str {
        strength_color_token(self.score)
    }
}
