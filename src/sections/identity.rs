//! Identity section - rejects passwords built from the user's own email or name.

use crate::result::UserIdentityHints;

pub const EMAIL_MESSAGE: &str = "Password cannot contain your email";
pub const NAME_MESSAGE: &str = "Password cannot contain your name";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityCheck {
    pub email_ok: bool,
    pub name_ok: bool,
}

impl IdentityCheck {
    pub fn passed(&self) -> bool {
        self.email_ok && self.name_ok
    }
}

/// Checks the trimmed password against the identity hints.
///
/// Comparison is a case-insensitive substring match on the email local part
/// and on the display name. Absent or blank hints pass: an email such as
/// `"@example.com"` has an empty local part and is not compared, since an
/// empty substring would match every password.
pub fn identity_section(trimmed: &str, hints: Option<&UserIdentityHints>) -> IdentityCheck {
    let Some(hints) = hints else {
        return IdentityCheck {
            email_ok: true,
            name_ok: true,
        };
    };

    let lowered = trimmed.to_lowercase();
    let contains = |hint: Option<&str>| hint.is_some_and(|h| lowered.contains(&h.to_lowercase()));

    IdentityCheck {
        email_ok: !contains(hints.email_local_part()),
        name_ok: !contains(hints.display_name()),
    }
}
