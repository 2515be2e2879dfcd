//! Password policy sections
//!
//! Each section evaluates one family of checks against a candidate.

mod common;
mod identity;
mod length;
mod strength;
mod variety;
mod whitespace;

pub use common::{common_section, COMMON_MESSAGE};
pub use identity::{identity_section, EMAIL_MESSAGE, NAME_MESSAGE};
pub use length::{length_message, length_section, MIN_LENGTH};
pub use strength::{strength_section, MIN_SCORE, WEAK_MESSAGE};
pub use variety::{
    character_variety_section, LOWERCASE_MESSAGE, NUMBER_MESSAGE, SYMBOL_MESSAGE,
    UPPERCASE_MESSAGE,
};
pub use whitespace::{whitespace_section, WHITESPACE_MESSAGE};

/// A password as typed, alongside its trimmed form.
///
/// Every check except the whitespace one looks at `trimmed`.
#[derive(Clone, Copy)]
pub struct PasswordCandidate<'a> {
    pub raw: &'a str,
    pub trimmed: &'a str,
}

impl<'a> PasswordCandidate<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            trimmed: raw.trim(),
        }
    }
}
