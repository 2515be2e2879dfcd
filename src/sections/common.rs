//! Common section - checks the password against the denylist.

use crate::denylist::CommonPasswordDenylist;

pub const COMMON_MESSAGE: &str = "This password is too common.";

/// Checks that the trimmed password is not a denylisted password.
///
/// # Returns
/// - `true` if the password is not on the list (case-insensitive)
/// - `false` if it is
pub fn common_section(trimmed: &str, denylist: &CommonPasswordDenylist) -> bool {
    !denylist.contains(trimmed)
}
