//! Common password denylist
//!
//! Handles loading and querying the set of passwords that are rejected
//! regardless of how well they score on the other checks.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

/// Environment variable pointing at an alternative denylist file.
pub const DENYLIST_PATH_ENV: &str = "PWD_DENYLIST_PATH";

const BUILTIN_LIST: &str = include_str!("../assets/common-passwords.txt");

static COMMON_PASSWORDS: OnceLock<CommonPasswordDenylist> = OnceLock::new();
static BUILTIN_FALLBACK: OnceLock<CommonPasswordDenylist> = OnceLock::new();

#[derive(Error, Debug)]
pub enum DenylistError {
    #[error("Denylist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read denylist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Denylist file is empty")]
    EmptyFile,
}

/// A read-only set of lowercase passwords considered too common to allow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonPasswordDenylist {
    entries: HashSet<String>,
}

impl CommonPasswordDenylist {
    /// Builds a denylist from raw entries. Entries are trimmed and
    /// lowercased; blank entries are dropped.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    /// The list compiled into the crate.
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_LIST.lines())
    }

    /// Reads a denylist file, one password per line.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no usable entries
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DenylistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist load FAILED: file not found {:?}", path);
            return Err(DenylistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let list = Self::from_entries(content.lines());

        if list.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist load FAILED: empty file {:?}", path);
            return Err(DenylistError::EmptyFile);
        }

        Ok(list)
    }

    /// Case-insensitive exact match.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Returns the denylist file configured through `PWD_DENYLIST_PATH`, if any.
pub fn denylist_path() -> Option<PathBuf> {
    std::env::var(DENYLIST_PATH_ENV)
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
}

/// Loads the configured denylist without installing it.
///
/// Uses the file named by `PWD_DENYLIST_PATH` when set, otherwise the
/// builtin list.
pub fn load_denylist() -> Result<CommonPasswordDenylist, DenylistError> {
    match denylist_path() {
        Some(path) => CommonPasswordDenylist::from_path(path),
        None => Ok(CommonPasswordDenylist::builtin()),
    }
}

/// Installs the process-wide denylist from the configured source.
///
/// Call once at startup. Idempotent: once a list is installed, later calls
/// return its size and leave it untouched.
///
/// # Example
///
/// ```rust,ignore
/// unsafe { std::env::set_var("PWD_DENYLIST_PATH", "/etc/myapp/denylist.txt"); }
/// pwd_policy::init_denylist()?;
/// ```
pub fn init_denylist() -> Result<usize, DenylistError> {
    if let Some(list) = COMMON_PASSWORDS.get() {
        return Ok(list.len());
    }
    let path = denylist_path();
    let list = match &path {
        Some(path) => CommonPasswordDenylist::from_path(path)?,
        None => CommonPasswordDenylist::builtin(),
    };
    install(list, path.as_deref())
}

/// Installs the process-wide denylist from a specific file path.
pub fn init_denylist_from_path<P: AsRef<Path>>(path: P) -> Result<usize, DenylistError> {
    if let Some(list) = COMMON_PASSWORDS.get() {
        return Ok(list.len());
    }
    let path = path.as_ref();
    install(CommonPasswordDenylist::from_path(path)?, Some(path))
}

fn install(list: CommonPasswordDenylist, source: Option<&Path>) -> Result<usize, DenylistError> {
    // A concurrent installer may win the race; theirs is kept.
    let _ = COMMON_PASSWORDS.set(list);
    let count = denylist().len();

    #[cfg(feature = "tracing")]
    {
        match source {
            Some(path) => tracing::info!("Denylist initialized: {} passwords from {:?}", count, path),
            None => tracing::info!("Denylist initialized: {} passwords from builtin list", count),
        }
    }
    #[cfg(not(feature = "tracing"))]
    let _ = source;

    Ok(count)
}

/// The process-wide denylist.
///
/// Until [`init_denylist`] succeeds this reads the builtin list, without
/// installing it, so a later init still takes effect.
pub fn denylist() -> &'static CommonPasswordDenylist {
    COMMON_PASSWORDS
        .get()
        .unwrap_or_else(|| BUILTIN_FALLBACK.get_or_init(CommonPasswordDenylist::builtin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn set_env(key: &str, value: &str) {
        // SAFETY: tests touching the environment run under #[serial]
        unsafe { std::env::set_var(key, value); }
    }

    fn remove_env(key: &str) {
        // SAFETY: tests touching the environment run under #[serial]
        unsafe { std::env::remove_var(key); }
    }

    fn setup_with_tempfile(passwords: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for pwd in passwords {
            writeln!(temp_file, "{}", pwd).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    fn test_builtin_contains_well_known_passwords() {
        let list = CommonPasswordDenylist::builtin();
        assert!(!list.is_empty());
        assert!(list.contains("password"));
        assert!(list.contains("qwerty123"));
        assert!(list.contains("Password123!"));
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let list = CommonPasswordDenylist::from_entries(["LetMeIn"]);
        assert!(list.contains("letmein"));
        assert!(list.contains("LETMEIN"));
        assert!(!list.contains("letmein1"));
    }

    #[test]
    fn test_from_entries_skips_blank_lines() {
        let list = CommonPasswordDenylist::from_entries(["  hunter2 ", "", "   "]);
        assert_eq!(list.len(), 1);
        assert!(list.contains("hunter2"));
    }

    #[test]
    fn test_from_path_file_not_found() {
        let result = CommonPasswordDenylist::from_path("/nonexistent/path/denylist.txt");
        assert!(matches!(result, Err(DenylistError::FileNotFound(_))));
    }

    #[test]
    fn test_from_path_empty_file() {
        let temp_file = setup_with_tempfile(&["", "  "]);
        let result = CommonPasswordDenylist::from_path(temp_file.path());
        assert!(matches!(result, Err(DenylistError::EmptyFile)));
    }

    #[test]
    fn test_from_path_success() {
        let temp_file = setup_with_tempfile(&["password123", "qwerty", "QWERTY"]);
        let list = CommonPasswordDenylist::from_path(temp_file.path()).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    #[serial]
    fn test_denylist_path_unset() {
        remove_env(DENYLIST_PATH_ENV);
        assert_eq!(denylist_path(), None);
    }

    #[test]
    #[serial]
    fn test_denylist_path_from_env() {
        set_env(DENYLIST_PATH_ENV, "/custom/path/denylist.txt");
        assert_eq!(denylist_path(), Some(PathBuf::from("/custom/path/denylist.txt")));
        remove_env(DENYLIST_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_load_denylist_defaults_to_builtin() {
        remove_env(DENYLIST_PATH_ENV);
        let list = load_denylist().unwrap();
        assert_eq!(list, CommonPasswordDenylist::builtin());
    }

    #[test]
    #[serial]
    fn test_load_denylist_from_env_file() {
        let temp_file = setup_with_tempfile(&["correcthorse"]);
        set_env(DENYLIST_PATH_ENV, temp_file.path().to_str().unwrap());

        let list = load_denylist().unwrap();
        assert_eq!(list.len(), 1);
        assert!(list.contains("CorrectHorse"));

        remove_env(DENYLIST_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_load_denylist_missing_env_file() {
        set_env(DENYLIST_PATH_ENV, "/nonexistent/path/denylist.txt");
        assert!(matches!(load_denylist(), Err(DenylistError::FileNotFound(_))));
        remove_env(DENYLIST_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_init_after_validation_installs_file() {
        remove_env(DENYLIST_PATH_ENV);

        // Validating before any init reads the builtin fallback.
        let pwd = secrecy::SecretString::new("x".to_string().into());
        let _ = crate::validate_password(&pwd, None);
        assert!(!denylist().contains("Tr0ub4dor&7Zq!"));

        let result = init_denylist_from_path("/nonexistent/path/denylist.txt");
        assert!(matches!(result, Err(DenylistError::FileNotFound(_))));

        let temp_file = setup_with_tempfile(&["password", "Tr0ub4dor&7Zq!"]);
        let count = init_denylist_from_path(temp_file.path()).unwrap();
        assert_eq!(count, 2);
        assert!(denylist().contains("tr0ub4dor&7zq!"));

        // Later calls keep the installed list.
        assert_eq!(init_denylist().unwrap(), 2);
        assert_eq!(init_denylist_from_path("/nonexistent/path/denylist.txt").unwrap(), 2);
        assert_eq!(denylist().len(), 2);
    }
}
