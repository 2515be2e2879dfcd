//! Password policy validation library
//!
//! Evaluates a candidate password against a fixed set of nine checks
//! (whitespace, length, character variety, common-password denylist,
//! identity leakage, estimated strength) and reports the outcome of each
//! one alongside human-readable error messages.
//!
//! # Features
//!
//! - `async` (default): Enables debounced, cancellable validation
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Serialization of the validation result
//!
//! # Environment Variables
//!
//! - `PWD_DENYLIST_PATH`: Custom path to a common-password list
//!   (default: the list compiled into the crate)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_policy::{init_denylist, validate_password, UserIdentityHints};
//! use secrecy::SecretString;
//!
//! // Install the denylist (call once at startup)
//! init_denylist().expect("Failed to load denylist");
//!
//! let password = SecretString::new("Tr0ub4dor&7Zq!".to_string().into());
//! let hints = UserIdentityHints::new().with_email("john.doe@example.com");
//! let result = validate_password(&password, Some(&hints));
//!
//! println!("Valid: {}", result.is_valid);
//! println!("Strength: {}", result.strength_label());
//! for error in &result.errors {
//!     println!("- {}", error);
//! }
//! ```

// Internal modules
mod denylist;
mod estimator;
mod evaluator;
mod result;
mod sections;
mod strength;

// Public API
pub use denylist::{
    denylist, denylist_path, init_denylist, init_denylist_from_path, load_denylist,
    CommonPasswordDenylist, DenylistError, DENYLIST_PATH_ENV,
};
pub use estimator::{StrengthEstimator, ZxcvbnEstimator};
pub use evaluator::{validate_password, PasswordPolicyEngine};
pub use result::{PasswordChecks, UserIdentityHints, ValidationResult};
pub use sections::{MIN_LENGTH, MIN_SCORE};
pub use strength::{strength_color_token, strength_label};

#[cfg(feature = "async")]
pub use evaluator::{validate_password_tx, DEBOUNCE_DELAY};
