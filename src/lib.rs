//! # Gatherly Validate
//!
//! Input-validation engine for the Gatherly event-discovery product. Every
//! form in the product — sign-up, login, event creation, profile edit,
//! payment details — runs its raw field values through this crate and gets
//! back a sparse map of field errors. The engine is pure: no I/O, no
//! shared state, no async, so the same rule sets serve the mobile app, the
//! web forms, and server-side pre-validation unchanged.
//!
//! ## Example
//!
//! ```rust,ignore
//! use gatherly_validate::prelude::*;
//!
//! let signup = RuleSet::new()
//!     .field("email", vec![Rule::required("Email"), Rule::email()])
//!     .field("password", vec![Rule::password()])
//!     .field(
//!         "confirm_password",
//!         vec![Rule::required("Password confirmation"), Rule::matches("password")],
//!     );
//!
//! let form = FormData::new()
//!     .with("email", "ada@example.com")
//!     .with("password", "Lovelace1")
//!     .with("confirm_password", "Lovelace2");
//!
//! let errors = validate_form(&form, &signup);
//! assert_eq!(errors.get("confirm_password").unwrap().kind, ErrorKind::Mismatch);
//! ```
//!
//! ## Rules
//!
//! Each field lists its rules in priority order; the first failing rule is
//! recorded and the rest are skipped, so "required" feedback beats "bad
//! format" feedback on an empty field. Validators other than the required
//! checks treat an empty value as passing — required-ness is always its
//! own composed rule.
//!
//! ## Error format
//!
//! Errors serialize as a flat JSON object keyed by field:
//!
//! ```json
//! {
//!   "email": {"kind": "format", "message": "Please enter a valid email address"},
//!   "confirm_password": {"kind": "mismatch", "message": "Passwords do not match"}
//! }
//! ```

mod error;
mod form;
pub mod rules;


pub use error::{ErrorKind, ErrorMap, FieldError};
pub use form::{validate_form, FormData, RuleSet};
pub use rules::Rule;

/// Prelude module for form validation
pub mod prelude {
    pub use crate::error::{ErrorKind, ErrorMap, FieldError};
    pub use crate::form::{validate_form, FormData, RuleSet};
    pub use crate::rules::Rule;
}
