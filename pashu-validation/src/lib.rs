//! Credential-shape validation for P.A.S.H.U.
//!
//! Every credential is checked here before it reaches a verifier. A failed
//! check yields a [`ValidationError`] naming the field, the constraint and
//! the localization key of the message the user sees.
//!
//! ```
//! use pashu_validation::{AadhaarNumber, PhoneNumber};
//!
//! assert!(AadhaarNumber::validate("123456789012", "aadhaar").is_ok());
//! assert!(AadhaarNumber::validate("1234567890123", "aadhaar").is_err());
//!
//! let err = PhoneNumber::validate("98765abc43", "phone").unwrap_err();
//! assert_eq!(err.message_key.as_deref(), Some("invalidPhone"));
//! ```

mod errors;
mod validators;

pub use errors::ValidationError;
pub use validators::{AADHAAR_DIGITS, AadhaarNumber, PHONE_DIGITS, PhoneNumber};
