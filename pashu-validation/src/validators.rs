// Credential validators

use crate::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Aadhaar numbers are exactly this many digits.
pub const AADHAAR_DIGITS: usize = 12;

/// Phone numbers are exactly this many digits.
pub const PHONE_DIGITS: usize = 10;

// ASCII digits only; Unicode digit classes (e.g. Devanagari) are rejected.
static AADHAAR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{12}$").unwrap());

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

fn exact_digits(
    pattern: &Regex,
    digits: usize,
    value: &str,
    field: &str,
    constraint: &str,
    message_key: &str,
) -> Result<(), ValidationError> {
    if pattern.is_match(value) {
        return Ok(());
    }
    Err(
        ValidationError::new(field, format!("{} must be exactly {} digits", field, digits))
            .with_constraint(constraint)
            .with_message_key(message_key),
    )
}

/// Validates a 12-digit Aadhaar number
pub struct AadhaarNumber;

impl AadhaarNumber {
    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        exact_digits(&AADHAAR_REGEX, AADHAAR_DIGITS, value, field, "isAadhaar", "invalidAadhaar")
    }
}

/// Validates a 10-digit phone number
pub struct PhoneNumber;

impl PhoneNumber {
    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        exact_digits(&PHONE_REGEX, PHONE_DIGITS, value, field, "isPhone", "invalidPhone")
    }
}
