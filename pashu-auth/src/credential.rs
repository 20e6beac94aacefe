//! Login credentials
//!
//! A credential is exactly one of an Aadhaar number or a phone number; the
//! enum makes "both" unrepresentable. Raw values never reach logs or `Debug`
//! output, only [`Credential::masked`].

use pashu_validation::{AADHAAR_DIGITS, AadhaarNumber, PHONE_DIGITS, PhoneNumber, ValidationError};
use std::fmt;

/// Which identifier the user chose to log in with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CredentialKind {
    #[default]
    Aadhaar,
    Phone,
}

impl CredentialKind {
    /// Field name used in validation errors and i18n keys.
    pub fn field(&self) -> &'static str {
        match self {
            CredentialKind::Aadhaar => "aadhaar",
            CredentialKind::Phone => "phone",
        }
    }

    /// Required number of digits.
    pub fn digits(&self) -> usize {
        match self {
            CredentialKind::Aadhaar => AADHAAR_DIGITS,
            CredentialKind::Phone => PHONE_DIGITS,
        }
    }
}

/// A credential as entered, not yet validated.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    Aadhaar(String),
    Phone(String),
}

impl Credential {
    pub fn aadhaar(value: impl Into<String>) -> Self {
        Credential::Aadhaar(value.into())
    }

    pub fn phone(value: impl Into<String>) -> Self {
        Credential::Phone(value.into())
    }

    /// Build from raw keyboard input. Whitespace is removed (so grouped
    /// entry like `1234 5678 9012` works); everything else is kept for
    /// [`Credential::validate`] to judge.
    pub fn from_input(kind: CredentialKind, raw: &str) -> Self {
        let value: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        match kind {
            CredentialKind::Aadhaar => Credential::Aadhaar(value),
            CredentialKind::Phone => Credential::Phone(value),
        }
    }

    pub fn kind(&self) -> CredentialKind {
        match self {
            Credential::Aadhaar(_) => CredentialKind::Aadhaar,
            Credential::Phone(_) => CredentialKind::Phone,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Credential::Aadhaar(v) | Credential::Phone(v) => v,
        }
    }

    /// Aadhaar: exactly 12 ASCII digits. Phone: exactly 10 ASCII digits.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Credential::Aadhaar(v) => AadhaarNumber::validate(v, self.kind().field()),
            Credential::Phone(v) => PhoneNumber::validate(v, self.kind().field()),
        }
    }

    /// All but the last four characters replaced by `*`.
    pub fn masked(&self) -> String {
        mask(self.value())
    }
}

pub(crate) fn mask(value: &str) -> String {
    let len = value.chars().count();
    let keep = if len > 4 { 4 } else { 0 };
    value
        .chars()
        .enumerate()
        .map(|(i, c)| if i < len - keep { '*' } else { c })
        .collect()
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::Aadhaar(_) => f.debug_tuple("Aadhaar").field(&self.masked()).finish(),
            Credential::Phone(_) => f.debug_tuple("Phone").field(&self.masked()).finish(),
        }
    }
}
