// Session state

use crate::credential::{Credential, CredentialKind, mask};
use chrono::{DateTime, Utc};
use pashu_validation::ValidationError;
use std::fmt;
use uuid::Uuid;

/// A validated identifier. Fields are private; the only way in is
/// `TryFrom<&Credential>`, which runs shape validation.
#[derive(Clone, PartialEq, Eq)]
pub struct Identity {
    kind: CredentialKind,
    value: String,
}

impl Identity {
    pub fn kind(&self) -> CredentialKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn masked(&self) -> String {
        mask(&self.value)
    }
}

impl TryFrom<&Credential> for Identity {
    type Error = ValidationError;

    fn try_from(credential: &Credential) -> Result<Self, Self::Error> {
        credential.validate()?;
        Ok(Self {
            kind: credential.kind(),
            value: credential.value().to_string(),
        })
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.kind(), self.masked())
    }
}

/// An authenticated user, held in memory for the life of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSession {
    pub id: Uuid,
    pub identity: Identity,
    pub name: String,
    pub authenticated_at: DateTime<Utc>,
}

impl UserSession {
    pub fn new(identity: Identity, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            identity,
            name: name.into(),
            authenticated_at: Utc::now(),
        }
    }
}

/// Whether a user is logged in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticated(UserSession),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&UserSession> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Unauthenticated => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_requires_valid_credential() {
        let identity = Identity::try_from(&Credential::phone("9876543210")).unwrap();
        assert_eq!(identity.kind(), CredentialKind::Phone);
        assert_eq!(identity.value(), "9876543210");

        assert!(Identity::try_from(&Credential::aadhaar("1234")).is_err());
    }

    #[test]
    fn test_identity_value_always_passes_validation() {
        for credential in [
            Credential::aadhaar("123456789012"),
            Credential::phone("9876543210"),
            Credential::aadhaar("1234567890123"),
            Credential::phone("98765abc43210"),
        ] {
            if let Ok(identity) = Identity::try_from(&credential) {
                let again = match identity.kind() {
                    CredentialKind::Aadhaar => Credential::aadhaar(identity.value()),
                    CredentialKind::Phone => Credential::phone(identity.value()),
                };
                assert!(again.validate().is_ok());
            } else {
                assert!(credential.validate().is_err());
            }
        }
    }

    #[test]
    fn test_identity_debug_is_masked() {
        let identity = Identity::try_from(&Credential::aadhaar("123456789012")).unwrap();
        assert_eq!(format!("{:?}", identity), "Aadhaar(********9012)");
    }

    #[test]
    fn test_session_state() {
        let state = SessionState::default();
        assert!(!state.is_authenticated());
        assert!(state.user().is_none());

        let identity = Identity::try_from(&Credential::aadhaar("123456789012")).unwrap();
        let user = UserSession::new(identity, "User");
        let state = SessionState::Authenticated(user.clone());
        assert!(state.is_authenticated());
        assert_eq!(state.user().map(|u| u.name.as_str()), Some("User"));
        assert_eq!(state.user().map(|u| u.id), Some(user.id));
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        let identity = Identity::try_from(&Credential::phone("9876543210")).unwrap();
        let a = UserSession::new(identity.clone(), "User");
        let b = UserSession::new(identity, "User");
        assert_ne!(a.id, b.id);
    }
}
