// Session service

use crate::{AuthError, Credential, CredentialVerifier, MockVerifier, Result, SessionState, UserSession};
use pashu_log::{debug, info, warn};
use std::sync::Arc;

/// Owns the session state and the verifier that feeds it.
#[derive(Clone)]
pub struct SessionService {
    state: SessionState,
    verifier: Arc<dyn CredentialVerifier>,
}

impl std::fmt::Debug for SessionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionService")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new(Arc::new(MockVerifier::default()))
    }
}

impl SessionService {
    pub fn new(verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self {
            state: SessionState::Unauthenticated,
            verifier,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    /// Shared handle to the verifier, for drivers running verification
    /// outside the service.
    pub fn verifier(&self) -> Arc<dyn CredentialVerifier> {
        Arc::clone(&self.verifier)
    }

    /// Log in and report only success or failure.
    pub async fn login(&mut self, credential: &Credential) -> bool {
        self.try_login(credential).await.is_ok()
    }

    /// Log in, returning the new session or the reason it failed.
    ///
    /// Shape validation happens first; a malformed credential fails without
    /// waiting on the verifier and leaves the state untouched.
    pub async fn try_login(&mut self, credential: &Credential) -> Result<&UserSession> {
        credential.validate().inspect_err(|e| {
            debug!(target: "pashu::auth", "Rejected {:?}: {}", credential, e);
        })?;

        let verifier = self.verifier();
        match verifier.verify(credential).await {
            Ok(session) => {
                self.establish(session);
                self.require_user()
            }
            Err(e) => {
                warn!(target: "pashu::auth", "Login failed for {}: {}", credential.masked(), e);
                Err(e)
            }
        }
    }

    /// Install a session issued by a verifier.
    pub fn establish(&mut self, session: UserSession) {
        info!(target: "pashu::auth", "Session {} started for {:?}", session.id, session.identity);
        self.state = SessionState::Authenticated(session);
    }

    /// Clear the session unconditionally.
    pub fn logout(&mut self) {
        if let SessionState::Authenticated(user) = &self.state {
            info!(target: "pashu::auth", "Session {} ended", user.id);
        }
        self.state = SessionState::Unauthenticated;
    }

    /// Current user or `Unauthorized`.
    pub fn require_user(&self) -> Result<&UserSession> {
        self.state.user().ok_or(AuthError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::time::Duration;
    use tokio::time::Instant;

    struct RejectAll;

    #[async_trait]
    impl CredentialVerifier for RejectAll {
        async fn verify(&self, _credential: &Credential) -> Result<UserSession> {
            Err(AuthError::InvalidCredentials)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_valid_aadhaar_logs_in_after_latency() {
        let mut service = SessionService::default();
        let start = Instant::now();

        assert!(service.login(&Credential::aadhaar("123456789012")).await);

        assert!(start.elapsed() >= Duration::from_millis(1000));
        assert!(service.is_authenticated());
        assert_eq!(service.require_user().unwrap().name, "User");
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_shape_fails_immediately() {
        let mut service = SessionService::default();
        let start = Instant::now();

        let err = service.try_login(&Credential::aadhaar("12345")).await.unwrap_err();

        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(err.message_key(), "invalidAadhaar");
        assert_eq!(service.state(), &SessionState::Unauthenticated);
    }

    #[tokio::test(start_paused = true)]
    async fn test_phone_login() {
        let mut service = SessionService::default();
        assert!(service.login(&Credential::phone("9876543210")).await);
        assert!(!SessionService::default().login(&Credential::phone("987654321")).await);
    }

    #[tokio::test]
    async fn test_verifier_rejection_keeps_state() {
        let mut service = SessionService::new(Arc::new(RejectAll));
        let err = service.try_login(&Credential::phone("9876543210")).await.unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredentials));
        assert_eq!(err.message_key(), "loginError");
        assert!(!service.is_authenticated());
    }

    #[tokio::test(start_paused = true)]
    async fn test_logout_is_unconditional() {
        let mut service = SessionService::default();
        service.logout();
        assert!(!service.is_authenticated());

        service.login(&Credential::aadhaar("123456789012")).await;
        service.logout();
        assert!(matches!(service.require_user(), Err(AuthError::Unauthorized)));
    }
}
