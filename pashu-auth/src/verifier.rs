// Credential verification

use crate::{Credential, Identity, Result, UserSession};
use async_trait::async_trait;
use pashu_log::debug;
use std::time::Duration;

/// Display name given to every mock session.
pub const MOCK_USER_NAME: &str = "User";

/// Checks a credential and issues a session.
///
/// Implementations may suspend; the caller has already validated the shape.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, credential: &Credential) -> Result<UserSession>;
}

/// Accepts any well-formed credential after a fixed latency.
#[derive(Debug, Clone)]
pub struct MockVerifier {
    latency: Duration,
}

impl MockVerifier {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for MockVerifier {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

#[async_trait]
impl CredentialVerifier for MockVerifier {
    async fn verify(&self, credential: &Credential) -> Result<UserSession> {
        tokio::time::sleep(self.latency).await;

        let identity = Identity::try_from(credential)?;
        debug!(target: "pashu::auth", "Mock verifier accepted {:?}", identity);
        Ok(UserSession::new(identity, MOCK_USER_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AuthError;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_mock_waits_then_accepts() {
        let verifier = MockVerifier::default();
        let start = Instant::now();

        let session = verifier.verify(&Credential::aadhaar("123456789012")).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(1000));
        assert_eq!(session.name, "User");
        assert_eq!(session.identity.value(), "123456789012");
    }

    #[tokio::test(start_paused = true)]
    async fn test_mock_rechecks_shape() {
        let verifier = MockVerifier::new(Duration::from_millis(10));
        let result = verifier.verify(&Credential::phone("12")).await;
        assert!(matches!(result, Err(AuthError::Validation(_))));
    }
}
