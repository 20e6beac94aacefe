//! Integration tests for pashu-auth

use pashu_auth::*;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_login_guard_logout_cycle() {
    let mut service = SessionService::new(Arc::new(MockVerifier::new(Duration::from_millis(50))));
    let guard = AuthGuard::new();

    assert!(!guard.can_activate(service.state()));

    let user = service
        .try_login(&Credential::phone("9876543210"))
        .await
        .unwrap()
        .clone();
    assert_eq!(user.identity.kind(), CredentialKind::Phone);
    assert!(guard.can_activate(service.state()));

    service.logout();
    assert!(!guard.can_activate(service.state()));
}

#[tokio::test(start_paused = true)]
async fn test_second_login_replaces_session() {
    let mut service = SessionService::default();

    let first = service.try_login(&Credential::aadhaar("123456789012")).await.unwrap().id;
    let second = service.try_login(&Credential::phone("9876543210")).await.unwrap().id;

    assert_ne!(first, second);
    assert_eq!(service.require_user().unwrap().identity.kind(), CredentialKind::Phone);
}

#[tokio::test(start_paused = true)]
async fn test_verify_then_establish() {
    let mut service = SessionService::default();
    let credential = Credential::aadhaar("123456789012");

    let session = service.verifier().verify(&credential).await.unwrap();
    assert!(!service.is_authenticated());

    service.establish(session);
    assert!(service.is_authenticated());
}

#[test]
fn test_auth_error_display() {
    assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials");
    assert_eq!(AuthError::Unauthorized.to_string(), "Unauthorized");

    let err = AuthError::from(Credential::aadhaar("1").validate().unwrap_err());
    assert!(err.to_string().contains("aadhaar"));
    assert_eq!(err.message_key(), "invalidAadhaar");
}
