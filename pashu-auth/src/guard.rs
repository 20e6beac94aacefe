// Screen guards

use crate::SessionState;

/// Guard trait for protecting screens
///
/// Guards are re-run on every entry of the screen they protect.
pub trait Guard: Send + Sync {
    /// Check if the session may enter
    fn can_activate(&self, session: &SessionState) -> bool;
}

/// Authentication guard - passes iff a user is logged in
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthGuard;

impl AuthGuard {
    pub fn new() -> Self {
        Self
    }
}

impl Guard for AuthGuard {
    fn can_activate(&self, session: &SessionState) -> bool {
        session.is_authenticated()
    }
}

/// Guard that always passes, for public screens
#[derive(Debug, Clone, Copy, Default)]
pub struct PublicGuard;

impl Guard for PublicGuard {
    fn can_activate(&self, _session: &SessionState) -> bool {
        true
    }
}
