//! Session state and screen guards for P.A.S.H.U.
//!
//! Login is mocked: a [`Credential`] is shape-checked locally, then handed to
//! a pluggable [`CredentialVerifier`]. [`MockVerifier`] waits a fixed latency
//! and accepts anything well-formed.
//!
//! ```
//! use pashu_auth::{AuthGuard, Credential, Guard, SessionService};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut service = SessionService::default();
//! assert!(!AuthGuard.can_activate(service.state()));
//!
//! // Malformed credentials fail at once
//! assert!(!service.login(&Credential::aadhaar("12345")).await);
//! # }
//! ```

pub mod credential;
pub mod error;
pub mod guard;
pub mod service;
pub mod session;
pub mod verifier;

pub use credential::{Credential, CredentialKind};
pub use error::{AuthError, Result};
pub use guard::{AuthGuard, Guard, PublicGuard};
pub use service::SessionService;
pub use session::{Identity, SessionState, UserSession};
pub use verifier::{CredentialVerifier, MOCK_USER_NAME, MockVerifier};
