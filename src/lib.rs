// P.A.S.H.U. - multilingual livestock breed identification
//
// This library wires localization, a session guard, a mock breed classifier
// and the screen flow into one context object.

// Re-export the flow
pub use pashu_core::*;

// Re-export component crates
pub use pashu_auth;
pub use pashu_config;
pub use pashu_i18n;
pub use pashu_log;
pub use pashu_recognition;
pub use pashu_validation;

// Prelude for common imports
pub mod prelude {
    pub use pashu_core::prelude::*;

    pub use pashu_auth::{AuthGuard, CredentialVerifier, Guard, MockVerifier, UserSession};
    pub use pashu_recognition::{BreedClassifier, Confidence, MockClassifier, RecognitionCatalog};

    pub use async_trait::async_trait;
}
