//! Navigation flow for P.A.S.H.U.
//!
//! Ties the session, language setting, recognition stage and screen graph
//! into one [`Flow`]:
//!
//! - **Screens**: `Landing → LanguageSelection → Login → Recognition →
//!   Dashboard`, with `Recognition` and `Dashboard` behind the session guard
//! - **Guarding**: entering a protected screen without a session redirects to
//!   `Login` instead of failing
//! - **One pending operation**: login and recognition suspend; a second
//!   request while one is running is refused, and an outcome that arrives
//!   after its screen was left is discarded
//! - **Notices**: success and failure messages are queued as locale keys
//!
//! ```
//! use pashu_core::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut flow = FlowBuilder::new()
//!     .with_config(AppConfig::instant())
//!     .with_selection(Selection::Fixed(1))
//!     .build();
//!
//! flow.get_started().unwrap();
//! flow.login(Credential::phone("9876543210")).await.unwrap();
//! assert_eq!(flow.screen(), Screen::Recognition);
//!
//! flow.select_image(ImageInput::new(vec![0xff, 0xd8])).unwrap();
//! flow.submit_image().await.unwrap();
//! flow.view_details().unwrap();
//!
//! assert_eq!(flow.payload().unwrap().breed, "Murrah Buffalo");
//! # }
//! ```

pub mod dashboard;
pub mod directory;
pub mod error;
pub mod flow;
pub mod notice;
pub mod pending;
pub mod screen;

pub use dashboard::{DashboardTab, DashboardView, QuickAction};
pub use directory::{Directory, Scheme, VetContact};
pub use error::{FlowError, Result};
pub use flow::{Flow, FlowBuilder, RecognitionScreen, ViewContext};
pub use notice::{Notice, NoticeLevel};
pub use pending::{Completion, PendingKind, PendingTicket};
pub use screen::{NavigationState, Screen, Transition};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Completion, DashboardTab, DashboardView, Flow, FlowBuilder, FlowError, Notice,
        NoticeLevel, PendingKind, QuickAction, Screen, Transition,
    };
    pub use pashu_auth::{Credential, CredentialKind, SessionState};
    pub use pashu_config::AppConfig;
    pub use pashu_i18n::{I18n, Language};
    pub use pashu_recognition::{ImageInput, RecognitionResult, Selection};
}
