//! Localization for P.A.S.H.U.
//!
//! Resolves a `(language, key)` pair to display text:
//!
//! - **Closed language set**: [`Language::English`] and [`Language::Hindi`]
//! - **Static tables**: JSON tables embedded at compile time, optionally
//!   overlaid from a directory of `<code>.json` files
//! - **Fallback-to-key**: a key absent from the active table resolves to the
//!   key itself; no other language is ever substituted
//! - **Audit helpers**: [`I18n::missing_keys`] lists silent content gaps
//!
//! # Quick Start
//!
//! ```rust
//! use pashu_i18n::{I18n, Language};
//!
//! let i18n = I18n::builtin();
//!
//! assert_eq!(i18n.t("getStarted", Language::English), "Get Started");
//! assert_eq!(i18n.t("getStarted", Language::Hindi), "शुरू करें");
//!
//! // Unknown keys come back verbatim
//! assert_eq!(i18n.t("notTranslated", Language::Hindi), "notTranslated");
//! ```

mod error;
mod language;
mod messages;

pub use error::I18nError;
pub use language::Language;
pub use messages::{I18n, MessageBundle};

/// Result type for i18n operations
pub type Result<T> = std::result::Result<T, I18nError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{I18n, I18nError, Language, MessageBundle, Result};
}
