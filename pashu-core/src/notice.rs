// User-visible notices

use pashu_i18n::{I18n, Language};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// A toast-style message, stored as a localization key so it renders in
/// whatever language is active when it is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub key: String,
}

impl Notice {
    pub fn success(key: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            key: key.into(),
        }
    }

    pub fn info(key: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            key: key.into(),
        }
    }

    pub fn error(key: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            key: key.into(),
        }
    }

    pub fn text(&self, i18n: &I18n, language: Language) -> String {
        i18n.t(&self.key, language)
    }
}
