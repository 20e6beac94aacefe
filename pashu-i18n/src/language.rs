//! Supported Languages
//!
//! The flow supports a closed set of languages. Codes follow BCP 47 primary
//! subtags, so `"hi-IN"` and `"en_US"` select Hindi and English.

use crate::{I18nError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported display language.
///
/// # Examples
///
/// ```
/// use pashu_i18n::Language;
///
/// let hindi: Language = "hi".parse().unwrap();
/// assert_eq!(hindi, Language::Hindi);
/// assert_eq!(hindi.code(), "hi");
/// assert_eq!(Language::default(), Language::English);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// English (`en`)
    #[default]
    #[serde(rename = "en")]
    English,
    /// Hindi (`hi`)
    #[serde(rename = "hi")]
    Hindi,
}

impl Language {
    /// Every supported language, in menu order.
    pub const ALL: [Language; 2] = [Language::English, Language::Hindi];

    /// Language code (ISO 639-1).
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
        }
    }

    /// Name of the language written in that language.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिंदी",
        }
    }

    /// Parse a code or tag (e.g. `"en"`, `"hi-IN"`, `"hindi"`).
    pub fn parse(tag: &str) -> Result<Self> {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_lowercase();

        match primary.as_str() {
            "en" | "eng" | "english" => Ok(Language::English),
            "hi" | "hin" | "hindi" => Ok(Language::Hindi),
            _ => Err(I18nError::UnsupportedLanguage(tag.to_string())),
        }
    }
}

impl FromStr for Language {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert_eq!(Language::parse("en").unwrap(), Language::English);
        assert_eq!(Language::parse("hi").unwrap(), Language::Hindi);
        assert_eq!(Language::parse("HI").unwrap(), Language::Hindi);
        assert_eq!(Language::parse(" hindi ").unwrap(), Language::Hindi);
    }

    #[test]
    fn test_parse_region_tags() {
        assert_eq!(Language::parse("en-US").unwrap(), Language::English);
        assert_eq!(Language::parse("hi_IN").unwrap(), Language::Hindi);
    }

    #[test]
    fn test_parse_unsupported() {
        assert!(matches!(
            Language::parse("fr"),
            Err(I18nError::UnsupportedLanguage(tag)) if tag == "fr"
        ));
        assert!(Language::parse("").is_err());
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(Language::Hindi.to_string(), "hi");
        assert_eq!(format!("{}", Language::English), "en");
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Language::Hindi).unwrap();
        assert_eq!(json, "\"hi\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::English);
    }

    #[test]
    fn test_native_names() {
        assert_eq!(Language::English.native_name(), "English");
        assert_eq!(Language::Hindi.native_name(), "हिंदी");
    }
}
