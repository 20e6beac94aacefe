//! Message Tables and Resolution
//!
//! Every supported language owns one flat key → string table. Lookups never
//! substitute another language: a key missing from the active table resolves
//! to the key itself, so translation gaps stay visible.

use crate::{I18nError, Language, Result};
use once_cell::sync::Lazy;
use pashu_log::{debug, warn};
use parking_lot::RwLock;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;
use std::sync::Arc;

const EN_TABLE: &str = include_str!("../locales/en.json");
const HI_TABLE: &str = include_str!("../locales/hi.json");

static BUILTIN: Lazy<HashMap<Language, MessageBundle>> = Lazy::new(|| {
    let mut tables = HashMap::new();
    for (language, source) in [(Language::English, EN_TABLE), (Language::Hindi, HI_TABLE)] {
        let bundle = MessageBundle::from_json(source).expect("embedded locale table is valid JSON");
        tables.insert(language, bundle);
    }
    tables
});

/// Messages for a single language.
#[derive(Debug, Clone, Default)]
pub struct MessageBundle {
    messages: HashMap<String, String>,
}

impl MessageBundle {
    /// Create a new empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from JSON.
    ///
    /// Nested objects flatten to dotted keys, so
    /// `{"scheme": {"nlm": {"title": "…"}}}` yields `scheme.nlm.title`.
    /// Non-string leaves are rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut bundle = Self::new();
        bundle.flatten(None, data)?;
        Ok(bundle)
    }

    fn flatten(
        &mut self,
        prefix: Option<&str>,
        data: serde_json::Map<String, serde_json::Value>,
    ) -> Result<()> {
        for (key, value) in data {
            let full_key = match prefix {
                Some(prefix) => format!("{}.{}", prefix, key),
                None => key,
            };

            match value {
                serde_json::Value::String(s) => {
                    self.messages.insert(full_key, s);
                }
                serde_json::Value::Object(obj) => self.flatten(Some(&full_key), obj)?,
                other => {
                    return Err(I18nError::ParseError(format!(
                        "{} must be a string or object, found {}",
                        full_key, other
                    )));
                }
            }
        }
        Ok(())
    }

    /// Add a message.
    pub fn add(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.messages.insert(key.into(), message.into());
    }

    /// Overlay another bundle, replacing existing keys.
    pub fn merge(&mut self, other: MessageBundle) {
        self.messages.extend(other.messages);
    }

    /// Get a message.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(|s| s.as_str())
    }

    /// Check if bundle has a message.
    pub fn has(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    /// Get all message keys.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.messages.keys()
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the bundle holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// The localization resolver.
///
/// Cheap to clone; clones share the same tables.
///
/// # Examples
///
/// ```
/// use pashu_i18n::{I18n, Language};
///
/// let i18n = I18n::builtin();
/// assert_eq!(i18n.t("back", Language::English), "Back");
/// assert_eq!(i18n.t("back", Language::Hindi), "वापस");
/// assert_eq!(i18n.t("no.such.key", Language::Hindi), "no.such.key");
/// ```
#[derive(Clone, Default)]
pub struct I18n {
    bundles: Arc<RwLock<HashMap<Language, MessageBundle>>>,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bundles = self.bundles.read();
        f.debug_struct("I18n")
            .field(
                "bundles",
                &bundles
                    .iter()
                    .map(|(lang, bundle)| (lang.code(), bundle.len()))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl I18n {
    /// Create a resolver with no tables at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver with the tables shipped in the crate.
    pub fn builtin() -> Self {
        Self {
            bundles: Arc::new(RwLock::new(BUILTIN.clone())),
        }
    }

    /// Overlay `<code>.json` files from a directory onto the current tables.
    ///
    /// Files named after unsupported languages are skipped with a warning.
    pub fn load_from_dir(self, dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();

        if !dir.is_dir() {
            return Err(I18nError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Directory not found: {}", dir.display()),
            )));
        }

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();

            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }

            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| I18nError::ParseError(format!("Invalid filename: {}", path.display())))?;

            let language = match Language::parse(stem) {
                Ok(language) => language,
                Err(_) => {
                    warn!(target: "pashu::i18n", "Skipping table for unsupported language: {}", path.display());
                    continue;
                }
            };

            let bundle = MessageBundle::from_json(&fs::read_to_string(&path)?)?;
            debug!(target: "pashu::i18n", "Loaded {} messages for {} from {}", bundle.len(), language, path.display());
            self.extend_bundle(language, bundle);
        }

        Ok(self)
    }

    /// Replace the table for a language.
    pub fn add_bundle(&self, language: Language, bundle: MessageBundle) {
        self.bundles.write().insert(language, bundle);
    }

    /// Overlay messages onto the table for a language.
    pub fn extend_bundle(&self, language: Language, bundle: MessageBundle) {
        self.bundles
            .write()
            .entry(language)
            .or_default()
            .merge(bundle);
    }

    /// Resolve a key in the given language, falling back to the key itself.
    pub fn t(&self, key: &str, language: Language) -> String {
        self.bundles
            .read()
            .get(&language)
            .and_then(|bundle| bundle.get(key))
            .map(str::to_string)
            .unwrap_or_else(|| key.to_string())
    }

    /// Resolve with `{name}` placeholder substitution.
    pub fn t_args(&self, key: &str, language: Language, args: &[(&str, &str)]) -> String {
        let mut result = self.t(key, language);

        for (name, value) in args {
            let placeholder = format!("{{{}}}", name);
            result = result.replace(&placeholder, value);
        }

        result
    }

    /// Check if a message exists for the language.
    pub fn has(&self, key: &str, language: Language) -> bool {
        self.bundles
            .read()
            .get(&language)
            .is_some_and(|bundle| bundle.has(key))
    }

    /// Keys present in some table but missing from `language`, sorted.
    pub fn missing_keys(&self, language: Language) -> Vec<String> {
        let bundles = self.bundles.read();
        let all: BTreeSet<&String> = bundles.values().flat_map(|b| b.keys()).collect();

        all.into_iter()
            .filter(|key| !bundles.get(&language).is_some_and(|b| b.has(key)))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_i18n() -> I18n {
        let i18n = I18n::new();

        let mut en = MessageBundle::new();
        en.add("hello", "Hello!");
        en.add("greeting", "Hello, {name}!");
        en.add("onlyEnglish", "English only");
        i18n.add_bundle(Language::English, en);

        let mut hi = MessageBundle::new();
        hi.add("hello", "नमस्ते!");
        hi.add("greeting", "नमस्ते, {name}!");
        i18n.add_bundle(Language::Hindi, hi);

        i18n
    }

    #[test]
    fn test_simple_translation() {
        let i18n = create_test_i18n();

        assert_eq!(i18n.t("hello", Language::English), "Hello!");
        assert_eq!(i18n.t("hello", Language::Hindi), "नमस्ते!");
    }

    #[test]
    fn test_translation_with_args() {
        let i18n = create_test_i18n();

        let msg = i18n.t_args("greeting", Language::English, &[("name", "Asha")]);
        assert_eq!(msg, "Hello, Asha!");

        let msg = i18n.t_args("greeting", Language::Hindi, &[("name", "Asha")]);
        assert_eq!(msg, "नमस्ते, Asha!");
    }

    #[test]
    fn test_missing_key_returns_key() {
        let i18n = create_test_i18n();
        assert_eq!(i18n.t("unknown.key", Language::English), "unknown.key");
    }

    #[test]
    fn test_no_cross_language_fallback() {
        let i18n = create_test_i18n();

        // Present in English only: Hindi must show the key, not English text.
        assert_eq!(i18n.t("onlyEnglish", Language::Hindi), "onlyEnglish");
        assert!(!i18n.has("onlyEnglish", Language::Hindi));
        assert_eq!(i18n.missing_keys(Language::Hindi), vec!["onlyEnglish".to_string()]);
        assert!(i18n.missing_keys(Language::English).is_empty());
    }

    #[test]
    fn test_empty_resolver_echoes_keys() {
        let i18n = I18n::new();
        assert_eq!(i18n.t("back", Language::English), "back");
    }

    #[test]
    fn test_message_bundle_from_json_flattens() {
        let json = r#"{
            "hello": "Hello!",
            "scheme": {
                "nlm": { "title": "National Livestock Mission" }
            }
        }"#;

        let bundle = MessageBundle::from_json(json).unwrap();

        assert_eq!(bundle.get("hello"), Some("Hello!"));
        assert_eq!(bundle.get("scheme.nlm.title"), Some("National Livestock Mission"));
        assert_eq!(bundle.len(), 2);
    }

    #[test]
    fn test_message_bundle_rejects_non_strings() {
        let result = MessageBundle::from_json(r#"{"count": 3}"#);
        assert!(matches!(result, Err(I18nError::ParseError(_))));
    }

    #[test]
    fn test_builtin_tables_are_complete() {
        let i18n = I18n::builtin();
        for language in Language::ALL {
            assert!(
                i18n.missing_keys(language).is_empty(),
                "{} is missing {:?}",
                language,
                i18n.missing_keys(language)
            );
        }
        assert_eq!(i18n.t("loginSuccess", Language::English), "Login successful!");
        assert_eq!(i18n.t("scheme.rashtriyaGokulMission.title", Language::Hindi), "राष्ट्रीय गोकुल मिशन");
    }

    #[test]
    fn test_clones_share_tables() {
        let i18n = I18n::new();
        let clone = i18n.clone();

        let mut en = MessageBundle::new();
        en.add("late", "Added later");
        i18n.add_bundle(Language::English, en);

        assert_eq!(clone.t("late", Language::English), "Added later");
    }

    #[test]
    fn test_load_from_dir_overlays() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("hi.json"), r#"{"back": "पीछे"}"#).unwrap();
        fs::write(dir.path().join("fr.json"), r#"{"back": "Retour"}"#).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let i18n = I18n::builtin().load_from_dir(dir.path()).unwrap();

        assert_eq!(i18n.t("back", Language::Hindi), "पीछे");
        assert_eq!(i18n.t("back", Language::English), "Back");
        assert_eq!(i18n.t("continue", Language::Hindi), "जारी रखें");
    }

    #[test]
    fn test_load_from_missing_dir() {
        let result = I18n::new().load_from_dir("/definitely/not/here");
        assert!(matches!(result, Err(I18nError::IoError(_))));
    }
}
