//! Language registry: the set of languages the page can be rendered in.
//!
//! The registry is built once from an explicit registration table, before any
//! request is served, and is read-only afterwards. It is passed to whoever
//! needs it (usually behind an `Arc`) rather than reached for globally.

use super::language::Language;
use super::messages::{Messages, ENGLISH_MESSAGES, JAPANESE_MESSAGES};
use super::negotiation::{negotiate, negotiate_weighted, parse_accept_language};
use thiserror::Error;
use tracing::debug;

/// Tag every resolution falls back to.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Aggregation tag that never names a real catalog.
pub const RESERVED_TAG: &str = "index";

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Language tag (e.g., "en", "ja")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Japanese")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "日本語")
    pub native_name: &'static str,

    pub messages: Messages,
}

/// Errors that keep a registry from being built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no message catalogs registered")]
    Empty,

    #[error("language '{0}' is registered more than once")]
    DuplicateLanguage(String),

    #[error("default language '{0}' has no message catalog")]
    MissingDefault(&'static str),
}

/// Registry of message catalogs, keyed by language tag.
#[derive(Debug)]
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
    acceptable: Vec<&'static str>,
    default_index: usize,
}

impl LanguageRegistry {
    /// Build a registry from a registration table.
    ///
    /// Table order is kept and serves as the priority list when the client
    /// accepts any language. The reserved `index` tag is skipped.
    pub fn new(table: Vec<LanguageConfig>) -> Result<Self, RegistryError> {
        let mut languages: Vec<LanguageConfig> = Vec::with_capacity(table.len());

        for config in table {
            if config.code.eq_ignore_ascii_case(RESERVED_TAG) {
                debug!("Skipping reserved language tag '{}'", config.code);
                continue;
            }
            if languages
                .iter()
                .any(|lang| lang.code.eq_ignore_ascii_case(config.code))
            {
                return Err(RegistryError::DuplicateLanguage(config.code.to_string()));
            }
            languages.push(config);
        }

        if languages.is_empty() {
            return Err(RegistryError::Empty);
        }

        let default_index = languages
            .iter()
            .position(|lang| lang.code.eq_ignore_ascii_case(DEFAULT_LANGUAGE))
            .ok_or(RegistryError::MissingDefault(DEFAULT_LANGUAGE))?;

        let acceptable = languages.iter().map(|lang| lang.code).collect();

        Ok(Self {
            languages,
            acceptable,
            default_index,
        })
    }

    /// Registry of every catalog shipped with the crate.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::new(builtin_languages())
    }

    /// Tags that have a catalog, in priority order.
    pub fn acceptable_languages(&self) -> &[&'static str] {
        &self.acceptable
    }

    /// Get a language configuration by its tag (ASCII case-insensitive).
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages
            .iter()
            .find(|lang| lang.code.eq_ignore_ascii_case(code))
    }

    /// All registered languages, in priority order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Catalog for `tag`, or `None` when the tag is not acceptable.
    pub fn messages_of(&self, tag: &str) -> Option<&Messages> {
        self.get_by_code(tag).map(|lang| &lang.messages)
    }

    /// Validate a tag against the registry.
    pub fn language(&self, tag: &str) -> Option<Language> {
        self.get_by_code(tag).map(|lang| Language::new(lang.code))
    }

    /// Catalog for an already resolved language.
    ///
    /// A language from another registry that this one lacks gets the default
    /// catalog.
    pub fn messages(&self, language: Language) -> &Messages {
        self.messages_of(language.code())
            .unwrap_or(&self.languages[self.default_index].messages)
    }

    /// The language used when nothing else matches.
    pub fn default_language(&self) -> Language {
        Language::new(self.languages[self.default_index].code)
    }

    /// Pick the first of the client's preferences that has a catalog.
    ///
    /// Preferences are taken in the order given; with no match the default
    /// language is returned.
    pub fn resolve<S: AsRef<str>>(&self, preferences: &[S]) -> Language {
        match negotiate(preferences, &self.acceptable) {
            Some(code) => Language::new(code),
            None => {
                let requested: Vec<&str> = preferences.iter().map(AsRef::as_ref).collect();
                self.fall_back(&requested)
            }
        }
    }

    /// Resolve the value of an `Accept-Language` header.
    ///
    /// Entries are weighted by `q`, and languages the client refuses with
    /// `q=0` are never picked through a wildcard. A missing header accepts any
    /// language, so the first registered one wins.
    pub fn resolve_header(&self, header: Option<&str>) -> Language {
        let Some(value) = header else {
            return self.resolve(&["*"]);
        };

        let preferences = parse_accept_language(value);
        match negotiate_weighted(&preferences, &self.acceptable) {
            Some(code) => Language::new(code),
            None => self.fall_back(&[value]),
        }
    }

    fn fall_back(&self, requested: &[&str]) -> Language {
        debug!(
            ?requested,
            "No acceptable language requested, using '{}'", DEFAULT_LANGUAGE
        );
        self.default_language()
    }
}

/// Registration table of the shipped catalogs. English comes first.
pub fn builtin_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            messages: ENGLISH_MESSAGES,
        },
        LanguageConfig {
            code: "ja",
            name: "Japanese",
            native_name: "日本語",
            messages: JAPANESE_MESSAGES,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> LanguageRegistry {
        LanguageRegistry::builtin().expect("builtin registry")
    }

    fn config(code: &'static str) -> LanguageConfig {
        LanguageConfig {
            code,
            name: code,
            native_name: code,
            messages: ENGLISH_MESSAGES,
        }
    }

    // ==================== Construction Tests ====================

    #[test]
    fn test_builtin_acceptable_languages() {
        assert_eq!(registry().acceptable_languages(), &["en", "ja"]);
    }

    #[test]
    fn test_new_skips_reserved_tag() {
        let registry = LanguageRegistry::new(vec![config("index"), config("en")]).unwrap();
        assert_eq!(registry.acceptable_languages(), &["en"]);
        assert!(registry.messages_of("index").is_none());
    }

    #[test]
    fn test_new_empty_table() {
        let result = LanguageRegistry::new(Vec::new());
        assert_eq!(result.unwrap_err(), RegistryError::Empty);
    }

    #[test]
    fn test_new_only_reserved_tag_is_empty() {
        let result = LanguageRegistry::new(vec![config("index")]);
        assert_eq!(result.unwrap_err(), RegistryError::Empty);
    }

    #[test]
    fn test_new_duplicate_language() {
        let result = LanguageRegistry::new(vec![config("en"), config("EN")]);
        assert_eq!(
            result.unwrap_err(),
            RegistryError::DuplicateLanguage("EN".to_string())
        );
    }

    #[test]
    fn test_new_missing_default() {
        let result = LanguageRegistry::new(vec![config("ja")]);
        assert_eq!(result.unwrap_err(), RegistryError::MissingDefault("en"));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RegistryError::MissingDefault("en").to_string(),
            "default language 'en' has no message catalog"
        );
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_messages_of_every_acceptable_language() {
        let registry = registry();
        for tag in registry.acceptable_languages() {
            assert!(registry.messages_of(tag).is_some(), "missing {}", tag);
        }
    }

    #[test]
    fn test_messages_of_unknown_language() {
        let registry = registry();
        assert!(registry.messages_of("fr").is_none());
        assert!(registry.messages_of("").is_none());
        assert!(registry.messages_of("index").is_none());
    }

    #[test]
    fn test_messages_of_returns_matching_catalog() {
        let registry = registry();
        assert_eq!(registry.messages_of("ja").unwrap().title, JAPANESE_MESSAGES.title);
        assert_eq!(registry.messages_of("en").unwrap().title, ENGLISH_MESSAGES.title);
    }

    #[test]
    fn test_get_by_code_japanese() {
        let registry = registry();
        let config = registry.get_by_code("ja").unwrap();
        assert_eq!(config.name, "Japanese");
        assert_eq!(config.native_name, "日本語");
    }

    #[test]
    fn test_language_validation() {
        let registry = registry();
        assert_eq!(registry.language("JA").map(|l| l.code()), Some("ja"));
        assert!(registry.language("fr").is_none());
    }

    #[test]
    fn test_messages_for_foreign_language_falls_back() {
        let registry = LanguageRegistry::new(vec![config("en")]).unwrap();
        let japanese = LanguageRegistry::builtin().unwrap().language("ja").unwrap();
        assert_eq!(registry.messages(japanese).title, ENGLISH_MESSAGES.title);
    }

    // ==================== Resolution Tests ====================

    #[test]
    fn test_resolve_first_mutual_match() {
        assert_eq!(registry().resolve(&["fr", "ja", "en"]).code(), "ja");
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(registry().resolve(&["fr"]).code(), "en");
        assert_eq!(registry().resolve::<&str>(&[]).code(), "en");
    }

    #[test]
    fn test_resolve_header_with_region_and_weights() {
        let registry = registry();
        assert_eq!(
            registry.resolve_header(Some("fr-FR,ja-JP;q=0.9,en;q=0.8")).code(),
            "ja"
        );
        assert_eq!(registry.resolve_header(Some("ja;q=0.1, en;q=0.5")).code(), "en");
    }

    #[test]
    fn test_resolve_header_wildcard_respects_refusals() {
        let registry = registry();
        assert_eq!(registry.resolve_header(Some("en;q=0, *")).code(), "ja");
        assert_eq!(registry.resolve_header(Some("*, en;q=0")).code(), "ja");
        assert_eq!(registry.resolve_header(Some("en;q=0, ja;q=0, *")).code(), "en");
    }

    #[test]
    fn test_default_tag_matches_ignoring_case() {
        let registry = LanguageRegistry::new(vec![config("ja"), config("EN")]).unwrap();
        let default = registry.default_language();
        assert_eq!(default.code(), "EN");
        assert!(default.is_default());
        assert_eq!(registry.resolve(&["fr"]).code(), "EN");
    }

    #[test]
    fn test_resolve_header_missing_uses_first_language() {
        assert_eq!(registry().resolve_header(None).code(), "en");
    }

    #[test]
    fn test_resolve_header_no_match() {
        assert_eq!(registry().resolve_header(Some("de, fr")).code(), "en");
        assert_eq!(registry().resolve_header(Some("")).code(), "en");
    }

    #[test]
    fn test_default_language() {
        let registry = registry();
        let default = registry.default_language();
        assert_eq!(default.code(), DEFAULT_LANGUAGE);
        assert!(default.is_default());
    }
}
