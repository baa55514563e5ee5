//! Internationalization (i18n) module for the greeting page.
//!
//! # Architecture
//!
//! - `messages`: Message catalogs, one `const` value per language
//! - `plural`: Per-language rules for singular/plural phrases
//! - `registry`: Registration table of catalogs, lookup and resolution
//! - `language`: Type-safe tag handed out by the registry
//! - `negotiation`: `Accept-Language` parsing and best-match selection
//!
//! # Example
//!
//! ```rust,ignore
//! use ssr_greeter::i18n::LanguageRegistry;
//!
//! let registry = LanguageRegistry::builtin()?;
//! let language = registry.resolve(&["fr", "ja", "en"]); // "ja"
//! let messages = registry.messages(language);
//! println!("{}", messages.unread_notification(2));
//! ```

mod language;
mod messages;
mod negotiation;
mod plural;
mod registry;

pub use language::Language;
pub use messages::{Messages, UnreadPhrases, ENGLISH_MESSAGES, JAPANESE_MESSAGES};
pub use negotiation::{
    negotiate, negotiate_weighted, parse_accept_language, preference_matches, LanguagePreference,
};
pub use plural::{PluralCategory, PluralRule};
pub use registry::{
    builtin_languages, LanguageConfig, LanguageRegistry, RegistryError, DEFAULT_LANGUAGE,
    RESERVED_TAG,
};
