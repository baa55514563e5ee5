//! Language type: a tag that has been checked against a registry.

use super::registry::DEFAULT_LANGUAGE;
use std::fmt;

/// A resolved language.
///
/// Only a `LanguageRegistry` hands these out, so holding one means the tag had
/// a catalog when it was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// Language tag as registered (e.g., "en", "ja")
    code: &'static str,
}

impl Language {
    pub(crate) fn new(code: &'static str) -> Self {
        Self { code }
    }

    /// Get the registered language tag.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Whether this is the fallback language.
    pub fn is_default(&self) -> bool {
        self.code.eq_ignore_ascii_case(DEFAULT_LANGUAGE)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
