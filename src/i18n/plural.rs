//! Grammatical number selection for unread counts.
//!
//! There is no shared pluralization algorithm: each catalog names the rule its
//! language follows, and the phrase set it provides has to match that rule.

use serde::Serialize;

/// Which phrase a count should be rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralCategory {
    /// Count is zero ("no unread messages").
    Zero,
    /// Singular form.
    One,
    /// Plural form, or the only form for languages without number.
    Other,
}

/// Number rule of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PluralRule {
    /// 1 is singular, everything else is plural (English).
    OneOther,
    /// Nouns do not inflect for number (Japanese).
    Invariant,
}

impl PluralRule {
    /// Pick the category for `count`. Zero always has its own phrase.
    pub fn category(self, count: u64) -> PluralCategory {
        match (self, count) {
            (_, 0) => PluralCategory::Zero,
            (PluralRule::OneOther, 1) => PluralCategory::One,
            _ => PluralCategory::Other,
        }
    }

    /// Whether the language distinguishes singular from plural.
    pub fn distinguishes_number(self) -> bool {
        matches!(self, PluralRule::OneOther)
    }
}
