use super::plural::{PluralCategory, PluralRule};
use serde::Serialize;

/// Phrases for the unread-message notification.
#[derive(Debug, Clone, Serialize)]
pub struct UnreadPhrases {
    /// Shown when there are no unread messages
    pub none: &'static str,

    /// Singular form. Unused by languages without number distinction.
    /// Placeholders: {count}
    pub one: &'static str,

    /// Plural form, or the only counted form.
    /// Placeholders: {count}
    pub other: &'static str,
}

/// All user-facing strings of the greeting page for one language.
///
/// Every catalog is a value of this one type, so all languages expose the same
/// fields and the same function signatures as the default catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Messages {
    /// Page title and heading
    pub title: &'static str,

    /// Name used when the visitor did not give one
    pub default_name: &'static str,

    /// Placeholders: {name}
    pub greeting_template: &'static str,

    pub unread: UnreadPhrases,

    pub plural_rule: PluralRule,
}

impl Messages {
    /// Greet `name`, or the catalog's placeholder name when none is given.
    ///
    /// The name is embedded verbatim; an empty string stays empty.
    pub fn greeting(&self, name: Option<&str>) -> String {
        let name = name.unwrap_or(self.default_name);
        self.greeting_template.replace("{name}", name)
    }

    /// Phrase describing `count` unread messages.
    pub fn unread_notification(&self, count: u64) -> String {
        let template = match self.plural_rule.category(count) {
            PluralCategory::Zero => return self.unread.none.to_string(),
            PluralCategory::One => self.unread.one,
            PluralCategory::Other => self.unread.other,
        };
        template.replace("{count}", &count.to_string())
    }
}

// ==================== English Messages ====================

/// English messages (default language)
pub const ENGLISH_MESSAGES: Messages = Messages {
    title: "Simple i18n implementation with TypeScript",
    default_name: "John Doe",
    greeting_template: "Hello, {name}.",
    unread: UnreadPhrases {
        none: "You have no unread messages.",
        one: "You have {count} unread message.",
        other: "You have {count} unread messages.",
    },
    plural_rule: PluralRule::OneOther,
};

// ==================== Japanese Messages ====================

/// Japanese messages
pub const JAPANESE_MESSAGES: Messages = Messages {
    title: "TypeScript によるシンプルな i18n 実装",
    default_name: "名無しの権兵衛",
    greeting_template: "こんにちは、 {name} さん",
    unread: UnreadPhrases {
        none: "未読メッセージはありません",
        one: "未読メッセージが {count} 通あります",
        other: "未読メッセージが {count} 通あります",
    },
    plural_rule: PluralRule::Invariant,
};
