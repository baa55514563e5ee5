//! Accept-Language parsing and best-match selection.
//!
//! Preferences are tried in the client's priority order and the first one that
//! matches an available tag wins. A preference matches a tag when:
//! - both are equal ignoring ASCII case (`ja` / `JA`),
//! - its primary subtag equals the tag (`ja-JP` / `ja`),
//! - it is the wildcard `*`.
//!
//! Header entries weighted `q=0` refuse a language. A refused entry blocks a
//! tag whenever it matches that tag more specifically than the accepting
//! entry does, so `en;q=0, *` never picks `en`.

use std::cmp::Ordering;

/// One entry of an `Accept-Language` header.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguagePreference {
    pub tag: String,
    pub quality: f32,
}

impl LanguagePreference {
    /// Whether the client explicitly refuses this language (`q=0`).
    pub fn is_refused(&self) -> bool {
        self.quality <= 0.0
    }
}

/// Parse an `Accept-Language` header into preferences, highest quality first.
///
/// Refused entries (`q=0`) are kept and sort last. Entries with a malformed or
/// out-of-range weight are ignored. Entries of equal weight keep the order
/// they were sent in.
pub fn parse_accept_language(header: &str) -> Vec<LanguagePreference> {
    let mut preferences: Vec<LanguagePreference> =
        header.split(',').filter_map(parse_entry).collect();

    preferences.sort_by(|a, b| {
        b.quality
            .partial_cmp(&a.quality)
            .unwrap_or(Ordering::Equal)
    });
    preferences
}

fn parse_entry(entry: &str) -> Option<LanguagePreference> {
    let mut parts = entry.split(';');
    let tag = parts.next()?.trim();
    if tag.is_empty() {
        return None;
    }

    let mut quality = 1.0;
    for param in parts {
        let param = param.trim();
        if let Some(value) = param.strip_prefix("q=").or_else(|| param.strip_prefix("Q=")) {
            quality = value.trim().parse::<f32>().ok()?;
            if !(0.0..=1.0).contains(&quality) {
                return None;
            }
        }
    }

    Some(LanguagePreference {
        tag: tag.to_string(),
        quality,
    })
}

/// How closely `preference` names `tag`: 2 for the same tag, 1 for a region
/// of it, 0 for the wildcard. `None` when it does not match at all.
fn match_specificity(preference: &str, tag: &str) -> Option<u8> {
    if preference.eq_ignore_ascii_case(tag) {
        return Some(2);
    }
    let primary = preference.split('-').next().unwrap_or(preference);
    if primary.eq_ignore_ascii_case(tag) {
        return Some(1);
    }
    if preference == "*" {
        return Some(0);
    }
    None
}

/// Whether a client preference accepts the given language tag.
pub fn preference_matches(preference: &str, tag: &str) -> bool {
    match_specificity(preference, tag).is_some()
}

/// First tag of `available` accepted by the earliest matching preference.
pub fn negotiate<'a, S: AsRef<str>>(preferences: &[S], available: &[&'a str]) -> Option<&'a str> {
    preferences.iter().find_map(|preference| {
        available
            .iter()
            .copied()
            .find(|tag| preference_matches(preference.as_ref(), tag))
    })
}

/// Like [`negotiate`], for weighted header entries.
///
/// `preferences` must be in priority order, as returned by
/// [`parse_accept_language`]. A tag is skipped when a refused entry matches it
/// more specifically than the entry accepting it.
pub fn negotiate_weighted<'a>(
    preferences: &[LanguagePreference],
    available: &[&'a str],
) -> Option<&'a str> {
    let (accepted, refused): (Vec<_>, Vec<_>) =
        preferences.iter().partition(|pref| !pref.is_refused());

    accepted.iter().find_map(|preference| {
        available.iter().copied().find(|tag| {
            let Some(specificity) = match_specificity(&preference.tag, tag) else {
                return false;
            };
            !refused.iter().any(|refusal| {
                match_specificity(&refusal.tag, tag).is_some_and(|s| s > specificity)
            })
        })
    })
}
