#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::locale::Locale;

/// Which of the two parallel dictionaries a key lives in.
///
/// Plain values are assigned as text content; markup values replace inner
/// markup. Keeping them apart means a plain string is never parsed as markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DictionaryKind {
    Plain,
    Markup,
}

impl fmt::Display for DictionaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictionaryKind::Plain => f.write_str("plain"),
            DictionaryKind::Markup => f.write_str("markup"),
        }
    }
}

/// Flat key → value table per locale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary(BTreeMap<Locale, BTreeMap<String, String>>);

impl Dictionary {
    pub fn get(&self, locale: Locale, key: &str) -> Option<&str> {
        self.0
            .get(&locale)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    pub fn contains(&self, locale: Locale, key: &str) -> bool {
        self.get(locale, key).is_some()
    }

    /// Keys defined for `locale`, sorted.
    pub fn keys(&self, locale: Locale) -> impl Iterator<Item = &str> + '_ {
        self.0
            .get(&locale)
            .into_iter()
            .flat_map(|table| table.keys().map(String::as_str))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Translations {
    pub plain: Dictionary,
    pub markup: Dictionary,
}

impl Translations {
    pub fn dictionary(&self, kind: DictionaryKind) -> &Dictionary {
        match kind {
            DictionaryKind::Plain => &self.plain,
            DictionaryKind::Markup => &self.markup,
        }
    }

    pub fn get(&self, kind: DictionaryKind, locale: Locale, key: &str) -> Option<&str> {
        self.dictionary(kind).get(locale, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Translations {
        serde_json::from_value(serde_json::json!({
            "plain": {
                "vi": { "nav_home": "Trang chủ" },
                "en": { "nav_home": "Home", "nav_about": "About" }
            },
            "markup": {
                "vi": { "about_description": "Tôi là <strong>sinh viên</strong>" },
                "en": { "about_description": "I'm a <strong>student</strong>" }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_lookup_by_kind_and_locale() {
        let t = sample();
        assert_eq!(t.get(DictionaryKind::Plain, Locale::En, "nav_home"), Some("Home"));
        assert_eq!(
            t.get(DictionaryKind::Markup, Locale::Vi, "about_description"),
            Some("Tôi là <strong>sinh viên</strong>")
        );
    }

    #[test]
    fn test_dictionaries_are_disjoint_namespaces() {
        let t = sample();
        assert!(t.get(DictionaryKind::Markup, Locale::En, "nav_home").is_none());
        assert!(t.get(DictionaryKind::Plain, Locale::En, "about_description").is_none());
    }

    #[test]
    fn test_missing_key_is_none() {
        let t = sample();
        assert!(!t.plain.contains(Locale::Vi, "nav_about"));
        assert!(t.plain.contains(Locale::En, "nav_about"));
    }

    #[test]
    fn test_keys_are_sorted_per_locale() {
        let t = sample();
        let keys: Vec<_> = t.plain.keys(Locale::En).collect();
        assert_eq!(keys, vec!["nav_about", "nav_home"]);
    }
}
