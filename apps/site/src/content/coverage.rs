//! Translation coverage: every bound key must resolve in every locale and
//! no catalog text may be empty.
//!
//! The applier skips a missing key at runtime and leaves stale text on
//! screen. Tests assert the shipped content is total; boot logs any gap.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::content::Catalog;
use crate::dom::bindings::Binding;
use crate::models::catalog::LocalizedText;
use crate::models::locale::Locale;
use crate::models::translations::DictionaryKind;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct KeyRef {
    pub locale: Locale,
    pub kind: DictionaryKind,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyText {
    /// e.g. `projects[1].description`
    pub path: String,
    pub locale: Locale,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageReport {
    pub bound_keys: usize,
    /// Bound keys with no value for a locale.
    pub missing_keys: Vec<KeyRef>,
    /// Dictionary entries no binding reads.
    pub unused_keys: Vec<KeyRef>,
    pub empty_texts: Vec<EmptyText>,
}

impl CoverageReport {
    /// Unused keys do not affect totality.
    pub fn is_total(&self) -> bool {
        self.missing_keys.is_empty() && self.empty_texts.is_empty()
    }
}

pub fn compute_coverage_report(bindings: &[Binding], catalog: &Catalog) -> CoverageReport {
    let bound: BTreeSet<(DictionaryKind, &str)> =
        bindings.iter().map(|b| (b.kind, b.key)).collect();

    let mut missing_keys = Vec::new();
    let mut unused_keys = Vec::new();

    for locale in Locale::ALL {
        for &(kind, key) in &bound {
            if catalog.translations.get(kind, locale, key).is_none() {
                missing_keys.push(KeyRef {
                    locale,
                    kind,
                    key: key.to_string(),
                });
            }
        }

        for kind in [DictionaryKind::Plain, DictionaryKind::Markup] {
            for key in catalog.translations.dictionary(kind).keys(locale) {
                if !bound.contains(&(kind, key)) {
                    unused_keys.push(KeyRef {
                        locale,
                        kind,
                        key: key.to_string(),
                    });
                }
            }
        }
    }

    CoverageReport {
        bound_keys: bound.len(),
        missing_keys,
        unused_keys,
        empty_texts: find_empty_texts(catalog),
    }
}

fn find_empty_texts(catalog: &Catalog) -> Vec<EmptyText> {
    let mut texts: Vec<(String, &LocalizedText)> = Vec::new();

    for (i, p) in catalog.projects.iter().enumerate() {
        texts.push((format!("projects[{i}].members"), &p.members));
        texts.push((format!("projects[{i}].result"), &p.result));
        texts.push((format!("projects[{i}].description"), &p.description));
    }
    for (i, e) in catalog.educations.iter().enumerate() {
        texts.push((format!("educations[{i}].title"), &e.title));
        for (j, d) in e.details.iter().enumerate() {
            texts.push((format!("educations[{i}].details[{j}]"), &d.text));
        }
    }
    for (i, a) in catalog.activities.iter().enumerate() {
        texts.push((format!("activities[{i}].title"), &a.title));
        for (j, item) in a.items.iter().enumerate() {
            texts.push((format!("activities[{i}].items[{j}]"), &item.text));
        }
    }

    texts
        .into_iter()
        .flat_map(|(path, text)| {
            text.entries()
                .filter(|(_, s)| s.trim().is_empty())
                .map(|(locale, _)| EmptyText {
                    path: path.clone(),
                    locale,
                })
                .collect::<Vec<_>>()
        })
        .collect()
}
