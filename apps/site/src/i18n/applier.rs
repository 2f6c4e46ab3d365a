//! Translation applier. Pushes the flat dictionaries onto the bound
//! elements of the page shell.
//!
//! Catalog-derived sections are not touched here; the renderer already
//! embeds the right locale in them.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::content::Catalog;
use crate::dom::bindings::Binding;
use crate::dom::Dom;
use crate::errors::SiteError;
use crate::models::locale::Locale;
use crate::models::translations::DictionaryKind;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApplyReport {
    pub updated: usize,
    /// Left unchanged because the key has no value for the locale.
    pub missing_keys: usize,
    /// Bound element not present on the page.
    pub missing_elements: usize,
}

#[derive(Debug, Clone)]
pub struct TranslationApplier {
    bindings: Vec<Binding>,
    catalog: Arc<Catalog>,
}

impl TranslationApplier {
    pub fn new(bindings: &[Binding], catalog: Arc<Catalog>) -> Self {
        Self {
            bindings: bindings.to_vec(),
            catalog,
        }
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Updates every bound element for `locale` and sets the page `lang`.
    /// Each element is independent, so order does not matter and repeating
    /// the call changes nothing.
    pub fn apply(&self, locale: Locale, dom: &mut impl Dom) -> ApplyReport {
        let mut report = ApplyReport::default();

        for binding in &self.bindings {
            let Some(value) = self
                .catalog
                .translations
                .get(binding.kind, locale, binding.key)
            else {
                let e = SiteError::MissingTranslationKey {
                    locale,
                    kind: binding.kind,
                    key: binding.key.to_string(),
                };
                warn!(code = e.code(), element = binding.element, "{e}");
                report.missing_keys += 1;
                continue;
            };

            let result = match binding.kind {
                DictionaryKind::Plain => dom.set_text(binding.element, value),
                DictionaryKind::Markup => dom.set_inner_html(binding.element, value),
            };
            match result {
                Ok(()) => report.updated += 1,
                Err(e) => {
                    debug!(code = e.code(), "{e}");
                    report.missing_elements += 1;
                }
            }
        }

        dom.set_document_lang(locale.code());
        report
    }
}
