#![allow(dead_code)]

//! In-memory page model used by the preview host and the tests.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::dom::bindings::Binding;
use crate::dom::Dom;
use crate::errors::SiteError;
use crate::i18n::toggle::{option_id, DATA_LANG_ATTRIBUTE, TOGGLE_ID};
use crate::models::locale::Locale;
use crate::models::translations::{DictionaryKind, Translations};
use crate::render::markup::escape_html;
use crate::render::{EDUCATION_CONTAINER, EXPERIENCE_CONTAINER};

/// Element content as last assigned. Text is kept literal and only escaped
/// when read back as markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Content {
    Text(String),
    Markup(String),
}

impl Default for Content {
    fn default() -> Self {
        Content::Text(String::new())
    }
}

impl Content {
    pub fn inner_html(&self) -> Cow<'_, str> {
        match self {
            Content::Text(t) => escape_html(t),
            Content::Markup(m) => Cow::Borrowed(m),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Element {
    pub content: Content,
    pub classes: BTreeSet<String>,
    pub attributes: BTreeMap<String, String>,
}

/// One recorded mutation, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Content { id: String },
    Class { id: String, class: String, on: bool },
    Lang(String),
    BodyClass { class: String, on: bool },
    RootStyle { property: String, value: String },
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Document {
    lang: String,
    body_classes: BTreeSet<String>,
    root_style: BTreeMap<String, String>,
    elements: BTreeMap<String, Element>,
    #[serde(skip)]
    journal: Vec<Mutation>,
}

impl Document {
    pub fn new(lang: &str) -> Self {
        Self {
            lang: lang.to_string(),
            ..Default::default()
        }
    }

    /// Builds the static page shell the core operates on: both render
    /// containers, the locale toggle, and every bound element seeded with
    /// default-locale content.
    pub fn shell(bindings: &[Binding], translations: &Translations) -> Self {
        let default = Locale::default();
        let mut doc = Self::new(default.code());

        doc.insert(EXPERIENCE_CONTAINER, Element::default());
        doc.insert(EDUCATION_CONTAINER, Element::default());
        doc.insert(TOGGLE_ID, Element::default());
        for locale in Locale::ALL {
            let mut option = Element {
                content: Content::Text(locale.code().to_uppercase()),
                ..Default::default()
            };
            option
                .attributes
                .insert(DATA_LANG_ATTRIBUTE.to_string(), locale.code().to_string());
            doc.insert(&option_id(locale), option);
        }

        for binding in bindings {
            let seeded = translations
                .get(binding.kind, default, binding.key)
                .unwrap_or_default()
                .to_string();
            let mut element = Element {
                content: match binding.kind {
                    DictionaryKind::Plain => Content::Text(seeded),
                    DictionaryKind::Markup => Content::Markup(seeded),
                },
                ..Default::default()
            };
            element
                .attributes
                .insert(binding.attribute().to_string(), binding.key.to_string());
            doc.insert(binding.element, element);
        }

        doc
    }

    pub fn insert(&mut self, id: &str, element: Element) {
        self.elements.insert(id.to_string(), element);
    }

    pub fn remove(&mut self, id: &str) -> Option<Element> {
        self.elements.remove(id)
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn inner_html(&self, id: &str) -> Option<Cow<'_, str>> {
        self.element(id).map(|e| e.content.inner_html())
    }

    /// Literal text of a text-content element; `None` for markup content.
    pub fn text(&self, id: &str) -> Option<&str> {
        match &self.element(id)?.content {
            Content::Text(t) => Some(t),
            Content::Markup(_) => None,
        }
    }

    pub fn attribute(&self, id: &str, name: &str) -> Option<&str> {
        self.element(id)?.attributes.get(name).map(String::as_str)
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.element(id).is_some_and(|e| e.classes.contains(class))
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn body_has_class(&self, class: &str) -> bool {
        self.body_classes.contains(class)
    }

    pub fn root_style(&self, property: &str) -> Option<&str> {
        self.root_style.get(property).map(String::as_str)
    }

    pub fn journal(&self) -> &[Mutation] {
        &self.journal
    }

    pub fn clear_journal(&mut self) {
        self.journal.clear();
    }

    fn element_mut(&mut self, id: &str) -> Result<&mut Element, SiteError> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| SiteError::MissingElement(id.to_string()))
    }
}

impl Dom for Document {
    fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn set_text(&mut self, id: &str, text: &str) -> Result<(), SiteError> {
        self.element_mut(id)?.content = Content::Text(text.to_string());
        self.journal.push(Mutation::Content { id: id.to_string() });
        Ok(())
    }

    fn set_inner_html(&mut self, id: &str, markup: &str) -> Result<(), SiteError> {
        self.element_mut(id)?.content = Content::Markup(markup.to_string());
        self.journal.push(Mutation::Content { id: id.to_string() });
        Ok(())
    }

    fn set_class(&mut self, id: &str, class: &str, on: bool) -> Result<(), SiteError> {
        let classes = &mut self.element_mut(id)?.classes;
        if on {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
        self.journal.push(Mutation::Class {
            id: id.to_string(),
            class: class.to_string(),
            on,
        });
        Ok(())
    }

    fn set_document_lang(&mut self, code: &str) {
        self.lang = code.to_string();
        self.journal.push(Mutation::Lang(code.to_string()));
    }

    fn set_body_class(&mut self, class: &str, on: bool) {
        if on {
            self.body_classes.insert(class.to_string());
        } else {
            self.body_classes.remove(class);
        }
        self.journal.push(Mutation::BodyClass {
            class: class.to_string(),
            on,
        });
    }

    fn set_root_style(&mut self, property: &str, value: &str) {
        self.root_style
            .insert(property.to_string(), value.to_string());
        self.journal.push(Mutation::RootStyle {
            property: property.to_string(),
            value: value.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;
    use crate::dom::PAGE_BINDINGS;

    fn shell() -> Document {
        let catalog = Catalog::load().unwrap();
        Document::shell(PAGE_BINDINGS, &catalog.translations)
    }

    #[test]
    fn test_shell_has_containers_and_toggle() {
        let doc = shell();
        assert!(doc.contains(EXPERIENCE_CONTAINER));
        assert!(doc.contains(EDUCATION_CONTAINER));
        assert!(doc.contains(TOGGLE_ID));
        assert_eq!(doc.attribute("lang-option-en", DATA_LANG_ATTRIBUTE), Some("en"));
        assert_eq!(doc.attribute("lang-option-vi", DATA_LANG_ATTRIBUTE), Some("vi"));
        assert_eq!(doc.lang(), "vi");
    }

    #[test]
    fn test_shell_seeds_bound_elements_with_default_locale() {
        let doc = shell();
        assert_eq!(doc.text("nav-link-home"), Some("Trang chủ"));
        assert_eq!(doc.attribute("nav-link-home", "data-i18n"), Some("nav_home"));
        assert_eq!(
            doc.attribute("about-description", "data-i18n-html"),
            Some("about_description")
        );
        assert!(doc
            .inner_html("about-description")
            .unwrap()
            .contains("<strong>Lập trình ứng dụng di động</strong>"));
    }

    #[test]
    fn test_text_content_is_escaped_when_read_as_markup() {
        let mut doc = Document::new("vi");
        doc.insert("x", Element::default());
        doc.set_text("x", "<strong>Java & Kotlin</strong>").unwrap();
        assert_eq!(doc.text("x"), Some("<strong>Java & Kotlin</strong>"));
        assert_eq!(
            doc.inner_html("x").unwrap(),
            "&lt;strong&gt;Java &amp; Kotlin&lt;/strong&gt;"
        );
    }

    #[test]
    fn test_markup_content_is_kept_verbatim() {
        let mut doc = Document::new("vi");
        doc.insert("x", Element::default());
        doc.set_inner_html("x", "<b>hi</b>").unwrap();
        assert_eq!(doc.inner_html("x").unwrap(), "<b>hi</b>");
        assert_eq!(doc.text("x"), None);
    }

    #[test]
    fn test_missing_element_is_reported() {
        let mut doc = Document::new("vi");
        let err = doc.set_text("nowhere", "x").unwrap_err();
        assert!(matches!(err, SiteError::MissingElement(ref id) if id == "nowhere"));
        assert!(doc.set_class("nowhere", "active", true).is_err());
        assert!(doc.journal().is_empty());
    }

    #[test]
    fn test_journal_records_mutations_in_order() {
        let mut doc = Document::new("vi");
        doc.insert("x", Element::default());
        doc.set_body_class("lang-switching", true);
        doc.set_class("x", "active", true).unwrap();
        doc.set_document_lang("en");
        doc.set_body_class("lang-switching", false);
        assert_eq!(
            doc.journal(),
            &[
                Mutation::BodyClass {
                    class: "lang-switching".to_string(),
                    on: true
                },
                Mutation::Class {
                    id: "x".to_string(),
                    class: "active".to_string(),
                    on: true
                },
                Mutation::Lang("en".to_string()),
                Mutation::BodyClass {
                    class: "lang-switching".to_string(),
                    on: false
                },
            ]
        );
        assert!(!doc.body_has_class("lang-switching"));
        assert!(doc.has_class("x", "active"));
    }

    #[test]
    fn test_snapshot_serializes_without_journal() {
        let mut doc = Document::new("vi");
        doc.insert("x", Element::default());
        doc.set_text("x", "hello").unwrap();
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json.get("journal").is_none());
        assert_eq!(json["elements"]["x"]["content"]["type"], "text");
        assert_eq!(json["elements"]["x"]["content"]["value"], "hello");
    }
}
