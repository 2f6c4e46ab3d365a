//! Document boundary.
//!
//! The core never touches a concrete DOM. Hosts implement `Dom` (a wasm
//! binding, the in-memory `Document`, or a test fake) and the renderer,
//! applier and orchestrator drive it through these few mutations.

pub mod bindings;
pub mod document;

pub use bindings::PAGE_BINDINGS;
pub use document::Document;

use crate::errors::SiteError;

/// Mutations the core performs on the page.
///
/// Element-level operations fail with `MissingElement` when the id is not on
/// the page; callers decide whether that is worth more than a log line.
pub trait Dom {
    fn contains(&self, id: &str) -> bool;

    /// Replaces the element's content with literal text.
    fn set_text(&mut self, id: &str, text: &str) -> Result<(), SiteError>;

    /// Replaces the element's content with trusted markup.
    fn set_inner_html(&mut self, id: &str, markup: &str) -> Result<(), SiteError>;

    fn set_class(&mut self, id: &str, class: &str, on: bool) -> Result<(), SiteError>;

    /// Page-level `lang` attribute on the root element.
    fn set_document_lang(&mut self, code: &str);

    fn set_body_class(&mut self, class: &str, on: bool);

    /// Custom property on the root element's inline style.
    fn set_root_style(&mut self, property: &str, value: &str);
}
