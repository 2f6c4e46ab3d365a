#![allow(dead_code)]

//! Renderer. Turns catalog records into container fragments.
//!
//! Each render replaces the whole container (full-fragment replacement) and
//! then re-registers reveal and tilt effects on the new nodes. A page
//! without the container is skipped, not an error.

pub mod education;
pub mod effects;
pub mod experience;
pub mod markup;

use std::sync::Arc;

use tracing::debug;

use crate::content::Catalog;
use crate::dom::Dom;
use crate::errors::SiteError;
use crate::models::locale::Locale;
use crate::render::effects::Effects;
use crate::render::markup::Fragment;

pub const EXPERIENCE_CONTAINER: &str = "experience-timeline";
pub const EDUCATION_CONTAINER: &str = "education-grid";
/// Class the scroll-reveal collaborator watches for.
pub const REVEAL_CLASS: &str = "animate-item";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendered {
    Injected { nodes: usize },
    Skipped,
}

#[derive(Debug, Clone)]
pub struct Renderer {
    catalog: Arc<Catalog>,
}

impl Renderer {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn render_experience(
        &self,
        locale: Locale,
        dom: &mut impl Dom,
        effects: &mut impl Effects,
    ) -> Rendered {
        let fragment = experience::experience_fragment(&self.catalog.projects, locale);
        inject(EXPERIENCE_CONTAINER, fragment, dom, effects)
    }

    pub fn render_education(
        &self,
        locale: Locale,
        dom: &mut impl Dom,
        effects: &mut impl Effects,
    ) -> Rendered {
        let fragment = education::education_fragment(
            &self.catalog.educations,
            &self.catalog.activities,
            locale,
        );
        inject(EDUCATION_CONTAINER, fragment, dom, effects)
    }
}

fn inject(
    container: &'static str,
    fragment: Fragment,
    dom: &mut impl Dom,
    effects: &mut impl Effects,
) -> Rendered {
    let result = if dom.contains(container) {
        dom.set_inner_html(container, &fragment.markup)
    } else {
        Err(SiteError::MissingContainer(container.to_string()))
    };
    if let Err(e) = result {
        debug!(code = e.code(), "Skipping render: {e}");
        return Rendered::Skipped;
    }

    effects.clear(container);
    for node in &fragment.reveal {
        effects.reveal(node);
    }
    for node in &fragment.tilt {
        effects.tilt(node);
    }

    Rendered::Injected {
        nodes: fragment.reveal.len(),
    }
}
