//! Typed form of the page's translation tags.
//!
//! The markup layer still tags elements with `data-i18n="key"` and
//! `data-i18n-html="key"`; this table is the same information resolved once,
//! keyed by a stable element id, so the applier never scans attributes.

use serde::Serialize;

use crate::models::translations::DictionaryKind;

pub const PLAIN_ATTRIBUTE: &str = "data-i18n";
pub const MARKUP_ATTRIBUTE: &str = "data-i18n-html";

/// One tagged element: which dictionary and key supply its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Binding {
    pub element: &'static str,
    pub kind: DictionaryKind,
    pub key: &'static str,
}

impl Binding {
    pub const fn plain(element: &'static str, key: &'static str) -> Self {
        Self {
            element,
            kind: DictionaryKind::Plain,
            key,
        }
    }

    pub const fn markup(element: &'static str, key: &'static str) -> Self {
        Self {
            element,
            kind: DictionaryKind::Markup,
            key,
        }
    }

    /// The tag attribute this binding corresponds to in the markup layer.
    pub fn attribute(&self) -> &'static str {
        match self.kind {
            DictionaryKind::Plain => PLAIN_ATTRIBUTE,
            DictionaryKind::Markup => MARKUP_ATTRIBUTE,
        }
    }
}

/// Every translated element of the page shell.
/// Desktop and mobile navigation share keys.
pub const PAGE_BINDINGS: &[Binding] = &[
    // Nav
    Binding::plain("nav-link-home", "nav_home"),
    Binding::plain("nav-link-about", "nav_about"),
    Binding::plain("nav-link-goals", "nav_goals"),
    Binding::plain("nav-link-experience", "nav_experience"),
    Binding::plain("nav-link-skills", "nav_skills"),
    Binding::plain("nav-link-education", "nav_education"),
    Binding::plain("nav-link-contact", "nav_contact"),
    Binding::plain("mobile-link-home", "nav_home"),
    Binding::plain("mobile-link-about", "nav_about"),
    Binding::plain("mobile-link-goals", "nav_goals"),
    Binding::plain("mobile-link-experience", "nav_experience"),
    Binding::plain("mobile-link-skills", "nav_skills"),
    Binding::plain("mobile-link-education", "nav_education"),
    Binding::plain("mobile-link-contact", "nav_contact"),
    // Hero
    Binding::plain("hero-greeting", "hero_greeting"),
    Binding::plain("hero-description", "hero_description"),
    Binding::plain("hero-cta-contact", "hero_cta_contact"),
    Binding::plain("hero-cta-projects", "hero_cta_projects"),
    Binding::plain("scroll-down", "scroll_down"),
    // About
    Binding::plain("section-about", "section_about"),
    Binding::markup("about-description", "about_description"),
    Binding::plain("label-fullname", "label_fullname"),
    Binding::plain("label-dob", "label_dob"),
    Binding::plain("label-gender", "label_gender"),
    Binding::plain("value-gender", "value_gender"),
    Binding::plain("label-address", "label_address"),
    Binding::plain("label-phone", "label_phone"),
    Binding::plain("label-email", "label_email"),
    Binding::plain("stat-projects", "stat_projects"),
    Binding::plain("stat-semesters", "stat_semesters"),
    // Goals
    Binding::plain("section-goals", "section_goals"),
    Binding::plain("goal-short-title", "goal_short_title"),
    Binding::plain("goal-short-period", "goal_short_period"),
    Binding::plain("goal-short-1", "goal_short_1"),
    Binding::plain("goal-short-2", "goal_short_2"),
    Binding::plain("goal-long-title", "goal_long_title"),
    Binding::plain("goal-long-period", "goal_long_period"),
    Binding::plain("goal-long-1", "goal_long_1"),
    Binding::plain("goal-long-2", "goal_long_2"),
    // Experience
    Binding::plain("section-experience", "section_experience"),
    // Skills
    Binding::plain("section-skills", "section_skills"),
    Binding::plain("skills-technical", "skills_technical"),
    Binding::plain("skills-tools", "skills_tools"),
    Binding::plain("skills-soft", "skills_soft"),
    Binding::plain("soft-english", "soft_english"),
    Binding::plain("soft-eager", "soft_eager"),
    Binding::plain("soft-presenting", "soft_presenting"),
    // Education
    Binding::plain("section-education", "section_education"),
    // Contact
    Binding::plain("section-contact", "section_contact"),
    Binding::plain("contact-intro", "contact_intro"),
    Binding::plain("contact-phone", "contact_phone"),
    Binding::plain("contact-address", "contact_address"),
];
