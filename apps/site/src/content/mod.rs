//! Content catalog: projects, education, activities and the two
//! translation dictionaries.
//!
//! The data lives in `content/*.json` next to the crate and is embedded at
//! compile time. Adding or removing an entry only touches those files.

pub mod coverage;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::SiteError;
use crate::models::catalog::{ActivityRecord, EducationRecord, ProjectRecord};
use crate::models::translations::Translations;

const CATALOG_JSON: &str = include_str!("../../content/catalog.json");
const TRANSLATIONS_JSON: &str = include_str!("../../content/translations.json");

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Records {
    projects: Vec<ProjectRecord>,
    educations: Vec<EducationRecord>,
    activities: Vec<ActivityRecord>,
}

/// Immutable once loaded; share it behind an `Arc`.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub projects: Vec<ProjectRecord>,
    pub educations: Vec<EducationRecord>,
    pub activities: Vec<ActivityRecord>,
    pub translations: Translations,
}

impl Catalog {
    /// Loads the embedded catalog.
    pub fn load() -> Result<Self, SiteError> {
        Self::from_json(CATALOG_JSON, TRANSLATIONS_JSON)
    }

    pub fn from_json(records: &str, translations: &str) -> Result<Self, SiteError> {
        let Records {
            projects,
            educations,
            activities,
        } = serde_json::from_str(records)?;
        let translations: Translations = serde_json::from_str(translations)?;

        debug!(
            projects = projects.len(),
            educations = educations.len(),
            activities = activities.len(),
            "Catalog loaded"
        );

        Ok(Catalog {
            projects,
            educations,
            activities,
            translations,
        })
    }
}
