use thiserror::Error;

use crate::models::locale::Locale;
use crate::models::translations::DictionaryKind;

/// Site-level error type.
/// Nothing here is fatal inside the core: callers log and skip, the worst
/// outcome is a visually stale element.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Unsupported locale: {0}")]
    InvalidLocale(String),

    #[error("Render container not found: #{0}")]
    MissingContainer(String),

    #[error("Element not found: #{0}")]
    MissingElement(String),

    #[error("No {kind} translation for key '{key}' in locale '{locale}'")]
    MissingTranslationKey {
        locale: Locale,
        kind: DictionaryKind,
        key: String,
    },

    #[error("Preference store unavailable: {0}")]
    PersistenceUnavailable(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SiteError {
    /// Short machine-readable code used as a structured log field.
    pub fn code(&self) -> &'static str {
        match self {
            SiteError::InvalidLocale(_) => "INVALID_LOCALE",
            SiteError::MissingContainer(_) => "MISSING_CONTAINER",
            SiteError::MissingElement(_) => "MISSING_ELEMENT",
            SiteError::MissingTranslationKey { .. } => "MISSING_TRANSLATION_KEY",
            SiteError::PersistenceUnavailable(_) => "PERSISTENCE_UNAVAILABLE",
            SiteError::Catalog(_) => "CATALOG_ERROR",
            SiteError::Config(_) => "CONFIG_ERROR",
        }
    }
}
