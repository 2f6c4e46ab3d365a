#![allow(dead_code)]

use tracing::{debug, info, warn};

use crate::errors::SiteError;
use crate::models::locale::Locale;
use crate::prefs::{PreferenceStore, LOCALE_PREFERENCE_KEY};

/// The single current locale for the page session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocaleState {
    pub current: Locale,
}

/// Owns `LocaleState` and keeps it in step with the preference store.
#[derive(Debug)]
pub struct LocaleStore<P> {
    state: LocaleState,
    prefs: P,
}

impl<P: PreferenceStore> LocaleStore<P> {
    /// Reads the persisted preference once; this is the startup load.
    pub fn open(prefs: P) -> Self {
        let current = load_persisted(&prefs);
        info!("Locale on load: {current}");
        Self {
            state: LocaleState { current },
            prefs,
        }
    }

    pub fn current(&self) -> Locale {
        self.state.current
    }

    pub fn state(&self) -> LocaleState {
        self.state
    }

    /// Sets and persists the locale. A failed write is logged and dropped.
    pub fn set_current(&mut self, locale: Locale) {
        self.state.current = locale;
        if let Err(e) = self.prefs.set(LOCALE_PREFERENCE_KEY, locale.code()) {
            warn!(code = e.code(), "Locale preference not saved: {e}");
        }
    }

    /// `set_current` for a raw option code; unknown codes change nothing.
    pub fn set_current_code(&mut self, code: &str) -> Result<Locale, SiteError> {
        let locale: Locale = code.parse()?;
        self.set_current(locale);
        Ok(locale)
    }

    pub fn prefs(&self) -> &P {
        &self.prefs
    }

    pub fn into_prefs(self) -> P {
        self.prefs
    }
}

/// The persisted locale if it names a supported one, else the default.
pub fn load_persisted(prefs: &impl PreferenceStore) -> Locale {
    match prefs.get(LOCALE_PREFERENCE_KEY) {
        Ok(Some(code)) => code.parse().unwrap_or_else(|e: SiteError| {
            warn!(code = e.code(), "Ignoring stored locale: {e}");
            Locale::default()
        }),
        Ok(None) => Locale::default(),
        Err(e) => {
            debug!(code = e.code(), "Preference store unreadable, using default: {e}");
            Locale::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::{FilePreferenceStore, MemoryPreferenceStore};

    #[test]
    fn test_empty_store_loads_default() {
        assert_eq!(load_persisted(&MemoryPreferenceStore::new()), Locale::Vi);
    }

    #[test]
    fn test_unsupported_value_loads_default() {
        for raw in ["fr", "", "EN", "{\"lang\":\"en\"}"] {
            let prefs = MemoryPreferenceStore::new().with_entry(LOCALE_PREFERENCE_KEY, raw);
            assert_eq!(load_persisted(&prefs), Locale::Vi, "value {raw:?}");
        }
    }

    #[test]
    fn test_unavailable_store_loads_default() {
        assert_eq!(load_persisted(&MemoryPreferenceStore::unavailable()), Locale::Vi);
    }

    #[test]
    fn test_stored_value_is_loaded() {
        let prefs = MemoryPreferenceStore::new().with_entry(LOCALE_PREFERENCE_KEY, "en");
        assert_eq!(LocaleStore::open(prefs).current(), Locale::En);
    }

    #[test]
    fn test_set_current_round_trips_for_every_locale() {
        for locale in Locale::ALL {
            let mut store = LocaleStore::open(MemoryPreferenceStore::new());
            store.set_current(locale);
            let fresh = LocaleStore::open(store.into_prefs());
            assert_eq!(fresh.current(), locale);
        }
    }

    #[test]
    fn test_set_current_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let mut store = LocaleStore::open(FilePreferenceStore::new(&path));
        assert_eq!(store.current(), Locale::Vi);
        store.set_current(Locale::En);
        assert_eq!(LocaleStore::open(FilePreferenceStore::new(&path)).current(), Locale::En);
    }

    #[test]
    fn test_set_current_swallows_persistence_failure() {
        let mut store = LocaleStore::open(MemoryPreferenceStore::unavailable());
        store.set_current(Locale::En);
        assert_eq!(store.current(), Locale::En);
    }

    #[test]
    fn test_set_current_code_rejects_unknown_code() {
        let mut store = LocaleStore::open(MemoryPreferenceStore::new());
        let err = store.set_current_code("de").unwrap_err();
        assert!(matches!(err, SiteError::InvalidLocale(_)));
        assert_eq!(store.current(), Locale::Vi);
        assert_eq!(store.prefs().get(LOCALE_PREFERENCE_KEY).unwrap(), None);
    }

    #[test]
    fn test_set_current_code_accepts_supported_code() {
        let mut store = LocaleStore::open(MemoryPreferenceStore::new());
        assert_eq!(store.set_current_code("en").unwrap(), Locale::En);
        assert_eq!(
            store.prefs().get(LOCALE_PREFERENCE_KEY).unwrap().as_deref(),
            Some("en")
        );
    }
}
