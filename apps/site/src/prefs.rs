#![allow(dead_code)]

//! Durable key-value preference store.
//!
//! The only thing the site persists is the locale under `cv-lang`. Callers
//! treat every error from here as "absent" on read and "skipped" on write.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::SiteError;

pub const LOCALE_PREFERENCE_KEY: &str = "cv-lang";

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), SiteError>;
}

/// JSON object of string keys to string values, rewritten whole on each set.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, SiteError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(unavailable(&self.path, e)),
        };
        serde_json::from_str(&raw).map_err(|e| unavailable(&self.path, e))
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SiteError> {
        // A corrupt file is replaced rather than blocking the write.
        let mut entries = self.read_all().unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());

        let json = serde_json::to_string_pretty(&entries).map_err(|e| unavailable(&self.path, e))?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json).map_err(|e| unavailable(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| unavailable(&self.path, e))?;

        debug!("Wrote preference {key}={value} to {}", self.path.display());
        Ok(())
    }
}

fn unavailable(path: &Path, e: impl std::fmt::Display) -> SiteError {
    SiteError::PersistenceUnavailable(format!("{}: {e}", path.display()))
}

/// In-process store. `unavailable()` builds one that fails every call, the
/// way a browser with storage disabled does.
#[derive(Debug, Clone)]
pub struct MemoryPreferenceStore {
    entries: HashMap<String, String>,
    available: bool,
}

impl Default for MemoryPreferenceStore {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            available: true,
        }
    }
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::default()
        }
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    fn check(&self) -> Result<(), SiteError> {
        if self.available {
            Ok(())
        } else {
            Err(SiteError::PersistenceUnavailable(
                "storage disabled".to_string(),
            ))
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError> {
        self.check()?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SiteError> {
        self.check()?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
