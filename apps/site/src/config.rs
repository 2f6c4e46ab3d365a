use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::errors::SiteError;

pub const DEFAULT_TRANSITION_MS: u64 = 200;

/// Preview host configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub preference_path: PathBuf,
    pub transition: Duration,
    pub snapshot_path: Option<PathBuf>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let transition = match std::env::var("LANG_TRANSITION_MS") {
            Ok(raw) => parse_transition_ms(&raw).context("LANG_TRANSITION_MS is invalid")?,
            Err(_) => Duration::from_millis(DEFAULT_TRANSITION_MS),
        };

        Ok(Config {
            preference_path: std::env::var("PREFERENCE_PATH")
                .unwrap_or_else(|_| ".cv-prefs.json".to_string())
                .into(),
            transition,
            snapshot_path: std::env::var("SNAPSHOT_PATH").ok().map(PathBuf::from),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Whole milliseconds, strictly positive. A zero delay would swap content
/// before the fade-out has started.
pub fn parse_transition_ms(raw: &str) -> Result<Duration, SiteError> {
    let ms: u64 = raw
        .trim()
        .parse()
        .map_err(|_| SiteError::Config(format!("'{raw}' is not a whole number of milliseconds")))?;
    if ms == 0 {
        return Err(SiteError::Config(
            "transition must be longer than 0 ms".to_string(),
        ));
    }
    Ok(Duration::from_millis(ms))
}

/// CSS time value for the stylesheet's fade, e.g. `200ms`.
pub fn css_duration(d: Duration) -> String {
    format!("{}ms", d.as_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_transition_ms() {
        assert_eq!(parse_transition_ms("200").unwrap(), Duration::from_millis(200));
        assert_eq!(parse_transition_ms(" 350 ").unwrap(), Duration::from_millis(350));
    }

    #[test]
    fn test_parse_transition_rejects_zero_and_garbage() {
        assert!(matches!(parse_transition_ms("0"), Err(SiteError::Config(_))));
        assert!(parse_transition_ms("-5").is_err());
        assert!(parse_transition_ms("0.2s").is_err());
        assert!(parse_transition_ms("").is_err());
    }

    #[test]
    fn test_css_duration() {
        assert_eq!(css_duration(Duration::from_millis(200)), "200ms");
    }
}
