//! Search settings for client apps.
//!
//! Settings come from an optional JSON file named by `SEEK_SETTINGS`, then
//! individual environment overrides (`SEEK_DEBOUNCE_MS`, `SEEK_PLACEHOLDER`).

use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable naming a JSON settings file.
pub const SETTINGS_FILE_ENV: &str = "SEEK_SETTINGS";
/// Environment variable overriding the debounce delay in milliseconds.
pub const DEBOUNCE_MS_ENV: &str = "SEEK_DEBOUNCE_MS";
/// Environment variable overriding the input placeholder.
pub const PLACEHOLDER_ENV: &str = "SEEK_PLACEHOLDER";

const DEFAULT_DEBOUNCE_MS: u64 = 300;
const MAX_DEBOUNCE_MS: u64 = 60_000;

/// Settings for the search input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchSettings {
    /// Quiet period before a search term is emitted, in milliseconds
    pub debounce_ms: u64,
    /// Placeholder text shown in the empty input
    pub placeholder: String,
    /// Page heading above the form
    pub heading: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            placeholder: "Search...".to_string(),
            heading: "Enhanced Search Example".to_string(),
        }
    }
}

impl SearchSettings {
    /// Debounce delay as a `Duration`.
    pub const fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Parse settings from a JSON payload. Missing fields keep their defaults.
    pub fn from_json(payload: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(payload)?;
        settings.validate()
    }

    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let payload = fs::read_to_string(path)?;
        Self::from_json(&payload)
    }

    /// Resolve settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::resolve(|name| env::var(name).ok())
    }

    /// Resolve settings using `lookup` for environment values.
    ///
    /// Tests pass their own lookup so resolution can be exercised without
    /// touching the process environment.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let lookup = |name: &str| normalize_text_option(lookup(name));

        let mut settings = match lookup(SETTINGS_FILE_ENV) {
            Some(path) => {
                tracing::debug!("Loading search settings from {}", path);
                Self::load(&path)?
            }
            None => Self::default(),
        };

        if let Some(raw) = lookup(DEBOUNCE_MS_ENV) {
            settings.debounce_ms = raw.parse().map_err(|error| {
                Error::InvalidInput(format!("{DEBOUNCE_MS_ENV} must be an integer: {error}"))
            })?;
        }
        if let Some(placeholder) = lookup(PLACEHOLDER_ENV) {
            settings.placeholder = placeholder;
        }

        settings.validate()
    }

    fn validate(self) -> Result<Self> {
        if self.debounce_ms == 0 || self.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(Error::InvalidInput(format!(
                "debounce_ms must be between 1 and {MAX_DEBOUNCE_MS}, got {}",
                self.debounce_ms
            )));
        }
        Ok(self)
    }
}

fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn defaults_match_search_form() {
        let settings = SearchSettings::default();
        assert_eq!(settings.debounce_delay(), Duration::from_millis(300));
        assert_eq!(settings.placeholder, "Search...");
        assert_eq!(settings.heading, "Enhanced Search Example");
    }

    #[test]
    fn from_json_keeps_defaults_for_missing_fields() {
        let settings = SearchSettings::from_json(r#"{ "debounce_ms": 150 }"#).unwrap();
        assert_eq!(settings.debounce_ms, 150);
        assert_eq!(settings.placeholder, "Search...");
    }

    #[test]
    fn from_json_rejects_unknown_fields() {
        let error = SearchSettings::from_json(r#"{ "debounce": 150 }"#).unwrap_err();
        assert!(matches!(error, Error::Serialization(_)));
    }

    #[test]
    fn zero_delay_is_rejected() {
        let error = SearchSettings::from_json(r#"{ "debounce_ms": 0 }"#).unwrap_err();
        assert!(matches!(error, Error::InvalidInput(_)));
    }

    #[test]
    fn resolve_without_env_uses_defaults() {
        let settings = SearchSettings::resolve(lookup_from(&[])).unwrap();
        assert_eq!(settings, SearchSettings::default());
    }

    #[test]
    fn resolve_applies_env_overrides() {
        let settings = SearchSettings::resolve(lookup_from(&[
            (DEBOUNCE_MS_ENV, " 500 "),
            (PLACEHOLDER_ENV, "Find anything"),
        ]))
        .unwrap();
        assert_eq!(settings.debounce_ms, 500);
        assert_eq!(settings.placeholder, "Find anything");
    }

    #[test]
    fn resolve_ignores_blank_overrides() {
        let settings =
            SearchSettings::resolve(lookup_from(&[(PLACEHOLDER_ENV, "   ")])).unwrap();
        assert_eq!(settings.placeholder, "Search...");
    }

    #[test]
    fn resolve_rejects_non_numeric_delay() {
        let error =
            SearchSettings::resolve(lookup_from(&[(DEBOUNCE_MS_ENV, "fast")])).unwrap_err();
        assert!(error.to_string().contains(DEBOUNCE_MS_ENV));
    }

    #[test]
    fn resolve_reads_settings_file_before_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "debounce_ms": 200, "placeholder": "From file", "heading": "Lookup" }}"#
        )
        .unwrap();
        let path = file.path().to_string_lossy().to_string();

        let settings = SearchSettings::resolve(lookup_from(&[
            (SETTINGS_FILE_ENV, path.as_str()),
            (DEBOUNCE_MS_ENV, "250"),
        ]))
        .unwrap();

        assert_eq!(settings.debounce_ms, 250);
        assert_eq!(settings.placeholder, "From file");
        assert_eq!(settings.heading, "Lookup");
    }

    #[test]
    fn missing_settings_file_is_io_error() {
        let error = SearchSettings::resolve(lookup_from(&[(
            SETTINGS_FILE_ENV,
            "/nonexistent/seek-settings.json",
        )]))
        .unwrap_err();
        assert!(matches!(error, Error::Io(_)));
    }
}
