//! Settings model and the single-writer settings store.
//!
//! `Settings` is the typed aggregate behind the `:set` command, serializable
//! to/from TOML so the hosting shell can seed it from a config file.
//! `SettingsStore` owns the live value; commands receive a handle by
//! constructor injection and mutate through `set_property`, which validates
//! against the schema in [`crate::properties`].

use std::collections::BTreeMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::errors::{CommandError, Result};
use crate::properties::{self, PropertyValue};

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// The full settings aggregate. Every property field matches its schema
/// declaration in `properties::DEFS`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Characters used to label hints in follow mode.
    pub hintchars: String,
    pub smoothscroll: bool,
    /// Which sources the open-command completion draws from.
    pub complete: String,
    pub search: SearchSettings,
}

/// Search-engine configuration consumed by URL resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Key into `engines` used when no engine prefix is given.
    pub default_engine: String,
    /// Engine name to URL template; `{}` marks the query position.
    pub engines: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hintchars: "abcdefghijklmnopqrstuvwxyz".to_string(),
            smoothscroll: false,
            complete: "sbh".to_string(),
            search: SearchSettings::default(),
        }
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        let engines = [
            ("google", "https://google.com/search?q={}"),
            ("yahoo", "https://search.yahoo.com/search?p={}"),
            ("bing", "https://www.bing.com/search?q={}"),
            ("duckduckgo", "https://duckduckgo.com/?q={}"),
            ("twitter", "https://twitter.com/search?q={}"),
            ("wikipedia", "https://en.wikipedia.org/w/index.php?search={}"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        Self {
            default_engine: "google".to_string(),
            engines,
        }
    }
}

impl Settings {
    /// Serialize to a TOML string.
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }

    /// Deserialize from a TOML string. Missing sections fall back to
    /// defaults.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to JSON, the interchange format of the extension host's
    /// storage layer.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Deserialize from the host's JSON form. Missing fields fall back to
    /// defaults.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

// ---------------------------------------------------------------------------
// SettingsStore
// ---------------------------------------------------------------------------

/// Owns the current settings value. Single writer: the host serializes
/// command dispatch, so `set_property`'s read-modify-write needs no
/// versioning beyond the interior lock.
pub struct SettingsStore {
    current: RwLock<Settings>,
}

impl SettingsStore {
    pub fn new(initial: Settings) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }

    /// Current settings snapshot. Never fails.
    pub fn get(&self) -> Settings {
        self.current.read().unwrap().clone()
    }

    /// Unconditionally replace the stored snapshot. No validation; callers
    /// that need it go through `set_property`.
    pub fn update(&self, new: Settings) {
        *self.current.write().unwrap() = new;
    }

    /// Validate and apply a single-property mutation.
    ///
    /// The empty string resets a string property to its schema default; the
    /// substitution happens after the type check, so `set smoothscroll=` is
    /// still a type mismatch.
    pub fn set_property(&self, name: &str, value: PropertyValue) -> Result<()> {
        let def = properties::lookup(name)
            .ok_or_else(|| CommandError::UnknownProperty(name.to_string()))?;
        if value.kind() != def.kind {
            return Err(CommandError::PropertyTypeMismatch {
                name: name.to_string(),
                found: value.kind(),
            });
        }
        let value = if value.is_empty_string() {
            def.default_value()
        } else {
            value
        };

        // Fixed name-to-field mapping. A schema-known name without an arm
        // here passes validation but changes nothing; logged so the gap is
        // visible.
        let mut current = self.get();
        match (name, value) {
            ("hintchars", PropertyValue::Str(s)) => current.hintchars = s,
            ("smoothscroll", PropertyValue::Bool(b)) => current.smoothscroll = b,
            ("complete", PropertyValue::Str(s)) => current.complete = s,
            (name, _) => {
                tracing::warn!(property = name, "no assignment mapping for property; ignored");
            }
        }
        self.update(current);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
