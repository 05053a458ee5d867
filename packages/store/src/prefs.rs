//! # Persisted UI preferences
//!
//! The cosmetic preferences that survive a reload: color scheme and accent
//! palette. The document is serialised as TOML and stored through the
//! [`PrefStore`] trait, so the same logic works against browser localStorage
//! (web builds) or an in-memory store (tests, native fallback).
//!
//! ```toml
//! theme = "dark"      # "light" | "dark"
//! accent = "blue"     # accent palette name
//! ```
//!
//! All fields carry serde defaults, so a missing or partial document is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Color scheme applied to the document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other scheme, for toggle controls.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Preference document persisted across sessions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_accent")]
    pub accent: String,
}

fn default_accent() -> String {
    "blue".to_string()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            accent: default_accent(),
        }
    }
}

impl Preferences {
    pub fn new(theme: Theme, accent: impl Into<String>) -> Self {
        Self {
            theme,
            accent: accent.into(),
        }
    }

    /// The well-known key the document is stored under.
    pub fn storage_key() -> &'static str {
        "mocknhire.prefs"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Async trait for loading and saving the preference document.
pub trait PrefStore {
    fn load(&self) -> impl std::future::Future<Output = Option<Preferences>>;
    fn save(&self, prefs: &Preferences) -> impl std::future::Future<Output = ()>;
}
