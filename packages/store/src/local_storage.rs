//! # localStorage-backed preferences — browser-side persistence
//!
//! [`LocalStoragePrefs`] is the [`PrefStore`] implementation used on the
//! **web platform**. It persists the TOML preference document under a single
//! localStorage key, so theme and accent survive reloads.
//!
//! All operations silently swallow errors (returning `None` for reads, doing
//! nothing for writes). A blocked or corrupted localStorage degrades to
//! default preferences rather than breaking the UI.

use crate::prefs::{PrefStore, Preferences};

/// localStorage-backed PrefStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStoragePrefs;

impl LocalStoragePrefs {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl PrefStore for LocalStoragePrefs {
    async fn load(&self) -> Option<Preferences> {
        let raw = Self::storage()?
            .get_item(Preferences::storage_key())
            .ok()
            .flatten()?;
        Preferences::from_toml(&raw).ok()
    }

    async fn save(&self, prefs: &Preferences) {
        let Ok(raw) = prefs.to_toml() else {
            return;
        };
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(Preferences::storage_key(), &raw);
        }
    }
}
