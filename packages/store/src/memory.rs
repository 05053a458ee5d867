use std::sync::{Arc, Mutex};

use crate::prefs::{PrefStore, Preferences};

/// In-memory PrefStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryPrefs {
    inner: Arc<Mutex<Option<Preferences>>>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for MemoryPrefs {
    async fn load(&self) -> Option<Preferences> {
        self.inner.lock().unwrap().clone()
    }

    async fn save(&self, prefs: &Preferences) {
        *self.inner.lock().unwrap() = Some(prefs.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::Theme;

    #[tokio::test]
    async fn test_load_before_save_is_empty() {
        let prefs = MemoryPrefs::new();
        assert!(prefs.load().await.is_none());
    }

    #[tokio::test]
    async fn test_save_and_load_roundtrip() {
        let store = MemoryPrefs::new();

        store.save(&Preferences::new(Theme::Light, "violet")).await;

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.theme, Theme::Light);
        assert_eq!(loaded.accent, "violet");
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemoryPrefs::new();
        let alias = store.clone();

        store.save(&Preferences::default()).await;

        assert!(alias.load().await.is_some());
    }

    #[test]
    fn test_toml_roundtrip() {
        let prefs = Preferences::new(Theme::Light, "emerald");
        let raw = prefs.to_toml().unwrap();
        assert_eq!(Preferences::from_toml(&raw).unwrap(), prefs);
    }

    #[test]
    fn test_empty_document_is_default() {
        let prefs = Preferences::from_toml("").unwrap();
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.accent, "blue");
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let prefs = Preferences::from_toml(r#"theme = "light""#).unwrap();
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.accent, "blue");
    }
}
