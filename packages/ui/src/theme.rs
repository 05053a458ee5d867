//! # Theme controller — persisted cosmetics applied to the document
//!
//! Bridges the session store's cosmetic state (theme, accent) to the outside
//! world: loads the persisted preference document on mount, re-applies the
//! `data-theme` / `data-accent` attributes on the document element whenever a
//! cosmetic commit happens, and writes changed preferences back through the
//! platform [`PrefStore`]. This controller is the only writer of cosmetics;
//! identity writes stay with the auth flow.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use store::{PrefStore, Preferences, SessionStore, Theme};

use crate::auth::use_session;

/// Reactive cosmetic state mirrored from the session store.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeState {
    pub theme: Theme,
    pub accent: String,
}

/// Writes cosmetic preferences on behalf of the UI.
#[derive(Clone)]
pub struct ThemeController {
    store: SessionStore,
}

impl ThemeController {
    pub fn set_theme(&self, theme: Theme) {
        self.store.set_theme(theme);
    }

    pub fn set_accent(&self, accent: &str) {
        self.store.set_accent(accent);
    }

    pub fn toggle(&self) {
        let next = self.store.snapshot().theme.toggled();
        self.store.set_theme(next);
    }
}

/// The cosmetic write handle.
pub fn use_theme() -> ThemeController {
    use_context::<ThemeController>()
}

/// Current theme and accent; updates on every cosmetic commit.
pub fn use_theme_state() -> Signal<ThemeState> {
    use_context::<Signal<ThemeState>>()
}

/// Provider wiring the session store's cosmetics to the document and to the
/// persisted preference document. Mount below [`crate::AuthProvider`].
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let store = use_session();

    let mut theme_state = use_signal(|| {
        let state = store.snapshot();
        ThemeState {
            theme: state.theme,
            accent: state.accent,
        }
    });

    use_hook(|| {
        // Identity commits notify as well; only react to cosmetic changes.
        let last = Rc::new(RefCell::new(None::<(Theme, String)>));
        store.subscribe(move |state| {
            let mut theme_state = theme_state;
            let current = (state.theme, state.accent.clone());
            if last.borrow().as_ref() == Some(&current) {
                return;
            }
            *last.borrow_mut() = Some(current);

            apply_document_theme(state.theme, &state.accent);
            theme_state.set(ThemeState {
                theme: state.theme,
                accent: state.accent.clone(),
            });

            let prefs = Preferences::new(state.theme, state.accent.clone());
            spawn(async move {
                prefs_store().save(&prefs).await;
            });
        });

        // Load the persisted document once; falling back to defaults still
        // stamps the attributes onto a fresh document.
        let store = store.clone();
        spawn(async move {
            match prefs_store().load().await {
                Some(prefs) => {
                    store.set_theme(prefs.theme);
                    store.set_accent(prefs.accent);
                }
                None => {
                    let state = store.snapshot();
                    apply_document_theme(state.theme, &state.accent);
                }
            }
        });
    });

    use_context_provider(|| ThemeController {
        store: store.clone(),
    });
    use_context_provider(|| theme_state);

    rsx! {
        {children}
    }
}

/// The platform preference store: localStorage on web, in-memory elsewhere.
fn prefs_store() -> impl PrefStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStoragePrefs::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::MemoryPrefs::new()
    }
}

/// Stamp `data-theme`/`data-accent` on the document element so the CSS token
/// sets swap.
fn apply_document_theme(theme: Theme, accent: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            return;
        };
        let _ = element.set_attribute("data-theme", theme.as_str());
        let _ = element.set_attribute("data-accent", accent);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (theme, accent);
    }
}

/// Light/dark toggle button.
#[component]
pub fn ThemeToggle() -> Element {
    let controller = use_theme();
    let state = use_theme_state();

    rsx! {
        button {
            class: "btn btn-ghost theme-toggle",
            aria_label: "Toggle color scheme",
            onclick: move |_| controller.toggle(),
            if state().theme == Theme::Dark {
                crate::Icon {
                    width: 18,
                    height: 18,
                    fill: "currentColor",
                    icon: crate::icons::FaMoon,
                }
            } else {
                crate::Icon {
                    width: 18,
                    height: 18,
                    fill: "currentColor",
                    icon: crate::icons::FaSun,
                }
            }
        }
    }
}
