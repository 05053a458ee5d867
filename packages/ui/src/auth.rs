//! Authentication context and hooks for the UI.

use api::{AuthFlow, IdentityClient, IdentityService, Notice};
use dioxus::prelude::*;
use store::{Identity, SessionState, SessionStore};

use crate::components::use_toast;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub identity: Option<Identity>,
    /// Whether the initial session restore is still in flight.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            identity: None,
            loading: true,
        }
    }
}

/// The concrete auth flow the application runs against.
pub type AppAuthFlow = AuthFlow<IdentityClient>;

/// Get the current authentication state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// The process-wide session store.
pub fn use_session() -> SessionStore {
    use_context::<SessionStore>()
}

/// The flow driving sign-in, sign-up, OAuth and sign-out.
pub fn use_auth_flow() -> AppAuthFlow {
    use_context::<AppAuthFlow>()
}

/// Provider component that owns the session store and the auth flow.
/// Wrap your app with this component (under a `ToastProvider`) to enable
/// authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let toasts = use_toast();
    let mut auth_state = use_signal(AuthState::default);

    let store = use_hook(|| {
        let store = SessionStore::new();
        // Mirror identity commits into the reactive auth state. Cosmetic
        // commits notify too; skip them here.
        store.subscribe(move |state: &SessionState| {
            let mut auth_state = auth_state;
            let (changed, loading) = {
                let current = auth_state.peek();
                (current.identity != state.identity, current.loading)
            };
            if changed {
                auth_state.set(AuthState {
                    identity: state.identity.clone(),
                    loading,
                });
            }
        });
        store
    });

    let service = use_hook(|| {
        #[cfg(target_arch = "wasm32")]
        {
            IdentityClient::from_window_origin()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            IdentityClient::new("http://localhost:8080")
        }
    });

    let flow = use_hook(|| {
        AuthFlow::new(service.clone(), store.clone(), move |notice| match notice {
            Notice::Success(message) => toasts.success(message),
            Notice::Error(message) => toasts.error(message),
        })
    });

    // Re-hydrate the durable service session on mount.
    let restore_service = service.clone();
    let restore_store = store.clone();
    let _restore = use_resource(move || {
        let service = restore_service.clone();
        let store = restore_store.clone();
        async move {
            match service.current_user().await {
                Ok(Some(profile)) => store.set_identity(Some(profile.to_identity())),
                Ok(None) => {}
                Err(err) => tracing::warn!(%err, "session restore failed"),
            }
            let identity = auth_state.peek().identity.clone();
            auth_state.set(AuthState {
                identity,
                loading: false,
            });
        }
    });

    use_context_provider(|| store.clone());
    use_context_provider(|| flow.clone());
    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}
