//! OAuth callback — the provider redirected back here with a durable service
//! session established. The session restore commits the identity; this view
//! finishes the commit-then-redirect sequence once it lands.

use dioxus::prelude::*;
use ui::components::LoadingOverlay;
use ui::use_auth;

use crate::Route;

#[component]
pub fn AuthCallback() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let state = auth();
    if !state.loading {
        match state.identity {
            Some(identity) => {
                nav.replace(Route::Dashboard {
                    role: identity.role,
                });
            }
            None => {
                nav.replace(Route::Login {});
            }
        }
    }

    rsx! {
        LoadingOverlay { message: "Completing sign in..." }
    }
}
