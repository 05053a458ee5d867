//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::FaGoogle;
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{use_auth, use_auth_flow, use_session, AppAuthFlow, AuthProvider, AuthState};

mod theme;
pub use theme::{use_theme, use_theme_state, ThemeController, ThemeProvider, ThemeState, ThemeToggle};

mod navbar;
pub use navbar::{NavSection, Navbar};
