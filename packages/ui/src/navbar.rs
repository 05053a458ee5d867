use api::Outcome;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBrain, FaRightFromBracket, FaUser};
use dioxus_free_icons::Icon;
use store::{Identity, Role};

use crate::auth::use_auth_flow;
use crate::components::{BadgeStatus, StatusBadge};
use crate::theme::ThemeToggle;

/// Top-level sections reachable from the navbar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavSection {
    Dashboard,
    History,
    Settings,
}

impl NavSection {
    fn label(self) -> &'static str {
        match self {
            NavSection::Dashboard => "Dashboard",
            NavSection::History => "Interview History",
            NavSection::Settings => "Settings",
        }
    }
}

/// Application navbar: brand, role-scoped links, user badge, theme toggle and
/// sign-out. Only rendered for signed-in views; the route guard keeps public
/// routes identity-free.
#[component]
pub fn Navbar(
    identity: Identity,
    active: Option<NavSection>,
    on_navigate: EventHandler<NavSection>,
    on_sign_out: EventHandler<()>,
) -> Element {
    let flow = use_auth_flow();

    let sections: Vec<NavSection> = match identity.role {
        Role::Recruiter => vec![NavSection::Dashboard, NavSection::Settings],
        Role::Student => vec![
            NavSection::Dashboard,
            NavSection::History,
            NavSection::Settings,
        ],
    };

    let role_badge = match identity.role {
        Role::Recruiter => BadgeStatus::Info,
        Role::Student => BadgeStatus::Success,
    };

    let sign_out = move |_| {
        let flow = flow.clone();
        async move {
            if let Outcome::Resolved { .. } = flow.sign_out().await {
                on_sign_out.call(());
            }
        }
    };

    rsx! {
        nav {
            class: "navbar glass-card",

            div {
                class: "navbar-brand",
                span {
                    class: "navbar-logo",
                    Icon { width: 20, height: 20, fill: "currentColor", icon: FaBrain }
                }
                div {
                    class: "navbar-title",
                    h1 { "Mock'n-Hire" }
                    p { "AI Hiring Suite" }
                }
            }

            div {
                class: "navbar-links",
                for section in sections {
                    button {
                        key: "{section.label()}",
                        class: if active == Some(section) { "navbar-link active" } else { "navbar-link" },
                        onclick: move |_| on_navigate.call(section),
                        "{section.label()}"
                    }
                }
            }

            div {
                class: "navbar-user",
                span {
                    class: "navbar-avatar",
                    Icon { width: 12, height: 12, fill: "currentColor", icon: FaUser }
                }
                span { class: "navbar-user-name", "{identity.name}" }
                StatusBadge { status: role_badge, "{identity.role}" }
                ThemeToggle {}
                button {
                    class: "navbar-link navbar-signout",
                    onclick: sign_out,
                    Icon { width: 14, height: 14, fill: "currentColor", icon: FaRightFromBracket }
                    span { "Sign out" }
                }
            }
        }
    }
}
