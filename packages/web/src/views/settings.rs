//! Settings: appearance (theme, accent) and account details.

use dioxus::prelude::*;
use store::{Role, Theme};
use ui::components::{BadgeStatus, Card, StatusBadge};
use ui::{use_auth, use_theme, use_theme_state};

const ACCENTS: [&str; 5] = ["blue", "violet", "emerald", "amber", "rose"];

#[component]
pub fn Settings() -> Element {
    let auth = use_auth();
    let controller = use_theme();
    let theme_state = use_theme_state();

    let state = theme_state();

    rsx! {
        div {
            class: "page settings",

            header {
                class: "page-header",
                h1 { "Settings" }
            }

            Card {
                class: "settings-section",
                h2 { "Appearance" }

                div {
                    class: "form-field",
                    label { class: "form-label", "Theme" }
                    div {
                        class: "theme-cards",
                        button {
                            class: if state.theme == Theme::Light { "theme-card active" } else { "theme-card" },
                            onclick: {
                                let controller = controller.clone();
                                move |_| controller.set_theme(Theme::Light)
                            },
                            span { class: "theme-card-swatch theme-card-light" }
                            "Light"
                        }
                        button {
                            class: if state.theme == Theme::Dark { "theme-card active" } else { "theme-card" },
                            onclick: {
                                let controller = controller.clone();
                                move |_| controller.set_theme(Theme::Dark)
                            },
                            span { class: "theme-card-swatch theme-card-dark" }
                            "Dark"
                        }
                    }
                }

                div {
                    class: "form-field",
                    label { class: "form-label", "Accent color" }
                    div {
                        class: "accent-swatches",
                        for accent in ACCENTS {
                            button {
                                key: "{accent}",
                                class: if state.accent == accent { "accent-swatch active" } else { "accent-swatch" },
                                "data-accent": "{accent}",
                                title: "{accent}",
                                onclick: {
                                    let controller = controller.clone();
                                    move |_| controller.set_accent(accent)
                                },
                            }
                        }
                    }
                    p {
                        class: "form-help",
                        "Theme and accent are saved on this device and restored on your next visit."
                    }
                }
            }

            if let Some(identity) = auth().identity {
                Card {
                    class: "settings-section",
                    h2 { "Account" }
                    div {
                        class: "account-row",
                        span { class: "account-label", "Name" }
                        span { "{identity.name}" }
                    }
                    div {
                        class: "account-row",
                        span { class: "account-label", "Email" }
                        span { "{identity.email}" }
                    }
                    div {
                        class: "account-row",
                        span { class: "account-label", "Role" }
                        StatusBadge {
                            status: if identity.role == Role::Recruiter { BadgeStatus::Info } else { BadgeStatus::Success },
                            "{identity.role}"
                        }
                    }
                }
            }
        }
    }
}
