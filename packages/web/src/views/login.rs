//! Sign-in / sign-up page: mode toggle, role picker, validated credential
//! form and Google OAuth.

use api::{validate, AuthMode, CredentialInput, NavTarget, Outcome, ValidationErrors};
use dioxus::prelude::*;
use store::Role;
use ui::components::{Button, ButtonSize, ButtonVariant, Card, Input};
use ui::icons::{FaArrowLeft, FaBrain, FaGoogle, FaGraduationCap, FaUsers};
use ui::{use_auth_flow, Icon, ThemeToggle};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let flow = use_auth_flow();
    let nav = use_navigator();

    let mut mode = use_signal(|| AuthMode::SignIn);
    let mut role = use_signal(|| Role::Recruiter);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut errors = use_signal(ValidationErrors::default);
    let mut submitting = use_signal(|| false);

    let submit_flow = flow.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let flow = submit_flow.clone();
        spawn(async move {
            let input = CredentialInput {
                email: email().trim().to_string(),
                password: password(),
                name: name().trim().to_string(),
                confirm_password: confirm_password(),
            };
            let current_mode = mode();

            // Validation failures never reach the network.
            let field_errors = validate(&input, current_mode);
            if !field_errors.is_empty() {
                errors.set(field_errors);
                return;
            }
            errors.set(ValidationErrors::default());

            submitting.set(true);
            let outcome = match current_mode {
                AuthMode::SignIn => flow.sign_in(&input.email, &input.password).await,
                AuthMode::SignUp => {
                    flow.sign_up(&input.email, &input.password, &input.name, role())
                        .await
                }
            };
            submitting.set(false);
            follow(&nav, outcome);
        });
    };

    let oauth_flow = flow.clone();
    let handle_google = move |_| {
        let flow = oauth_flow.clone();
        spawn(async move {
            submitting.set(true);
            let outcome = flow.sign_in_with_oauth().await;
            submitting.set(false);
            follow(&nav, outcome);
        });
    };

    let is_signup = mode() == AuthMode::SignUp;

    rsx! {
        div {
            class: "auth-page",

            div {
                class: "auth-topbar",
                Link {
                    to: Route::Landing {},
                    class: "auth-back",
                    Icon { width: 14, height: 14, fill: "currentColor", icon: FaArrowLeft }
                    span { "Back to home" }
                }
                ThemeToggle {}
            }

            Card {
                class: "auth-card",

                div {
                    class: "auth-header",
                    span {
                        class: "auth-logo",
                        Icon { width: 28, height: 28, fill: "currentColor", icon: FaBrain }
                    }
                    h1 { "Mock'n-Hire" }
                    p {
                        if is_signup { "Create your account" } else { "Welcome back" }
                    }
                }

                div {
                    class: "auth-toggle",
                    button {
                        r#type: "button",
                        class: if !is_signup { "auth-toggle-item active" } else { "auth-toggle-item" },
                        onclick: move |_| {
                            mode.set(AuthMode::SignIn);
                            errors.set(ValidationErrors::default());
                        },
                        "Sign In"
                    }
                    button {
                        r#type: "button",
                        class: if is_signup { "auth-toggle-item active" } else { "auth-toggle-item" },
                        onclick: move |_| {
                            mode.set(AuthMode::SignUp);
                            errors.set(ValidationErrors::default());
                        },
                        "Sign Up"
                    }
                }

                if is_signup {
                    div {
                        class: "role-picker",
                        label { class: "form-label", "I am a..." }
                        div {
                            class: "role-picker-grid",
                            button {
                                r#type: "button",
                                class: if role() == Role::Recruiter { "role-card active" } else { "role-card" },
                                onclick: move |_| role.set(Role::Recruiter),
                                Icon { width: 20, height: 20, fill: "currentColor", icon: FaUsers }
                                div { class: "role-card-title", "Recruiter" }
                                div { class: "role-card-hint", "Hire talent" }
                            }
                            button {
                                r#type: "button",
                                class: if role() == Role::Student { "role-card active" } else { "role-card" },
                                onclick: move |_| role.set(Role::Student),
                                Icon { width: 20, height: 20, fill: "currentColor", icon: FaGraduationCap }
                                div { class: "role-card-title", "Student" }
                                div { class: "role-card-hint", "Practice interviews" }
                            }
                        }
                    }
                }

                form {
                    class: "auth-form",
                    onsubmit: handle_submit,

                    if is_signup {
                        Input {
                            label: "Full Name",
                            placeholder: "Enter your full name",
                            value: name(),
                            error: errors().name,
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                        }
                    }

                    Input {
                        label: "Email Address",
                        r#type: "email",
                        placeholder: "Enter your email",
                        value: email(),
                        error: errors().email,
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    Input {
                        label: "Password",
                        r#type: "password",
                        placeholder: "Enter your password",
                        value: password(),
                        error: errors().password,
                        hint: if is_signup { Some("Must be at least 6 characters".to_string()) } else { None },
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    if is_signup {
                        Input {
                            label: "Confirm Password",
                            r#type: "password",
                            placeholder: "Confirm your password",
                            value: confirm_password(),
                            error: errors().confirm_password,
                            oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Lg,
                        r#type: "submit",
                        full_width: true,
                        loading: submitting(),
                        if is_signup { "Create Account" } else { "Sign In" }
                    }
                }

                div {
                    class: "auth-divider",
                    span { "or continue with" }
                }

                Button {
                    size: ButtonSize::Lg,
                    full_width: true,
                    loading: submitting(),
                    onclick: handle_google,
                    Icon { width: 18, height: 18, fill: "currentColor", icon: FaGoogle }
                    span { "Google" }
                }

                div {
                    class: "auth-footer",
                    if is_signup {
                        span { "Already have an account? " }
                        button {
                            r#type: "button",
                            class: "auth-footer-link",
                            onclick: move |_| {
                                mode.set(AuthMode::SignIn);
                                errors.set(ValidationErrors::default());
                            },
                            "Sign in"
                        }
                    } else {
                        span { "Don't have an account? " }
                        button {
                            r#type: "button",
                            class: "auth-footer-link",
                            onclick: move |_| {
                                mode.set(AuthMode::SignUp);
                                errors.set(ValidationErrors::default());
                            },
                            "Sign up"
                        }
                    }
                }
            }
        }
    }
}

/// Act on a resolved attempt's navigation target.
fn follow(nav: &Navigator, outcome: Outcome) {
    let Outcome::Resolved {
        redirect: Some(target),
    } = outcome
    else {
        return;
    };
    match target {
        NavTarget::Dashboard(role) => {
            nav.push(Route::Dashboard { role });
        }
        NavTarget::Landing => {
            nav.push(Route::Landing {});
        }
        NavTarget::External(url) => redirect_external(&url),
    }
}

/// Browser-level redirect for OAuth initiation.
fn redirect_external(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!(%url, "external redirect requested");
    }
}
