//! # Route guard — who may see which view
//!
//! [`evaluate`] is the whole policy: a pure function of the requested route
//! and the current identity, recomputed on every navigation and on every
//! identity change. It is never cached, so it cannot observe stale state.
//! A denied route is a silent redirect, not an error.
//!
//! [`RouteGuard`] is the router layout that applies the policy around every
//! view, renders the navbar for signed-in views, and shows a loading overlay
//! instead of deciding while the initial session restore is still in flight.

use dioxus::prelude::*;
use store::{Identity, Role};
use ui::components::LoadingOverlay;
use ui::{use_auth, NavSection, Navbar};

use crate::Route;

/// Outcome of evaluating a route against the current identity.
#[derive(Clone, Debug, PartialEq)]
pub enum Access {
    Granted,
    Redirect(Route),
}

/// Pure routing policy.
///
/// - Public routes redirect to the role dashboard once an identity is
///   present; a signed-in user never sees the landing page or login form.
/// - Role-scoped routes require a matching role. A mismatch redirects to the
///   visitor's own dashboard, an absent identity to the login form.
pub fn evaluate(route: &Route, identity: Option<&Identity>) -> Access {
    match route {
        Route::Landing {} | Route::Login {} => match identity {
            Some(identity) => Access::Redirect(Route::Dashboard {
                role: identity.role,
            }),
            None => Access::Granted,
        },
        // The callback commits the identity itself; always reachable.
        Route::AuthCallback {} => Access::Granted,
        Route::Dashboard { role } => match identity {
            None => Access::Redirect(Route::Login {}),
            Some(identity) if identity.role == *role => Access::Granted,
            Some(identity) => Access::Redirect(Route::Dashboard {
                role: identity.role,
            }),
        },
        Route::History {} => match identity {
            None => Access::Redirect(Route::Login {}),
            Some(identity) if identity.role == Role::Student => Access::Granted,
            Some(identity) => Access::Redirect(Route::Dashboard {
                role: identity.role,
            }),
        },
        Route::Settings {} => match identity {
            None => Access::Redirect(Route::Login {}),
            Some(_) => Access::Granted,
        },
    }
}

/// Layout component applying [`evaluate`] around every routed view.
#[component]
pub fn RouteGuard() -> Element {
    let auth = use_auth();
    let route = use_route::<Route>();
    let nav = use_navigator();

    let state = auth();
    if state.loading {
        // Never redirect off a half-restored session.
        return rsx! {
            LoadingOverlay { message: "Loading..." }
        };
    }

    if let Access::Redirect(target) = evaluate(&route, state.identity.as_ref()) {
        nav.replace(target);
        return rsx! {};
    }

    let chrome = !matches!(
        route,
        Route::Landing {} | Route::Login {} | Route::AuthCallback {}
    );
    let active = match route {
        Route::Dashboard { .. } => Some(NavSection::Dashboard),
        Route::History {} => Some(NavSection::History),
        Route::Settings {} => Some(NavSection::Settings),
        _ => None,
    };

    rsx! {
        if chrome {
            if let Some(identity) = state.identity.clone() {
                NavbarShell { identity, active }
            }
        }
        Outlet::<Route> {}
    }
}

/// Maps navbar sections onto typed routes.
#[component]
fn NavbarShell(identity: Identity, active: Option<NavSection>) -> Element {
    let nav = use_navigator();
    let role = identity.role;

    rsx! {
        Navbar {
            identity,
            active,
            on_navigate: move |section: NavSection| {
                let target = match section {
                    NavSection::Dashboard => Route::Dashboard { role },
                    NavSection::History => Route::History {},
                    NavSection::Settings => Route::Settings {},
                };
                nav.push(target);
            },
            on_sign_out: move |_| {
                nav.push(Route::Landing {});
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(role: Role) -> Identity {
        Identity {
            id: "1".to_string(),
            email: "u@v.com".to_string(),
            name: "U".to_string(),
            role,
        }
    }

    #[test]
    fn test_public_routes_are_open_to_anonymous_visitors() {
        assert_eq!(evaluate(&Route::Landing {}, None), Access::Granted);
        assert_eq!(evaluate(&Route::Login {}, None), Access::Granted);
    }

    #[test]
    fn test_signed_in_visitors_never_see_public_routes() {
        let recruiter = identity(Role::Recruiter);
        for route in [Route::Landing {}, Route::Login {}] {
            assert_eq!(
                evaluate(&route, Some(&recruiter)),
                Access::Redirect(Route::Dashboard {
                    role: Role::Recruiter,
                })
            );
        }
    }

    #[test]
    fn test_dashboard_requires_an_identity() {
        assert_eq!(
            evaluate(
                &Route::Dashboard {
                    role: Role::Student,
                },
                None
            ),
            Access::Redirect(Route::Login {})
        );
    }

    #[test]
    fn test_dashboard_role_must_match() {
        let student = identity(Role::Student);
        assert_eq!(
            evaluate(
                &Route::Dashboard {
                    role: Role::Student,
                },
                Some(&student)
            ),
            Access::Granted
        );
        assert_eq!(
            evaluate(
                &Route::Dashboard {
                    role: Role::Recruiter,
                },
                Some(&student)
            ),
            Access::Redirect(Route::Dashboard {
                role: Role::Student,
            })
        );
    }

    #[test]
    fn test_history_is_student_only() {
        let recruiter = identity(Role::Recruiter);
        let student = identity(Role::Student);

        assert_eq!(evaluate(&Route::History {}, Some(&student)), Access::Granted);
        assert_eq!(
            evaluate(&Route::History {}, Some(&recruiter)),
            Access::Redirect(Route::Dashboard {
                role: Role::Recruiter,
            })
        );
        assert_eq!(
            evaluate(&Route::History {}, None),
            Access::Redirect(Route::Login {})
        );
    }

    #[test]
    fn test_settings_requires_any_identity() {
        assert_eq!(
            evaluate(&Route::Settings {}, None),
            Access::Redirect(Route::Login {})
        );
        assert_eq!(
            evaluate(&Route::Settings {}, Some(&identity(Role::Recruiter))),
            Access::Granted
        );
        assert_eq!(
            evaluate(&Route::Settings {}, Some(&identity(Role::Student))),
            Access::Granted
        );
    }

    #[test]
    fn test_oauth_callback_is_always_reachable() {
        assert_eq!(evaluate(&Route::AuthCallback {}, None), Access::Granted);
        assert_eq!(
            evaluate(&Route::AuthCallback {}, Some(&identity(Role::Student))),
            Access::Granted
        );
    }
}
