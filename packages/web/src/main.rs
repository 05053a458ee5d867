use dioxus::prelude::*;

use store::Role;
use ui::components::ToastProvider;
use ui::{AuthProvider, ThemeProvider};
use views::{AuthCallback, Dashboard, History, Landing, Login, Settings};

mod guard;
mod views;

use guard::RouteGuard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(RouteGuard)]
        #[route("/")]
        Landing {},
        #[route("/auth/login")]
        Login {},
        #[route("/auth/callback")]
        AuthCallback {},
        #[route("/dashboard/:role")]
        Dashboard { role: Role },
        #[route("/history")]
        History {},
        #[route("/settings")]
        Settings {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ToastProvider {
            AuthProvider {
                ThemeProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}
