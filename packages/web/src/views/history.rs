//! Interview history, reachable only with the student role.

use dioxus::prelude::*;
use store::Role;
use ui::components::{Button, ButtonVariant, Card};
use ui::icons::FaClockRotateLeft;
use ui::Icon;

use crate::Route;

#[component]
pub fn History() -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "page history",

            header {
                class: "page-header",
                h1 { "Interview History" }
                p { "Every practice session you've run, with its analysis." }
            }

            Card {
                class: "empty-card",
                span {
                    class: "empty-icon",
                    Icon { width: 28, height: 28, fill: "currentColor", icon: FaClockRotateLeft }
                }
                h2 { "No interview sessions yet" }
                p { "Finished mock interviews appear here with stress and performance reports." }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        nav.push(Route::Dashboard { role: Role::Student });
                    },
                    "Start your first interview"
                }
            }
        }
    }
}
