use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaSpinner;
use dioxus_free_icons::Icon;

/// Spinning activity indicator.
#[component]
pub fn Spinner(#[props(default = 20)] size: u32) -> Element {
    rsx! {
        span {
            class: "spinner",
            Icon { width: size, height: size, fill: "currentColor", icon: FaSpinner }
        }
    }
}

/// Full-area overlay shown while something global is in flight, e.g. the
/// initial session restore.
#[component]
pub fn LoadingOverlay(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        div {
            class: "loading-overlay",
            Spinner { size: 28 }
            p { class: "loading-message", "{message}" }
        }
    }
}
