use dioxus::prelude::*;

/// Translucent card container.
#[component]
pub fn Card(#[props(default = String::new())] class: String, children: Element) -> Element {
    rsx! {
        div {
            class: "glass-card {class}",
            {children}
        }
    }
}
