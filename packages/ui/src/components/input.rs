use dioxus::prelude::*;

/// Text input with optional label, error and hint lines. The error line wins
/// over the hint when both are present.
#[component]
pub fn Input(
    #[props(default = String::new())] label: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = String::new())] placeholder: String,
    value: String,
    #[props(default)] error: Option<String>,
    #[props(default)] hint: Option<String>,
    #[props(default = String::new())] class: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let input_class = if error.is_some() {
        "input input-invalid"
    } else {
        "input"
    };

    rsx! {
        div {
            class: "form-field {class}",
            if !label.is_empty() {
                label { class: "form-label", "{label}" }
            }
            input {
                class: "{input_class}",
                r#type: "{r#type}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| oninput.call(evt),
            }
            if let Some(ref message) = error {
                p { class: "form-error", "{message}" }
            } else {
                if let Some(ref message) = hint {
                    p { class: "form-help", "{message}" }
                }
            }
        }
    }
}
