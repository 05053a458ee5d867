use dioxus::prelude::*;

use crate::components::Spinner;

/// Visual style of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Default => "btn",
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Ghost => "btn btn-ghost",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Md => "btn-md",
            ButtonSize::Lg => "btn-lg",
        }
    }
}

/// Glass-styled button. While `loading` is set the button is disabled and
/// shows a spinner in front of its label.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default = false)] loading: bool,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] full_width: bool,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default = String::new())] class: String,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let block = if full_width { " btn-block" } else { "" };
    let disabled = disabled || loading;

    rsx! {
        button {
            class: "{variant.class()} {size.class()}{block} {class}",
            r#type: "{r#type}",
            disabled,
            onclick: move |evt| onclick.call(evt),
            if loading {
                Spinner { size: 16 }
            }
            {children}
        }
    }
}
