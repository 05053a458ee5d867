use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaCircleCheck, FaCircleInfo, FaClock, FaTriangleExclamation, FaXmark,
};
use dioxus_free_icons::Icon;

/// Tone of a [`StatusBadge`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BadgeStatus {
    Success,
    Warning,
    Error,
    Info,
    Pending,
}

impl BadgeStatus {
    fn class(self) -> &'static str {
        match self {
            BadgeStatus::Success => "status-success",
            BadgeStatus::Warning => "status-warning",
            BadgeStatus::Error => "status-error",
            BadgeStatus::Info => "status-info",
            BadgeStatus::Pending => "status-pending",
        }
    }
}

/// Small pill with a status icon and a label.
#[component]
pub fn StatusBadge(
    status: BadgeStatus,
    #[props(default = String::new())] class: String,
    children: Element,
) -> Element {
    let icon = match status {
        BadgeStatus::Success => rsx! {
            Icon { width: 12, height: 12, fill: "currentColor", icon: FaCircleCheck }
        },
        BadgeStatus::Warning => rsx! {
            Icon { width: 12, height: 12, fill: "currentColor", icon: FaTriangleExclamation }
        },
        BadgeStatus::Error => rsx! {
            Icon { width: 12, height: 12, fill: "currentColor", icon: FaXmark }
        },
        BadgeStatus::Info => rsx! {
            Icon { width: 12, height: 12, fill: "currentColor", icon: FaCircleInfo }
        },
        BadgeStatus::Pending => rsx! {
            Icon { width: 12, height: 12, fill: "currentColor", icon: FaClock }
        },
    };

    rsx! {
        span {
            class: "status-badge {status.class()} {class}",
            {icon}
            {children}
        }
    }
}
