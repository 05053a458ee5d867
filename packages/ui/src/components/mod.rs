//! Reusable glass-styled building blocks.

mod badge;
mod button;
mod card;
mod input;
mod loading;
mod toast;

pub use badge::{BadgeStatus, StatusBadge};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::Card;
pub use input::Input;
pub use loading::{LoadingOverlay, Spinner};
pub use toast::{use_toast, Toast, ToastKind, ToastProvider, Toasts};
