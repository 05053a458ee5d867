//! Toast notifications, auto-dismissed after a few seconds.

use dioxus::prelude::*;

const TOAST_DISMISS: std::time::Duration = std::time::Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

/// A queued notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Handle for pushing notifications from anywhere under [`ToastProvider`].
#[derive(Clone, Copy)]
pub struct Toasts {
    items: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

pub fn use_toast() -> Toasts {
    use_context::<Toasts>()
}

impl Toasts {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let mut items = self.items;
        let mut next_id = self.next_id;
        let id = *next_id.peek();
        next_id.set(id + 1);
        items.write().push(Toast { id, kind, message });
        spawn(async move {
            sleep(TOAST_DISMISS).await;
            items.write().retain(|toast| toast.id != id);
        });
    }
}

async fn sleep(duration: std::time::Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Provider component rendering queued toasts above its children.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let items = use_signal(Vec::<Toast>::new);
    let next_id = use_signal(|| 0u64);
    use_context_provider(|| Toasts { items, next_id });

    rsx! {
        {children}
        div {
            class: "toast-viewport",
            for toast in items() {
                div {
                    key: "{toast.id}",
                    class: "{toast.kind.class()}",
                    "{toast.message}"
                }
            }
        }
    }
}
