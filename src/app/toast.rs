//! Transient notifications.

use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use super::timer::sleep_ms;

const TOAST_LIFETIME_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "bg-green-600 text-white",
            ToastKind::Error => "bg-red-600 text-white",
            ToastKind::Info => "bg-gray-800 text-white",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl ToastContext {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().retain(|t| t.id != id);
    }

    fn push(&self, kind: ToastKind, message: String) {
        let mut next_id = self.next_id;
        let id = *next_id.peek();
        next_id.set(id + 1);

        let mut toasts = self.toasts;
        toasts.write().push(Toast { id, kind, message });

        // Root scope: the page that raised the toast may be gone before it expires
        let ctx = *self;
        let _ = spawn_forever(async move {
            sleep_ms(TOAST_LIFETIME_MS).await;
            ctx.dismiss(id);
        });
    }
}

/// Initialize toast context provider - call once at app root
pub fn use_toast_provider() {
    let toasts = use_signal(Vec::new);
    let next_id = use_signal(|| 0u64);
    use_context_provider(|| ToastContext { toasts, next_id });
}

/// Get toast context - use in any component
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>()
}

/// Stack of active toasts, top right
#[component]
pub fn ToastHost() -> Element {
    let ctx = use_toast();
    let toasts = (ctx.toasts)();

    rsx! {
        div { class: "fixed top-4 right-4 z-50 flex flex-col gap-2",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: "rounded-lg shadow-lg px-4 py-3 flex items-center gap-3 {toast.kind.css_class()}",
                    role: "status",
                    span { "{toast.message}" }
                    button {
                        class: "ml-auto opacity-75 hover:opacity-100",
                        onclick: move |_| ctx.dismiss(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::core::VirtualDom;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static RAISED: AtomicUsize = AtomicUsize::new(0);

    #[component]
    fn RaisesOnMount() -> Element {
        use_toast_provider();
        let toast = use_toast();
        use_hook(move || toast.error("Failed to load bookings"));
        RAISED.store(toast.toasts.peek().len(), Ordering::SeqCst);
        rsx! {}
    }

    #[tokio::test]
    async fn toast_raised_during_render_schedules_its_expiry() {
        let mut dom = VirtualDom::new(RaisesOnMount);
        dom.rebuild_in_place();
        assert_eq!(RAISED.load(Ordering::SeqCst), 1);
    }
}
