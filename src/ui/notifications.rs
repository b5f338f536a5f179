//! Toast notifications.
//!
//! Success and failure feedback for auth and item operations. Toasts
//! auto-dismiss after a few seconds and can be closed manually.

use std::collections::VecDeque;

use leptos::prelude::*;

/// Maximum number of toasts to show at once
const MAX_TOASTS: usize = 5;

/// How long a toast stays on screen before auto-dismissing
const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

/// Toast with unique ID for tracking
#[derive(Clone, Debug)]
pub struct ToastItem {
    pub id: u64,
    pub toast: Toast,
}

/// Manager handed out through context so any view can raise a toast.
#[derive(Clone, Copy)]
pub struct NotificationManager {
    toasts: RwSignal<VecDeque<ToastItem>>,
    next_id: RwSignal<u64>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(VecDeque::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Get the toasts signal for the container
    pub fn toasts(&self) -> RwSignal<VecDeque<ToastItem>> {
        self.toasts
    }

    fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|toasts| {
            toasts.push_back(ToastItem {
                id,
                toast: Toast {
                    kind,
                    message: message.into(),
                },
            });

            // Remove oldest if we exceed max
            while toasts.len() > MAX_TOASTS {
                toasts.pop_front();
            }
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(ToastKind::Error, message);
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the notification manager to the component tree.
pub fn provide_notifications() -> NotificationManager {
    let manager = NotificationManager::new();
    provide_context(manager);
    manager
}

/// Get the notification manager from the component tree.
pub fn use_notifications() -> NotificationManager {
    expect_context::<NotificationManager>()
}

/// Toasts container component. Place once at the app root.
#[component]
pub fn ToastContainer(
    /// Signal containing the queued toasts
    toasts: RwSignal<VecDeque<ToastItem>>,
) -> impl IntoView {
    view! {
        <div class="toast-container">
            {move || {
                toasts.get().into_iter().map(|item| {
                    let id = item.id;
                    let toast = item.toast.clone();

                    view! {
                        <ToastView toast=toast id=id toasts=toasts/>
                    }
                }).collect_view()
            }}
        </div>
    }
}

/// Single toast component
#[component]
fn ToastView(toast: Toast, id: u64, toasts: RwSignal<VecDeque<ToastItem>>) -> impl IntoView {
    let (is_visible, _set_is_visible) = signal(true);

    // Auto-dismiss after the timeout
    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::future::TimeoutFuture;
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            _set_is_visible.set(false);
            toasts.update(|items| {
                items.retain(|item| item.id != id);
            });
        });
    }

    let (kind_class, icon_path) = match toast.kind {
        ToastKind::Success => (
            "toast toast-success",
            "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
        ),
        ToastKind::Error => (
            "toast toast-error",
            "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        ),
    };

    let message = toast.message.clone();

    view! {
        <Show when=move || is_visible.get()>
            <div class=kind_class role="status">
                <svg class="toast-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icon_path/>
                </svg>
                <p class="toast-message">{message.clone()}</p>
                <button
                    class="toast-close"
                    aria-label="Dismiss"
                    on:click=move |_| {
                        toasts.update(|items| {
                            items.retain(|item| item.id != id);
                        });
                    }
                >
                    <svg class="toast-close-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                    </svg>
                </button>
            </div>
        </Show>
    }
}
