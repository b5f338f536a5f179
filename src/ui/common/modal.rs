use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Modal shell shared by the dialogs.
///
/// Stays mounted and toggles visibility through the backdrop class, so open
/// and close do not tear down the content. Escape and backdrop clicks both
/// route through `on_close`.
#[component]
pub fn BaseModal(
    title: String,
    is_open: Signal<bool>,
    on_close: Callback<()>,
    children: Children,
    /// Set false for dialogs that must be answered explicitly
    #[prop(default = true)]
    close_on_backdrop: bool,
) -> impl IntoView {
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let escape_handle = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                on_close.run(());
            }
        });
        on_cleanup(move || drop(escape_handle));
    }

    let backdrop_class = move || {
        if is_open.get() {
            "modal-backdrop"
        } else {
            "modal-backdrop modal-hidden"
        }
    };

    // Only a click that lands on the backdrop itself closes the modal;
    // clicks inside the card bubble up with a different target.
    let on_backdrop_click = move |ev: leptos::ev::MouseEvent| {
        if !close_on_backdrop {
            return;
        }
        #[cfg(not(feature = "ssr"))]
        if let Some(element) = ev
            .target()
            .and_then(|t| t.dyn_ref::<web_sys::Element>().cloned())
        {
            if element.class_list().contains("modal-backdrop") {
                on_close.run(());
            }
        }
        #[cfg(feature = "ssr")]
        let _ = ev;
    };

    view! {
        <div class=backdrop_class on:click=on_backdrop_click>
            <div class="modal-card">
                <div class="modal-header">
                    <h3 class="modal-title">{title}</h3>
                    <button
                        class="btn-icon"
                        aria-label="Close modal"
                        on:click=move |_| on_close.run(())
                    >
                        <Icon name=icons::X/>
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}

/// Yes/no prompt used before logout and item deletion.
///
/// Confirming runs `on_confirm` and then `on_cancel`, so the caller's cancel
/// handler doubles as the close path in both outcomes.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    is_open: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(default = "Confirm".to_string())] confirm_text: String,
    #[prop(default = "Cancel".to_string())] cancel_text: String,
    /// Destructive confirms get the danger button style
    #[prop(default = false)]
    is_destructive: bool,
) -> impl IntoView {
    let confirm_class = if is_destructive {
        "btn-danger"
    } else {
        "btn-primary"
    };

    view! {
        <BaseModal
            title=title
            is_open=is_open
            on_close=Callback::new(move |_| on_cancel.run(()))
        >
            <div class="confirm-dialog">
                <p class="confirm-message">{message}</p>

                <div class="modal-actions">
                    <button class="btn-secondary" on:click=move |_| on_cancel.run(())>
                        {cancel_text.clone()}
                    </button>
                    <button
                        class=confirm_class
                        on:click=move |_| {
                            on_confirm.run(());
                            on_cancel.run(());
                        }
                    >
                        {confirm_text.clone()}
                    </button>
                </div>
            </div>
        </BaseModal>
    }
}
