//! Item list view.
//!
//! Owns the create/edit dialog and the delete confirmation, issues the item
//! mutations, and refetches the list after every successful one so the view
//! only ever shows what the backend last confirmed. Failed submits leave the
//! dialog open with the draft intact so the user can retry.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::models::{Item, ItemDraft, format_timestamp, try_format_timestamp};
use crate::ui::api;
use crate::ui::common::{ConfirmDialog, LoadingSpinner};
use crate::ui::icon::{Icon, icons};
use crate::ui::items::use_items;
use crate::ui::notifications::use_notifications;

#[component]
pub fn ItemList() -> impl IntoView {
    let items = use_items();
    let toasts = use_notifications();

    // Dialog state: at most one dialog is open, and the draft id picks the
    // mode (None = create, Some = edit).
    let show_dialog = RwSignal::new(false);
    let draft = RwSignal::new(ItemDraft::default());
    let submitting = RwSignal::new(false);

    // Delete confirmation state
    let show_delete_confirm = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<Item>);

    let open_create = move |_| {
        draft.set(ItemDraft::default());
        show_dialog.set(true);
    };

    let on_edit = Callback::new(move |item: Item| {
        draft.set(ItemDraft::for_edit(&item));
        show_dialog.set(true);
    });

    let on_delete = Callback::new(move |item: Item| {
        delete_target.set(Some(item));
        show_delete_confirm.set(true);
    });

    let close_dialog = Callback::new(move |_: ()| {
        show_dialog.set(false);
        draft.set(ItemDraft::default());
    });

    let submit = Callback::new(move |_: ()| {
        let current = draft.get_untracked();

        // Rejected synchronously, before any network call.
        if let Err(message) = current.validate() {
            toasts.error(message);
            return;
        }

        submitting.set(true);
        spawn_local(async move {
            let editing = current.is_editing();
            let result = match current.id {
                Some(id) => api::update_item(id, &current.name, &current.description)
                    .await
                    .map(|_| ()),
                None => api::create_item(&current.name, &current.description)
                    .await
                    .map(|_| ()),
            };

            match result {
                Ok(()) => {
                    toasts.success(if editing {
                        "Item updated successfully!"
                    } else {
                        "Item created successfully!"
                    });
                    show_dialog.set(false);
                    draft.set(ItemDraft::default());
                    items.refetch();
                }
                Err(_) => {
                    // Dialog stays open with the draft intact.
                    toasts.error(if editing {
                        "Failed to update item. Please try again."
                    } else {
                        "Failed to create item. Please try again."
                    });
                }
            }
            submitting.set(false);
        });
    });

    let confirm_delete = Callback::new(move |_: ()| {
        if let Some(item) = delete_target.get_untracked() {
            spawn_local(async move {
                match api::delete_item(item.id).await {
                    Ok(()) => {
                        toasts.success("Item deleted successfully!");
                        items.refetch();
                    }
                    Err(_) => {
                        // No optimistic removal; the list is left as-is.
                        toasts.error("Failed to delete item. Please try again.");
                    }
                }
            });
        }
    });

    let cancel_delete = Callback::new(move |_: ()| {
        show_delete_confirm.set(false);
        delete_target.set(None);
    });

    view! {
        <div class="item-list">
            <div class="item-list-header">
                <h1 class="item-list-title">"My Items List"</h1>
                <button class="btn-primary" on:click=open_create>
                    <Icon name=icons::PLUS class="w-4 h-4"/>
                    "Add new item"
                </button>
            </div>

            {move || {
                if items.loading.get() {
                    view! { <LoadingSpinner message="Loading...".to_string()/> }.into_any()
                } else if let Some(error) = items.error.get() {
                    view! {
                        <div class="item-list-error">{format!("Error: {error}")}</div>
                    }
                    .into_any()
                } else {
                    let list = items.data.get().unwrap_or_default();
                    if list.is_empty() {
                        view! {
                            <div class="item-list-empty">
                                <p>"No items found. Click \"Add new item\" to add a new item."</p>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="item-grid">
                                {list
                                    .into_iter()
                                    .map(|item| {
                                        view! {
                                            <ItemCard item=item on_edit=on_edit on_delete=on_delete/>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                }
            }}

            <ItemDialog
                show=show_dialog
                draft=draft
                submitting=submitting
                on_submit=submit
                on_cancel=close_dialog
            />

            <ConfirmDialog
                title="Are you sure?".to_string()
                message="Do you really want to delete this item?".to_string()
                is_open=show_delete_confirm.into()
                on_confirm=confirm_delete
                on_cancel=cancel_delete
                confirm_text="Yes, delete it!".to_string()
                is_destructive=true
            />
        </div>
    }
}

/// One item card with edit/delete actions.
#[component]
fn ItemCard(item: Item, on_edit: Callback<Item>, on_delete: Callback<Item>) -> impl IntoView {
    let created = format_timestamp(&item.created_at);
    // Shown only when it differs from created and actually parses.
    let updated = (item.updated_at != item.created_at)
        .then(|| try_format_timestamp(&item.updated_at))
        .flatten();

    let edit_item = item.clone();
    let delete_item = item.clone();

    view! {
        <div class="item-card">
            <h3 class="item-card-name">{item.name.clone()}</h3>
            <p class="item-card-description">{item.description.clone()}</p>

            <p class="item-card-meta">{format!("Created: {created}")}</p>
            {updated.map(|ts| view! {
                <p class="item-card-meta">{format!("Last Updated: {ts}")}</p>
            })}

            <div class="item-card-actions">
                <button
                    class="btn-icon"
                    aria-label="Edit"
                    on:click=move |_| on_edit.run(edit_item.clone())
                >
                    <Icon name=icons::EDIT/>
                </button>
                <button
                    class="btn-icon btn-icon-danger"
                    aria-label="Delete"
                    on:click=move |_| on_delete.run(delete_item.clone())
                >
                    <Icon name=icons::TRASH/>
                </button>
            </div>
        </div>
    }
}

/// Create/edit dialog. The title and submit label follow the draft's mode
/// reactively so the mounted dialog can flip between create and edit.
#[component]
fn ItemDialog(
    show: RwSignal<bool>,
    draft: RwSignal<ItemDraft>,
    submitting: RwSignal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let editing = Memo::new(move |_| draft.with(|d| d.is_editing()));

    view! {
        <Show when=move || show.get()>
            <div class="modal-backdrop">
                <div class="modal-card item-dialog">
                    <h2 class="modal-title">
                        {move || if editing.get() { "Edit Item" } else { "Create New Item" }}
                    </h2>

                    <input
                        type="text"
                        placeholder="Item Name"
                        class="form-input"
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| {
                            draft.update(|d| d.name = event_target_value(&ev));
                        }
                    />
                    <textarea
                        placeholder="Item Description"
                        class="form-textarea"
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| {
                            draft.update(|d| d.description = event_target_value(&ev));
                        }
                    ></textarea>

                    <div class="modal-actions">
                        <button class="btn-secondary" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button
                            class="btn-primary"
                            disabled=move || submitting.get()
                            on:click=move |_| on_submit.run(())
                        >
                            {move || if editing.get() { "Update" } else { "Create" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
