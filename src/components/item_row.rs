//! Item Row Component
//!
//! One goal: completion checkbox, inline text editing, delete with confirmation.

use leptos::prelude::*;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::GoalItem;
use crate::store::{
    store_commit_edit, store_delete_item, store_toggle_item, use_app_store, AppStateStoreFields,
};

#[component]
pub fn ItemRow(
    item: GoalItem,
    /// 1-based display number
    number: usize,
) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let item_id = item.id;

    let is_editing = move || store.list().with(|list| list.is_editing(item_id));
    let draft = move || {
        store.list().with(|list| match list.edit_state() {
            list_store::EditState::Editing { draft, .. } => draft.clone(),
            list_store::EditState::Viewing => String::new(),
        })
    };

    let start_edit = move |_| {
        if let Err(e) = store.list().write().start_edit(item_id) {
            ctx.error(e.to_string());
        }
    };

    let text = item.text.clone();
    let completed = item.completed;
    let category = item.category;

    view! {
        <span class="item-number">{format!("{}.", number)}</span>
        <input
            type="checkbox"
            class="item-checkbox"
            prop:checked=completed
            on:change=move |_| store_toggle_item(store, ctx, item_id)
        />
        <Show
            when=is_editing
            fallback=move || {
                let text = text.clone();
                view! {
                    <span
                        class=if completed { "item-text completed" } else { "item-text" }
                        title="Double-click to edit"
                        on:dblclick=start_edit
                    >
                        {text}
                    </span>
                    <span class="item-category">{category.as_str()}</span>
                    <button class="edit-btn" title="Edit goal" on:click=start_edit>"✎"</button>
                }
            }
        >
            <input
                type="text"
                class="item-edit-input"
                maxlength="200"
                autofocus=true
                prop:value=draft
                on:input=move |ev| store.list().write().set_draft(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    match ev.key().as_str() {
                        "Enter" => {
                            ev.prevent_default();
                            store_commit_edit(store, ctx);
                        }
                        "Escape" => store.list().write().cancel_edit(),
                        _ => {}
                    }
                }
            />
            <button class="confirm-btn" on:click=move |_| store_commit_edit(store, ctx)>"Save"</button>
            <button class="cancel-btn" on:click=move |_| store.list().write().cancel_edit()>"Cancel"</button>
        </Show>
        <DeleteConfirmButton
            button_class="delete-btn"
            on_confirm=move |_| store_delete_item(store, ctx, item_id)
        />
    }
}
