//! Item List Component
//!
//! Drag-sortable list of goals. A drop reorders locally first and then
//! persists every position.

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals, make_on_mousedown, make_on_mouseenter};
use crate::components::ItemRow;
use crate::context::use_app_context;
use crate::store::{store_reorder_items, use_app_store, AppStateStoreFields};

#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let dnd = create_dnd_signals();

    bind_global_mouseup(dnd, move |from, to| {
        web_sys::console::log_1(&format!("[DND] Move {} -> {}", from, to).into());
        store_reorder_items(store, ctx, from, to);
    });

    // Rows are keyed by content so optimistic edits and rollbacks re-render them
    let rows = move || {
        store.list().with(|list| {
            list.items()
                .iter()
                .cloned()
                .enumerate()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <Show
            when=move || !store.list().with(|list| list.is_empty())
            fallback=|| view! { <p class="empty-list">"Your list is empty. Add your first goal above!"</p> }
        >
            <ul class="item-list" class:dragging=move || dnd.dragging_read.get().is_some()>
                <For
                    each=rows
                    key=|(index, item)| (*index, item.id, item.text.clone(), item.completed)
                    children=move |(index, item)| {
                        let completed = item.completed;
                        view! {
                            <li
                                class="item-row"
                                class:completed=completed
                                class:drag-source=move || dnd.dragging_read.get() == Some(index)
                                class:drop-target=move || {
                                    dnd.dragging_read.get().is_some() && dnd.hover_read.get() == Some(index)
                                }
                                on:mousedown=make_on_mousedown(dnd, index)
                                on:mouseenter=make_on_mouseenter(dnd, index)
                            >
                                <ItemRow item=item number=index + 1 />
                            </li>
                        }
                    }
                />
            </ul>
        </Show>
    }
}
