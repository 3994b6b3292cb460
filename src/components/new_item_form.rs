//! New Item Form Component
//!
//! Form for appending a goal to the list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::context::use_app_context;
use crate::store::{store_add_item, use_app_store};

/// The typed text is cleared only after the backend stored the item
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let (new_text, set_new_text) = signal(String::new());
    let (adding, set_adding) = signal(false);

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        if text.trim().is_empty() || adding.get() {
            return;
        }
        set_adding.set(true);
        spawn_local(async move {
            if store_add_item(store, ctx, text).await {
                set_new_text.set(String::new());
            }
            set_adding.set(false);
        });
    };

    view! {
        <form class="new-item-form" on:submit=add_item>
            <div class="new-item-row">
                <input
                    type="text"
                    maxlength="200"
                    placeholder="Add a new goal..."
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || adding.get() || new_text.get().trim().is_empty()>
                    {move || if adding.get() { "Adding..." } else { "Add" }}
                </button>
            </div>
        </form>
    }
}
