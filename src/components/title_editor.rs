//! Title Editor Component
//!
//! Click-to-edit list title. The title is saved only when the backend confirms it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::context::use_app_context;
use crate::store::{store_update_title, use_app_store, AppStateStoreFields};

#[component]
pub fn TitleEditor() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(String::new());
    let (saving, set_saving) = signal(false);

    let title = move || store.list().with(|list| list.title().to_string());

    let start_edit = move |_| {
        set_draft.set(title());
        set_editing.set(true);
    };

    let save = move || {
        if saving.get_untracked() {
            return;
        }
        let text = draft.get_untracked();
        set_saving.set(true);
        spawn_local(async move {
            if store_update_title(store, ctx, text).await {
                set_editing.set(false);
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="title-editor">
            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <h1 class="list-title" title="Click to rename" on:click=start_edit>
                        {title}
                    </h1>
                }
            >
                <form
                    class="title-form"
                    on:submit=move |ev: web_sys::SubmitEvent| {
                        ev.prevent_default();
                        save();
                    }
                >
                    <input
                        type="text"
                        maxlength="100"
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Escape" {
                                set_editing.set(false);
                            }
                        }
                    />
                    <button type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                    <button type="button" class="cancel-btn" on:click=move |_| set_editing.set(false)>
                        "Cancel"
                    </button>
                </form>
            </Show>
        </div>
    }
}
