//! Settings Panel Component
//!
//! List visibility, public username and the share link built from both.

use leptos::prelude::*;
use leptos::task::spawn_local;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use crate::commands;
use crate::context::use_app_context;
use crate::store::{flatten, use_app_store, AppStateStoreFields};

/// Same set `encodeURIComponent` escapes
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Path of the public view of a user's list
pub fn share_path(username: &str) -> String {
    format!("/public/{}", utf8_percent_encode(username, URI_COMPONENT))
}

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let (username_draft, set_username_draft) = signal(String::new());
    let (saving_visibility, set_saving_visibility) = signal(false);
    let (saving_username, set_saving_username) = signal(false);

    let (logs, set_logs) = signal(Vec::<String>::new());

    Effect::new(move |_| {
        set_username_draft.set(store.username().get().unwrap_or_default());
    });

    // Visibility may have changed since the page loaded
    spawn_local(async move {
        match flatten(commands::ensure_list().await) {
            Ok((_, Some(summary))) => store.is_public().set(summary.is_public),
            Ok((_, None)) => {}
            Err(message) => ctx.error(message),
        }
    });

    let load_logs = move |_| {
        spawn_local(async move {
            match commands::recent_logs().await {
                Ok(lines) => set_logs.set(lines),
                Err(e) => ctx.error(format!("Failed to read logs: {}", e)),
            }
        });
    };

    let toggle_visibility = move |_| {
        if saving_visibility.get() {
            return;
        }
        let is_public = !store.is_public().get_untracked();
        set_saving_visibility.set(true);
        spawn_local(async move {
            match flatten(commands::update_visibility(is_public).await) {
                Ok((message, summary)) => {
                    store.is_public().set(summary.map(|s| s.is_public).unwrap_or(is_public));
                    ctx.success(message);
                }
                Err(message) => ctx.error(message),
            }
            set_saving_visibility.set(false);
        });
    };

    let save_username = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving_username.get() {
            return;
        }
        let username = username_draft.get();
        set_saving_username.set(true);
        spawn_local(async move {
            match flatten(commands::update_profile(&username).await) {
                Ok((message, profile)) => {
                    store.username().set(profile.and_then(|p| p.username));
                    ctx.success(message);
                }
                Err(message) => ctx.error(message),
            }
            set_saving_username.set(false);
        });
    };

    view! {
        <div class="settings-panel">
            <h1>"Settings"</h1>
            <section>
                <h2>"Visibility"</h2>
                <label class="toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || store.is_public().get()
                        disabled=move || saving_visibility.get()
                        on:change=toggle_visibility
                    />
                    <span>"Show my list on the community page"</span>
                </label>
            </section>
            <section>
                <h2>"Username"</h2>
                <form class="username-form" on:submit=save_username>
                    <input
                        type="text"
                        minlength="3"
                        maxlength="20"
                        placeholder="your_name"
                        prop:value=move || username_draft.get()
                        on:input=move |ev| set_username_draft.set(event_target_value(&ev))
                    />
                    <button type="submit" disabled=move || saving_username.get()>
                        {move || if saving_username.get() { "Saving..." } else { "Save" }}
                    </button>
                </form>
                <p class="hint">"3-20 characters: letters, numbers, underscores and hyphens."</p>
            </section>
            <section>
                <h2>"Share"</h2>
                {move || match (store.is_public().get(), store.username().get()) {
                    (true, Some(username)) => view! {
                        <code class="share-link">{share_path(&username)}</code>
                    }.into_any(),
                    (false, _) => view! {
                        <p class="hint">"Make your list public to share it."</p>
                    }.into_any(),
                    (true, None) => view! {
                        <p class="hint">"Pick a username to get a share link."</p>
                    }.into_any(),
                }}
            </section>
            <section>
                <h2>"Diagnostics"</h2>
                <button type="button" on:click=load_logs>"Show recent logs"</button>
                <Show when=move || !logs.get().is_empty()>
                    <pre class="log-view">{move || logs.get().join("\n")}</pre>
                </Show>
            </section>
        </div>
    }
}
