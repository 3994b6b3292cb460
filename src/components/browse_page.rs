//! Browse Page Component
//!
//! Community lists shared by other users, with "add to my list" per goal,
//! and a lookup for a single public list by username.

use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::commands;
use crate::context::{use_app_context, AppContext};
use crate::models::CommunityList;
use crate::store::{flatten, use_app_store, AppStateStoreFields, AppStore};

/// Copy a goal into the user's list and show it there without a reload
fn add_to_my_list(store: AppStore, ctx: AppContext, text: String) {
    spawn_local(async move {
        match flatten(commands::add_item_from_community(&text).await) {
            Ok((message, item)) => {
                let current = store.list().with_untracked(|list| list.list_id());
                match item {
                    Some(item) if Some(item.list_id) == current => store.list().write().merge_added(item),
                    _ => ctx.reload(),
                }
                ctx.success(message);
            }
            Err(message) => ctx.error(message),
        }
    });
}

#[component]
fn CommunityListCard(list: CommunityList) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let owner = list.username.clone().unwrap_or_else(|| "Anonymous".to_string());

    view! {
        <article class="community-list">
            <header>
                <h3>{list.title}</h3>
                <span class="community-owner">{format!("by {}", owner)}</span>
            </header>
            <ul>
                {list.items.into_iter().map(|item| {
                    let text = item.text.clone();
                    view! {
                        <li class="community-item" class:completed=item.completed>
                            <span>{item.text}</span>
                            <button
                                class="add-btn"
                                title="Add to my list"
                                on:click=move |_| add_to_my_list(store, ctx, text.clone())
                            >
                                "+"
                            </button>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </article>
    }
}

#[component]
pub fn BrowsePage() -> impl IntoView {
    let ctx = use_app_context();

    let (lists, set_lists) = signal(Vec::<CommunityList>::new());
    let (loading, set_loading) = signal(true);
    let (lookup, set_lookup) = signal(String::new());
    let (found, set_found) = signal(None::<CommunityList>);
    let (searching, set_searching) = signal(false);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match flatten(commands::browse_public_lists(None).await) {
                Ok((_, data)) => {
                    let data = data.unwrap_or_default();
                    web_sys::console::log_1(&format!("[BROWSE] Loaded {} public lists", data.len()).into());
                    set_lists.set(data);
                }
                Err(message) => ctx.error(message),
            }
            set_loading.set(false);
        });
    });

    let search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = lookup.get().trim().to_string();
        if username.is_empty() || searching.get() {
            return;
        }
        set_searching.set(true);
        spawn_local(async move {
            match flatten(commands::get_public_list(&username).await) {
                Ok((_, list)) => set_found.set(list),
                Err(message) => {
                    set_found.set(None);
                    ctx.error(message);
                }
            }
            set_searching.set(false);
        });
    };

    view! {
        <div class="browse-page">
            <h1>"Browse community lists"</h1>
            <form class="lookup-form" on:submit=search>
                <input
                    type="text"
                    placeholder="Find a list by username..."
                    prop:value=move || lookup.get()
                    on:input=move |ev| set_lookup.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || searching.get()>"Find"</button>
            </form>
            {move || found.get().map(|list| view! {
                <div class="lookup-result">
                    <CommunityListCard list=list />
                    <button class="cancel-btn" on:click=move |_| set_found.set(None)>"Close"</button>
                </div>
            })}
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <Show
                    when=move || !lists.get().is_empty()
                    fallback=|| view! { <p class="empty-list">"No public lists yet. Be the first to share yours!"</p> }
                >
                    <div class="community-grid">
                        <For
                            each=move || lists.get()
                            key=|list| list.id
                            children=|list| view! { <CommunityListCard list=list /> }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
