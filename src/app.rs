//! 30 Before 30 Frontend App
//!
//! Top-level navigation between the user's list, the community page and settings.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::context::AppContext;
use crate::components::{BrowsePage, FeedbackForm, MyListPage, SettingsPanel, ToastHost};
use crate::store::{flatten, store_load, AppState, AppStateStoreFields};

/// Polling interval while the backend opens the database
const DB_POLL_MS: u32 = 200;
const DB_POLL_ATTEMPTS: u32 = 50;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Page {
    MyList,
    Browse,
    Settings,
    Feedback,
}

impl Page {
    const ALL: [Page; 4] = [Page::MyList, Page::Browse, Page::Settings, Page::Feedback];

    fn label(self) -> &'static str {
        match self {
            Page::MyList => "My List",
            Page::Browse => "Browse",
            Page::Settings => "Settings",
            Page::Feedback => "Feedback",
        }
    }
}

/// Wait until background database initialization has finished
async fn wait_for_db() -> bool {
    for _ in 0..DB_POLL_ATTEMPTS {
        if matches!(commands::db_ready().await, Ok(true)) {
            return true;
        }
        TimeoutFuture::new(DB_POLL_MS).await;
    }
    false
}

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (page, set_page) = signal(Page::MyList);
    let (load_error, set_load_error) = signal(None::<String>);
    let (user, set_user) = signal(None::<commands::User>);

    let ctx = AppContext::new((reload_trigger, set_reload_trigger));

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    spawn_local(async move {
        match commands::current_user().await {
            Ok(current) => set_user.set(current),
            Err(e) => web_sys::console::warn_1(&format!("[APP] current_user failed: {}", e).into()),
        }
    });

    // Load the list on mount and whenever a reload is requested
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        web_sys::console::log_1(&format!("[APP] Loading list, trigger={}", trigger).into());
        spawn_local(async move {
            if !wait_for_db().await {
                web_sys::console::warn_1(&"[APP] Database still not ready".into());
            }
            match flatten(commands::load_my_list().await) {
                Ok((_, Some(payload))) => {
                    set_load_error.set(None);
                    store_load(&store, payload);
                }
                Ok((message, None)) | Err(message) => {
                    ctx.error(message.clone());
                    set_load_error.set(Some(message));
                    store.loaded().set(true);
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            <nav class="tab-bar">
                <span class="brand">"30 Before 30"</span>
                {Page::ALL.into_iter().map(|p| view! {
                    <button
                        class=move || if page.get() == p { "tab active" } else { "tab" }
                        on:click=move |_| set_page.set(p)
                    >
                        {p.label()}
                    </button>
                }).collect_view()}
                <span class="session">
                    {move || match user.get() {
                        Some(u) => u.email.unwrap_or(u.id),
                        None => "Signed out".to_string(),
                    }}
                </span>
            </nav>

            <main class="main-content">
                {move || {
                    if !store.loaded().get() {
                        return view! { <p class="loading">"Loading your list..."</p> }.into_any();
                    }
                    if let Some(message) = load_error.get() {
                        return view! {
                            <div class="load-error">
                                <p>{message}</p>
                                <button on:click=move |_| ctx.reload()>"Try again"</button>
                            </div>
                        }.into_any();
                    }
                    match page.get() {
                        Page::MyList => view! { <MyListPage /> }.into_any(),
                        Page::Browse => view! { <BrowsePage /> }.into_any(),
                        Page::Settings => view! { <SettingsPanel /> }.into_any(),
                        Page::Feedback => view! { <FeedbackForm /> }.into_any(),
                    }
                }}
            </main>

            <ToastHost />
        </div>
    }
}
