//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The item list itself
//! lives in a `ListStore`, which owns the optimistic rollback rules;
//! the helpers below pair each optimistic change with its backend call.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use list_store::{EditCommit, ListStore, Outcome, Pending, Settled};
use crate::commands;
use crate::context::AppContext;
use crate::models::{ActionResult, MyListPayload, StyleOptions};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The signed-in user's list and its ordered items
    pub list: ListStore,
    /// Rendering preferences for the image preview
    pub style_options: StyleOptions,
    pub username: Option<String>,
    pub is_public: bool,
    /// First load finished (successfully or not)
    pub loaded: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Flatten the transport result and the action envelope into one result
pub fn flatten<T>(result: Result<ActionResult<T>, String>) -> Result<(String, Option<T>), String> {
    result.and_then(ActionResult::into_result)
}

// ========================
// Store Helper Functions
// ========================

/// Replace the store contents with a page-load payload
pub fn store_load(store: &AppStore, payload: MyListPayload) {
    web_sys::console::log_1(
        &format!("[STORE] Loaded list {} with {} items", payload.list.id, payload.items.len()).into(),
    );
    *store.list().write() = ListStore::load(payload.list.id, payload.list.title, payload.items);
    store.style_options().set(payload.style_options);
    store.username().set(payload.username);
    store.is_public().set(payload.list.is_public);
    store.loaded().set(true);
}

/// Apply the remote outcome to a pending mutation and notify the user
fn store_settle<R, T>(
    store: &AppStore,
    ctx: &AppContext,
    pending: Pending<R>,
    result: Result<ActionResult<T>, String>,
) {
    let result = flatten(result).map(|(message, _)| message);
    let settled = store.list().write().settle(pending, &Outcome::from_result(&result));
    match settled {
        Settled::Kept => ctx.report(&result),
        Settled::RolledBack { message } => {
            web_sys::console::warn_1(&format!("[STORE] Rolled back: {}", message).into());
            ctx.error(message);
        }
    }
}

// ========================
// Optimistic Mutations
// ========================

pub fn store_toggle_item(store: AppStore, ctx: AppContext, item_id: u32) {
    let begun = store.list().write().begin_toggle(item_id);
    match begun {
        Ok(pending) => spawn_local(async move {
            let result = commands::toggle_item(pending.request()).await;
            store_settle(&store, &ctx, pending, result);
        }),
        Err(e) => ctx.error(e.to_string()),
    }
}

pub fn store_delete_item(store: AppStore, ctx: AppContext, item_id: u32) {
    let begun = store.list().write().begin_delete(item_id);
    match begun {
        Ok(pending) => spawn_local(async move {
            let result = commands::delete_item(pending.request()).await;
            store_settle(&store, &ctx, pending, result);
        }),
        Err(e) => ctx.error(e.to_string()),
    }
}

/// Move the item at `from` to `to`; every position is rewritten
pub fn store_reorder_items(store: AppStore, ctx: AppContext, from: usize, to: usize) {
    let begun = store.list().write().begin_reorder(from, to);
    match begun {
        Ok(pending) => spawn_local(async move {
            let result = commands::reorder_items(pending.request()).await;
            store_settle(&store, &ctx, pending, result);
        }),
        Err(e) => ctx.error(e.to_string()),
    }
}

/// Commit the row being edited
pub fn store_commit_edit(store: AppStore, ctx: AppContext) {
    let committed = store.list().write().commit_edit();
    match committed {
        Ok(EditCommit::Unchanged) => {}
        Ok(EditCommit::Submitted(pending)) => spawn_local(async move {
            let result = commands::edit_item_text(pending.request()).await;
            store_settle(&store, &ctx, pending, result);
        }),
        Err(e) => ctx.error(e.to_string()),
    }
}

// ========================
// Awaited Mutations
// ========================

/// Add a goal; resolves to true when the item was stored and merged
pub async fn store_add_item(store: AppStore, ctx: AppContext, text: String) -> bool {
    let prepared = store.list().read_untracked().prepare_add(&text);
    let req = match prepared {
        Ok(req) => req,
        Err(e) => {
            ctx.error(e.to_string());
            return false;
        }
    };
    match flatten(commands::add_item(&req).await) {
        Ok((message, Some(item))) => {
            store.list().write().merge_added(item);
            ctx.success(message);
            true
        }
        Ok((message, None)) => {
            // Stored but not returned; fetch the canonical list
            ctx.success(message);
            ctx.reload();
            true
        }
        Err(message) => {
            ctx.error(message);
            false
        }
    }
}

/// Save a new list title; resolves to true once the backend confirmed it
pub async fn store_update_title(store: AppStore, ctx: AppContext, title: String) -> bool {
    let prepared = store.list().read_untracked().prepare_title(&title);
    let req = match prepared {
        Ok(req) => req,
        Err(e) => {
            ctx.error(e.to_string());
            return false;
        }
    };
    match flatten(commands::update_title(&req).await) {
        Ok((message, summary)) => {
            let saved = summary.map(|s| s.title).unwrap_or(req.title);
            store.list().write().apply_title(saved);
            ctx.success(message);
            true
        }
        Err(message) => {
            ctx.error(message);
            false
        }
    }
}
