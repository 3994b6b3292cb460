//! Progress Bar Component

use leptos::prelude::*;
use crate::models::GOAL_TARGET;
use crate::store::{use_app_store, AppStateStoreFields};

/// Completed goals against the 30-goal target
#[component]
pub fn ProgressBar() -> impl IntoView {
    let store = use_app_store();
    let progress = Memo::new(move |_| store.list().with(|list| list.progress()));

    view! {
        <div class="progress">
            <div class="progress-label">
                {move || format!("{} of {} completed", progress.get().completed, GOAL_TARGET)}
                <span class="progress-total">{move || format!(" ({} on your list)", progress.get().total)}</span>
            </div>
            <div class="progress-track">
                <div
                    class="progress-fill"
                    style:width=move || format!("{:.1}%", progress.get().percent)
                ></div>
            </div>
        </div>
    }
}
