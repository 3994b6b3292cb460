//! Feedback Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::commands;
use crate::context::use_app_context;
use crate::store::flatten;

#[component]
pub fn FeedbackForm() -> impl IntoView {
    let ctx = use_app_context();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (pending, set_pending) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        let title_value = title.get();
        let description_value = description.get();
        set_pending.set(true);
        spawn_local(async move {
            match flatten(commands::submit_suggestion(&title_value, &description_value).await) {
                Ok((message, _)) => {
                    set_title.set(String::new());
                    set_description.set(String::new());
                    ctx.success(message);
                }
                Err(message) => ctx.error(message),
            }
            set_pending.set(false);
        });
    };

    view! {
        <div class="feedback-form">
            <h1>"Suggest a Feature"</h1>
            <form on:submit=submit>
                <label for="suggestion-title">"Title"</label>
                <input
                    id="suggestion-title"
                    type="text"
                    maxlength="100"
                    placeholder="e.g., Add custom themes"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <label for="suggestion-description">"Description (optional)"</label>
                <textarea
                    id="suggestion-description"
                    maxlength="500"
                    rows="5"
                    placeholder="Describe your idea in more detail..."
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
                <button
                    type="submit"
                    disabled=move || pending.get() || title.get().trim().is_empty()
                >
                    {move || if pending.get() { "Submitting..." } else { "Submit Suggestion" }}
                </button>
            </form>
        </div>
    }
}
