//! Image Preview Component
//!
//! Styled rendering of the list; this subtree is what gets exported.

use leptos::prelude::*;
use list_store::EXPORT_ELEMENT_ID;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ImagePreview() -> impl IntoView {
    let store = use_app_store();
    let options = move || store.style_options().get();

    let items = move || store.list().with(|list| list.items().to_vec());

    view! {
        <div class="image-preview">
            <div
                id=EXPORT_ELEMENT_ID
                class=move || format!("image-preview-content {}", options().font.as_class())
                style:background-color=move || options().background_color
                style:color=move || options().text_color
            >
                <h2 class="preview-title" style:color=move || options().title_color>
                    {move || store.list().with(|list| list.title().to_string())}
                </h2>
                <ol class="preview-items">
                    {move || {
                        let options = options();
                        items().into_iter().enumerate().map(|(index, item)| {
                            let text_color = if item.completed {
                                options.completed_item_text_color.clone()
                            } else {
                                options.text_color.clone()
                            };
                            view! {
                                <li class="preview-item" class:completed=item.completed>
                                    <span class="preview-number" style:color=options.item_number_color.clone()>
                                        {format!("{}.", index + 1)}
                                    </span>
                                    <span class="preview-text" style:color=text_color>{item.text}</span>
                                    {item.completed.then(|| view! {
                                        <span class="preview-check" style:color=options.completed_item_icon_color.clone()>
                                            "✓"
                                        </span>
                                    })}
                                </li>
                            }
                        }).collect_view()
                    }}
                </ol>
            </div>
        </div>
    }
}
