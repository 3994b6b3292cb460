//! My List Page Component

use leptos::prelude::*;
use crate::components::{ImageConfigurator, ImagePreview, ItemList, NewItemForm, ProgressBar, TitleEditor};

#[component]
pub fn MyListPage() -> impl IntoView {
    view! {
        <div class="my-list-page">
            <section class="list-column">
                <TitleEditor />
                <ProgressBar />
                <NewItemForm />
                <ItemList />
            </section>
            <section class="image-column">
                <ImageConfigurator />
                <ImagePreview />
            </section>
        </div>
    }
}
