//! Image Configurator Component
//!
//! Color and font controls for the shareable image, plus save and download.
//! Edits apply to the preview immediately; saving persists them.

use leptos::prelude::*;
use leptos::task::spawn_local;
use list_store::SaveStyleOptionsRequest;
use crate::commands;
use crate::context::use_app_context;
use crate::export::export_image;
use crate::models::{Font, StyleOptions, StyleOptionsInput};
use crate::store::{flatten, use_app_store, AppStateStoreFields};

#[derive(Clone, Copy, PartialEq)]
enum ColorField {
    Background,
    Text,
    Title,
    ItemNumber,
    CompletedText,
    CompletedIcon,
}

impl ColorField {
    const ALL: [ColorField; 6] = [
        ColorField::Background,
        ColorField::Text,
        ColorField::Title,
        ColorField::ItemNumber,
        ColorField::CompletedText,
        ColorField::CompletedIcon,
    ];

    fn label(self) -> &'static str {
        match self {
            ColorField::Background => "Background",
            ColorField::Text => "Text",
            ColorField::Title => "Title",
            ColorField::ItemNumber => "Item numbers",
            ColorField::CompletedText => "Completed text",
            ColorField::CompletedIcon => "Completed icon",
        }
    }

    fn get(self, options: &StyleOptions) -> &str {
        match self {
            ColorField::Background => &options.background_color,
            ColorField::Text => &options.text_color,
            ColorField::Title => &options.title_color,
            ColorField::ItemNumber => &options.item_number_color,
            ColorField::CompletedText => &options.completed_item_text_color,
            ColorField::CompletedIcon => &options.completed_item_icon_color,
        }
    }

    fn set(self, options: &mut StyleOptions, value: String) {
        let slot = match self {
            ColorField::Background => &mut options.background_color,
            ColorField::Text => &mut options.text_color,
            ColorField::Title => &mut options.title_color,
            ColorField::ItemNumber => &mut options.item_number_color,
            ColorField::CompletedText => &mut options.completed_item_text_color,
            ColorField::CompletedIcon => &mut options.completed_item_icon_color,
        };
        *slot = value;
    }
}

#[component]
pub fn ImageConfigurator() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let (saving, set_saving) = signal(false);
    let (exporting, set_exporting) = signal(false);

    let save = move |_| {
        let Some(list_id) = store.list().with_untracked(|list| list.list_id()) else {
            return;
        };
        let options = StyleOptionsInput::from(&store.style_options().get_untracked());
        set_saving.set(true);
        spawn_local(async move {
            let req = SaveStyleOptionsRequest { list_id, options };
            match flatten(commands::save_style_options(&req).await) {
                Ok((message, saved)) => {
                    if let Some(saved) = saved {
                        store.style_options().set(saved);
                    }
                    ctx.success(message);
                }
                Err(message) => ctx.error(message),
            }
            set_saving.set(false);
        });
    };

    let download = move |_| {
        let options = store.style_options().get_untracked();
        let plan = match store.list().with_untracked(|list| list.export_plan(&options)) {
            Ok(plan) => plan,
            Err(e) => {
                ctx.error(e.to_string());
                return;
            }
        };
        set_exporting.set(true);
        spawn_local(async move {
            match export_image(&plan).await {
                Ok(true) => ctx.success(format!("Saved {}", plan.file_name)),
                Ok(false) => {}
                Err(e) => ctx.error(format!("Failed to generate image: {}", e)),
            }
            set_exporting.set(false);
        });
    };

    let reset = move |_| store.style_options().set(StyleOptions::default());

    // Discard unsaved edits
    let revert = move |_| {
        let Some(list_id) = store.list().with_untracked(|list| list.list_id()) else {
            return;
        };
        spawn_local(async move {
            match flatten(commands::load_style_options(list_id).await) {
                Ok((_, Some(saved))) => store.style_options().set(saved),
                Ok((_, None)) => {}
                Err(message) => ctx.error(message),
            }
        });
    };

    view! {
        <div class="image-configurator">
            <h2>"Customize your image"</h2>
            <div class="color-grid">
                {ColorField::ALL.into_iter().map(|field| {
                    view! {
                        <label class="color-field">
                            <span>{field.label()}</span>
                            <input
                                type="color"
                                prop:value=move || store.style_options().with(|o| field.get(o).to_string())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    store.style_options().update(|o| field.set(o, value));
                                }
                            />
                        </label>
                    }
                }).collect_view()}
            </div>
            <label class="font-field">
                <span>"Font"</span>
                <select
                    prop:value=move || store.style_options().with(|o| o.font.as_class().to_string())
                    on:change=move |ev| {
                        if let Some(font) = Font::from_class(&event_target_value(&ev)) {
                            store.style_options().update(|o| o.font = font);
                        }
                    }
                >
                    {Font::ALL.into_iter().map(|font| view! {
                        <option value=font.as_class()>{font.label()}</option>
                    }).collect_view()}
                </select>
            </label>
            <div class="configurator-actions">
                <button type="button" class="cancel-btn" on:click=reset>"Defaults"</button>
                <button type="button" class="cancel-btn" on:click=revert>"Revert to saved"</button>
                <button type="button" disabled=move || saving.get() on:click=save>
                    {move || if saving.get() { "Saving..." } else { "Save style" }}
                </button>
                <button type="button" class="primary" disabled=move || exporting.get() on:click=download>
                    {move || if exporting.get() { "Generating..." } else { "Download image" }}
                </button>
            </div>
        </div>
    }
}
