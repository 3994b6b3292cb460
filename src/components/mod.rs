//! UI Components

mod toast_host;
mod delete_confirm_button;
mod title_editor;
mod progress_bar;
mod new_item_form;
mod item_row;
mod item_list;
mod image_configurator;
mod image_preview;
mod my_list_page;
mod browse_page;
mod settings_panel;
mod feedback_form;

pub use toast_host::ToastHost;
pub use delete_confirm_button::DeleteConfirmButton;
pub use title_editor::TitleEditor;
pub use progress_bar::ProgressBar;
pub use new_item_form::NewItemForm;
pub use item_row::ItemRow;
pub use item_list::ItemList;
pub use image_configurator::ImageConfigurator;
pub use image_preview::ImagePreview;
pub use my_list_page::MyListPage;
pub use browse_page::BrowsePage;
pub use settings_panel::SettingsPanel;
pub use feedback_form::FeedbackForm;
