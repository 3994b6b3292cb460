//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Number of goals the progress bar measures against
pub const GOAL_TARGET: usize = 30;

/// Goal category tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    Travel,
    Food,
    Adventure,
    Skills,
    Wellness,
    Creative,
    Community,
    Finance,
    Career,
    #[default]
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Travel => "Travel",
            Category::Food => "Food",
            Category::Adventure => "Adventure",
            Category::Skills => "Skills",
            Category::Wellness => "Wellness",
            Category::Creative => "Creative",
            Category::Community => "Community",
            Category::Finance => "Finance",
            Category::Career => "Career",
            Category::Other => "Other",
        }
    }
}

/// One entry on a bucket list (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalItem {
    pub id: u32,
    pub list_id: u32,
    pub text: String,
    pub completed: bool,
    #[serde(default)]
    pub category: Category,
    pub position: i32,
    pub created_at: i64,
}

/// List header without items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListSummary {
    pub id: u32,
    pub title: String,
    pub is_public: bool,
}

/// Everything the list page needs on entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MyListPayload {
    pub list: ListSummary,
    pub items: Vec<GoalItem>,
    pub style_options: StyleOptions,
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: String,
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: u32,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityItem {
    pub id: u32,
    pub text: String,
    pub completed: bool,
}

/// A public list shown on the browse page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityList {
    pub id: u32,
    pub title: String,
    pub username: Option<String>,
    pub items: Vec<CommunityItem>,
}

/// Font selector for the exported image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Font {
    #[default]
    #[serde(rename = "font-sans")]
    Sans,
    #[serde(rename = "font-serif")]
    Serif,
    #[serde(rename = "font-mono")]
    Mono,
    #[serde(rename = "font-handwriting")]
    Handwriting,
    #[serde(rename = "font-headline")]
    Headline,
    #[serde(rename = "font-display")]
    Display,
}

impl Font {
    pub const ALL: [Font; 6] = [
        Font::Sans,
        Font::Serif,
        Font::Mono,
        Font::Handwriting,
        Font::Headline,
        Font::Display,
    ];

    /// CSS class applied to the preview
    pub fn as_class(&self) -> &'static str {
        match self {
            Font::Sans => "font-sans",
            Font::Serif => "font-serif",
            Font::Mono => "font-mono",
            Font::Handwriting => "font-handwriting",
            Font::Headline => "font-headline",
            Font::Display => "font-display",
        }
    }

    pub fn from_class(s: &str) -> Option<Self> {
        Font::ALL.into_iter().find(|f| f.as_class() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Font::Sans => "Sans-serif (Default)",
            Font::Serif => "Serif",
            Font::Mono => "Monospace",
            Font::Handwriting => "Handwriting",
            Font::Headline => "Headline",
            Font::Display => "Display",
        }
    }
}

/// Fully resolved rendering preferences (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleOptions {
    pub background_color: String,
    pub text_color: String,
    pub title_color: String,
    pub item_number_color: String,
    pub completed_item_text_color: String,
    pub completed_item_icon_color: String,
    pub font: Font,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            background_color: "#fefae0".to_string(),
            text_color: "#1f2937".to_string(),
            title_color: "#d4a373".to_string(),
            item_number_color: "#9ca3af".to_string(),
            completed_item_text_color: "#6b7280".to_string(),
            completed_item_icon_color: "#16a34a".to_string(),
            font: Font::Sans,
        }
    }
}

/// Style options as submitted for saving; absent fields fall back to defaults on load
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleOptionsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_number_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_item_text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_item_icon_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

impl From<&StyleOptions> for StyleOptionsInput {
    fn from(options: &StyleOptions) -> Self {
        Self {
            background_color: Some(options.background_color.clone()),
            text_color: Some(options.text_color.clone()),
            title_color: Some(options.title_color.clone()),
            item_number_color: Some(options.item_number_color.clone()),
            completed_item_text_color: Some(options.completed_item_text_color.clone()),
            completed_item_icon_color: Some(options.completed_item_icon_color.clone()),
            font: Some(options.font),
        }
    }
}
