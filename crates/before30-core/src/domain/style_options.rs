//! Style Options
//!
//! Per-list rendering preferences for the exported image. Stored fields are all
//! optional; reads substitute the fixed default palette for anything missing.

use serde::{Deserialize, Serialize};

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
    pub fn as_str(&self) -> &'static str {
        match self {
            Font::Sans => "font-sans",
            Font::Serif => "font-serif",
            Font::Mono => "font-mono",
            Font::Handwriting => "font-handwriting",
            Font::Headline => "font-headline",
            Font::Display => "font-display",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "font-sans" => Some(Font::Sans),
            "font-serif" => Some(Font::Serif),
            "font-mono" => Some(Font::Mono),
            "font-handwriting" => Some(Font::Handwriting),
            "font-headline" => Some(Font::Headline),
            "font-display" => Some(Font::Display),
            _ => None,
        }
    }
}

/// Fully populated options record
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

/// Options as saved: any field may be absent
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleOptionsInput {
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub text_color: Option<String>,
    #[serde(default)]
    pub title_color: Option<String>,
    #[serde(default)]
    pub item_number_color: Option<String>,
    #[serde(default)]
    pub completed_item_text_color: Option<String>,
    #[serde(default)]
    pub completed_item_icon_color: Option<String>,
    #[serde(default)]
    pub font: Option<Font>,
}

impl StyleOptionsInput {
    /// Present color fields, named as on the wire
    pub fn colors(&self) -> [(&'static str, Option<&str>); 6] {
        [
            ("backgroundColor", self.background_color.as_deref()),
            ("textColor", self.text_color.as_deref()),
            ("titleColor", self.title_color.as_deref()),
            ("itemNumberColor", self.item_number_color.as_deref()),
            ("completedItemTextColor", self.completed_item_text_color.as_deref()),
            ("completedItemIconColor", self.completed_item_icon_color.as_deref()),
        ]
    }
}

impl StyleOptions {
    /// Substitute defaults for every missing field; no record yields all defaults
    pub fn resolve(stored: Option<StyleOptionsInput>) -> Self {
        let defaults = StyleOptions::default();
        let Some(stored) = stored else {
            return defaults;
        };
        Self {
            background_color: stored.background_color.unwrap_or(defaults.background_color),
            text_color: stored.text_color.unwrap_or(defaults.text_color),
            title_color: stored.title_color.unwrap_or(defaults.title_color),
            item_number_color: stored.item_number_color.unwrap_or(defaults.item_number_color),
            completed_item_text_color: stored
                .completed_item_text_color
                .unwrap_or(defaults.completed_item_text_color),
            completed_item_icon_color: stored
                .completed_item_icon_color
                .unwrap_or(defaults.completed_item_icon_color),
            font: stored.font.unwrap_or(defaults.font),
        }
    }
}
