//! Goal Item Entity
//!
//! One entry on a user's bucket list, ordered by a dense position within its list.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Longest accepted goal text
pub const ITEM_TEXT_MAX_CHARS: usize = 200;

/// Category tag for a goal
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

    /// Unknown labels fall back to `Other`
    pub fn from_label(s: &str) -> Self {
        match s {
            "Travel" => Category::Travel,
            "Food" => Category::Food,
            "Adventure" => Category::Adventure,
            "Skills" => Category::Skills,
            "Wellness" => Category::Wellness,
            "Creative" => Category::Creative,
            "Community" => Category::Community,
            "Finance" => Category::Finance,
            "Career" => Category::Career,
            _ => Category::Other,
        }
    }
}

/// A goal on a bucket list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalItem {
    /// Unique identifier
    pub id: u32,
    /// Owning list
    pub list_id: u32,
    /// Owning user (auth collaborator identity)
    pub user_id: String,
    /// Display text, never empty
    pub text: String,
    /// Completion status
    pub completed: bool,
    pub category: Category,
    /// Rank within the list; the only sort key
    pub position: i32,
    /// Unix millis
    pub created_at: i64,
}

impl GoalItem {
    /// Create an uncompleted goal; id, position and timestamp are assigned on insert
    pub fn new(list_id: u32, user_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: 0,
            list_id,
            user_id: user_id.into(),
            text: text.into(),
            completed: false,
            category: Category::Other,
            position: 0,
            created_at: 0,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}

impl Entity for GoalItem {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
