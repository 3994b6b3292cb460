//! List Entity
//!
//! The container of goal items owned by one user.

use serde::{Deserialize, Serialize};

use super::goal_item::GoalItem;
use super::style_options::StyleOptions;

/// Title given to a list created on first access
pub const DEFAULT_LIST_TITLE: &str = "My 30 Before 30 List";

/// Longest accepted list title
pub const TITLE_MAX_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketList {
    pub id: u32,
    pub user_id: String,
    pub title: String,
    pub is_public: bool,
    pub created_at: i64,
}

impl BucketList {
    pub fn summary(&self) -> ListSummary {
        ListSummary {
            id: self.id,
            title: self.title.clone(),
            is_public: self.is_public,
        }
    }
}

/// List header sent to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListSummary {
    pub id: u32,
    pub title: String,
    pub is_public: bool,
}

/// Page-entry payload: list, ordered items and resolved style options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MyListPayload {
    pub list: ListSummary,
    pub items: Vec<GoalItem>,
    pub style_options: StyleOptions,
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityItem {
    pub id: u32,
    pub text: String,
    pub completed: bool,
}

/// Public list as shown to other users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityList {
    pub id: u32,
    pub title: String,
    pub username: Option<String>,
    pub items: Vec<CommunityItem>,
}

impl From<&GoalItem> for CommunityItem {
    fn from(item: &GoalItem) -> Self {
        Self {
            id: item.id,
            text: item.text.clone(),
            completed: item.completed,
        }
    }
}
