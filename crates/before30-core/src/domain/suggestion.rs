//! Feature Suggestion Entity

use serde::{Deserialize, Serialize};

pub const SUGGESTION_TITLE_MAX_CHARS: usize = 100;
pub const SUGGESTION_DESCRIPTION_MAX_CHARS: usize = 500;

/// Feedback a signed-in user sent about the app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: u32,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub created_at: i64,
}
