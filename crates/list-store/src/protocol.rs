//! IPC Protocol
//!
//! Request structs sent to backend actions and the result envelope they return.

use serde::{Deserialize, Serialize};

use crate::models::StyleOptionsInput;

/// Structured result every backend action returns instead of failing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResult<T> {
    pub message: String,
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
}

impl<T> ActionResult<T> {
    pub fn is_ok(&self) -> bool {
        self.success && !self.error
    }

    /// Collapse into a Result, keeping the message on failure
    pub fn into_result(self) -> Result<(String, Option<T>), String> {
        if self.is_ok() {
            Ok((self.message, self.data))
        } else {
            Err(self.message)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddItemRequest {
    pub list_id: u32,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<crate::models::Category>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleItemRequest {
    pub item_id: u32,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteItemRequest {
    pub item_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditItemTextRequest {
    pub item_id: u32,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionUpdate {
    pub id: u32,
    pub position: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReorderRequest {
    pub updates: Vec<PositionUpdate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateTitleRequest {
    pub list_id: u32,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateVisibilityRequest {
    pub is_public: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveStyleOptionsRequest {
    pub list_id: u32,
    pub options: StyleOptionsInput,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddFromCommunityRequest {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitSuggestionRequest {
    pub title: String,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_result_defaults_missing_flags() {
        let result: ActionResult<u32> =
            serde_json::from_str(r#"{"message":"You must be logged in.","error":true}"#).unwrap();
        assert!(!result.is_ok());
        assert_eq!(result.into_result(), Err("You must be logged in.".to_string()));
    }

    #[test]
    fn test_action_result_success_carries_data() {
        let result: ActionResult<u32> =
            serde_json::from_str(r#"{"message":"ok","success":true,"data":7}"#).unwrap();
        assert_eq!(result.into_result(), Ok(("ok".to_string(), Some(7))));
    }
}
