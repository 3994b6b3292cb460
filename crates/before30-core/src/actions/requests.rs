//! Typed action requests and their validation rules.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::{
    Category, DomainError, DomainResult, StyleOptionsInput, ITEM_TEXT_MAX_CHARS,
    SUGGESTION_DESCRIPTION_MAX_CHARS, SUGGESTION_TITLE_MAX_CHARS, TITLE_MAX_CHARS,
};

/// Default and upper bound for community browsing
pub const DEFAULT_BROWSE_LIMIT: usize = 9;
pub const MAX_BROWSE_LIMIT: usize = 50;

const HEX_COLOR_PATTERN: &str = r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$";
const USERNAME_PATTERN: &str = r"^[A-Za-z0-9_-]+$";

fn pattern(source: &str) -> DomainResult<Regex> {
    Regex::new(source).map_err(|e| DomainError::Internal(e.to_string()))
}

fn invalid(msg: &str) -> DomainError {
    DomainError::InvalidInput(msg.to_string())
}

/// Trimmed, non-empty, bounded goal text
fn goal_text(text: &str) -> DomainResult<String> {
    let text = text.trim();
    if text.is_empty() {
        return Err(invalid("Item text cannot be empty."));
    }
    if text.chars().count() > ITEM_TEXT_MAX_CHARS {
        return Err(invalid("Item text must be 200 characters or less."));
    }
    Ok(text.to_string())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddItemRequest {
    pub list_id: u32,
    pub text: String,
    #[serde(default)]
    pub category: Option<Category>,
}

impl AddItemRequest {
    pub fn validate(&self) -> DomainResult<String> {
        goal_text(&self.text)
    }
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

impl EditItemTextRequest {
    pub fn validate(&self) -> DomainResult<String> {
        goal_text(&self.text)
    }
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

impl ReorderRequest {
    /// Non-empty, unique ids, positions exactly 0..n-1
    pub fn validate(&self) -> DomainResult<()> {
        if self.updates.is_empty() {
            return Err(invalid("No positions to update."));
        }
        let mut ids = HashSet::new();
        let mut positions = vec![false; self.updates.len()];
        for update in &self.updates {
            if !ids.insert(update.id) {
                return Err(invalid("Each item may appear only once."));
            }
            let index = usize::try_from(update.position).unwrap_or(usize::MAX);
            match positions.get_mut(index) {
                Some(seen) if !*seen => *seen = true,
                _ => return Err(invalid("Positions must be consecutive starting at 0.")),
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateTitleRequest {
    pub list_id: u32,
    pub title: String,
}

impl UpdateTitleRequest {
    pub fn validate(&self) -> DomainResult<String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(invalid("Title cannot be empty."));
        }
        if title.chars().count() > TITLE_MAX_CHARS {
            return Err(invalid("Title must be 100 characters or less."));
        }
        Ok(title.to_string())
    }
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

impl SaveStyleOptionsRequest {
    pub fn validate(&self) -> DomainResult<()> {
        let hex = pattern(HEX_COLOR_PATTERN)?;
        for (field, value) in self.options.colors() {
            if let Some(value) = value {
                if !hex.is_match(value) {
                    return Err(DomainError::InvalidInput(format!(
                        "{} must be a hex color like #aabbcc.",
                        field
                    )));
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub username: String,
}

impl UpdateProfileRequest {
    pub fn validate(&self) -> DomainResult<String> {
        let name = self.username.trim();
        let len = name.chars().count();
        if len < 3 {
            return Err(invalid("Username must be at least 3 characters"));
        }
        if len > 20 {
            return Err(invalid("Username must be 20 characters or less"));
        }
        if !pattern(USERNAME_PATTERN)?.is_match(name) {
            return Err(invalid(
                "Username may only contain letters, numbers, underscores and dashes",
            ));
        }
        Ok(name.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddFromCommunityRequest {
    pub text: String,
}

impl AddFromCommunityRequest {
    pub fn validate(&self) -> DomainResult<String> {
        goal_text(&self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitSuggestionRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl SubmitSuggestionRequest {
    /// Trimmed title and description; a blank description is dropped
    pub fn validate(&self) -> DomainResult<(String, Option<String>)> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(invalid("Title cannot be empty."));
        }
        if title.chars().count() > SUGGESTION_TITLE_MAX_CHARS {
            return Err(invalid("Title is too long."));
        }
        let description = self
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty());
        if let Some(description) = description {
            if description.chars().count() > SUGGESTION_DESCRIPTION_MAX_CHARS {
                return Err(invalid("Description is too long."));
            }
        }
        Ok((title.to_string(), description.map(str::to_string)))
    }
}

/// Clamp a requested browse size into 1..=MAX_BROWSE_LIMIT
pub fn browse_limit(requested: Option<usize>) -> usize {
    requested
        .unwrap_or(DEFAULT_BROWSE_LIMIT)
        .clamp(1, MAX_BROWSE_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reorder(pairs: &[(u32, i32)]) -> ReorderRequest {
        ReorderRequest {
            updates: pairs
                .iter()
                .map(|&(id, position)| PositionUpdate { id, position })
                .collect(),
        }
    }

    #[test]
    fn test_goal_text_is_trimmed_and_bounded() {
        let req = AddItemRequest { list_id: 1, text: "  Visit Japan ".to_string(), category: None };
        assert_eq!(req.validate().unwrap(), "Visit Japan");

        let blank = AddItemRequest { list_id: 1, text: "   ".to_string(), category: None };
        assert!(blank.validate().is_err());

        let long = EditItemTextRequest { item_id: 1, text: "x".repeat(201) };
        assert!(long.validate().is_err());
        let edge = EditItemTextRequest { item_id: 1, text: "x".repeat(200) };
        assert!(edge.validate().is_ok());
    }

    #[test]
    fn test_reorder_rules() {
        assert!(reorder(&[(10, 1), (11, 0), (12, 2)]).validate().is_ok());
        assert!(reorder(&[]).validate().is_err());
        assert!(reorder(&[(10, 0), (10, 1)]).validate().is_err());
        assert!(reorder(&[(10, 0), (11, 0)]).validate().is_err());
        assert!(reorder(&[(10, 0), (11, 2)]).validate().is_err());
        assert!(reorder(&[(10, -1)]).validate().is_err());
    }

    #[test]
    fn test_title_rules() {
        let ok = UpdateTitleRequest { list_id: 1, title: " Summer ".to_string() };
        assert_eq!(ok.validate().unwrap(), "Summer");
        assert!(UpdateTitleRequest { list_id: 1, title: "".to_string() }.validate().is_err());
        assert!(UpdateTitleRequest { list_id: 1, title: "t".repeat(101) }.validate().is_err());
    }

    #[test]
    fn test_hex_colors() {
        let mut req = SaveStyleOptionsRequest { list_id: 1, options: StyleOptionsInput::default() };
        assert!(req.validate().is_ok());
        req.options.background_color = Some("#FFF".to_string());
        req.options.text_color = Some("#1f2937".to_string());
        assert!(req.validate().is_ok());
        req.options.title_color = Some("red".to_string());
        let err = req.validate().unwrap_err();
        assert!(err.user_message().starts_with("titleColor"));
    }

    #[test]
    fn test_suggestion_rules() {
        let suggestion = |title: String, description: Option<String>| SubmitSuggestionRequest { title, description };

        let (title, description) = suggestion(" Themes ".to_string(), Some("   ".to_string()))
            .validate()
            .unwrap();
        assert_eq!(title, "Themes");
        assert!(description.is_none());

        assert!(suggestion("t".repeat(100), None).validate().is_ok());
        assert!(suggestion("d".to_string(), Some("d".repeat(500))).validate().is_ok());

        let err = suggestion("  ".to_string(), None).validate().unwrap_err();
        assert_eq!(err.user_message(), "Title cannot be empty.");
        let err = suggestion("t".repeat(101), None).validate().unwrap_err();
        assert_eq!(err.user_message(), "Title is too long.");
        let err = suggestion("d".to_string(), Some("d".repeat(501))).validate().unwrap_err();
        assert_eq!(err.user_message(), "Description is too long.");
    }

    #[test]
    fn test_username_rules() {
        let ok = UpdateProfileRequest { username: "sam_b-1".to_string() };
        assert_eq!(ok.validate().unwrap(), "sam_b-1");
        assert!(UpdateProfileRequest { username: "ab".to_string() }.validate().is_err());
        assert!(UpdateProfileRequest { username: "a".repeat(21) }.validate().is_err());
        assert!(UpdateProfileRequest { username: "no spaces".to_string() }.validate().is_err());
    }

    #[test]
    fn test_browse_limit_clamped() {
        assert_eq!(browse_limit(None), 9);
        assert_eq!(browse_limit(Some(0)), 1);
        assert_eq!(browse_limit(Some(500)), 50);
        assert_eq!(browse_limit(Some(12)), 12);
    }
}
