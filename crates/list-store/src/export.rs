//! Image Export Planning
//!
//! Preconditions and naming for rasterizing the styled preview. The rendering
//! itself happens in the browser.

use crate::models::StyleOptions;
use crate::store::{ListStore, StoreError};

/// DOM id of the styled preview subtree
pub const EXPORT_ELEMENT_ID: &str = "image-preview-content";

/// Pixel-density multiplier used for rasterizing
pub const EXPORT_SCALE: f64 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ExportPlan {
    pub file_name: String,
    pub scale: f64,
    pub background_color: String,
}

/// Download name for a list title: whitespace runs become `_`, lower-cased
pub fn export_file_name(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_space = false;
    for c in title.chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('_');
            }
            in_space = true;
        } else {
            slug.extend(c.to_lowercase());
            in_space = false;
        }
    }
    if slug.is_empty() {
        slug.push_str("my");
    }
    format!("{}_list.png", slug)
}

impl ListStore {
    /// Check the export precondition and describe the render
    pub fn export_plan(&self, options: &StyleOptions) -> Result<ExportPlan, StoreError> {
        if self.is_empty() {
            return Err(StoreError::EmptyList);
        }
        Ok(ExportPlan {
            file_name: export_file_name(self.title()),
            scale: EXPORT_SCALE,
            background_color: options.background_color.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, GoalItem};

    #[test]
    fn test_file_name_slug() {
        assert_eq!(export_file_name("My 30 Before 30 List"), "my_30_before_30_list_list.png");
        assert_eq!(export_file_name("Big   Dreams"), "big_dreams_list.png");
        assert_eq!(export_file_name(""), "my_list.png");
    }

    #[test]
    fn test_export_rejects_empty_list() {
        let store = ListStore::load(1, "Empty".into(), vec![]);
        let err = store.export_plan(&StyleOptions::default()).unwrap_err();
        assert_eq!(err, StoreError::EmptyList);
        assert_eq!(err.to_string(), "Add some items to your list before generating an image.");
    }

    #[test]
    fn test_export_plan_uses_background() {
        let item = GoalItem {
            id: 1,
            list_id: 1,
            text: "Run a marathon".into(),
            completed: false,
            category: Category::Wellness,
            position: 0,
            created_at: 0,
        };
        let store = ListStore::load(1, "Summer Goals".into(), vec![item]);
        let options = StyleOptions {
            background_color: "#000000".into(),
            ..StyleOptions::default()
        };
        let plan = store.export_plan(&options).unwrap();
        assert_eq!(plan.file_name, "summer_goals_list.png");
        assert_eq!(plan.scale, 2.0);
        assert_eq!(plan.background_color, "#000000");
    }
}
