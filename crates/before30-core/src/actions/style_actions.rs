//! Style options actions.

use super::{report, ActionResult, Actions, SaveStyleOptionsRequest};
use crate::domain::{DomainResult, StyleOptions};

impl Actions {
    /// Resolved options for a list; a list that never saved any gets the defaults
    pub async fn load_style_options(&self, list_id: u32) -> ActionResult<StyleOptions> {
        report(
            "load_style_options",
            self.try_load_style_options(list_id).await,
            |_| "Style options loaded.".to_string(),
            "Failed to fetch image options.",
        )
    }

    async fn try_load_style_options(&self, list_id: u32) -> DomainResult<StyleOptions> {
        let user = self.require_user().await?;
        let list = self.owned_list(list_id, &user).await?;
        Ok(StyleOptions::resolve(self.styles.find(list.id).await?))
    }

    /// Upsert keyed by list; the last save wins
    pub async fn save_style_options(&self, req: SaveStyleOptionsRequest) -> ActionResult<StyleOptions> {
        report(
            "save_style_options",
            self.try_save_style_options(req).await,
            |_| "Style options saved.".to_string(),
            "Failed to save style options.",
        )
    }

    async fn try_save_style_options(&self, req: SaveStyleOptionsRequest) -> DomainResult<StyleOptions> {
        let user = self.require_user().await?;
        req.validate()?;
        let list = self.owned_list(req.list_id, &user).await?;
        self.styles.upsert(list.id, &req.options).await?;
        Ok(StyleOptions::resolve(Some(req.options)))
    }
}
