//! Feature suggestions sent from the feedback form.

use super::{report, ActionResult, Actions, SubmitSuggestionRequest};
use crate::domain::{DomainResult, Suggestion};

impl Actions {
    pub async fn submit_suggestion(&self, req: SubmitSuggestionRequest) -> ActionResult<Suggestion> {
        report(
            "submit_suggestion",
            self.try_submit_suggestion(req).await,
            |_| "Suggestion submitted successfully!".to_string(),
            "Failed to submit suggestion.",
        )
    }

    async fn try_submit_suggestion(&self, req: SubmitSuggestionRequest) -> DomainResult<Suggestion> {
        let user = self.require_user().await?;
        let (title, description) = req.validate()?;
        self.suggestions
            .insert(&user.id, &title, description.as_deref())
            .await
    }
}
