//! List Store
//!
//! Client-side state for a single bucket list, independent of any UI framework.
//! - models: Goal items, categories, style options (mirrors backend entities)
//! - protocol: Typed IPC requests and the structured action result
//! - store: Optimistic mutations with per-change rollback
//! - export: Image export preconditions and file naming

mod models;
mod protocol;
mod store;
mod export;

pub use models::{
    Category, CommunityItem, CommunityList, Font, GoalItem, ListSummary, MyListPayload, Profile,
    StyleOptions, StyleOptionsInput, Suggestion, GOAL_TARGET,
};
pub use protocol::{
    ActionResult, AddFromCommunityRequest, AddItemRequest, DeleteItemRequest, EditItemTextRequest,
    PositionUpdate, ReorderRequest, SaveStyleOptionsRequest, SubmitSuggestionRequest,
    ToggleItemRequest, UpdateProfileRequest, UpdateTitleRequest, UpdateVisibilityRequest,
};
pub use store::{
    EditCommit, EditState, ListStore, Outcome, Pending, Progress, Settled, StoreError,
    TITLE_MAX_CHARS,
};
pub use export::{export_file_name, ExportPlan, EXPORT_ELEMENT_ID, EXPORT_SCALE};
