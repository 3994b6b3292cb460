//! Frontend Models
//!
//! Shared with the list store crate, which mirrors the backend entities.

pub use list_store::{
    ActionResult, CommunityList, Font, GoalItem, ListSummary,
    MyListPayload, Profile, StyleOptions, StyleOptionsInput, Suggestion, GOAL_TARGET,
};
