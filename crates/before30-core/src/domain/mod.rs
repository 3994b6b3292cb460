//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod goal_item;
mod list;
mod style_options;
mod profile;
mod suggestion;

pub use entity::{Entity, DomainError, DomainResult};
pub use goal_item::{Category, GoalItem, ITEM_TEXT_MAX_CHARS};
pub use list::{BucketList, CommunityItem, CommunityList, ListSummary, MyListPayload, DEFAULT_LIST_TITLE, TITLE_MAX_CHARS};
pub use style_options::{Font, StyleOptions, StyleOptionsInput};
pub use profile::Profile;
pub use suggestion::{Suggestion, SUGGESTION_DESCRIPTION_MAX_CHARS, SUGGESTION_TITLE_MAX_CHARS};
