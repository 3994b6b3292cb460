//! Item Repository Module
//!
//! Goal item persistence split into:
//! - item_repo: Core CRUD operations and list queries
//! - item_positioning: Position management

mod item_repo;
mod item_positioning;

pub use item_repo::ItemRepository;
pub use item_positioning::ItemPositioningOperations;
