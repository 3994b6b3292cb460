//! Repository Layer
//!
//! Data access abstractions and SQLite implementations.

mod traits;
mod db;
mod item;
mod list_repo;
mod style_repo;
mod profile_repo;
mod suggestion_repo;

#[cfg(test)]
mod tests;

pub use traits::Repository;
pub use db::{open_connection, DbState, SharedConnection};
pub use item::{ItemPositioningOperations, ItemRepository};
pub use list_repo::ListRepository;
pub use style_repo::StyleOptionsRepository;
pub use profile_repo::ProfileRepository;
pub use suggestion_repo::SuggestionRepository;
