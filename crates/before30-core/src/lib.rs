//! 30 Before 30 Backend Core
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: SQLite persistence behind repository traits
//! - auth: Current-user seam to the authentication collaborator
//! - actions: Validated mutation handlers returning structured results

pub mod domain;
pub mod repository;
pub mod auth;
pub mod actions;

pub use actions::{ActionResult, Actions};
pub use auth::{AuthProvider, StaticSession, User};
pub use repository::DbState;
