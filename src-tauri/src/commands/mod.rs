//! Commands Layer
//!
//! Tauri command handlers that bridge the frontend to the mutation actions.
//! Actions never fail at the IPC level; every outcome travels inside `ActionResult`.

mod session_cmd;
mod list_cmd;
mod item_cmd;
mod style_cmd;
mod community_cmd;
mod feedback_cmd;

pub use session_cmd::*;
pub use list_cmd::*;
pub use item_cmd::*;
pub use style_cmd::*;
pub use community_cmd::*;
pub use feedback_cmd::*;
