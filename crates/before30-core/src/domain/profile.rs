//! Profile Entity

use serde::{Deserialize, Serialize};

/// Public identity of a user; the username is unique across profiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: String,
    pub username: Option<String>,
}
