//! Profile Repository

use rusqlite::{params, OptionalExtension};

use crate::domain::{DomainError, DomainResult, Profile};
use super::db::{connection, now_millis, SharedConnection};

#[derive(Clone)]
pub struct ProfileRepository {
    conn: SharedConnection,
}

impl ProfileRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    pub async fn find(&self, user_id: &str) -> DomainResult<Option<Profile>> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;
        let profile = conn
            .query_row(
                "SELECT user_id, username FROM profiles WHERE user_id = ?",
                params![user_id],
                |row| {
                    Ok(Profile {
                        user_id: row.get(0)?,
                        username: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(profile)
    }

    /// Set the username; a name held by another user is a conflict
    pub async fn set_username(&self, user_id: &str, username: &str) -> DomainResult<Profile> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;
        conn.execute(
            "INSERT INTO profiles (user_id, username, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(user_id) DO UPDATE SET username = excluded.username, updated_at = excluded.updated_at",
            params![user_id, username, now_millis()],
        )
        .map_err(|e| match DomainError::from(e) {
            DomainError::Conflict(_) => DomainError::Conflict("Username is already taken.".to_string()),
            other => other,
        })?;
        Ok(Profile {
            user_id: user_id.to_string(),
            username: Some(username.to_string()),
        })
    }
}
