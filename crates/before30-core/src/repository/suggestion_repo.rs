//! Suggestion Repository

use rusqlite::params;

use crate::domain::{DomainResult, Suggestion};
use super::db::{connection, now_millis, SharedConnection};

#[derive(Clone)]
pub struct SuggestionRepository {
    conn: SharedConnection,
}

impl SuggestionRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    pub async fn insert(
        &self,
        user_id: &str,
        title: &str,
        description: Option<&str>,
    ) -> DomainResult<Suggestion> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;
        let created_at = now_millis();
        conn.execute(
            "INSERT INTO suggestions (user_id, title, description, created_at) VALUES (?, ?, ?, ?)",
            params![user_id, title, description, created_at],
        )?;
        Ok(Suggestion {
            id: conn.last_insert_rowid() as u32,
            user_id: user_id.to_string(),
            title: title.to_string(),
            description: description.map(str::to_string),
            created_at,
        })
    }
}
