//! List Repository
//!
//! SQLite-backed persistence for per-user lists.

use rusqlite::{params, OptionalExtension, Row};

use crate::domain::{BucketList, DomainError, DomainResult};
use super::db::{connection, now_millis, SharedConnection};

const LIST_COLUMNS: &str = "l.id, l.user_id, l.title, l.is_public, l.created_at";

/// SQLite implementation of list repository
#[derive(Clone)]
pub struct ListRepository {
    conn: SharedConnection,
}

fn row_to_list(row: &Row<'_>) -> rusqlite::Result<BucketList> {
    Ok(BucketList {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        is_public: row.get::<_, i32>(3)? != 0,
        created_at: row.get(4)?,
    })
}

impl ListRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    pub async fn find_by_id(&self, id: u32) -> DomainResult<Option<BucketList>> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;
        let list = conn
            .query_row(
                &format!("SELECT {} FROM lists l WHERE l.id = ?", LIST_COLUMNS),
                params![id],
                row_to_list,
            )
            .optional()?;
        Ok(list)
    }

    /// Return the user's list, creating it with `default_title` when absent
    pub async fn ensure_for_user(&self, user_id: &str, default_title: &str) -> DomainResult<BucketList> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;
        let inserted = conn.execute(
            "INSERT INTO lists (user_id, title, is_public, created_at) VALUES (?, ?, 0, ?)
             ON CONFLICT(user_id) DO NOTHING",
            params![user_id, default_title, now_millis()],
        )?;
        if inserted > 0 {
            log::info!("Created list for user {}", user_id);
        }
        let list = conn.query_row(
            &format!("SELECT {} FROM lists l WHERE l.user_id = ?", LIST_COLUMNS),
            params![user_id],
            row_to_list,
        )?;
        Ok(list)
    }

    pub async fn update_title(&self, id: u32, user_id: &str, title: &str) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;
        let changed = conn.execute(
            "UPDATE lists SET title = ? WHERE id = ? AND user_id = ?",
            params![title, id, user_id],
        )?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("List {} not found", id)));
        }
        Ok(())
    }

    /// Set visibility on the user's list
    pub async fn set_public(&self, user_id: &str, is_public: bool) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;
        let changed = conn.execute(
            "UPDATE lists SET is_public = ? WHERE user_id = ?",
            params![is_public as i32, user_id],
        )?;
        if changed == 0 {
            return Err(DomainError::NotFound("List not found".to_string()));
        }
        Ok(())
    }

    /// Public lists with their owners' usernames
    pub async fn list_public(&self, limit: usize) -> DomainResult<Vec<(BucketList, Option<String>)>> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {}, p.username FROM lists l
             LEFT JOIN profiles p ON p.user_id = l.user_id
             WHERE l.is_public = 1 ORDER BY l.id ASC LIMIT ?",
            LIST_COLUMNS
        ))?;
        let lists = stmt
            .query_map(params![limit as i64], |row| Ok((row_to_list(row)?, row.get::<_, Option<String>>(5)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(lists)
    }

    /// The list owned by the profile with this username, public or not
    pub async fn find_by_username(&self, username: &str) -> DomainResult<Option<BucketList>> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;
        let list = conn
            .query_row(
                &format!(
                    "SELECT {} FROM lists l JOIN profiles p ON p.user_id = l.user_id
                     WHERE p.username = ?",
                    LIST_COLUMNS
                ),
                params![username],
                row_to_list,
            )
            .optional()?;
        Ok(list)
    }
}
