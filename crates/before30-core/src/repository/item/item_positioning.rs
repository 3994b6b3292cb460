//! Item Positioning Operations
//!
//! Operations for managing item positions within a list.

use async_trait::async_trait;
use rusqlite::params;

use crate::domain::{DomainError, DomainResult, GoalItem};
use super::super::db::connection;
use super::item_repo::{insert_item, ItemRepository};

/// Trait for item positioning operations
#[async_trait]
pub trait ItemPositioningOperations {
    /// Insert at the end of its list, computing the position under the same lock
    async fn append(&self, item: &GoalItem) -> DomainResult<GoalItem>;

    /// Write one item's position; NotFound when the user does not own it
    async fn set_position(&self, id: u32, user_id: &str, position: i32) -> DomainResult<()>;
}

/// One past the highest position in the list (0 when empty)
fn next_position(conn: &rusqlite::Connection, list_id: u32) -> DomainResult<i32> {
    let next = conn.query_row(
        "SELECT COALESCE(MAX(position), -1) + 1 FROM list_items WHERE list_id = ?",
        params![list_id],
        |row| row.get::<_, i32>(0),
    )?;
    Ok(next)
}

#[async_trait]
impl ItemPositioningOperations for ItemRepository {
    async fn append(&self, item: &GoalItem) -> DomainResult<GoalItem> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;
        let position = next_position(conn, item.list_id)?;
        insert_item(conn, item, position)
    }

    async fn set_position(&self, id: u32, user_id: &str, position: i32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;
        let changed = conn.execute(
            "UPDATE list_items SET position = ? WHERE id = ? AND user_id = ?",
            params![position, id, user_id],
        )?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("Item {} not found", id)));
        }
        Ok(())
    }
}
