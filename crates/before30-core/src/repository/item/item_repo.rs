//! Item Repository - Core CRUD Operations
//!
//! SQLite-backed implementation for goal item CRUD operations.
//! Position management is in item_positioning.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};

use crate::domain::{Category, DomainError, DomainResult, GoalItem};
use super::super::db::{connection, now_millis, SharedConnection};
use super::super::traits::Repository;

pub(super) const ITEM_COLUMNS: &str =
    "id, list_id, user_id, text, completed, category, position, created_at";

/// SQLite implementation of goal item repository
#[derive(Clone)]
pub struct ItemRepository {
    pub(super) conn: SharedConnection,
}

impl ItemRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Items of one list in display order
    pub async fn list_by_list(&self, list_id: u32) -> DomainResult<Vec<GoalItem>> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM list_items WHERE list_id = ? ORDER BY position ASC, id ASC",
            ITEM_COLUMNS
        ))?;
        let items = stmt
            .query_map(params![list_id], row_to_item)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(items)
    }

    /// Find an item only if it belongs to the given user
    pub async fn find_owned(&self, id: u32, user_id: &str) -> DomainResult<GoalItem> {
        match self.find_by_id(id).await? {
            Some(item) if item.is_owned_by(user_id) => Ok(item),
            _ => Err(DomainError::NotFound(format!("Item {} not found", id))),
        }
    }
}

pub(super) fn row_to_item(row: &Row<'_>) -> rusqlite::Result<GoalItem> {
    let category: String = row.get(5)?;
    Ok(GoalItem {
        id: row.get(0)?,
        list_id: row.get(1)?,
        user_id: row.get(2)?,
        text: row.get(3)?,
        completed: row.get::<_, i32>(4)? != 0,
        category: Category::from_label(&category),
        position: row.get(6)?,
        created_at: row.get(7)?,
    })
}

pub(super) fn insert_item(
    conn: &rusqlite::Connection,
    entity: &GoalItem,
    position: i32,
) -> DomainResult<GoalItem> {
    let created_at = now_millis();
    conn.execute(
        "INSERT INTO list_items (list_id, user_id, text, completed, category, position, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
        params![
            entity.list_id,
            entity.user_id,
            entity.text,
            entity.completed as i32,
            entity.category.as_str(),
            position,
            created_at,
        ],
    )?;
    Ok(GoalItem {
        id: conn.last_insert_rowid() as u32,
        position,
        created_at,
        ..entity.clone()
    })
}

#[async_trait]
impl Repository<GoalItem> for ItemRepository {
    async fn create(&self, entity: &GoalItem) -> DomainResult<GoalItem> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;
        insert_item(conn, entity, entity.position)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<GoalItem>> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;
        let item = conn
            .query_row(
                &format!("SELECT {} FROM list_items WHERE id = ?", ITEM_COLUMNS),
                params![id],
                row_to_item,
            )
            .optional()?;
        Ok(item)
    }

    async fn update(&self, entity: &GoalItem) -> DomainResult<GoalItem> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;
        let changed = conn.execute(
            "UPDATE list_items SET text = ?, completed = ?, category = ?, position = ?
             WHERE id = ? AND user_id = ?",
            params![
                entity.text,
                entity.completed as i32,
                entity.category.as_str(),
                entity.position,
                entity.id,
                entity.user_id,
            ],
        )?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("Item {} not found", entity.id)));
        }
        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;
        let changed = conn.execute("DELETE FROM list_items WHERE id = ?", params![id])?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("Item {} not found", id)));
        }
        Ok(())
    }
}
