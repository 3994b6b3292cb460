//! Style Options Repository
//!
//! One row per list, upserted on save.

use rusqlite::{params, OptionalExtension};

use crate::domain::{DomainResult, Font, StyleOptionsInput};
use super::db::{connection, now_millis, SharedConnection};

#[derive(Clone)]
pub struct StyleOptionsRepository {
    conn: SharedConnection,
}

impl StyleOptionsRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Stored options for a list; `None` when never saved
    pub async fn find(&self, list_id: u32) -> DomainResult<Option<StyleOptionsInput>> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;
        let stored = conn
            .query_row(
                "SELECT background_color, text_color, title_color, item_number_color,
                        completed_item_text_color, completed_item_icon_color, font
                 FROM style_options WHERE list_id = ?",
                params![list_id],
                |row| {
                    let font: Option<String> = row.get(6)?;
                    Ok(StyleOptionsInput {
                        background_color: row.get(0)?,
                        text_color: row.get(1)?,
                        title_color: row.get(2)?,
                        item_number_color: row.get(3)?,
                        completed_item_text_color: row.get(4)?,
                        completed_item_icon_color: row.get(5)?,
                        font: font.as_deref().and_then(Font::parse),
                    })
                },
            )
            .optional()?;
        Ok(stored)
    }

    /// Insert or replace the list's options; absent fields are stored as NULL
    pub async fn upsert(&self, list_id: u32, options: &StyleOptionsInput) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;
        conn.execute(
            "INSERT INTO style_options (list_id, background_color, text_color, title_color,
                 item_number_color, completed_item_text_color, completed_item_icon_color, font, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT(list_id) DO UPDATE SET
                 background_color = excluded.background_color,
                 text_color = excluded.text_color,
                 title_color = excluded.title_color,
                 item_number_color = excluded.item_number_color,
                 completed_item_text_color = excluded.completed_item_text_color,
                 completed_item_icon_color = excluded.completed_item_icon_color,
                 font = excluded.font,
                 updated_at = excluded.updated_at",
            params![
                list_id,
                options.background_color,
                options.text_color,
                options.title_color,
                options.item_number_color,
                options.completed_item_text_color,
                options.completed_item_icon_color,
                options.font.map(|f| f.as_str()),
                now_millis(),
            ],
        )?;
        Ok(())
    }
}
