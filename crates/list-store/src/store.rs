//! List Store
//!
//! Ordered goal items for the signed-in user's list, mutated optimistically.
//!
//! Every optimistic operation follows the same protocol:
//! record the inverse -> apply locally -> hand the request to the caller -> `settle`
//! with the remote outcome. A failed outcome undoes only that change, so mutations
//! confirmed in the meantime survive the rollback.

use std::fmt;

use crate::models::{GoalItem, GOAL_TARGET};
use crate::protocol::{
    AddItemRequest, DeleteItemRequest, EditItemTextRequest, PositionUpdate, ReorderRequest,
    ToggleItemRequest, UpdateTitleRequest,
};

/// Longest accepted list title
pub const TITLE_MAX_CHARS: usize = 100;

/// Store-level errors, raised before any remote call is made
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    ItemNotFound(u32),
    IndexOutOfRange { index: usize, len: usize },
    EmptyText,
    NoList,
    NotEditing,
    TitleEmpty,
    TitleTooLong,
    EmptyList,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::ItemNotFound(id) => write!(f, "Item {} is not in your list.", id),
            StoreError::IndexOutOfRange { index, len } => {
                write!(f, "Position {} is outside the list of {} items.", index, len)
            }
            StoreError::EmptyText => write!(f, "Item text cannot be empty."),
            StoreError::NoList => write!(f, "Your list has not loaded yet."),
            StoreError::NotEditing => write!(f, "No item is being edited."),
            StoreError::TitleEmpty => write!(f, "Title cannot be empty."),
            StoreError::TitleTooLong => write!(f, "Title is too long."),
            StoreError::EmptyList => {
                write!(f, "Add some items to your list before generating an image.")
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Inverse of one optimistic change
#[derive(Debug, Clone, PartialEq)]
enum Undo {
    Completed { item_id: u32, completed: bool },
    Removed { item: GoalItem },
    Text { item_id: u32, text: String },
    /// Positions held before the move, for the ids in the batch only
    Order { positions: Vec<PositionUpdate> },
}

/// An applied optimistic change waiting for its remote outcome
#[must_use = "a pending mutation must be settled with the remote outcome"]
#[derive(Debug)]
pub struct Pending<R> {
    undo: Undo,
    request: R,
}

impl<R> Pending<R> {
    pub fn request(&self) -> &R {
        &self.request
    }
}

/// Remote outcome reported back to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Confirmed,
    Failed(String),
}

impl Outcome {
    pub fn from_result<T>(result: &Result<T, String>) -> Self {
        match result {
            Ok(_) => Outcome::Confirmed,
            Err(message) => Outcome::Failed(message.clone()),
        }
    }
}

/// What `settle` did with the local state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled {
    Kept,
    RolledBack { message: String },
}

/// Edit lifecycle of a single item row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Viewing,
    Editing { item_id: u32, draft: String },
}

/// Result of committing an edit
#[derive(Debug)]
pub enum EditCommit {
    /// Draft matched the stored text; back to viewing without a remote call
    Unchanged,
    Submitted(Pending<EditItemTextRequest>),
}

/// Completion progress against the goal target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListStore {
    list_id: Option<u32>,
    title: String,
    items: Vec<GoalItem>,
    edit: EditState,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize from a page load; items are ordered by position
    pub fn load(list_id: u32, title: String, mut items: Vec<GoalItem>) -> Self {
        items.sort_by_key(|item| item.position);
        Self {
            list_id: Some(list_id),
            title,
            items,
            edit: EditState::Viewing,
        }
    }

    pub fn list_id(&self) -> Option<u32> {
        self.list_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[GoalItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, item_id: u32) -> Option<&GoalItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    pub fn is_editing(&self, item_id: u32) -> bool {
        matches!(&self.edit, EditState::Editing { item_id: id, .. } if *id == item_id)
    }

    /// Apply the remote outcome of a pending mutation
    pub fn settle<R>(&mut self, pending: Pending<R>, outcome: &Outcome) -> Settled {
        match outcome {
            Outcome::Confirmed => Settled::Kept,
            Outcome::Failed(message) => {
                self.undo(pending.undo);
                Settled::RolledBack {
                    message: message.clone(),
                }
            }
        }
    }

    fn undo(&mut self, undo: Undo) {
        match undo {
            Undo::Completed { item_id, completed } => {
                if let Some(item) = self.items.iter_mut().find(|item| item.id == item_id) {
                    item.completed = completed;
                }
            }
            Undo::Removed { item } => {
                if self.get(item.id).is_none() {
                    self.merge_added(item);
                }
            }
            Undo::Text { item_id, text } => {
                if let Some(item) = self.items.iter_mut().find(|item| item.id == item_id) {
                    item.text = text;
                }
            }
            Undo::Order { positions } => {
                for update in positions {
                    if let Some(item) = self.items.iter_mut().find(|item| item.id == update.id) {
                        item.position = update.position;
                    }
                }
                self.items.sort_by_key(|item| item.position);
            }
        }
    }

    fn index_of(&self, item_id: u32) -> Result<usize, StoreError> {
        self.items
            .iter()
            .position(|item| item.id == item_id)
            .ok_or(StoreError::ItemNotFound(item_id))
    }

    // ========================
    // Optimistic mutations
    // ========================

    /// Flip the completion flag
    pub fn begin_toggle(&mut self, item_id: u32) -> Result<Pending<ToggleItemRequest>, StoreError> {
        let index = self.index_of(item_id)?;
        let item = &mut self.items[index];
        let undo = Undo::Completed {
            item_id,
            completed: item.completed,
        };
        item.completed = !item.completed;
        Ok(Pending {
            undo,
            request: ToggleItemRequest {
                item_id,
                completed: item.completed,
            },
        })
    }

    /// Remove the item; remaining positions are left as they are
    pub fn begin_delete(&mut self, item_id: u32) -> Result<Pending<DeleteItemRequest>, StoreError> {
        let index = self.index_of(item_id)?;
        let item = self.items.remove(index);
        if self.is_editing(item_id) {
            self.edit = EditState::Viewing;
        }
        Ok(Pending {
            undo: Undo::Removed { item },
            request: DeleteItemRequest { item_id },
        })
    }

    /// Move the item at `from` to `to` and renumber every item to its new index
    pub fn begin_reorder(
        &mut self,
        from: usize,
        to: usize,
    ) -> Result<Pending<ReorderRequest>, StoreError> {
        let len = self.items.len();
        for index in [from, to] {
            if index >= len {
                return Err(StoreError::IndexOutOfRange { index, len });
            }
        }
        let undo = Undo::Order {
            positions: self.positions(),
        };
        let moved = self.items.remove(from);
        self.items.insert(to, moved);
        for (index, item) in self.items.iter_mut().enumerate() {
            item.position = index as i32;
        }
        Ok(Pending {
            undo,
            request: ReorderRequest {
                updates: self.positions(),
            },
        })
    }

    /// Current `{id, position}` assignment for every item
    pub fn positions(&self) -> Vec<PositionUpdate> {
        self.items
            .iter()
            .map(|item| PositionUpdate {
                id: item.id,
                position: item.position,
            })
            .collect()
    }

    // ========================
    // Add (awaits the canonical record)
    // ========================

    pub fn prepare_add(&self, text: &str) -> Result<AddItemRequest, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyText);
        }
        let list_id = self.list_id.ok_or(StoreError::NoList)?;
        Ok(AddItemRequest {
            list_id,
            text: text.to_string(),
            category: None,
        })
    }

    /// Merge a server-created record, keeping position order
    pub fn merge_added(&mut self, item: GoalItem) {
        self.items.retain(|existing| existing.id != item.id);
        let index = self
            .items
            .iter()
            .position(|existing| existing.position > item.position)
            .unwrap_or(self.items.len());
        self.items.insert(index, item);
    }

    // ========================
    // Edit lifecycle
    // ========================

    pub fn start_edit(&mut self, item_id: u32) -> Result<(), StoreError> {
        let index = self.index_of(item_id)?;
        self.edit = EditState::Editing {
            item_id,
            draft: self.items[index].text.clone(),
        };
        Ok(())
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let EditState::Editing { draft, .. } = &mut self.edit {
            *draft = text.into();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit = EditState::Viewing;
    }

    /// Commit the draft.
    ///
    /// An empty draft is rejected: the row stays in editing with the stored text restored.
    pub fn commit_edit(&mut self) -> Result<EditCommit, StoreError> {
        let (item_id, draft) = match &self.edit {
            EditState::Editing { item_id, draft } => (*item_id, draft.trim().to_string()),
            EditState::Viewing => return Err(StoreError::NotEditing),
        };
        let index = self.index_of(item_id)?;

        if draft.is_empty() {
            self.edit = EditState::Editing {
                item_id,
                draft: self.items[index].text.clone(),
            };
            return Err(StoreError::EmptyText);
        }

        self.edit = EditState::Viewing;
        if self.items[index].text == draft {
            return Ok(EditCommit::Unchanged);
        }

        let text = std::mem::replace(&mut self.items[index].text, draft.clone());
        Ok(EditCommit::Submitted(Pending {
            undo: Undo::Text { item_id, text },
            request: EditItemTextRequest {
                item_id,
                text: draft,
            },
        }))
    }

    // ========================
    // Title (not optimistic)
    // ========================

    pub fn prepare_title(&self, title: &str) -> Result<UpdateTitleRequest, StoreError> {
        let list_id = self.list_id.ok_or(StoreError::NoList)?;
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::TitleEmpty);
        }
        if title.chars().count() > TITLE_MAX_CHARS {
            return Err(StoreError::TitleTooLong);
        }
        Ok(UpdateTitleRequest {
            list_id,
            title: title.to_string(),
        })
    }

    /// Record a title the backend reported as saved
    pub fn apply_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn progress(&self) -> Progress {
        let completed = self.items.iter().filter(|item| item.completed).count();
        let percent = (completed as f64 / GOAL_TARGET as f64 * 100.0).min(100.0);
        Progress {
            completed,
            total: self.items.len(),
            percent,
        }
    }

    /// Positions form 0..n-1 with no duplicates
    pub fn positions_are_dense(&self) -> bool {
        let mut positions: Vec<i32> = self.items.iter().map(|item| item.position).collect();
        positions.sort_unstable();
        positions
            .iter()
            .enumerate()
            .all(|(index, position)| *position == index as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn make_item(id: u32, text: &str, position: i32) -> GoalItem {
        GoalItem {
            id,
            list_id: 1,
            text: text.to_string(),
            completed: false,
            category: Category::Other,
            position,
            created_at: 0,
        }
    }

    fn abcd() -> ListStore {
        ListStore::load(
            1,
            "My 30 Before 30 List".to_string(),
            vec![
                make_item(1, "A", 0),
                make_item(2, "B", 1),
                make_item(3, "C", 2),
                make_item(4, "D", 3),
            ],
        )
    }

    fn texts(store: &ListStore) -> Vec<&str> {
        store.items().iter().map(|item| item.text.as_str()).collect()
    }

    #[test]
    fn test_load_sorts_by_position() {
        let store = ListStore::load(1, "t".into(), vec![make_item(2, "B", 1), make_item(1, "A", 0)]);
        assert_eq!(texts(&store), vec!["A", "B"]);
    }

    #[test]
    fn test_add_then_delete_scenario() {
        let mut store = ListStore::load(1, "t".into(), vec![]);
        let request = store.prepare_add("  Visit Japan ").unwrap();
        assert_eq!(request.text, "Visit Japan");
        assert_eq!(request.list_id, 1);

        store.merge_added(make_item(10, "Visit Japan", 0));
        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].position, 0);
        assert!(!store.items()[0].completed);

        let pending = store.begin_delete(10).unwrap();
        assert_eq!(pending.request().item_id, 10);
        assert_eq!(store.settle(pending, &Outcome::Confirmed), Settled::Kept);
        assert!(store.is_empty());
    }

    #[test]
    fn test_prepare_add_rejects_blank_and_missing_list() {
        let store = ListStore::load(1, "t".into(), vec![]);
        assert_eq!(store.prepare_add("   "), Err(StoreError::EmptyText));
        assert_eq!(ListStore::new().prepare_add("Run"), Err(StoreError::NoList));
    }

    #[test]
    fn test_delete_failure_restores_item() {
        let mut store = abcd();
        let pending = store.begin_delete(2).unwrap();
        assert_eq!(texts(&store), vec!["A", "C", "D"]);
        // gap is tolerated
        assert_eq!(store.items()[1].position, 2);

        let settled = store.settle(pending, &Outcome::Failed("network".into()));
        assert_eq!(settled, Settled::RolledBack { message: "network".into() });
        assert_eq!(texts(&store), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_toggle_twice_is_involution() {
        let mut store = abcd();
        let first = store.begin_toggle(3).unwrap();
        assert!(first.request().completed);
        let _ = store.settle(first, &Outcome::Confirmed);
        let second = store.begin_toggle(3).unwrap();
        assert!(!second.request().completed);
        let _ = store.settle(second, &Outcome::Confirmed);
        assert!(!store.get(3).unwrap().completed);
    }

    #[test]
    fn test_toggle_failure_rolls_back() {
        let mut store = abcd();
        let pending = store.begin_toggle(1).unwrap();
        assert!(store.get(1).unwrap().completed);
        let _ = store.settle(pending, &Outcome::Failed("denied".into()));
        assert!(!store.get(1).unwrap().completed);
    }

    #[test]
    fn test_toggle_unknown_item() {
        let mut store = abcd();
        assert_eq!(store.begin_toggle(99).unwrap_err(), StoreError::ItemNotFound(99));
    }

    #[test]
    fn test_reorder_moves_and_renumbers() {
        let mut store = abcd();
        let pending = store.begin_reorder(0, 2).unwrap();
        assert_eq!(texts(&store), vec!["B", "C", "A", "D"]);
        assert_eq!(
            pending.request().updates,
            vec![
                PositionUpdate { id: 2, position: 0 },
                PositionUpdate { id: 3, position: 1 },
                PositionUpdate { id: 1, position: 2 },
                PositionUpdate { id: 4, position: 3 },
            ]
        );
        assert!(store.positions_are_dense());
        let _ = store.settle(pending, &Outcome::Confirmed);
        assert_eq!(texts(&store), vec!["B", "C", "A", "D"]);
    }

    #[test]
    fn test_reorder_failure_restores_original_order_and_positions() {
        let mut store = abcd();
        let original = store.positions();
        let pending = store.begin_reorder(0, 2).unwrap();
        let settled = store.settle(pending, &Outcome::Failed("Failed to update item 4".into()));
        assert!(matches!(settled, Settled::RolledBack { .. }));
        assert_eq!(texts(&store), vec!["A", "B", "C", "D"]);
        assert_eq!(store.positions(), original);
    }

    #[test]
    fn test_reorder_same_order_is_idempotent() {
        let mut store = abcd();
        let first = store.begin_reorder(1, 1).unwrap();
        let first_updates = first.request().updates.clone();
        let _ = store.settle(first, &Outcome::Confirmed);
        let second = store.begin_reorder(1, 1).unwrap();
        assert_eq!(second.request().updates, first_updates);
        let _ = store.settle(second, &Outcome::Confirmed);
    }

    #[test]
    fn test_reorder_closes_gaps_left_by_delete() {
        let mut store = abcd();
        let pending = store.begin_delete(2).unwrap();
        let _ = store.settle(pending, &Outcome::Confirmed);
        assert!(!store.positions_are_dense());
        let pending = store.begin_reorder(2, 0).unwrap();
        let _ = store.settle(pending, &Outcome::Confirmed);
        assert_eq!(texts(&store), vec!["D", "A", "C"]);
        assert!(store.positions_are_dense());
    }

    #[test]
    fn test_reorder_out_of_range() {
        let mut store = abcd();
        assert_eq!(
            store.begin_reorder(0, 4).unwrap_err(),
            StoreError::IndexOutOfRange { index: 4, len: 4 }
        );
        assert_eq!(texts(&store), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_edit_commit_applies_and_exits() {
        let mut store = abcd();
        store.start_edit(2).unwrap();
        assert!(store.is_editing(2));
        store.set_draft("  Learn to surf ");
        let commit = store.commit_edit().unwrap();
        let pending = match commit {
            EditCommit::Submitted(pending) => pending,
            EditCommit::Unchanged => panic!("expected a submitted edit"),
        };
        assert_eq!(pending.request().text, "Learn to surf");
        assert_eq!(store.edit_state(), &EditState::Viewing);
        assert_eq!(store.get(2).unwrap().text, "Learn to surf");

        let _ = store.settle(pending, &Outcome::Failed("offline".into()));
        assert_eq!(store.get(2).unwrap().text, "B");
    }

    #[test]
    fn test_edit_empty_draft_reverts_and_stays_editing() {
        let mut store = abcd();
        store.start_edit(1).unwrap();
        store.set_draft("   ");
        assert_eq!(store.commit_edit().unwrap_err(), StoreError::EmptyText);
        assert_eq!(
            store.edit_state(),
            &EditState::Editing { item_id: 1, draft: "A".into() }
        );
    }

    #[test]
    fn test_edit_unchanged_skips_remote() {
        let mut store = abcd();
        store.start_edit(3).unwrap();
        assert!(matches!(store.commit_edit().unwrap(), EditCommit::Unchanged));
        assert_eq!(store.edit_state(), &EditState::Viewing);
        assert_eq!(store.commit_edit().unwrap_err(), StoreError::NotEditing);
    }

    #[test]
    fn test_failed_delete_keeps_item_added_meanwhile() {
        let mut store = ListStore::load(1, "t".into(), vec![make_item(1, "A", 0), make_item(2, "B", 1)]);
        let pending = store.begin_delete(2).unwrap();
        store.merge_added(make_item(3, "C", 2));
        let _ = store.settle(pending, &Outcome::Failed("offline".into()));
        let ids: Vec<u32> = store.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_failed_toggle_keeps_confirmed_delete() {
        let mut store = ListStore::load(1, "t".into(), vec![make_item(1, "A", 0), make_item(2, "B", 1)]);
        let toggle = store.begin_toggle(1).unwrap();
        let delete = store.begin_delete(2).unwrap();
        assert_eq!(store.settle(delete, &Outcome::Confirmed), Settled::Kept);
        let _ = store.settle(toggle, &Outcome::Failed("denied".into()));
        assert_eq!(texts(&store), vec!["A"]);
        assert!(!store.get(1).unwrap().completed);
    }

    #[test]
    fn test_failed_reorder_keeps_item_added_meanwhile() {
        let mut store = abcd();
        let pending = store.begin_reorder(3, 0).unwrap();
        store.merge_added(make_item(5, "E", 4));
        let _ = store.settle(pending, &Outcome::Failed("Item 4 not found".into()));
        assert_eq!(texts(&store), vec!["A", "B", "C", "D", "E"]);
        assert!(store.positions_are_dense());
    }

    #[test]
    fn test_failed_edit_keeps_other_changes() {
        let mut store = abcd();
        store.start_edit(1).unwrap();
        store.set_draft("Run a marathon");
        let pending = match store.commit_edit().unwrap() {
            EditCommit::Submitted(pending) => pending,
            EditCommit::Unchanged => panic!("expected a submitted edit"),
        };
        let toggle = store.begin_toggle(3).unwrap();
        let _ = store.settle(toggle, &Outcome::Confirmed);
        let _ = store.settle(pending, &Outcome::Failed("offline".into()));
        assert_eq!(store.get(1).unwrap().text, "A");
        assert!(store.get(3).unwrap().completed);
    }

    #[test]
    fn test_title_validation() {
        let store = abcd();
        assert_eq!(store.prepare_title(" "), Err(StoreError::TitleEmpty));
        assert_eq!(store.prepare_title(&"x".repeat(101)), Err(StoreError::TitleTooLong));
        assert_eq!(store.prepare_title(" Before 30 ").unwrap().title, "Before 30");
    }

    #[test]
    fn test_progress_against_target() {
        let mut store = abcd();
        let pending = store.begin_toggle(1).unwrap();
        let _ = store.settle(pending, &Outcome::Confirmed);
        let progress = store.progress();
        assert_eq!(progress.completed, 1);
        assert_eq!(progress.total, 4);
        assert!((progress.percent - 100.0 / 30.0).abs() < 1e-9);
    }
}
