//! Repository Integration Tests
//!
//! Tests for the SQLite repositories with an in-memory database.

#[cfg(test)]
mod tests {
    use crate::domain::{Category, DomainError, Font, GoalItem, StyleOptionsInput, DEFAULT_LIST_TITLE};
    use crate::repository::{
        DbState, ItemPositioningOperations, ItemRepository, ListRepository, ProfileRepository,
        Repository, StyleOptionsRepository, SuggestionRepository,
    };

    struct Repos {
        items: ItemRepository,
        lists: ListRepository,
        styles: StyleOptionsRepository,
        profiles: ProfileRepository,
        suggestions: SuggestionRepository,
    }

    fn setup_test_db() -> Repos {
        let db = DbState::in_memory().expect("Failed to init test DB");
        Repos {
            items: ItemRepository::new(db.conn.clone()),
            lists: ListRepository::new(db.conn.clone()),
            styles: StyleOptionsRepository::new(db.conn.clone()),
            profiles: ProfileRepository::new(db.conn.clone()),
            suggestions: SuggestionRepository::new(db.conn),
        }
    }

    #[tokio::test]
    async fn test_ensure_list_is_idempotent() {
        let repos = setup_test_db();
        let first = repos.lists.ensure_for_user("u1", DEFAULT_LIST_TITLE).await.unwrap();
        let second = repos.lists.ensure_for_user("u1", "Other title").await.unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(second.title, DEFAULT_LIST_TITLE);
        assert!(!second.is_public);
    }

    #[tokio::test]
    async fn test_missing_list_is_none() {
        let repos = setup_test_db();
        assert!(repos.lists.find_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_append_assigns_dense_positions() {
        let repos = setup_test_db();
        let list = repos.lists.ensure_for_user("u1", DEFAULT_LIST_TITLE).await.unwrap();

        let a = repos.items.append(&GoalItem::new(list.id, "u1", "A")).await.unwrap();
        let b = repos.items.append(&GoalItem::new(list.id, "u1", "B")).await.unwrap();
        assert_eq!(a.position, 0);
        assert_eq!(b.position, 1);
        assert!(b.created_at > 0);

        repos.items.delete(a.id).await.unwrap();
        let c = repos.items.append(&GoalItem::new(list.id, "u1", "C")).await.unwrap();
        assert_eq!(c.position, 2);
    }

    #[tokio::test]
    async fn test_list_by_list_orders_by_position() {
        let repos = setup_test_db();
        let list = repos.lists.ensure_for_user("u1", DEFAULT_LIST_TITLE).await.unwrap();
        let mut late = GoalItem::new(list.id, "u1", "late");
        late.position = 5;
        let mut early = GoalItem::new(list.id, "u1", "early").with_category(Category::Travel);
        early.position = 1;
        repos.items.create(&late).await.unwrap();
        repos.items.create(&early).await.unwrap();

        let items = repos.items.list_by_list(list.id).await.unwrap();
        let texts: Vec<_> = items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["early", "late"]);
        assert_eq!(items[0].category, Category::Travel);
    }

    #[tokio::test]
    async fn test_update_is_scoped_to_owner() {
        let repos = setup_test_db();
        let list = repos.lists.ensure_for_user("u1", DEFAULT_LIST_TITLE).await.unwrap();
        let created = repos.items.append(&GoalItem::new(list.id, "u1", "Mine")).await.unwrap();

        let mut stolen = created.clone();
        stolen.user_id = "u2".to_string();
        stolen.completed = true;
        assert!(matches!(repos.items.update(&stolen).await, Err(DomainError::NotFound(_))));

        let mut mine = created.clone();
        mine.completed = true;
        repos.items.update(&mine).await.unwrap();
        let found = repos.items.find_by_id(created.id).await.unwrap().unwrap();
        assert!(found.completed);

        assert!(repos.items.find_owned(created.id, "u2").await.is_err());
        assert!(repos.items.find_owned(created.id, "u1").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_item() {
        let repos = setup_test_db();
        let list = repos.lists.ensure_for_user("u1", DEFAULT_LIST_TITLE).await.unwrap();
        let created = repos.items.append(&GoalItem::new(list.id, "u1", "Gone")).await.unwrap();

        repos.items.delete(created.id).await.expect("Delete failed");
        assert!(repos.items.find_by_id(created.id).await.unwrap().is_none());
        assert!(matches!(repos.items.delete(created.id).await, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_set_position_requires_ownership() {
        let repos = setup_test_db();
        let list = repos.lists.ensure_for_user("u1", DEFAULT_LIST_TITLE).await.unwrap();
        let item = repos.items.append(&GoalItem::new(list.id, "u1", "A")).await.unwrap();

        repos.items.set_position(item.id, "u1", 7).await.unwrap();
        assert_eq!(repos.items.find_by_id(item.id).await.unwrap().unwrap().position, 7);
        assert!(repos.items.set_position(item.id, "u2", 0).await.is_err());
        assert!(repos.items.set_position(9999, "u1", 0).await.is_err());
    }

    #[tokio::test]
    async fn test_style_options_upsert_last_write_wins() {
        let repos = setup_test_db();
        let list = repos.lists.ensure_for_user("u1", DEFAULT_LIST_TITLE).await.unwrap();
        assert!(repos.styles.find(list.id).await.unwrap().is_none());

        let first = StyleOptionsInput {
            background_color: Some("#000000".to_string()),
            font: Some(Font::Serif),
            ..Default::default()
        };
        repos.styles.upsert(list.id, &first).await.unwrap();

        let second = StyleOptionsInput {
            text_color: Some("#fff".to_string()),
            ..Default::default()
        };
        repos.styles.upsert(list.id, &second).await.unwrap();

        let stored = repos.styles.find(list.id).await.unwrap().unwrap();
        assert_eq!(stored, second);
    }

    #[tokio::test]
    async fn test_username_uniqueness() {
        let repos = setup_test_db();
        repos.profiles.set_username("u1", "sam").await.unwrap();
        repos.profiles.set_username("u1", "sammy").await.unwrap();
        assert_eq!(
            repos.profiles.find("u1").await.unwrap().unwrap().username.as_deref(),
            Some("sammy")
        );

        let err = repos.profiles.set_username("u2", "sammy").await.unwrap_err();
        assert_eq!(err, DomainError::Conflict("Username is already taken.".to_string()));
    }

    #[tokio::test]
    async fn test_public_lists_join_usernames() {
        let repos = setup_test_db();
        repos.lists.ensure_for_user("u1", DEFAULT_LIST_TITLE).await.unwrap();
        repos.lists.ensure_for_user("u2", DEFAULT_LIST_TITLE).await.unwrap();
        repos.profiles.set_username("u1", "alex").await.unwrap();
        repos.lists.set_public("u1", true).await.unwrap();

        let public = repos.lists.list_public(10).await.unwrap();
        assert_eq!(public.len(), 1);
        assert_eq!(public[0].0.user_id, "u1");
        assert_eq!(public[0].1.as_deref(), Some("alex"));

        let by_name = repos.lists.find_by_username("alex").await.unwrap().unwrap();
        assert!(by_name.is_public);
        assert!(repos.lists.find_by_username("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_suggestion_insert_assigns_ids() {
        let repos = setup_test_db();
        let first = repos.suggestions.insert("u1", "Dark mode", None).await.unwrap();
        let second = repos
            .suggestions
            .insert("u2", "Sharing", Some("Share a link to my list"))
            .await
            .unwrap();

        assert!(second.id > first.id);
        assert_eq!(first.user_id, "u1");
        assert!(first.description.is_none());
        assert_eq!(second.description.as_deref(), Some("Share a link to my list"));
        assert!(second.created_at > 0);
    }

    #[tokio::test]
    async fn test_uninitialized_connection_is_internal_error() {
        let repo = ListRepository::new(DbState::new().conn);
        assert!(matches!(repo.find_by_id(1).await, Err(DomainError::Internal(_))));
    }
}
