//! Action tests against an in-memory database.

use async_trait::async_trait;
use std::sync::Arc;

use super::*;
use crate::auth::{AuthProvider, StaticSession, User};
use crate::domain::{Category, DomainError, DomainResult, Font, StyleOptions, StyleOptionsInput};

struct BrokenAuth;

#[async_trait]
impl AuthProvider for BrokenAuth {
    async fn current_user(&self) -> DomainResult<Option<User>> {
        Err(DomainError::Internal("auth service unavailable".to_string()))
    }
}

fn actions_for(db: &DbState, user_id: &str) -> Actions {
    Actions::new(db, Arc::new(StaticSession::new(user_id, None)))
}

fn setup() -> (DbState, Actions) {
    let db = DbState::in_memory().expect("in-memory db");
    let actions = actions_for(&db, "u1");
    (db, actions)
}

async fn list_id(actions: &Actions) -> u32 {
    actions.ensure_list().await.data.expect("list").id
}

async fn add(actions: &Actions, list_id: u32, text: &str) -> GoalItemId {
    let result = actions
        .add_item(AddItemRequest { list_id, text: text.to_string(), category: None })
        .await;
    assert!(result.is_ok(), "{}", result.message);
    result.data.expect("item").id
}

type GoalItemId = u32;

async fn texts_in_order(actions: &Actions) -> Vec<String> {
    let payload = actions.load_my_list().await.data.expect("payload");
    payload.items.into_iter().map(|i| i.text).collect()
}

#[tokio::test]
async fn test_signed_out_user_is_rejected_everywhere() {
    let db = DbState::in_memory().unwrap();
    let actions = Actions::new(&db, Arc::new(StaticSession::new("", None)));

    let results = vec![
        actions.ensure_list().await.message,
        actions.load_my_list().await.message,
        actions
            .add_item(AddItemRequest { list_id: 1, text: "x".to_string(), category: None })
            .await
            .message,
        actions.toggle_item(ToggleItemRequest { item_id: 1, completed: true }).await.message,
        actions.delete_item(DeleteItemRequest { item_id: 1 }).await.message,
        actions
            .edit_item_text(EditItemTextRequest { item_id: 1, text: "x".to_string() })
            .await
            .message,
        actions
            .reorder_items(ReorderRequest { updates: vec![PositionUpdate { id: 1, position: 0 }] })
            .await
            .message,
        actions
            .update_title(UpdateTitleRequest { list_id: 1, title: "t".to_string() })
            .await
            .message,
        actions.update_visibility(UpdateVisibilityRequest { is_public: true }).await.message,
        actions.load_style_options(1).await.message,
        actions
            .update_profile(UpdateProfileRequest { username: "valid_name".to_string() })
            .await
            .message,
        actions.browse_public_lists(None).await.message,
        actions
            .add_item_from_community(AddFromCommunityRequest { text: "x".to_string() })
            .await
            .message,
        actions
            .submit_suggestion(SubmitSuggestionRequest { title: "x".to_string(), description: None })
            .await
            .message,
    ];
    for message in results {
        assert_eq!(message, "You must be logged in.");
    }
}

#[tokio::test]
async fn test_auth_check_precedes_validation() {
    let db = DbState::in_memory().unwrap();
    let actions = Actions::new(&db, Arc::new(StaticSession::new("", None)));
    let result = actions
        .add_item(AddItemRequest { list_id: 1, text: "   ".to_string(), category: None })
        .await;
    assert_eq!(result.message, "You must be logged in.");
}

#[tokio::test]
async fn test_auth_failure_is_reported_not_thrown() {
    let db = DbState::in_memory().unwrap();
    let actions = Actions::new(&db, Arc::new(BrokenAuth));
    let result = actions.ensure_list().await;
    assert!(result.error);
    assert!(!result.success);
    assert_eq!(result.message, "auth service unavailable");
}

#[tokio::test]
async fn test_load_my_list_creates_list_with_defaults() {
    let (_db, actions) = setup();
    let result = actions.load_my_list().await;
    assert!(result.is_ok());
    let payload = result.data.unwrap();
    assert_eq!(payload.list.title, "My 30 Before 30 List");
    assert!(payload.items.is_empty());
    assert_eq!(payload.style_options, StyleOptions::default());
    assert_eq!(payload.username, None);

    let again = actions.ensure_list().await.data.unwrap();
    assert_eq!(again.id, payload.list.id);
}

#[tokio::test]
async fn test_add_item_appends_with_next_position() {
    let (_db, actions) = setup();
    let list = list_id(&actions).await;

    let first = actions
        .add_item(AddItemRequest {
            list_id: list,
            text: "  Run a marathon  ".to_string(),
            category: Some(Category::Wellness),
        })
        .await;
    assert!(first.is_ok());
    assert_eq!(first.message, "Item added successfully!");
    let first = first.data.unwrap();
    assert_eq!(first.text, "Run a marathon");
    assert_eq!(first.position, 0);
    assert_eq!(first.category, Category::Wellness);

    add(&actions, list, "Learn Italian").await;
    let third = actions
        .add_item(AddItemRequest { list_id: list, text: "See the aurora".to_string(), category: None })
        .await
        .data
        .unwrap();
    assert_eq!(third.position, 2);
    assert_eq!(third.category, Category::Other);
}

#[tokio::test]
async fn test_add_item_rejects_invalid_text_and_foreign_list() {
    let (db, actions) = setup();
    let list = list_id(&actions).await;

    let empty = actions
        .add_item(AddItemRequest { list_id: list, text: "  ".to_string(), category: None })
        .await;
    assert!(empty.error);
    assert_eq!(empty.message, "Item text cannot be empty.");

    let other = actions_for(&db, "u2");
    let foreign = other
        .add_item(AddItemRequest { list_id: list, text: "Sneaky".to_string(), category: None })
        .await;
    assert!(foreign.error);
    assert_eq!(foreign.message, "List not found.");
    assert!(texts_in_order(&actions).await.is_empty());
}

#[tokio::test]
async fn test_toggle_and_edit_are_scoped_to_owner() {
    let (db, actions) = setup();
    let list = list_id(&actions).await;
    let id = add(&actions, list, "Skydive").await;

    let toggled = actions.toggle_item(ToggleItemRequest { item_id: id, completed: true }).await;
    assert!(toggled.is_ok());
    assert!(toggled.data.unwrap().completed);

    let edited = actions
        .edit_item_text(EditItemTextRequest { item_id: id, text: " Skydive twice ".to_string() })
        .await;
    assert_eq!(edited.data.unwrap().text, "Skydive twice");

    let other = actions_for(&db, "u2");
    let stolen = other.toggle_item(ToggleItemRequest { item_id: id, completed: false }).await;
    assert!(stolen.error);
    let blank = actions
        .edit_item_text(EditItemTextRequest { item_id: id, text: "".to_string() })
        .await;
    assert!(blank.error);

    let payload = actions.load_my_list().await.data.unwrap();
    assert!(payload.items[0].completed);
    assert_eq!(payload.items[0].text, "Skydive twice");
}

#[tokio::test]
async fn test_delete_leaves_position_gaps() {
    let (_db, actions) = setup();
    let list = list_id(&actions).await;
    add(&actions, list, "A").await;
    let b = add(&actions, list, "B").await;
    add(&actions, list, "C").await;

    let result = actions.delete_item(DeleteItemRequest { item_id: b }).await;
    assert!(result.is_ok());
    assert_eq!(result.message, "Item deleted successfully!");

    let payload = actions.load_my_list().await.data.unwrap();
    let positions: Vec<_> = payload.items.iter().map(|i| i.position).collect();
    assert_eq!(positions, vec![0, 2]);

    let missing = actions.delete_item(DeleteItemRequest { item_id: b }).await;
    assert!(missing.error);
}

#[tokio::test]
async fn test_reorder_persists_full_batch() {
    let (_db, actions) = setup();
    let list = list_id(&actions).await;
    let a = add(&actions, list, "A").await;
    let b = add(&actions, list, "B").await;
    let c = add(&actions, list, "C").await;

    let result = actions
        .reorder_items(ReorderRequest {
            updates: vec![
                PositionUpdate { id: b, position: 0 },
                PositionUpdate { id: c, position: 1 },
                PositionUpdate { id: a, position: 2 },
            ],
        })
        .await;
    assert!(result.is_ok());
    assert_eq!(texts_in_order(&actions).await, vec!["B", "C", "A"]);
}

#[tokio::test]
async fn test_reorder_failure_keeps_applied_writes() {
    let (db, actions) = setup();
    let list = list_id(&actions).await;
    let a = add(&actions, list, "A").await;
    let b = add(&actions, list, "B").await;

    let other = actions_for(&db, "u2");
    let other_list = list_id(&other).await;
    let foreign = add(&other, other_list, "Not yours").await;

    let result = actions
        .reorder_items(ReorderRequest {
            updates: vec![
                PositionUpdate { id: b, position: 0 },
                PositionUpdate { id: foreign, position: 1 },
                PositionUpdate { id: a, position: 2 },
            ],
        })
        .await;
    assert!(result.error);
    assert_eq!(result.message, format!("Item {} not found", foreign));

    let payload = actions.load_my_list().await.data.unwrap();
    let placed: Vec<_> = payload.items.iter().map(|i| (i.text.as_str(), i.position)).collect();
    assert_eq!(placed, vec![("B", 0), ("A", 2)]);
}

#[tokio::test]
async fn test_reorder_validation() {
    let (_db, actions) = setup();
    let empty = actions.reorder_items(ReorderRequest { updates: vec![] }).await;
    assert!(empty.error);

    let gap = actions
        .reorder_items(ReorderRequest {
            updates: vec![PositionUpdate { id: 1, position: 0 }, PositionUpdate { id: 2, position: 2 }],
        })
        .await;
    assert_eq!(gap.message, "Positions must be consecutive starting at 0.");
}

#[tokio::test]
async fn test_update_title() {
    let (db, actions) = setup();
    let list = list_id(&actions).await;

    let result = actions
        .update_title(UpdateTitleRequest { list_id: list, title: "  Before I turn 30 ".to_string() })
        .await;
    assert_eq!(result.message, "List title updated!");
    assert_eq!(result.data.unwrap().title, "Before I turn 30");

    let too_long = actions
        .update_title(UpdateTitleRequest { list_id: list, title: "x".repeat(101) })
        .await;
    assert!(too_long.error);

    let other = actions_for(&db, "u2");
    let foreign = other
        .update_title(UpdateTitleRequest { list_id: list, title: "Mine now".to_string() })
        .await;
    assert!(foreign.error);

    let payload = actions.load_my_list().await.data.unwrap();
    assert_eq!(payload.list.title, "Before I turn 30");
}

#[tokio::test]
async fn test_style_options_round_trip() {
    let (db, actions) = setup();
    let list = list_id(&actions).await;

    let defaults = actions.load_style_options(list).await;
    assert!(defaults.is_ok());
    assert_eq!(defaults.data.unwrap(), StyleOptions::default());

    let saved = actions
        .save_style_options(SaveStyleOptionsRequest {
            list_id: list,
            options: StyleOptionsInput {
                background_color: Some("#000".to_string()),
                font: Some(Font::Handwriting),
                ..Default::default()
            },
        })
        .await;
    assert!(saved.is_ok());

    let loaded = actions.load_style_options(list).await.data.unwrap();
    assert_eq!(loaded.background_color, "#000");
    assert_eq!(loaded.font, Font::Handwriting);
    assert_eq!(loaded.text_color, StyleOptions::default().text_color);

    let invalid = actions
        .save_style_options(SaveStyleOptionsRequest {
            list_id: list,
            options: StyleOptionsInput {
                text_color: Some("blue".to_string()),
                ..Default::default()
            },
        })
        .await;
    assert!(invalid.error);

    let other = actions_for(&db, "u2");
    assert!(other.load_style_options(list).await.error);
}

#[tokio::test]
async fn test_style_options_partial_save_keeps_defaults() {
    let (_db, actions) = setup();
    let list = list_id(&actions).await;

    let saved = actions
        .save_style_options(SaveStyleOptionsRequest {
            list_id: list,
            options: StyleOptionsInput {
                background_color: Some("#123456".to_string()),
                ..Default::default()
            },
        })
        .await;
    assert!(saved.is_ok(), "{}", saved.message);

    let loaded = actions.load_style_options(list).await.data.unwrap();
    assert_eq!(
        loaded,
        StyleOptions {
            background_color: "#123456".to_string(),
            ..StyleOptions::default()
        }
    );
}

#[tokio::test]
async fn test_style_options_save_all_fields() {
    let (_db, actions) = setup();
    let list = list_id(&actions).await;

    let saved = actions
        .save_style_options(SaveStyleOptionsRequest {
            list_id: list,
            options: StyleOptionsInput {
                background_color: Some("#111111".to_string()),
                text_color: Some("#222".to_string()),
                title_color: Some("#333333".to_string()),
                item_number_color: Some("#444".to_string()),
                completed_item_text_color: Some("#555555".to_string()),
                completed_item_icon_color: Some("#666".to_string()),
                font: Some(Font::Mono),
            },
        })
        .await;
    assert!(saved.is_ok(), "{}", saved.message);

    let loaded = actions.load_style_options(list).await.data.unwrap();
    assert_eq!(
        loaded,
        StyleOptions {
            background_color: "#111111".to_string(),
            text_color: "#222".to_string(),
            title_color: "#333333".to_string(),
            item_number_color: "#444".to_string(),
            completed_item_text_color: "#555555".to_string(),
            completed_item_icon_color: "#666".to_string(),
            font: Font::Mono,
        }
    );
}

#[tokio::test]
async fn test_submit_suggestion() {
    let (_db, actions) = setup();

    let result = actions
        .submit_suggestion(SubmitSuggestionRequest {
            title: "  Custom themes ".to_string(),
            description: Some("More palettes for the image".to_string()),
        })
        .await;
    assert!(result.is_ok(), "{}", result.message);
    assert_eq!(result.message, "Suggestion submitted successfully!");
    let suggestion = result.data.unwrap();
    assert_eq!(suggestion.user_id, "u1");
    assert_eq!(suggestion.title, "Custom themes");
    assert_eq!(suggestion.description.as_deref(), Some("More palettes for the image"));

    let title_only = actions
        .submit_suggestion(SubmitSuggestionRequest { title: "t".repeat(100), description: None })
        .await;
    assert!(title_only.is_ok(), "{}", title_only.message);
    assert!(title_only.data.unwrap().id > suggestion.id);
}

#[tokio::test]
async fn test_submit_suggestion_validation() {
    let (_db, actions) = setup();
    let submit = |title: String, description: Option<String>| SubmitSuggestionRequest { title, description };

    let empty = actions.submit_suggestion(submit("   ".to_string(), None)).await;
    assert!(empty.error);
    assert_eq!(empty.message, "Title cannot be empty.");

    let long_title = actions.submit_suggestion(submit("t".repeat(101), None)).await;
    assert_eq!(long_title.message, "Title is too long.");
    assert!(long_title.data.is_none());

    let long_description = actions
        .submit_suggestion(submit("Idea".to_string(), Some("d".repeat(501))))
        .await;
    assert_eq!(long_description.message, "Description is too long.");

    let edge = actions
        .submit_suggestion(submit("Idea".to_string(), Some("d".repeat(500))))
        .await;
    assert!(edge.is_ok(), "{}", edge.message);
}

#[tokio::test]
async fn test_username_must_be_unique() {
    let (db, actions) = setup();
    assert!(actions
        .update_profile(UpdateProfileRequest { username: "dreamer".to_string() })
        .await
        .is_ok());

    let other = actions_for(&db, "u2");
    let taken = other
        .update_profile(UpdateProfileRequest { username: "dreamer".to_string() })
        .await;
    assert_eq!(taken.message, "Username is already taken.");

    let short = other.update_profile(UpdateProfileRequest { username: "ab".to_string() }).await;
    assert_eq!(short.message, "Username must be at least 3 characters");
}

#[tokio::test]
async fn test_public_lists_and_copying_goals() {
    let (db, actions) = setup();
    let list = list_id(&actions).await;
    add(&actions, list, "Climb Kilimanjaro").await;
    actions
        .update_profile(UpdateProfileRequest { username: "climber".to_string() })
        .await;

    let viewer = actions_for(&db, "u2");
    assert!(viewer.browse_public_lists(None).await.data.unwrap().is_empty());
    let private = viewer.get_public_list("climber").await;
    assert!(private.error);
    assert_eq!(private.message, "This list is private or does not exist.");

    let visible = actions.update_visibility(UpdateVisibilityRequest { is_public: true }).await;
    assert!(visible.data.unwrap().is_public);

    let browsed = viewer.browse_public_lists(Some(5)).await.data.unwrap();
    assert_eq!(browsed.len(), 1);
    assert_eq!(browsed[0].username.as_deref(), Some("climber"));
    assert_eq!(browsed[0].items[0].text, "Climb Kilimanjaro");

    let public = viewer.get_public_list("climber").await.data.unwrap();
    assert_eq!(public.items.len(), 1);

    let copied = viewer
        .add_item_from_community(AddFromCommunityRequest { text: "Climb Kilimanjaro".to_string() })
        .await;
    assert_eq!(copied.message, "Added \"Climb Kilimanjaro\" to your list!");
    let copied = copied.data.unwrap();
    assert_eq!(copied.position, 0);
    assert_eq!(copied.category, Category::Other);
    assert_eq!(texts_in_order(&viewer).await, vec!["Climb Kilimanjaro"]);
}

#[tokio::test]
async fn test_browse_limit_is_applied() {
    let db = DbState::in_memory().unwrap();
    for n in 0..4 {
        let owner = actions_for(&db, &format!("owner{}", n));
        owner.update_visibility(UpdateVisibilityRequest { is_public: true }).await;
    }
    let viewer = actions_for(&db, "viewer").with_browse_limit(3);
    assert_eq!(viewer.browse_public_lists(None).await.data.unwrap().len(), 3);
    assert_eq!(viewer.browse_public_lists(Some(2)).await.data.unwrap().len(), 2);
}
