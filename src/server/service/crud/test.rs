use super::*;
use crate::server::{
    data::{board::BoardRepository, card::CardRepository, list::ListRepository},
    model::{
        board::{CreateBoardParam, UpdateBoardParam},
        card::UpdateCardParam,
        list::CreateListParam,
    },
};
use test_utils::{builder::TestBuilder, factory};

fn board_param(name: &str) -> CreateBoardParam {
    CreateBoardParam {
        name: name.to_string(),
        deleted_at: None,
    }
}

/// Tests that a created board is wrapped in a 201 envelope.
///
/// Expected: success envelope with a positive ID
#[tokio::test]
async fn create_returns_created_envelope() {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = CrudService::new(BoardRepository::new(db))
        .create(board_param("Board 1"))
        .await;

    assert!(response.success);
    assert_eq!(response.status_code, 201);
    assert_eq!(response.message, "Board successfully created");
    let board = response.response_object.unwrap();
    assert!(board.id > 0);
    assert_eq!(board.name, "Board 1");
}

/// Tests that a store failure on create is reported as a generic 500.
///
/// Creating a list for an unknown board violates the foreign key.
///
/// Expected: failure envelope without store details
#[tokio::test]
async fn create_maps_store_error_to_internal_error() {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = CrudService::new(ListRepository::new(db))
        .create(CreateListParam {
            name: "Orphan".to_string(),
            id_board: 999_999,
            deleted_at: None,
        })
        .await;

    assert!(!response.success);
    assert_eq!(response.status_code, 500);
    assert_eq!(response.message, "An error occurred while creating the list");
    assert!(response.response_object.is_none());
}

/// Tests that an empty table is reported as not found.
///
/// Expected: 404 "No Boards found"
#[tokio::test]
async fn find_all_on_empty_table_is_not_found() {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = CrudService::new(BoardRepository::new(db)).find_all().await;

    assert!(!response.success);
    assert_eq!(response.status_code, 404);
    assert_eq!(response.message, "No Boards found");
    assert!(response.response_object.is_none());
}

/// Tests that boards are returned with their nested lists and cards.
///
/// Expected: 200 with one board, one list and one card
#[tokio::test]
async fn find_all_returns_nested_boards() {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (board, list, card) = factory::helpers::create_card_with_dependencies(db)
        .await
        .unwrap();

    let response = CrudService::new(BoardRepository::new(db)).find_all().await;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.message, "Boards successfully found");
    let boards = response.response_object.unwrap();
    assert_eq!(boards.len(), 1);
    assert_eq!(boards[0].id, board.id);
    assert_eq!(boards[0].lists[0].id, list.id);
    assert_eq!(boards[0].lists[0].cards[0].id, card.id);
}

/// Tests that a missing table surfaces as a 500 on reads.
///
/// Expected: failure envelope with the retrieval message
#[tokio::test]
async fn find_all_maps_store_error_to_internal_error() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = CrudService::new(CardRepository::new(db)).find_all().await;

    assert_eq!(response.status_code, 500);
    assert_eq!(response.message, "An error occurred while retrieving cards");
}

/// Tests fetching existing and missing boards.
///
/// Expected: 200 for the existing board, 404 for an unknown ID
#[tokio::test]
async fn find_by_id_reports_missing_board() {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let board = factory::create_board(db).await.unwrap();
    let service = CrudService::new(BoardRepository::new(db));

    let found = service.find_by_id(board.id).await;
    assert_eq!(found.status_code, 200);
    assert_eq!(found.message, "Board successfully found");
    assert_eq!(found.response_object.unwrap().name, board.name);

    let missing = service.find_by_id(board.id + 1).await;
    assert_eq!(missing.status_code, 404);
    assert_eq!(missing.message, "Board not found");
}

/// Tests that non-positive IDs are rejected before reaching the store.
///
/// Expected: 400 with the positive number rule
#[tokio::test]
async fn rejects_non_positive_id() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = CrudService::new(BoardRepository::new(db))
        .find_by_id(0)
        .await;

    assert_eq!(response.status_code, 400);
    assert_eq!(
        response.message,
        "Invalid data supplied: id: ID must be a positive number"
    );
}

/// Tests updating a card and the not-found check for a missing one.
///
/// Expected: 200 with the updated card, then 404 for an unknown ID
#[tokio::test]
async fn update_checks_existence_first() {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, card) = factory::helpers::create_card_with_dependencies(db)
        .await
        .unwrap();
    let service = CrudService::new(CardRepository::new(db));
    let param = || UpdateCardParam {
        name: "Task 1".to_string(),
        description: "Done and dusted.".to_string(),
        status: "done".to_string(),
    };

    let updated = service.update(card.id, param()).await;
    assert_eq!(updated.status_code, 200);
    assert_eq!(updated.message, "Card successfully updated");
    let dto = updated.response_object.unwrap();
    assert_eq!(dto.id, card.id);
    assert_eq!(dto.status, "done");

    let missing = service.update(card.id + 1, param()).await;
    assert_eq!(missing.status_code, 404);
    assert_eq!(missing.message, "Card not found");
}

/// Tests deleting a board returns its last state and a second delete is not found.
///
/// Expected: 200 with the deleted board, then 404
#[tokio::test]
async fn delete_returns_snapshot_then_not_found() {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let board = factory::create_board(db).await.unwrap();
    let service = CrudService::new(BoardRepository::new(db));

    let deleted = service.delete(board.id).await;
    assert_eq!(deleted.status_code, 200);
    assert_eq!(deleted.message, "Board successfully deleted");
    assert_eq!(deleted.response_object.unwrap().id, board.id);

    let again = service.delete(board.id).await;
    assert_eq!(again.status_code, 404);
    assert_eq!(again.message, "Board not found");
}

/// Tests that an update against a missing table surfaces as a 500.
///
/// Expected: failure envelope with the update message
#[tokio::test]
async fn update_maps_store_error_to_internal_error() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = CrudService::new(BoardRepository::new(db))
        .update(
            1,
            UpdateBoardParam {
                name: "Renamed".to_string(),
            },
        )
        .await;

    assert_eq!(response.status_code, 500);
    assert_eq!(response.message, "An error occurred while updating the board");
}
