use super::*;

/// Tests creating a board.
///
/// Verifies that the store assigns a positive ID and identical creation and update
/// timestamps.
///
/// Expected: Ok with the created board
#[tokio::test]
async fn creates_board() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(BoardEntity).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BoardRepository::new(db);
    let board = repo
        .create(CreateBoardParam {
            name: "Roadmap".to_string(),
            deleted_at: None,
        })
        .await?;

    assert!(board.id > 0);
    assert_eq!(board.name, "Roadmap");
    assert_eq!(board.created_at, board.updated_at);
    assert!(board.deleted_at.is_none());

    let stored = BoardEntity::find_by_id(board.id).one(db).await?.unwrap();
    assert_eq!(stored.name, "Roadmap");

    Ok(())
}

/// Tests that a supplied `deleted_at` is persisted as given.
///
/// Expected: Ok with `deleted_at` set
#[tokio::test]
async fn persists_deleted_at() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(BoardEntity).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let deleted_at = test_utils::fixture::default_timestamp();

    let board = BoardRepository::new(db)
        .create(CreateBoardParam {
            name: "Archive".to_string(),
            deleted_at: Some(deleted_at),
        })
        .await?;

    assert_eq!(board.deleted_at, Some(deleted_at));

    Ok(())
}

/// Tests that boards get distinct IDs.
///
/// Expected: Ok with increasing IDs
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(BoardEntity).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BoardRepository::new(db);
    let first = repo
        .create(CreateBoardParam {
            name: "First".to_string(),
            deleted_at: None,
        })
        .await?;
    let second = repo
        .create(CreateBoardParam {
            name: "Second".to_string(),
            deleted_at: None,
        })
        .await?;

    assert!(second.id > first.id);

    Ok(())
}
