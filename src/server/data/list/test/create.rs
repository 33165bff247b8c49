use super::*;

/// Tests creating a list on an existing board.
///
/// Expected: Ok with the list attached to the board
#[tokio::test]
async fn creates_list_on_board() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let board = factory::create_board(db).await?;

    let list = ListRepository::new(db)
        .create(CreateListParam {
            name: "Backlog".to_string(),
            id_board: board.id,
            deleted_at: None,
        })
        .await?;

    assert!(list.id > 0);
    assert_eq!(list.name, "Backlog");
    assert_eq!(list.id_board, board.id);

    Ok(())
}

/// Tests creating a list for a board that does not exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_unknown_board() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ListRepository::new(db)
        .create(CreateListParam {
            name: "Orphan".to_string(),
            id_board: 999_999,
            deleted_at: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
