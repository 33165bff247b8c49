use super::*;

/// Tests deleting a board.
///
/// Expected: Ok with the row removed
#[tokio::test]
async fn deletes_board() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(BoardEntity).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let board = factory::create_board(db).await?;

    BoardRepository::new(db).delete(board.id).await?;

    assert!(BoardEntity::find_by_id(board.id).one(db).await?.is_none());

    Ok(())
}

/// Tests that deleting a board removes its lists and cards.
///
/// Expected: Ok with no child rows left
#[tokio::test]
async fn cascades_to_lists_and_cards() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (board, list, card) = factory::helpers::create_card_with_dependencies(db).await?;

    BoardRepository::new(db).delete(board.id).await?;

    assert!(ListEntity::find_by_id(list.id).one(db).await?.is_none());
    assert!(CardEntity::find_by_id(card.id).one(db).await?.is_none());

    Ok(())
}

/// Tests deleting a board that does not exist.
///
/// Expected: Ok without touching other rows
#[tokio::test]
async fn ignores_missing_board() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(BoardEntity).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let board = factory::create_board(db).await?;

    BoardRepository::new(db).delete(board.id + 1).await?;

    assert!(BoardEntity::find_by_id(board.id).one(db).await?.is_some());

    Ok(())
}
