use super::*;

/// Tests that deleting a list removes its cards but not its board.
///
/// Expected: Ok with the list and cards gone
#[tokio::test]
async fn deletes_list_and_its_cards() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (board, list, card) = factory::helpers::create_card_with_dependencies(db).await?;

    ListRepository::new(db).delete(list.id).await?;

    assert!(ListEntity::find_by_id(list.id).one(db).await?.is_none());
    assert!(CardEntity::find_by_id(card.id).one(db).await?.is_none());
    assert!(entity::prelude::Board::find_by_id(board.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
