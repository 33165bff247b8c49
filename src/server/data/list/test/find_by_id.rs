use super::*;

/// Tests fetching an existing list.
///
/// Expected: Ok(Some) with the list still linked to its board
#[tokio::test]
async fn finds_existing_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (board, list) = factory::helpers::create_list_with_dependencies(db).await?;

    let found = ListRepository::new(db).find_by_id(list.id).await?.unwrap();

    assert_eq!(found.id, list.id);
    assert_eq!(found.name, list.name);
    assert_eq!(found.id_board, board.id);

    Ok(())
}

/// Tests fetching a list that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = ListRepository::new(db).find_by_id(999_999).await?;

    assert!(found.is_none());

    Ok(())
}
