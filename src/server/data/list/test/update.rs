use super::*;

/// Tests renaming a list.
///
/// Verifies that the owning board is left unchanged.
///
/// Expected: Ok with the renamed list
#[tokio::test]
async fn renames_list_keeping_board() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (board, list) = factory::helpers::create_list_with_dependencies(db).await?;

    let updated = ListRepository::new(db)
        .update(
            list.id,
            UpdateListParam {
                name: "Doing".to_string(),
            },
        )
        .await?;

    assert_eq!(updated.id, list.id);
    assert_eq!(updated.name, "Doing");
    assert_eq!(updated.id_board, board.id);

    let stored = ListEntity::find_by_id(list.id).one(db).await?.unwrap();
    assert_eq!(stored.name, "Doing");

    Ok(())
}
