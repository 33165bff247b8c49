use super::*;

/// Tests overwriting a card's scalar fields.
///
/// Expected: Ok with the new values and the same list
#[tokio::test]
async fn updates_scalar_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, list, card) = factory::helpers::create_card_with_dependencies(db).await?;

    let updated = CardRepository::new(db)
        .update(
            card.id,
            UpdateCardParam {
                name: "Ship it".to_string(),
                description: "Release the build.".to_string(),
                status: "done".to_string(),
            },
        )
        .await?;

    assert_eq!(updated.id, card.id);
    assert_eq!(updated.name, "Ship it");
    assert_eq!(updated.description, "Release the build.");
    assert_eq!(updated.status, "done");
    assert_eq!(updated.id_list, list.id);

    let stored = CardEntity::find_by_id(card.id).one(db).await?.unwrap();
    assert_eq!(stored.status, "done");

    Ok(())
}

/// Tests updating a card that does not exist.
///
/// Expected: Err(DbErr::RecordNotUpdated)
#[tokio::test]
async fn fails_for_missing_card() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CardRepository::new(db)
        .update(
            999_999,
            UpdateCardParam {
                name: "Nobody".to_string(),
                description: String::new(),
                status: "todo".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}
