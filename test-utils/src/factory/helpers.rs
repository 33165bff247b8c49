//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a board with one list.
///
/// # Returns
/// - `Ok((board, list))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_list_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::board::Model, entity::list::Model), DbErr> {
    let board = crate::factory::board::create_board(db).await?;
    let list = crate::factory::list::create_list(db, board.id).await?;

    Ok((board, list))
}

/// Creates a complete board, list and card hierarchy with default values.
///
/// # Returns
/// - `Ok((board, list, card))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_card_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::board::Model,
        entity::list::Model,
        entity::card::Model,
    ),
    DbErr,
> {
    let (board, list) = create_list_with_dependencies(db).await?;
    let card = crate::factory::card::create_card(db, list.id).await?;

    Ok((board, list, card))
}
