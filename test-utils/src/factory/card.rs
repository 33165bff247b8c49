//! Card factory for creating test card entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cards belonging to a list.
///
/// # Example
///
/// ```rust,ignore
/// let card = CardFactory::new(&db, list.id).status("done").build().await?;
/// ```
pub struct CardFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::card::Model,
}

impl<'a> CardFactory<'a> {
    /// Creates a new CardFactory for the given list with a unique name.
    pub fn new(db: &'a DatabaseConnection, id_list: i32) -> Self {
        let entity = fixture::card::entity_builder()
            .id_list(id_list)
            .name(format!("Card {}", next_id()))
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.entity.description = description.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.entity.status = status.into();
        self
    }

    /// Builds and inserts the card entity into the database.
    pub async fn build(self) -> Result<entity::card::Model, DbErr> {
        let now = Utc::now();

        entity::card::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            description: ActiveValue::Set(self.entity.description),
            status: ActiveValue::Set(self.entity.status),
            id_list: ActiveValue::Set(self.entity.id_list),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a card with default values on the given list.
pub async fn create_card(
    db: &DatabaseConnection,
    id_list: i32,
) -> Result<entity::card::Model, DbErr> {
    CardFactory::new(db, id_list).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::helpers::create_card_with_dependencies;

    #[tokio::test]
    async fn creates_full_hierarchy() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_kanban_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (board, list, card) = create_card_with_dependencies(db).await?;

        assert_eq!(list.id_board, board.id);
        assert_eq!(card.id_list, list.id);
        assert_eq!(card.status, fixture::card::DEFAULT_STATUS);

        Ok(())
    }
}
