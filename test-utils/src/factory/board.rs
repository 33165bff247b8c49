//! Board factory for creating test board entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test boards with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let board = BoardFactory::new(&db).name("Roadmap").build().await?;
/// ```
pub struct BoardFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::board::Model,
}

impl<'a> BoardFactory<'a> {
    /// Creates a new BoardFactory with fixture defaults and a unique name.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let entity = fixture::board::entity_builder()
            .name(format!("Board {}", next_id()))
            .created_at(Utc::now())
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn deleted_at(mut self, deleted_at: Option<chrono::DateTime<Utc>>) -> Self {
        self.entity.deleted_at = deleted_at;
        self
    }

    /// Builds and inserts the board entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::board::Model)` - Created board with its generated ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::board::Model, DbErr> {
        entity::board::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            created_at: ActiveValue::Set(self.entity.created_at),
            updated_at: ActiveValue::Set(self.entity.updated_at),
            deleted_at: ActiveValue::Set(self.entity.deleted_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a board with default values.
///
/// Shorthand for `BoardFactory::new(db).build().await`.
pub async fn create_board(db: &DatabaseConnection) -> Result<entity::board::Model, DbErr> {
    BoardFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_multiple_unique_boards() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Board).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let board1 = create_board(db).await?;
        let board2 = create_board(db).await?;

        assert_ne!(board1.id, board2.id);
        assert_ne!(board1.name, board2.name);
        assert!(board1.name.len() <= 15);

        Ok(())
    }

    #[tokio::test]
    async fn creates_board_with_custom_name() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Board).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let board = BoardFactory::new(db).name("Roadmap").build().await?;

        assert_eq!(board.name, "Roadmap");
        assert!(board.deleted_at.is_none());

        Ok(())
    }
}
