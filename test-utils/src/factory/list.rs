//! List factory for creating test list entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test lists belonging to a board.
pub struct ListFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::list::Model,
}

impl<'a> ListFactory<'a> {
    /// Creates a new ListFactory for the given board with a unique name.
    pub fn new(db: &'a DatabaseConnection, id_board: i32) -> Self {
        let entity = fixture::list::entity_builder()
            .id_board(id_board)
            .name(format!("List {}", next_id()))
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Builds and inserts the list entity into the database.
    pub async fn build(self) -> Result<entity::list::Model, DbErr> {
        let now = Utc::now();

        entity::list::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            id_board: ActiveValue::Set(self.entity.id_board),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a list with default values on the given board.
pub async fn create_list(
    db: &DatabaseConnection,
    id_board: i32,
) -> Result<entity::list::Model, DbErr> {
    ListFactory::new(db, id_board).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::board::create_board;

    #[tokio::test]
    async fn creates_list_on_board() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_kanban_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let board = create_board(db).await?;
        let list = ListFactory::new(db, board.id).name("Backlog").build().await?;

        assert_eq!(list.id_board, board.id);
        assert_eq!(list.name, "Backlog");

        Ok(())
    }
}
