//! Card repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::{
    data::CrudRepository,
    model::card::{Card, CreateCardParam, UpdateCardParam},
};

/// Repository providing database operations for cards.
pub struct CardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CardRepository<'a> {
    /// Creates a new CardRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl CrudRepository for CardRepository<'_> {
    const RESOURCE: &'static str = "Card";
    const COLLECTION: &'static str = "Cards";

    type Record = Card;
    type Tree = Card;
    type Create = CreateCardParam;
    type Update = UpdateCardParam;

    /// Creates a new card in an existing list.
    ///
    /// # Returns
    /// - `Ok(Card)` - The created card with generated ID and timestamps
    /// - `Err(DbErr)` - Database error, including a foreign key violation for an unknown list
    async fn create(&self, param: CreateCardParam) -> Result<Card, DbErr> {
        let now = Utc::now();
        let entity = entity::card::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            status: ActiveValue::Set(param.status),
            id_list: ActiveValue::Set(param.id_list),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(param.deleted_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Card::from_entity(entity))
    }

    /// Gets every card ordered by ID. Cards are leaves, so nothing is nested.
    async fn find_all(&self) -> Result<Vec<Card>, DbErr> {
        let entities = entity::prelude::Card::find()
            .order_by_asc(entity::card::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Card::from_entity).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Card>, DbErr> {
        let entity = entity::prelude::Card::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Card::from_entity))
    }

    /// Overwrites a card's name, description and status. The owning list never changes.
    async fn update(&self, id: i32, param: UpdateCardParam) -> Result<Card, DbErr> {
        let entity = entity::card::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            status: ActiveValue::Set(param.status),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Card::from_entity(entity))
    }

    async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Card::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}

#[cfg(test)]
mod test;
