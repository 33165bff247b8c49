//! List repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    JoinType, QueryOrder, QueryResult, QuerySelect, RelationTrait,
};

use crate::server::{
    data::{with_prefixed_columns, CrudRepository},
    model::{
        card::Card,
        list::{CreateListParam, List, ListWithCards, UpdateListParam},
    },
};

/// One row of the list ⟕ card join.
#[derive(Debug)]
struct ListTreeRow {
    list: entity::list::Model,
    card: Option<entity::card::Model>,
}

impl FromQueryResult for ListTreeRow {
    fn from_query_result(res: &QueryResult, _pre: &str) -> Result<Self, DbErr> {
        Ok(Self {
            list: entity::list::Model::from_query_result(res, "l_")?,
            card: entity::card::Model::from_query_result_optional(res, "c_")?,
        })
    }
}

/// Folds one joined row into `lists`.
///
/// Rows must arrive ordered by list ID so all cards of a list are adjacent. A row without a
/// list (a parent with no lists) leaves `lists` untouched; a row with a list but no card
/// still records the list with an empty card vector.
pub(super) fn push_list_row(
    lists: &mut Vec<ListWithCards>,
    list: Option<entity::list::Model>,
    card: Option<entity::card::Model>,
) {
    let Some(list) = list else {
        return;
    };

    if lists.last().map(|tree| tree.list.id) != Some(list.id) {
        lists.push(ListWithCards::new(List::from_entity(list)));
    }

    if let (Some(card), Some(tree)) = (card, lists.last_mut()) {
        tree.cards.push(Card::from_entity(card));
    }
}

/// Repository providing database operations for lists.
pub struct ListRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ListRepository<'a> {
    /// Creates a new ListRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl CrudRepository for ListRepository<'_> {
    const RESOURCE: &'static str = "List";
    const COLLECTION: &'static str = "Lists";

    type Record = List;
    type Tree = ListWithCards;
    type Create = CreateListParam;
    type Update = UpdateListParam;

    /// Creates a new list on an existing board.
    ///
    /// # Returns
    /// - `Ok(List)` - The created list with generated ID and timestamps
    /// - `Err(DbErr)` - Database error, including a foreign key violation for an unknown board
    async fn create(&self, param: CreateListParam) -> Result<List, DbErr> {
        let now = Utc::now();
        let entity = entity::list::ActiveModel {
            name: ActiveValue::Set(param.name),
            id_board: ActiveValue::Set(param.id_board),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(param.deleted_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(List::from_entity(entity))
    }

    /// Gets every list with its cards, ordered by list ID then card ID.
    async fn find_all(&self) -> Result<Vec<ListWithCards>, DbErr> {
        let query = entity::prelude::List::find().select_only();
        let query = with_prefixed_columns::<entity::prelude::List, _>(query, "l_");
        let query = with_prefixed_columns::<entity::prelude::Card, _>(query, "c_");

        let rows = query
            .join(JoinType::LeftJoin, entity::list::Relation::Card.def())
            .order_by_asc(entity::list::Column::Id)
            .order_by_asc(entity::card::Column::Id)
            .into_model::<ListTreeRow>()
            .all(self.db)
            .await?;

        let mut lists = Vec::new();
        for row in rows {
            push_list_row(&mut lists, Some(row.list), row.card);
        }

        Ok(lists)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<List>, DbErr> {
        let entity = entity::prelude::List::find_by_id(id).one(self.db).await?;

        Ok(entity.map(List::from_entity))
    }

    /// Renames a list. The owning board never changes.
    async fn update(&self, id: i32, param: UpdateListParam) -> Result<List, DbErr> {
        let entity = entity::list::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(param.name),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(List::from_entity(entity))
    }

    async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::List::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}

#[cfg(test)]
mod test;
