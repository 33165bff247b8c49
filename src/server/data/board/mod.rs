//! Board repository.
//!
//! `find_all` reads the whole board, list and card hierarchy with a single left-outer join
//! and folds the flat rows into nested trees.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    JoinType, QueryOrder, QueryResult, QuerySelect, RelationTrait,
};

use crate::server::{
    data::{list::push_list_row, with_prefixed_columns, CrudRepository},
    model::board::{Board, BoardWithLists, CreateBoardParam, UpdateBoardParam},
};

/// One row of the board ⟕ list ⟕ card join.
#[derive(Debug)]
struct BoardTreeRow {
    board: entity::board::Model,
    list: Option<entity::list::Model>,
    card: Option<entity::card::Model>,
}

impl FromQueryResult for BoardTreeRow {
    fn from_query_result(res: &QueryResult, _pre: &str) -> Result<Self, DbErr> {
        Ok(Self {
            board: entity::board::Model::from_query_result(res, "b_")?,
            list: entity::list::Model::from_query_result_optional(res, "l_")?,
            card: entity::card::Model::from_query_result_optional(res, "c_")?,
        })
    }
}

/// Repository providing database operations for boards.
pub struct BoardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoardRepository<'a> {
    /// Creates a new BoardRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl CrudRepository for BoardRepository<'_> {
    const RESOURCE: &'static str = "Board";
    const COLLECTION: &'static str = "Boards";

    type Record = Board;
    type Tree = BoardWithLists;
    type Create = CreateBoardParam;
    type Update = UpdateBoardParam;

    /// Creates a new board.
    ///
    /// # Returns
    /// - `Ok(Board)` - The created board with generated ID and timestamps
    /// - `Err(DbErr)` - Database error during insert
    async fn create(&self, param: CreateBoardParam) -> Result<Board, DbErr> {
        let now = Utc::now();
        let entity = entity::board::ActiveModel {
            name: ActiveValue::Set(param.name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(param.deleted_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Board::from_entity(entity))
    }

    /// Gets every board with its lists and their cards.
    ///
    /// Boards without lists and lists without cards carry empty vectors.
    ///
    /// # Returns
    /// - `Ok(Vec<BoardWithLists>)` - Boards ordered by ID, children ordered by ID
    /// - `Err(DbErr)` - Database error during query
    async fn find_all(&self) -> Result<Vec<BoardWithLists>, DbErr> {
        let query = entity::prelude::Board::find().select_only();
        let query = with_prefixed_columns::<entity::prelude::Board, _>(query, "b_");
        let query = with_prefixed_columns::<entity::prelude::List, _>(query, "l_");
        let query = with_prefixed_columns::<entity::prelude::Card, _>(query, "c_");

        let rows = query
            .join(JoinType::LeftJoin, entity::board::Relation::List.def())
            .join(JoinType::LeftJoin, entity::list::Relation::Card.def())
            .order_by_asc(entity::board::Column::Id)
            .order_by_asc(entity::list::Column::Id)
            .order_by_asc(entity::card::Column::Id)
            .into_model::<BoardTreeRow>()
            .all(self.db)
            .await?;

        let mut boards: Vec<BoardWithLists> = Vec::new();
        for row in rows {
            if boards.last().map(|tree| tree.board.id) != Some(row.board.id) {
                boards.push(BoardWithLists {
                    board: Board::from_entity(row.board),
                    lists: Vec::new(),
                });
            }

            if let Some(tree) = boards.last_mut() {
                push_list_row(&mut tree.lists, row.list, row.card);
            }
        }

        Ok(boards)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Board>, DbErr> {
        let entity = entity::prelude::Board::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Board::from_entity))
    }

    /// Renames a board.
    ///
    /// # Returns
    /// - `Ok(Board)` - The updated board
    /// - `Err(DbErr::RecordNotUpdated)` - No board with this ID
    /// - `Err(DbErr)` - Other database error
    async fn update(&self, id: i32, param: UpdateBoardParam) -> Result<Board, DbErr> {
        let entity = entity::board::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(param.name),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Board::from_entity(entity))
    }

    /// Deletes a board. Its lists and their cards are removed by the foreign key cascade.
    async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Board::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}

#[cfg(test)]
mod test;
