//! Database repository layer for boards, lists and cards.
//!
//! Each repository handles the database operations for one table and implements
//! `CrudRepository`, the seam the generic `CrudService` is written against. Repositories use
//! SeaORM entity models internally and return domain models from `server::model`, so entity
//! models never leak into the service or controller layers. Every method issues exactly one
//! SQL statement; store failures propagate unmodified as `DbErr`.

pub mod board;
pub mod card;
pub mod list;

use std::future::Future;

use sea_orm::{DbErr, EntityTrait, IdenStatic, Iterable, QuerySelect};

use crate::server::model::IntoDto;

/// Generic create/read/update/delete contract over one resource table.
///
/// `RESOURCE` and `COLLECTION` name the resource in envelope messages, e.g. `"Board"`
/// and `"Boards"`. `Tree` is the shape returned by `find_all`, which nests children for
/// resources that own any.
pub trait CrudRepository: Send + Sync {
    const RESOURCE: &'static str;
    const COLLECTION: &'static str;

    type Record: IntoDto + Send;
    type Tree: IntoDto + Send;
    type Create: std::fmt::Debug + Send;
    type Update: std::fmt::Debug + Send;

    /// Inserts a new row; the store assigns the id and timestamps.
    fn create(
        &self,
        param: Self::Create,
    ) -> impl Future<Output = Result<Self::Record, DbErr>> + Send;

    /// Returns every row ordered by id, with children nested where the resource has any.
    fn find_all(&self) -> impl Future<Output = Result<Vec<Self::Tree>, DbErr>> + Send;

    fn find_by_id(
        &self,
        id: i32,
    ) -> impl Future<Output = Result<Option<Self::Record>, DbErr>> + Send;

    /// Overwrites the scalar fields of an existing row and refreshes `updated_at`.
    ///
    /// Fails with `DbErr::RecordNotUpdated` when no row has the given id.
    fn update(
        &self,
        id: i32,
        param: Self::Update,
    ) -> impl Future<Output = Result<Self::Record, DbErr>> + Send;

    /// Hard-deletes the row with the given id. Deleting a missing id is not an error.
    fn delete(&self, id: i32) -> impl Future<Output = Result<(), DbErr>> + Send;
}

/// Selects every column of `E` aliased as `<prefix><column>`.
///
/// Joined queries alias each table's columns with a distinct prefix so rows can be read back
/// with `FromQueryResult::from_query_result(row, prefix)`.
fn with_prefixed_columns<E, S>(query: S, prefix: &str) -> S
where
    E: EntityTrait,
    S: QuerySelect,
{
    E::Column::iter().fold(query, |query, column| {
        query.column_as(column, format!("{prefix}{}", column.as_str()))
    })
}
