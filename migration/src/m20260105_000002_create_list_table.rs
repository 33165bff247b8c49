use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_board_table::Board;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(List::Table)
                    .if_not_exists()
                    .col(pk_auto(List::Id))
                    .col(string(List::Name))
                    .col(integer(List::IdBoard))
                    .col(timestamp_with_time_zone(List::CreatedAt))
                    .col(timestamp_with_time_zone(List::UpdatedAt))
                    .col(timestamp_with_time_zone_null(List::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_list_id_board")
                            .from(List::Table, List::IdBoard)
                            .to(Board::Table, Board::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(List::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum List {
    #[sea_orm(iden = "lists")]
    Table,
    Id,
    Name,
    IdBoard,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
