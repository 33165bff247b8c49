use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_list_table::List;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Card::Table)
                    .if_not_exists()
                    .col(pk_auto(Card::Id))
                    .col(string(Card::Name))
                    .col(string(Card::Description))
                    .col(string(Card::Status))
                    .col(integer(Card::IdList))
                    .col(timestamp_with_time_zone(Card::CreatedAt))
                    .col(timestamp_with_time_zone(Card::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Card::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_id_list")
                            .from(Card::Table, Card::IdList)
                            .to(List::Table, List::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Card::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Card {
    #[sea_orm(iden = "cards")]
    Table,
    Id,
    Name,
    Description,
    Status,
    IdList,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
