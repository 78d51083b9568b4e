use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_sport_table::Sport;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Court::Table)
                    .if_not_exists()
                    .col(pk_auto(Court::Id))
                    .col(string_uniq(Court::Name))
                    .col(string(Court::Location))
                    .col(integer_null(Court::Capacity))
                    .col(integer(Court::Status).default(1))
                    .col(integer(Court::SportId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_court_sport_id")
                            .from(Court::Table, Court::SportId)
                            .to(Sport::Table, Sport::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_court_sport_id")
                    .table(Court::Table)
                    .col(Court::SportId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Court::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Court {
    Table,
    Id,
    Name,
    Location,
    Capacity,
    Status,
    SportId,
}
