use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000002_create_court_table::Court;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CourtTimeSlots::Table)
                    .if_not_exists()
                    .col(pk_auto(CourtTimeSlots::Id))
                    .col(integer_uniq(CourtTimeSlots::CourtId))
                    .col(integer(CourtTimeSlots::Slot0809).default(1))
                    .col(integer(CourtTimeSlots::Slot0910).default(1))
                    .col(integer(CourtTimeSlots::Slot1011).default(1))
                    .col(integer(CourtTimeSlots::Slot1112).default(1))
                    .col(integer(CourtTimeSlots::Slot1213).default(1))
                    .col(integer(CourtTimeSlots::Slot1314).default(1))
                    .col(integer(CourtTimeSlots::Slot1415).default(1))
                    .col(integer(CourtTimeSlots::Slot1516).default(1))
                    .col(integer(CourtTimeSlots::Slot1617).default(1))
                    .col(integer(CourtTimeSlots::Slot1718).default(1))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_court_time_slots_court_id")
                            .from(CourtTimeSlots::Table, CourtTimeSlots::CourtId)
                            .to(Court::Table, Court::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CourtTimeSlots::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CourtTimeSlots {
    Table,
    Id,
    CourtId,
    #[sea_orm(iden = "slot_08_09")]
    Slot0809,
    #[sea_orm(iden = "slot_09_10")]
    Slot0910,
    #[sea_orm(iden = "slot_10_11")]
    Slot1011,
    #[sea_orm(iden = "slot_11_12")]
    Slot1112,
    #[sea_orm(iden = "slot_12_13")]
    Slot1213,
    #[sea_orm(iden = "slot_13_14")]
    Slot1314,
    #[sea_orm(iden = "slot_14_15")]
    Slot1415,
    #[sea_orm(iden = "slot_15_16")]
    Slot1516,
    #[sea_orm(iden = "slot_16_17")]
    Slot1617,
    #[sea_orm(iden = "slot_17_18")]
    Slot1718,
}
