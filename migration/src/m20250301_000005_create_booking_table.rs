use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_sport_table::Sport, m20250301_000002_create_court_table::Court,
    m20250301_000004_create_customer_table::Customer,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer(Booking::CustomerId))
                    .col(integer(Booking::SportId))
                    .col(integer(Booking::CourtId))
                    .col(integer(Booking::SlotIndex))
                    .col(string(Booking::Status))
                    .col(
                        timestamp_with_time_zone(Booking::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_customer_id")
                            .from(Booking::Table, Booking::CustomerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_sport_id")
                            .from(Booking::Table, Booking::SportId)
                            .to(Sport::Table, Sport::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_court_id")
                            .from(Booking::Table, Booking::CourtId)
                            .to(Court::Table, Court::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Per-cell confirmed-booking lookup used by every reservation.
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_court_slot_status")
                    .table(Booking::Table)
                    .col(Booking::CourtId)
                    .col(Booking::SlotIndex)
                    .col(Booking::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_customer_id")
                    .table(Booking::Table)
                    .col(Booking::CustomerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    CustomerId,
    SportId,
    CourtId,
    SlotIndex,
    Status,
    CreatedAt,
}
